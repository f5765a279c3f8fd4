//! Checkout-session HTTP client.
//!
//! A thin wrapper over the payment provider's checkout API: forward the
//! booking fields, hand back the session. Provider errors are mapped to
//! [`PaymentError`] variants; the only one callers treat as recoverable is
//! an invalid promotion code.

use std::collections::HashMap;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use super::error::PaymentError;

/// Default base URL for the payment provider.
const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Configuration for the payment client.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Secret API key for bearer authentication
    pub secret_key: String,
    /// Base URL for the API (defaults to the production provider)
    pub base_url: String,
    /// URL the customer lands on after paying
    pub success_url: String,
    /// URL the customer lands on after cancelling
    pub cancel_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PaymentConfig {
    /// Create a new config with the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            success_url: "http://localhost:3000/booking/confirmed".to_string(),
            cancel_url: "http://localhost:3000/".to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the post-payment redirect URLs.
    pub fn with_redirects(
        mut self,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        self.success_url = success_url.into();
        self.cancel_url = cancel_url.into();
        self
    }
}

/// Fields forwarded to the provider when creating a checkout session.
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    /// Provider price identifier for the chosen package
    pub price_id: String,
    /// Customer email address
    pub customer_email: String,
    /// Optional promotion code
    pub promo_code: Option<String>,
    /// Free-form metadata attached to the session
    pub metadata: HashMap<String, String>,
}

/// A checkout session as returned by the provider.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct CheckoutSession {
    /// Session identifier
    pub id: String,
    /// Hosted payment page URL (present until the session completes)
    pub url: Option<String>,
    /// Session status as reported by the provider
    pub status: Option<String>,
    /// Payment status as reported by the provider
    pub payment_status: Option<String>,
    /// Customer email echoed back
    pub customer_email: Option<String>,
}

/// Error payload shape used by the provider.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

/// Client for the payment provider's checkout-session API.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    base_url: String,
    success_url: String,
    cancel_url: String,
}

impl PaymentClient {
    /// Create a new payment client.
    pub fn new(config: PaymentConfig) -> Result<Self, PaymentError> {
        let mut headers = HeaderMap::new();

        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.secret_key))
            .map_err(|_| PaymentError::Api {
                status: 0,
                message: "Invalid secret key format".to_string(),
            })?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            success_url: config.success_url,
            cancel_url: config.cancel_url,
        })
    }

    /// Create a checkout session for a single package.
    pub async fn create_checkout_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.base_url);

        // The provider takes form-encoded bodies with bracketed keys for
        // nested fields.
        let mut form: Vec<(String, String)> = vec![
            ("mode".into(), "payment".into()),
            ("line_items[0][price]".into(), request.price_id.clone()),
            ("line_items[0][quantity]".into(), "1".into()),
            ("customer_email".into(), request.customer_email.clone()),
            ("success_url".into(), self.success_url.clone()),
            ("cancel_url".into(), self.cancel_url.clone()),
        ];

        if let Some(promo) = &request.promo_code {
            form.push(("discounts[0][promotion_code]".into(), promo.clone()));
        }

        for (key, value) in &request.metadata {
            form.push((format!("metadata[{}]", key), value.clone()));
        }

        tracing::debug!(price_id = %request.price_id, "creating checkout session");

        let response = self.http.post(&url).form(&form).send().await?;
        Self::handle_response(response).await
    }

    /// Retrieve an existing checkout session by id.
    pub async fn get_checkout_session(&self, id: &str) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions/{}", self.base_url, id);

        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PaymentError::SessionNotFound);
        }

        Self::handle_response(response).await
    }

    /// Map a provider response to a session or an error.
    async fn handle_response(response: reqwest::Response) -> Result<CheckoutSession, PaymentError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PaymentError::Unauthorized);
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| PaymentError::Json {
            message: e.to_string(),
        })
    }
}

/// Classify a non-success provider response body.
///
/// The provider reports a rejected promotion code as a request error whose
/// `code` or `param` names the promotion-code field; that case is surfaced
/// as the recoverable `InvalidPromoCode`.
fn classify_api_error(status: u16, body: &str) -> PaymentError {
    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        return PaymentError::Api {
            status,
            message: body.to_string(),
        };
    };

    let mentions_promo = |s: &Option<String>| {
        s.as_deref()
            .is_some_and(|v| v.contains("promotion_code"))
    };

    if mentions_promo(&parsed.error.code) || mentions_promo(&parsed.error.param) {
        return PaymentError::InvalidPromoCode;
    }

    PaymentError::Api {
        status,
        message: parsed
            .error
            .message
            .unwrap_or_else(|| body.to_string()),
    }
}
