//! Data transfer objects for web requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::LessonPackage;
use crate::coverage::CoverageResult;
use crate::payments::CheckoutSession;

/// Request to check postcode coverage.
#[derive(Debug, Deserialize)]
pub struct CoverageCheckRequest {
    /// Free-text postcode as typed by the customer
    pub postcode: String,
}

/// Outcome of a coverage check.
#[derive(Debug, Serialize)]
pub struct CoverageResponse {
    /// Whether lessons are available for the postcode
    pub covered: bool,

    /// Postal district (e.g. "E14"), when the input was valid
    pub area_code: Option<String>,

    /// Display form of the postcode, present on a positive match
    pub display_postcode: Option<String>,

    /// User-facing message
    pub message: String,
}

impl CoverageResponse {
    /// Build the response from an engine result.
    pub fn from_result(result: &CoverageResult) -> Self {
        Self {
            covered: result.covered,
            area_code: result.area_code.as_ref().map(|a| a.as_str().to_string()),
            display_postcode: result.display_postcode.clone(),
            message: result.message.clone(),
        }
    }
}

/// Response listing the lesson packages.
#[derive(Debug, Serialize)]
pub struct PackageListResponse {
    /// Packages in display order
    pub packages: &'static [LessonPackage],
}

/// Request to start a checkout session.
#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Catalogue package identifier
    pub package_id: String,

    /// Customer email address
    pub email: String,

    /// Optional promotion code
    pub promo_code: Option<String>,

    /// Free-form metadata forwarded to the provider
    pub metadata: Option<HashMap<String, String>>,
}

/// A checkout session surfaced to the frontend.
#[derive(Debug, Serialize)]
pub struct CheckoutSessionResponse {
    /// Provider session identifier
    pub session_id: String,

    /// Hosted payment page URL, if the session is still payable
    pub url: Option<String>,

    /// Session status
    pub status: Option<String>,

    /// Payment status
    pub payment_status: Option<String>,

    /// Customer email
    pub customer_email: Option<String>,
}

impl CheckoutSessionResponse {
    /// Build the response from a provider session.
    pub fn from_session(session: &CheckoutSession) -> Self {
        Self {
            session_id: session.id.clone(),
            url: session.url.clone(),
            status: session.status.clone(),
            payment_status: session.payment_status.clone(),
            customer_email: session.customer_email.clone(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
