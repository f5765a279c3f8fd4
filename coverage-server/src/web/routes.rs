//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::catalogue::{PACKAGES, find_package};
use crate::payments::{CreateSessionRequest, PaymentError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/coverage/check", get(check_coverage))
        .route("/api/packages", get(list_packages))
        .route("/api/checkout", post(create_checkout))
        .route("/api/checkout/:id", get(get_checkout))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the postcode checker and package cards.
async fn index_page() -> IndexTemplate {
    IndexTemplate::from_catalogue()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Check whether a postcode is in the service area.
///
/// Always responds 200: a postcode outside the coverage area (or malformed
/// input) is an ordinary negative result, not an error.
async fn check_coverage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<CoverageCheckRequest>,
) -> Result<Response, AppError> {
    let result = state.checker.check(&req.postcode);

    if accepts_html(&headers) {
        let template = CoverageResultTemplate::from_result(&result);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(CoverageResponse::from_result(&result)).into_response())
    }
}

/// List the lesson packages.
async fn list_packages() -> Json<PackageListResponse> {
    Json(PackageListResponse { packages: PACKAGES })
}

/// Start a checkout session for a package.
async fn create_checkout(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckoutSessionResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: CreateCheckoutRequest = serde_json::from_slice(&body).map_err(|e| {
        eprintln!("[JSON parse error] {e}");
        eprintln!("[Body] {}", String::from_utf8_lossy(&body));
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let package = find_package(&req.package_id).ok_or_else(|| AppError::BadRequest {
        message: format!("Unknown package: {}", req.package_id),
    })?;

    let mut metadata = req.metadata.unwrap_or_default();
    metadata.insert("package_id".to_string(), package.id.to_string());

    let session_request = CreateSessionRequest {
        price_id: package.price_id.to_string(),
        customer_email: req.email,
        promo_code: req.promo_code,
        metadata,
    };

    let session = state
        .payments
        .create_checkout_session(&session_request)
        .await
        .map_err(AppError::from)?;

    Ok(Json(CheckoutSessionResponse::from_session(&session)))
}

/// Retrieve a checkout session by id.
async fn get_checkout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CheckoutSessionResponse>, AppError> {
    let session = state
        .payments
        .get_checkout_session(&id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(CheckoutSessionResponse::from_session(&session)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PaymentError> for AppError {
    fn from(e: PaymentError) -> Self {
        match e {
            // The one provider failure the customer can fix themselves
            PaymentError::InvalidPromoCode => AppError::BadRequest {
                message: "Invalid promotion code".to_string(),
            },
            PaymentError::SessionNotFound => AppError::NotFound {
                message: "Checkout session not found".to_string(),
            },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_errors_map_to_statuses() {
        let err = AppError::from(PaymentError::InvalidPromoCode);
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = AppError::from(PaymentError::SessionNotFound);
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = AppError::from(PaymentError::Unauthorized);
        assert!(matches!(err, AppError::Internal { .. }));

        let err = AppError::from(PaymentError::Api {
            status: 429,
            message: "rate limited".into(),
        });
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
