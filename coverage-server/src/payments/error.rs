//! Payment API error types.

/// Errors that can occur when talking to the payment provider.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check PAYMENT_SECRET_KEY")]
    Unauthorized,

    /// The promotion code was rejected by the provider
    #[error("invalid promotion code")]
    InvalidPromoCode,

    /// No session exists for the given identifier
    #[error("checkout session not found")]
    SessionNotFound,

    /// Provider returned an error status
    #[error("payment API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
