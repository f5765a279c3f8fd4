//! Payment provider integration.
//!
//! Request/response wrappers over the third-party checkout-session API.
//! No business logic lives here beyond error classification.

mod client;
mod error;

pub use client::{CheckoutSession, CreateSessionRequest, PaymentClient, PaymentConfig};
pub use error::PaymentError;
