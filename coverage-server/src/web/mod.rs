//! Web layer for the booking site.
//!
//! Provides HTTP endpoints for the postcode coverage check, the lesson
//! catalogue, and checkout-session creation and retrieval.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
