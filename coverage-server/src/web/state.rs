//! Application state for the web layer.

use std::sync::Arc;

use crate::coverage::CoverageChecker;
use crate::payments::PaymentClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Both members are
/// read-only after startup, so handlers share them without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Postcode coverage checker
    pub checker: Arc<CoverageChecker>,

    /// Payment provider client
    pub payments: Arc<PaymentClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(checker: CoverageChecker, payments: PaymentClient) -> Self {
        Self {
            checker: Arc::new(checker),
            payments: Arc::new(payments),
        }
    }
}
