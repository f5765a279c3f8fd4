//! Coverage matching: is a postcode inside the school's service area?
//!
//! The checker is configured with a static table of covered sectors and a
//! friendly-name lookup; both are built once at startup and shared read-only
//! across all checks.

mod areas;
mod check;
mod table;

pub use areas::{AreaNames, east_london_names};
pub use check::{CoverageChecker, CoverageResult};
pub use table::{CoverageTable, CoverageTableBuilder, east_london_coverage};
