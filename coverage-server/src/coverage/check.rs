//! The coverage check: raw input in, `CoverageResult` out.

use crate::domain::{AreaCode, Postcode};

use super::areas::AreaNames;
use super::table::CoverageTable;

/// Outcome of a coverage check.
///
/// Every branch of the check, including malformed input, is expressed as a
/// value of this type. Nothing in the engine returns an error or panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageResult {
    /// Whether lessons are available for the given postcode.
    pub covered: bool,

    /// The postal district, when the input was structurally valid.
    pub area_code: Option<AreaCode>,

    /// The postcode in display form (outward code, space, inward code),
    /// present on a positive match.
    pub display_postcode: Option<String>,

    /// User-facing message describing the outcome.
    pub message: String,
}

impl CoverageResult {
    /// Negative result for input that is not a structurally valid postcode.
    fn malformed() -> Self {
        Self {
            covered: false,
            area_code: None,
            display_postcode: None,
            message: "Please enter a valid UK postcode.".to_string(),
        }
    }

    /// Negative result for a valid postcode outside the covered sectors.
    fn not_covered(area_code: AreaCode, region: &str) -> Self {
        Self {
            covered: false,
            message: format!(
                "Sorry, we don't cover {} yet. Get in touch and we'll let you \
                 know when we reach {}.",
                area_code, region
            ),
            area_code: Some(area_code),
            display_postcode: None,
        }
    }

    /// Positive result for a covered sector.
    fn covered(area_code: AreaCode, display_postcode: String, region: &str) -> Self {
        Self {
            covered: true,
            message: format!(
                "Great news! We teach in {} and across {}. Book your first \
                 lesson below.",
                display_postcode, region
            ),
            area_code: Some(area_code),
            display_postcode: Some(display_postcode),
        }
    }
}

/// Stateless coverage checker.
///
/// Holds the coverage table and region names it was configured with; each
/// call to [`check`](CoverageChecker::check) is a pure function of the input
/// and that configuration. Calls may run concurrently without coordination.
#[derive(Debug, Clone)]
pub struct CoverageChecker {
    table: CoverageTable,
    names: AreaNames,
}

impl CoverageChecker {
    /// Create a checker over the given coverage table and region names.
    pub fn new(table: CoverageTable, names: AreaNames) -> Self {
        Self { table, names }
    }

    /// Check whether the postcode typed by a customer is in the service
    /// area.
    ///
    /// The input is normalized and format-checked first; anything that is
    /// not a structurally plausible UK postcode short-circuits to a negative
    /// result before any table lookup. Valid postcodes are decomposed into
    /// sector and area code, and the sector is matched against the table
    /// under the area's prefix.
    pub fn check(&self, raw: &str) -> CoverageResult {
        let Ok(postcode) = Postcode::parse(raw) else {
            return CoverageResult::malformed();
        };

        let sector = postcode.sector();

        // Defensive: cannot fail for a parsed postcode, but a failed
        // extraction is reported like malformed input rather than panicking.
        let Some(area_code) = sector.area_code() else {
            return CoverageResult::malformed();
        };

        let prefix = area_code.prefix();
        let region = self.names.lookup(&prefix);

        if self.table.covers(&prefix, &sector) {
            CoverageResult::covered(area_code, postcode.display(), region)
        } else {
            CoverageResult::not_covered(area_code, region)
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::coverage::{east_london_coverage, east_london_names};
    use proptest::prelude::*;

    fn checker() -> CoverageChecker {
        CoverageChecker::new(east_london_coverage(), east_london_names())
    }

    proptest! {
        /// The checker never panics and never reports coverage without also
        /// naming the area and display postcode.
        #[test]
        fn result_shape_is_consistent(s in ".*") {
            let result = checker().check(&s);
            if result.covered {
                prop_assert!(result.area_code.is_some());
                prop_assert!(result.display_postcode.is_some());
            }
            prop_assert!(!result.message.is_empty());
        }

        /// Structurally valid postcodes always surface an area code, covered
        /// or not.
        #[test]
        fn valid_postcodes_surface_area(s in "[A-Z]{1,2}[0-9][0-9]?[0-9][A-Z]{2}") {
            let result = checker().check(&s);
            prop_assert!(result.area_code.is_some());
        }

        /// Spacing and casing of the input never change the outcome.
        #[test]
        fn outcome_ignores_spacing(s in "[A-Z]{1,2}[0-9][0-9]?[0-9][A-Z]{2}") {
            let checker = checker();
            let split = s.len() - 3;
            let spaced = format!("{} {}", &s[..split].to_lowercase(), &s[split..].to_lowercase());
            prop_assert_eq!(checker.check(&s), checker.check(&spaced));
        }
    }
}
