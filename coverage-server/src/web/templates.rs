//! Askama templates for the web frontend.

use askama::Template;

use crate::catalogue::{LessonPackage, PACKAGES};
use crate::coverage::CoverageResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the postcode checker and package cards.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub packages: Vec<PackageView>,
}

impl IndexTemplate {
    /// Build the home page from the static catalogue.
    pub fn from_catalogue() -> Self {
        Self {
            packages: PACKAGES.iter().map(PackageView::from_package).collect(),
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Coverage check result fragment.
#[derive(Template)]
#[template(path = "coverage_result.html")]
pub struct CoverageResultTemplate {
    pub covered: bool,
    pub message: String,
    pub area_code: Option<String>,
    pub display_postcode: Option<String>,
}

impl CoverageResultTemplate {
    /// Build the fragment from an engine result.
    pub fn from_result(result: &CoverageResult) -> Self {
        Self {
            covered: result.covered,
            message: result.message.clone(),
            area_code: result.area_code.as_ref().map(|a| a.as_str().to_string()),
            display_postcode: result.display_postcode.clone(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Lesson package view model.
#[derive(Debug, Clone)]
pub struct PackageView {
    pub id: String,
    pub name: String,
    pub hours: u32,
    pub price: String,
    pub blurb: String,
}

impl PackageView {
    /// Build a view model from a catalogue entry.
    pub fn from_package(package: &LessonPackage) -> Self {
        Self {
            id: package.id.to_string(),
            name: package.name.to_string(),
            hours: package.hours,
            price: format_price(package.price_pence),
            blurb: package.blurb.to_string(),
        }
    }
}

/// Format a pence amount as pounds for display.
fn format_price(pence: u32) -> String {
    format!("£{}.{:02}", pence / 100, pence % 100)
}
