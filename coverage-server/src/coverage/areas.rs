//! Friendly region names for area prefixes.

use std::collections::HashMap;

use crate::domain::AreaPrefix;

/// Fallback label for prefixes without a friendly name.
const FALLBACK_LABEL: &str = "your area";

/// Lookup from area prefix to a friendly region name.
///
/// Total: unmapped prefixes get a generic fallback label rather than an
/// error, so callers can always interpolate the result into copy.
#[derive(Debug, Clone, Default)]
pub struct AreaNames {
    names: HashMap<AreaPrefix, &'static str>,
}

impl AreaNames {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a friendly name for a prefix. Invalid prefixes are skipped.
    pub fn add(mut self, prefix: &str, name: &'static str) -> Self {
        if let Ok(prefix) = AreaPrefix::parse(prefix) {
            self.names.insert(prefix, name);
        }
        self
    }

    /// Look up the friendly name for a prefix, falling back to a generic
    /// label.
    pub fn lookup(&self, prefix: &AreaPrefix) -> &'static str {
        self.names.get(prefix).copied().unwrap_or(FALLBACK_LABEL)
    }
}

/// Region names for the school's coverage patch.
pub fn east_london_names() -> AreaNames {
    AreaNames::new()
        .add("RM", "Romford & Havering")
        .add("E", "East London")
        .add("IG", "Ilford & Redbridge")
}
