//! Static catalogue of lesson packages.
//!
//! The catalogue is display data for the booking UI; the coverage engine
//! never consults it.

use serde::Serialize;

/// A lesson package on offer.
#[derive(Debug, Clone, Serialize)]
pub struct LessonPackage {
    /// Stable identifier used by the booking flow.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Number of tuition hours included.
    pub hours: u32,

    /// Price in pence.
    pub price_pence: u32,

    /// Payment-provider price identifier for checkout.
    pub price_id: &'static str,

    /// Short marketing blurb.
    pub blurb: &'static str,
}

/// All packages, in display order.
pub const PACKAGES: &[LessonPackage] = &[
    LessonPackage {
        id: "single",
        name: "Single Lesson",
        hours: 1,
        price_pence: 3800,
        price_id: "price_single_lesson",
        blurb: "A one-hour lesson, ideal for a first taster or a top-up.",
    },
    LessonPackage {
        id: "block-5",
        name: "5 Hour Block",
        hours: 5,
        price_pence: 18_000,
        price_id: "price_block_5",
        blurb: "Five hours of tuition at a discounted rate.",
    },
    LessonPackage {
        id: "block-10",
        name: "10 Hour Block",
        hours: 10,
        price_pence: 34_000,
        price_id: "price_block_10",
        blurb: "Our most popular block booking.",
    },
    LessonPackage {
        id: "intensive",
        name: "Intensive Course",
        hours: 20,
        price_pence: 66_000,
        price_id: "price_intensive",
        blurb: "Twenty hours over two weeks, test-ready fast.",
    },
];

/// Look up a package by its identifier.
pub fn find_package(id: &str) -> Option<&'static LessonPackage> {
    PACKAGES.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_package() {
        let pkg = find_package("block-10").unwrap();
        assert_eq!(pkg.name, "10 Hour Block");
        assert_eq!(pkg.hours, 10);
    }

    #[test]
    fn find_unknown_package() {
        assert!(find_package("block-999").is_none());
        assert!(find_package("").is_none());
    }

    #[test]
    fn package_ids_are_unique() {
        use std::collections::HashSet;
        let ids: HashSet<_> = PACKAGES.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PACKAGES.len());
    }

    #[test]
    fn prices_scale_with_hours() {
        for pkg in PACKAGES {
            assert!(pkg.hours > 0);
            assert!(pkg.price_pence > 0);
        }
    }
}
