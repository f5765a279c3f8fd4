//! Postcode sector type.

use std::fmt;

use super::area::AreaCode;
use super::postcode::Postcode;

/// Error returned when parsing an invalid sector string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postcode sector: {reason}")]
pub struct InvalidSector {
    reason: &'static str,
}

/// A postcode sector: an outward code, a space, and the first digit of the
/// inward code (e.g. `E14 5`, `IG11 0`).
///
/// Sectors are the unit of coverage granularity; the coverage table is never
/// finer than sector level.
///
/// # Examples
///
/// ```
/// use coverage_server::domain::{Postcode, Sector};
///
/// let sector = Postcode::parse("E14 5AL").unwrap().sector();
/// assert_eq!(sector.as_str(), "E14 5");
///
/// let same = Sector::parse("E14 5").unwrap();
/// assert_eq!(sector, same);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sector(String);

impl Sector {
    /// Derive the sector of a validated postcode.
    ///
    /// Drops the two trailing letters of the compact form (the final
    /// inward-code unit), then splits one character before the end of what
    /// remains: the last remaining character is the sector digit, everything
    /// before it is the outward code. The split point is relative to the end
    /// so multi-digit districts (`E14`) are never mis-split into (`E1`, `4`).
    pub fn of(postcode: &Postcode) -> Self {
        let compact = postcode.as_compact();

        // Compact form is 5-7 ASCII characters by construction, so both
        // splits are in bounds.
        let block = &compact[..compact.len() - 2];
        let (outward, digit) = block.split_at(block.len() - 1);

        Sector(format!("{} {}", outward, digit))
    }

    /// Parse a sector string as written in the coverage table.
    ///
    /// Expected shape: one or two letters, one or two digits, a single
    /// space, then one digit.
    pub fn parse(s: &str) -> Result<Self, InvalidSector> {
        let Some((outward, inward)) = s.split_once(' ') else {
            return Err(InvalidSector {
                reason: "missing space between outward code and sector digit",
            });
        };

        if AreaCode::parse(outward).is_err() {
            return Err(InvalidSector {
                reason: "outward code must be 1-2 letters then 1-2 digits",
            });
        }

        let bytes = inward.as_bytes();
        if bytes.len() != 1 || !bytes[0].is_ascii_digit() {
            return Err(InvalidSector {
                reason: "sector digit must be a single digit",
            });
        }

        Ok(Sector(s.to_string()))
    }

    /// Returns the sector as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the area code: the leading letters+digits run of the sector.
    ///
    /// Returns `None` if the sector text does not start with one-or-two
    /// letters followed by digits. For sectors built from a parsed
    /// `Postcode` this cannot fail; the `Option` exists so callers can treat
    /// a failed extraction as a malformed input rather than a panic.
    pub fn area_code(&self) -> Option<AreaCode> {
        AreaCode::extract(&self.0)
    }
}

impl fmt::Debug for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sector({})", self.0)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postcode(s: &str) -> Postcode {
        Postcode::parse(s).unwrap()
    }

    #[test]
    fn sector_of_single_digit_district() {
        assert_eq!(Sector::of(&postcode("E1 4AB")).as_str(), "E1 4");
        assert_eq!(Sector::of(&postcode("RM7 0XX")).as_str(), "RM7 0");
    }

    #[test]
    fn sector_of_multi_digit_district() {
        // E145AL must split as (E14, 5), not (E1, 4)
        assert_eq!(Sector::of(&postcode("E14 5AL")).as_str(), "E14 5");
        assert_eq!(Sector::of(&postcode("IG11 0AB")).as_str(), "IG11 0");
    }

    #[test]
    fn parse_valid_sectors() {
        assert!(Sector::parse("E1 4").is_ok());
        assert!(Sector::parse("E14 5").is_ok());
        assert!(Sector::parse("IG11 0").is_ok());
        assert!(Sector::parse("RM7 9").is_ok());
    }

    #[test]
    fn reject_malformed_sectors() {
        assert!(Sector::parse("").is_err());
        assert!(Sector::parse("E14").is_err());
        assert!(Sector::parse("E14 ").is_err());
        assert!(Sector::parse("E14 55").is_err());
        assert!(Sector::parse("E14 A").is_err());
        assert!(Sector::parse("14 5").is_err());
        assert!(Sector::parse("EEE1 5").is_err());
    }

    #[test]
    fn area_code_extraction() {
        let sector = Sector::parse("IG11 0").unwrap();
        assert_eq!(sector.area_code().unwrap().as_str(), "IG11");

        let sector = Sector::of(&postcode("E14 5AL"));
        assert_eq!(sector.area_code().unwrap().as_str(), "E14");

        // Outward codes with a trailing letter extract their leading run
        let sector = Sector::of(&postcode("SW1A 1AA"));
        assert_eq!(sector.as_str(), "SW1A 1");
        assert_eq!(sector.area_code().unwrap().as_str(), "SW1");
    }

    #[test]
    fn of_and_parse_agree() {
        let derived = Sector::of(&postcode("e14 5al"));
        let written = Sector::parse("E14 5").unwrap();
        assert_eq!(derived, written);
    }

    #[test]
    fn display() {
        let sector = Sector::parse("E14 5").unwrap();
        assert_eq!(format!("{}", sector), "E14 5");
        assert_eq!(format!("{:?}", sector), "Sector(E14 5)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for valid compact postcodes with a plain digits-only outward
    /// code, annotated with the expected sector split.
    fn postcode_with_expected_sector() -> impl Strategy<Value = (String, String)> {
        ("[A-Z]{1,2}", "[0-9]{1,2}", "[0-9]", "[A-Z]{2}").prop_map(
            |(letters, district, sector_digit, unit)| {
                let compact = format!("{}{}{}{}", letters, district, sector_digit, unit);
                let sector = format!("{}{} {}", letters, district, sector_digit);
                (compact, sector)
            },
        )
    }

    proptest! {
        /// The sector split always lands between the district digits and the
        /// sector digit, for every outward-code width.
        #[test]
        fn split_matches_construction((compact, expected) in postcode_with_expected_sector()) {
            let pc = Postcode::parse(&compact).unwrap();
            let sector = Sector::of(&pc);
            prop_assert_eq!(sector.as_str(), expected.as_str());
        }

        /// A derived sector re-parses as an identical table-form sector.
        #[test]
        fn derived_sector_round_trips((compact, _) in postcode_with_expected_sector()) {
            let derived = Postcode::parse(&compact).unwrap().sector();
            let reparsed = Sector::parse(derived.as_str()).unwrap();
            prop_assert_eq!(derived, reparsed);
        }
    }
}
