//! Validated UK postcode type and text helpers.

use std::fmt;

use super::sector::Sector;

/// Error returned when parsing an invalid postcode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postcode: {reason}")]
pub struct InvalidPostcode {
    reason: &'static str,
}

/// Normalize raw postcode input to its compact form.
///
/// Removes every whitespace character and upper-cases all letters. Total
/// function: any input, including the empty string, produces a (possibly
/// empty) normalized string.
///
/// # Examples
///
/// ```
/// use coverage_server::domain::normalize;
///
/// assert_eq!(normalize(" e14  5al "), "E145AL");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Format a normalized postcode-like string for display.
///
/// Inserts a single space 3 characters from the end, per the UK convention
/// of outward code + space + 3-character inward code. Strings shorter than
/// 5 characters are returned upper-cased but otherwise unchanged, since a
/// split would be malformed.
///
/// # Examples
///
/// ```
/// use coverage_server::domain::format_display;
///
/// assert_eq!(format_display("E145AL"), "E14 5AL");
/// assert_eq!(format_display("e1"), "E1");
/// ```
pub fn format_display(normalized: &str) -> String {
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() < 5 {
        return normalized.to_uppercase();
    }

    let split = chars.len() - 3;
    let outward: String = chars[..split].iter().collect();
    let inward: String = chars[split..].iter().collect();
    format!("{} {}", outward.to_uppercase(), inward.to_uppercase())
}

/// A structurally valid UK postcode, stored in compact (no-space, uppercase)
/// form.
///
/// The grammar checked here is the common outward+inward shape: one or two
/// letters, one digit, optionally one more alphanumeric character, optionally
/// one more digit, then exactly two trailing letters. It accepts syntactically
/// plausible postcodes; it does not guarantee the postcode exists.
///
/// # Examples
///
/// ```
/// use coverage_server::domain::Postcode;
///
/// let pc = Postcode::parse("e14 5al").unwrap();
/// assert_eq!(pc.as_compact(), "E145AL");
/// assert_eq!(pc.display(), "E14 5AL");
///
/// assert!(Postcode::parse("1234").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Parse a postcode from raw user input.
    ///
    /// The input is normalized (whitespace stripped, upper-cased) before the
    /// structural check, so `"e14 5al"` and `"E145AL"` parse identically.
    pub fn parse(raw: &str) -> Result<Self, InvalidPostcode> {
        let compact = normalize(raw);

        if compact.is_empty() {
            return Err(InvalidPostcode {
                reason: "empty input",
            });
        }

        if !is_valid_compact(compact.as_bytes()) {
            return Err(InvalidPostcode {
                reason: "does not match the UK postcode format",
            });
        }

        Ok(Postcode(compact))
    }

    /// Returns the compact (no-space, uppercase) form.
    pub fn as_compact(&self) -> &str {
        &self.0
    }

    /// Returns the display form: outward code, space, 3-character inward code.
    pub fn display(&self) -> String {
        format_display(&self.0)
    }

    /// Returns the sector this postcode belongs to (e.g. `E14 5` for
    /// `E14 5AL`).
    pub fn sector(&self) -> Sector {
        Sector::of(self)
    }
}

/// Check the compact form against the outward+inward structural grammar.
///
/// The two trailing characters must be letters (the final inward-code unit);
/// the head before them must be one or two letters, a digit, an optional
/// alphanumeric, and an optional digit, consumed exactly.
fn is_valid_compact(bytes: &[u8]) -> bool {
    // 5 to 7 characters: shortest "A1 1AA", longest "AA1A 1AA" compact.
    if bytes.len() < 5 || bytes.len() > 7 {
        return false;
    }

    let (head, tail) = bytes.split_at(bytes.len() - 2);

    // Exactly two trailing letters
    if !tail.iter().all(u8::is_ascii_uppercase) {
        return false;
    }

    let mut i = 0;

    // One or two leading letters
    if i >= head.len() || !head[i].is_ascii_uppercase() {
        return false;
    }
    i += 1;
    if i < head.len() && head[i].is_ascii_uppercase() {
        i += 1;
    }

    // One digit
    if i >= head.len() || !head[i].is_ascii_digit() {
        return false;
    }
    i += 1;

    // Optionally one more alphanumeric
    if i < head.len() && (head[i].is_ascii_uppercase() || head[i].is_ascii_digit()) {
        i += 1;
    }

    // Optionally one more digit
    if i < head.len() && head[i].is_ascii_digit() {
        i += 1;
    }

    // Head must be fully consumed
    i == head.len()
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_uppercases() {
        assert_eq!(normalize("e14 5al"), "E145AL");
        assert_eq!(normalize("  ig1\t1nd "), "IG11ND");
        assert_eq!(normalize("RM7 0XX"), "RM70XX");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn format_display_inserts_space_before_inward() {
        assert_eq!(format_display("E145AL"), "E14 5AL");
        assert_eq!(format_display("IG110AB"), "IG11 0AB");
        assert_eq!(format_display("RM70XX"), "RM7 0XX");
    }

    #[test]
    fn format_display_leaves_short_strings_alone() {
        assert_eq!(format_display(""), "");
        assert_eq!(format_display("E1"), "E1");
        assert_eq!(format_display("e14"), "E14");
        assert_eq!(format_display("E145"), "E145");
    }

    #[test]
    fn parse_valid_postcodes() {
        assert!(Postcode::parse("E1 4AB").is_ok());
        assert!(Postcode::parse("E10 5AJ").is_ok());
        assert!(Postcode::parse("E14 5AL").is_ok());
        assert!(Postcode::parse("IG11 0AB").is_ok());
        assert!(Postcode::parse("RM7 0XX").is_ok());
        assert!(Postcode::parse("SW1A 1AA").is_ok());
    }

    #[test]
    fn parse_normalizes_before_validating() {
        let pc = Postcode::parse("e145al").unwrap();
        assert_eq!(pc.as_compact(), "E145AL");

        let pc = Postcode::parse("  e14  5al  ").unwrap();
        assert_eq!(pc.as_compact(), "E145AL");
    }

    #[test]
    fn reject_malformed_input() {
        assert!(Postcode::parse("").is_err());
        assert!(Postcode::parse("   ").is_err());
        assert!(Postcode::parse("1234").is_err());
        assert!(Postcode::parse("ABCDEF").is_err());
        assert!(Postcode::parse("E14").is_err());
        assert!(Postcode::parse("E14 5").is_err());
        assert!(Postcode::parse("E14 5ALX").is_err());
        assert!(Postcode::parse("123 4AB").is_err());
        assert!(Postcode::parse("E14 5A1").is_err());
    }

    #[test]
    fn reject_non_ascii() {
        assert!(Postcode::parse("É14 5AL").is_err());
        assert!(Postcode::parse("E14 5ÄL").is_err());
    }

    #[test]
    fn display_form() {
        let pc = Postcode::parse("e145al").unwrap();
        assert_eq!(pc.display(), "E14 5AL");
        assert_eq!(format!("{}", pc), "E14 5AL");
        assert_eq!(format!("{:?}", pc), "Postcode(E145AL)");
    }

    #[test]
    fn sector_of_postcode() {
        let pc = Postcode::parse("E14 5AL").unwrap();
        assert_eq!(pc.sector().as_str(), "E14 5");

        let pc = Postcode::parse("IG11 0AB").unwrap();
        assert_eq!(pc.sector().as_str(), "IG11 0");
    }

    #[test]
    fn equality_ignores_input_spacing() {
        let a = Postcode::parse("E14 5AL").unwrap();
        let b = Postcode::parse("e145al").unwrap();
        assert_eq!(a, b);
    }
}
