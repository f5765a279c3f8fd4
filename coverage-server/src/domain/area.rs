//! Postal area code and area prefix types.

use std::fmt;

/// Error returned when parsing an invalid area code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid area code: {reason}")]
pub struct InvalidAreaCode {
    reason: &'static str,
}

/// Error returned when parsing an invalid area prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid area prefix: {reason}")]
pub struct InvalidAreaPrefix {
    reason: &'static str,
}

/// A postal district outward code: one or two letters followed by one or
/// more digits (e.g. `E14`, `IG1`, `RM7`).
///
/// # Examples
///
/// ```
/// use coverage_server::domain::AreaCode;
///
/// let area = AreaCode::parse("IG11").unwrap();
/// assert_eq!(area.as_str(), "IG11");
/// assert_eq!(area.prefix().as_str(), "IG");
///
/// assert!(AreaCode::parse("E").is_err());
/// assert!(AreaCode::parse("14").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AreaCode(String);

impl AreaCode {
    /// Parse an area code from a string.
    ///
    /// The input must be one or two uppercase ASCII letters followed by one
    /// or more ASCII digits, with nothing after the digits.
    pub fn parse(s: &str) -> Result<Self, InvalidAreaCode> {
        let bytes = s.as_bytes();

        let letters = bytes
            .iter()
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        if letters == 0 || letters > 2 {
            return Err(InvalidAreaCode {
                reason: "must start with one or two uppercase letters",
            });
        }

        let digits = &bytes[letters..];
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(InvalidAreaCode {
                reason: "letters must be followed by digits only",
            });
        }

        Ok(AreaCode(s.to_string()))
    }

    /// Extract the area code from the leading letters+digits run of a
    /// string, ignoring anything after the digits.
    ///
    /// This is the lenient form used when decomposing a sector: `"SW1A 1"`
    /// yields `SW1` even though `SW1A` is not a plain letters+digits outward
    /// code. Returns `None` when the string does not start with one-or-two
    /// letters followed by at least one digit.
    pub fn extract(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        let letters = bytes
            .iter()
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        if letters == 0 || letters > 2 {
            return None;
        }

        let digits = bytes[letters..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }

        Some(AreaCode(s[..letters + digits].to_string()))
    }

    /// Returns the area code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The letters-only area prefix (e.g. `IG` for `IG11`).
    pub fn prefix(&self) -> AreaPrefix {
        AreaPrefix(self.0.chars().filter(|c| c.is_ascii_uppercase()).collect())
    }
}

impl fmt::Debug for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaCode({})", self.0)
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A letters-only postal area prefix (e.g. `E`, `IG`, `RM`).
///
/// This is the key of the coverage table: sectors are grouped under the
/// prefix of their area code.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AreaPrefix(String);

impl AreaPrefix {
    /// Parse an area prefix: one or two uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidAreaPrefix> {
        let bytes = s.as_bytes();

        if bytes.is_empty() || bytes.len() > 2 {
            return Err(InvalidAreaPrefix {
                reason: "must be one or two characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAreaPrefix {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(AreaPrefix(s.to_string()))
    }

    /// Returns the area prefix as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AreaPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaPrefix({})", self.0)
    }
}

impl fmt::Display for AreaPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
