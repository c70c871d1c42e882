//! Place code and place types.

use std::fmt;

/// Error returned when parsing an invalid place code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place code: {reason}")]
pub struct InvalidPlaceCode {
    reason: &'static str,
}

/// A valid 3-letter place code, IATA style.
///
/// Place codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `PlaceCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use fare_server::domain::PlaceCode;
///
/// let lhr = PlaceCode::parse("LHR").unwrap();
/// assert_eq!(lhr.as_str(), "LHR");
///
/// // Lowercase is rejected by the strict parser
/// assert!(PlaceCode::parse("lhr").is_err());
///
/// // Wrong length is rejected
/// assert!(PlaceCode::parse("LH").is_err());
/// assert!(PlaceCode::parse("LHRX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceCode([u8; 3]);

impl PlaceCode {
    /// Parse a place code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidPlaceCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidPlaceCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidPlaceCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(PlaceCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a place code, trimming whitespace and uppercasing first.
    ///
    /// Catalog feeds are not always careful about case, so this is the
    /// entry point for wire data. `parse` stays strict for code that
    /// should already hold a canonical code.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidPlaceCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the place code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for PlaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceCode({})", self.as_str())
    }
}

impl fmt::Display for PlaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place with its code and human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Canonical 3-letter code.
    pub code: PlaceCode,
    /// Display name, e.g. "London Heathrow".
    pub name: String,
}

impl Place {
    pub fn new(code: PlaceCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Display label in "Name (CODE)" form.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        assert!(PlaceCode::parse("DEL").is_ok());
        assert!(PlaceCode::parse("BOM").is_ok());
        assert!(PlaceCode::parse("LHR").is_ok());
        assert!(PlaceCode::parse("AAA").is_ok());
        assert!(PlaceCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(PlaceCode::parse("del").is_err());
        assert!(PlaceCode::parse("Del").is_err());
        assert!(PlaceCode::parse("DEl").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(PlaceCode::parse("").is_err());
        assert!(PlaceCode::parse("D").is_err());
        assert!(PlaceCode::parse("DE").is_err());
        assert!(PlaceCode::parse("DELX").is_err());
        assert!(PlaceCode::parse("DELHI").is_err());
    }

    #[test]
    fn reject_non_ascii() {
        assert!(PlaceCode::parse("D1L").is_err());
        assert!(PlaceCode::parse("D-L").is_err());
        assert!(PlaceCode::parse("D L").is_err());
        assert!(PlaceCode::parse("DÖL").is_err());
    }

    #[test]
    fn normalized_accepts_lowercase_and_whitespace() {
        assert_eq!(
            PlaceCode::parse_normalized(" del ").unwrap(),
            PlaceCode::parse("DEL").unwrap()
        );
        assert_eq!(
            PlaceCode::parse_normalized("Bom").unwrap().as_str(),
            "BOM"
        );
    }

    #[test]
    fn normalized_still_rejects_wrong_length() {
        assert!(PlaceCode::parse_normalized(" delhi ").is_err());
        assert!(PlaceCode::parse_normalized("").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = PlaceCode::parse("JFK").unwrap();
        assert_eq!(code.as_str(), "JFK");
    }

    #[test]
    fn display() {
        let code = PlaceCode::parse("DXB").unwrap();
        assert_eq!(format!("{}", code), "DXB");
    }

    #[test]
    fn debug() {
        let code = PlaceCode::parse("SIN").unwrap();
        assert_eq!(format!("{:?}", code), "PlaceCode(SIN)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PlaceCode::parse("DEL").unwrap());
        assert!(set.contains(&PlaceCode::parse("DEL").unwrap()));
        assert!(!set.contains(&PlaceCode::parse("BOM").unwrap()));
    }

    #[test]
    fn place_label() {
        let place = Place::new(
            PlaceCode::parse("LHR").unwrap(),
            "London Heathrow".to_string(),
        );
        assert_eq!(place.label(), "London Heathrow (LHR)");
    }
}
