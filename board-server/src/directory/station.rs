//! Station types.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A Comuline station identifier.
///
/// Station ids are short uppercase codes (e.g. "BOO" for Bogor, "JAKK"
/// for Jakarta Kota). This type guarantees that any value is non-empty
/// ASCII alphanumeric with no lowercase letters, by construction.
///
/// # Examples
///
/// ```
/// use board_server::directory::StationId;
///
/// let bogor = StationId::parse("BOO").unwrap();
/// assert_eq!(bogor.as_str(), "BOO");
///
/// // Lowercase is rejected
/// assert!(StationId::parse("boo").is_err());
///
/// // Empty is rejected
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

/// Longest station id accepted. Upstream codes are at most a handful of
/// characters; the cap keeps path parameters bounded.
const MAX_ID_LEN: usize = 8;

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be 1 to 8 ASCII uppercase letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_ID_LEN {
            return Err(InvalidStationId {
                reason: "must be at most 8 characters",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationId {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named station in the directory.
///
/// Immutable once fetched; the directory is re-fetched per request
/// rather than held anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Upstream station identifier.
    pub id: StationId,

    /// Human-readable station name.
    pub name: String,
}

impl Station {
    /// Create a new station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("AC").is_ok());
        assert!(StationId::parse("BOO").is_ok());
        assert!(StationId::parse("JAKK").is_ok());
        assert!(StationId::parse("THB1").is_ok());
        assert!(StationId::parse("1").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationId::parse("boo").is_err());
        assert!(StationId::parse("Boo").is_err());
    }

    #[test]
    fn reject_too_long() {
        assert!(StationId::parse("ABCDEFGHI").is_err());
    }

    #[test]
    fn reject_non_alphanumeric() {
        assert!(StationId::parse("A-C").is_err());
        assert!(StationId::parse("A C").is_err());
        assert!(StationId::parse("A/C").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let id = StationId::parse("BOO").unwrap();
        assert_eq!(id.as_str(), "BOO");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("DP").unwrap();
        assert_eq!(format!("{}", id), "DP");
        assert_eq!(format!("{:?}", id), "StationId(DP)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{1,8}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Lowercase input is always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{1,8}") {
            prop_assert!(StationId::parse(&s).is_err());
        }

        /// Over-length input is always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{9,16}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
