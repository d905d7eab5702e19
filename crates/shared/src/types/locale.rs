//! Locale identifiers consumed by the formatter.
//!
//! Only the pieces the formatter needs are kept: a language subtag and an
//! optional two-letter region. Script and variant subtags are accepted and
//! dropped.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// Two-letter ISO 3166 region code, uppercase.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region([u8; 2]);

impl Region {
    /// Builds a region from a literal, for compiled-in tables.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not two uppercase ASCII letters.
    #[must_use]
    pub const fn from_static(code: &'static str) -> Self {
        let bytes = code.as_bytes();
        assert!(
            bytes.len() == 2 && bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_uppercase(),
            "region must be 2 uppercase letters"
        );
        Self([bytes[0], bytes[1]])
    }

    /// Returns the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({})", self.as_str())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(MoneyError::InvalidLocale(s.to_string())),
        }
    }
}

/// A language plus optional region, e.g. `en-AU` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<Region>,
}

impl Locale {
    /// Creates a locale from already-validated parts.
    #[must_use]
    pub fn new(language: &str, region: Option<Region>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region,
        }
    }

    /// Lowercase language subtag (e.g. "en").
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, if present.
    #[must_use]
    pub const fn region(&self) -> Option<Region> {
        self.region
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = MoneyError;

    /// Parses BCP 47 style (`en-AU`) and POSIX style (`en_AU`) identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyError::InvalidLocale(s.to_string());
        let mut subtags = s.trim().split(['-', '_']);

        let language = subtags.next().ok_or_else(invalid)?;
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut region = None;
        for subtag in subtags {
            if subtag.is_empty() {
                return Err(invalid());
            }
            // Script subtags (e.g. "Hant") are four letters; skip them.
            if subtag.len() == 2 {
                region = Some(subtag.parse().map_err(|_| invalid())?);
                break;
            }
        }

        Ok(Self::new(language, region))
    }
}

impl TryFrom<String> for Locale {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
