//! FX pair identifiers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for invalid pair codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    /// The pair code is empty or contains non-alphanumeric characters.
    #[error("Invalid pair code: '{0}'")]
    Invalid(String),
}

/// A validated FX pair identifier, stored uppercase (e.g. `EURUSD`).
///
/// Dukascopy accepts the pair code verbatim in data URLs, so validation is
/// limited to shape: non-empty ASCII alphanumeric. Input is normalized to
/// uppercase, matching the provider's path convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pair(String);

impl Pair {
    /// Creates a pair from a code like `eurusd` or `EURUSD`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::Invalid`] if the code is empty or contains
    /// characters other than ASCII letters and digits.
    pub fn new(code: impl AsRef<str>) -> Result<Self, PairError> {
        let code = code.as_ref();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PairError::Invalid(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the uppercase pair code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_to_uppercase() {
        let pair = Pair::new("eurusd").unwrap();
        assert_eq!(pair.as_str(), "EURUSD");
        assert_eq!(pair.to_string(), "EURUSD");
    }

    #[test]
    fn test_rejects_bad_codes() {
        assert!(Pair::new("").is_err());
        assert!(Pair::new("EUR/USD").is_err());
        assert!(Pair::new("EUR USD").is_err());
    }

    #[test]
    fn test_from_str() {
        let pair: Pair = "usdchf".parse().unwrap();
        assert_eq!(pair.as_str(), "USDCHF");
    }
}
