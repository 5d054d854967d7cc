//! Currency code token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::XchangeError;

/// A currency code as supplied by a caller.
///
/// Any non-empty token is accepted here; whether it names a real currency is
/// only checked by rate sources via [`CurrencyCode::is_iso`]. Equality is
/// literal, so `"usd"` and `"USD"` are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a code from a non-empty token.
    pub fn new(code: impl Into<String>) -> Result<Self, XchangeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(XchangeError::InvalidCode(code));
        }
        Ok(Self(code))
    }

    /// Builds a code from a known non-empty constant.
    pub(crate) fn from_static(code: &'static str) -> Self {
        debug_assert!(!code.is_empty());
        Self(code.to_string())
    }

    /// Returns the code exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for ISO-4217 shaped codes: exactly three ASCII letters.
    pub fn is_iso(&self) -> bool {
        self.0.len() == 3 && self.0.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Uppercase form, as sent to quote providers.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = XchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = XchangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = XchangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
