//! Rate source port.
//!
//! Implementations can be HTTP clients, hardcoded tables, test stubs, etc.

use crate::domain::{CurrencyCode, Quote};
use crate::error::XchangeError;

/// Port trait for external exchange rate lookups.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Looks up the rate for the literal pair `from -> to`.
    ///
    /// Implementations must:
    /// - fail with [`XchangeError::InvalidCode`] when either code is not
    ///   ISO shaped (see [`CurrencyCode::is_iso`]);
    /// - fail with [`XchangeError::SourceUnavailable`] on transport faults;
    /// - fail with [`XchangeError::MalformedResponse`] when the provider's
    ///   answer cannot be read as a rate;
    /// - otherwise return a direct quote whose source and target are the
    ///   requested codes.
    async fn lookup(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<Quote, XchangeError>;
}

/// Rejects codes that are not ISO shaped. Shared by all adapters.
pub fn ensure_iso(from: &CurrencyCode, to: &CurrencyCode) -> Result<(), XchangeError> {
    for code in [from, to] {
        if !code.is_iso() {
            return Err(XchangeError::InvalidCode(code.to_string()));
        }
    }
    Ok(())
}
