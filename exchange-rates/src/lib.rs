//! Rate Source Adapters
//!
//! Implementations of the [`RateSource`](xchange_types::RateSource) port:
//!
//! - [`HttpRateSource`] asks a remote YQL-style quote provider for the rate of
//!   a currency pair.
//! - [`StaticRateSource`] answers from a hardcoded table of USD cross rates.
//!   Currencies are declared with the `define_currencies!` macro; it needs no
//!   network and is meant for development and testing.
//!
//! # Example
//! ```
//! use exchange_rates::StaticRateSource;
//! use xchange_types::{CurrencyCode, RateSource};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let source = StaticRateSource::new();
//! let usd = CurrencyCode::new("USD").unwrap();
//! let eur = CurrencyCode::new("EUR").unwrap();
//! let quote = source.lookup(&usd, &eur).await.unwrap();
//! assert!(quote.rate() > 0.0);
//! # });
//! ```

mod http;
mod table;

pub use http::{DEFAULT_BASE_URL, HttpRateSource, parse_rate};
pub use table::{KnownCurrency, StaticRateSource, get_rate_dynamic};
