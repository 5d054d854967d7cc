//! Hardcoded rate table.

use xchange_types::{CurrencyCode, Quote, RateSource, XchangeError, ensure_iso};

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines known currencies and their USD cross rates
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the currencies the static table knows about.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Name => ("CODE", "SYMBOL", usd_per_unit),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $to_usd:expr)
        ),* $(,)?
    ) => {
        /// Currencies with a hardcoded rate.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KnownCurrency {
            $($name),*
        }

        impl KnownCurrency {
            pub fn code(&self) -> &'static str {
                match self {
                    $(KnownCurrency::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(KnownCurrency::$name => $symbol),*
                }
            }

            /// USD value of one unit.
            pub fn to_usd_rate(&self) -> f64 {
                match self {
                    $(KnownCurrency::$name => $to_usd),*
                }
            }

            pub fn all() -> &'static [KnownCurrency] {
                &[$(KnownCurrency::$name),*]
            }
        }

        impl std::fmt::Display for KnownCurrency {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for KnownCurrency {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($code => Ok(KnownCurrency::$name),)*
                    _ => Err(format!("Unknown currency: {}", s)),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$", 1.0),
    EUR => ("EUR", "€", 1.087),
    GBP => ("GBP", "£", 1.266),
    INR => ("INR", "₹", 0.01203),
    JPY => ("JPY", "¥", 0.0067),
    CNY => ("CNY", "¥", 0.138),
    CHF => ("CHF", "Fr", 1.13),
    CAD => ("CAD", "$", 0.73),
    AUD => ("AUD", "$", 0.66),
}

/// Units of `to` per one unit of `from`, via USD.
pub fn get_rate_dynamic(from: KnownCurrency, to: KnownCurrency) -> f64 {
    if from == to {
        return 1.0;
    }
    from.to_usd_rate() / to.to_usd_rate()
}

// ─────────────────────────────────────────────────────────────────────────────
// RateSource adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Offline rate source backed by the table above.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRateSource;

impl StaticRateSource {
    pub fn new() -> Self {
        Self
    }

    fn known(code: &CurrencyCode) -> Result<KnownCurrency, XchangeError> {
        code.as_str()
            .parse()
            .map_err(|_| XchangeError::SourceUnavailable(format!("no static rate for {}", code)))
    }
}

#[async_trait::async_trait]
impl RateSource for StaticRateSource {
    #[tracing::instrument(skip_all, fields(from = %from, to = %to))]
    async fn lookup(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<Quote, XchangeError> {
        ensure_iso(from, to)?;
        let rate = get_rate_dynamic(Self::known(from)?, Self::known(to)?);
        tracing::debug!(rate, "static rate");
        Ok(Quote::new(from.clone(), to.clone(), rate))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_known_currency_parse() {
        assert_eq!("USD".parse::<KnownCurrency>().unwrap(), KnownCurrency::USD);
        assert_eq!("jpy".parse::<KnownCurrency>().unwrap(), KnownCurrency::JPY);
        assert!("XYZ".parse::<KnownCurrency>().is_err());
    }

    #[test]
    fn test_known_currency_display() {
        assert_eq!(KnownCurrency::GBP.to_string(), "GBP");
        assert_eq!(KnownCurrency::GBP.symbol(), "£");
    }

    #[test]
    fn test_get_rate_dynamic() {
        let rate = get_rate_dynamic(KnownCurrency::USD, KnownCurrency::INR);
        assert!((rate - 83.12).abs() < 1.0);
        assert_eq!(get_rate_dynamic(KnownCurrency::EUR, KnownCurrency::EUR), 1.0);
    }

    #[test]
    fn test_all_rates_positive() {
        for c in KnownCurrency::all() {
            assert!(c.to_usd_rate() > 0.0, "{c} has no positive rate");
        }
    }

    #[tokio::test]
    async fn test_lookup_returns_requested_codes() {
        let quote = StaticRateSource::new()
            .lookup(&code("usd"), &code("JPY"))
            .await
            .unwrap();
        assert_eq!(quote.source().as_str(), "usd");
        assert_eq!(quote.target().as_str(), "JPY");
        assert!((quote.rate() - 1.0 / 0.0067).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_lookup_rejects_malformed_code() {
        let err = StaticRateSource::new()
            .lookup(&code("US"), &code("JPY"))
            .await
            .unwrap_err();
        assert!(matches!(err, XchangeError::InvalidCode(c) if c == "US"));
    }

    #[tokio::test]
    async fn test_lookup_unknown_pair_is_unavailable() {
        let err = StaticRateSource::new()
            .lookup(&code("USD"), &code("XAU"))
            .await
            .unwrap_err();
        assert!(matches!(err, XchangeError::SourceUnavailable(_)));
    }
}
