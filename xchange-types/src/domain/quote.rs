//! Exchange rate quotes and their composition.

use std::fmt;

use crate::domain::CurrencyCode;
use crate::error::XchangeError;

/// A directed exchange rate: `rate` units of `target` per one unit of `source`.
///
/// Quotes are either a single rate obtained from somewhere (`Direct`) or two
/// quotes joined end to end (`Chained`). A chained quote keeps both legs and
/// derives its endpoints and rate from them on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum Quote {
    Direct {
        source: CurrencyCode,
        target: CurrencyCode,
        rate: f64,
    },
    Chained {
        before: Box<Quote>,
        after: Box<Quote>,
    },
}

impl Quote {
    /// Creates a direct quote. The rate is taken as given.
    pub fn new(source: CurrencyCode, target: CurrencyCode, rate: f64) -> Self {
        Quote::Direct {
            source,
            target,
            rate,
        }
    }

    /// The 1:1 quote of a code to itself.
    pub fn identity(code: CurrencyCode) -> Self {
        Quote::new(code.clone(), code, 1.0)
    }

    /// Joins two quotes end to end.
    ///
    /// Fails with [`XchangeError::MismatchedChain`] unless
    /// `before.target() == after.source()`.
    pub fn chain(before: Quote, after: Quote) -> Result<Self, XchangeError> {
        if before.target() != after.source() {
            return Err(XchangeError::MismatchedChain {
                before: before.target().clone(),
                after: after.source().clone(),
            });
        }
        Ok(Quote::Chained {
            before: Box::new(before),
            after: Box::new(after),
        })
    }

    pub fn source(&self) -> &CurrencyCode {
        match self {
            Quote::Direct { source, .. } => source,
            Quote::Chained { before, .. } => before.source(),
        }
    }

    pub fn target(&self) -> &CurrencyCode {
        match self {
            Quote::Direct { target, .. } => target,
            Quote::Chained { after, .. } => after.target(),
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            Quote::Direct { rate, .. } => *rate,
            Quote::Chained { before, after } => before.rate() * after.rate(),
        }
    }

    /// Converts `amount` units of the source currency into the target currency.
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.rate()
    }

    /// Direct quotes making up this quote, in path order.
    pub fn legs(&self) -> Vec<&Quote> {
        match self {
            Quote::Direct { .. } => vec![self],
            Quote::Chained { before, after } => {
                let mut legs = before.legs();
                legs.extend(after.legs());
                legs
            }
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} @ {}", self.source(), self.target(), self.rate())
    }
}

/// Result of applying a resolved quote to an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub quote: Quote,
    /// Amount in the source currency, as requested.
    pub amount: f64,
    /// Amount in the target currency.
    pub converted: f64,
}

impl Conversion {
    pub fn new(quote: Quote, amount: f64) -> Self {
        let converted = quote.apply(amount);
        Self {
            quote,
            amount,
            converted,
        }
    }
}
