//! Rate Resolver
//!
//! Turns a `(from, to)` pair into a quote. Contains NO infrastructure logic;
//! the only IO is the single call into the injected rate source.

use tracing::debug;

use xchange_types::{Conversion, CurrencyCode, Quote, RateSource, SyntheticTable, XchangeError};

/// Application service resolving exchange quotes.
///
/// Generic over `S: RateSource` - the adapter is injected at compile time.
/// Rules, in priority order:
/// 1. `from == to` resolves to rate 1.0 without consulting anything.
/// 2. A synthetic `from` is routed through its anchor.
/// 3. A synthetic `to` is routed through its anchor.
/// 4. Anything else is looked up in the rate source.
pub struct Resolver<S: RateSource> {
    source: S,
    synthetics: SyntheticTable,
}

impl<S: RateSource> Resolver<S> {
    /// Creates a resolver with the standard synthetic currencies.
    pub fn new(source: S) -> Self {
        Self::with_synthetics(source, SyntheticTable::standard())
    }

    pub fn with_synthetics(source: S, synthetics: SyntheticTable) -> Self {
        Self { source, synthetics }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn synthetics(&self) -> &SyntheticTable {
        &self.synthetics
    }

    /// Resolves the quote for `from -> to`.
    ///
    /// Any failure aborts the whole resolution; there is no fallback rate.
    #[tracing::instrument(skip_all, fields(from = %from, to = %to))]
    pub async fn resolve(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Quote, XchangeError> {
        if from == to {
            return Ok(Quote::identity(from.clone()));
        }

        let head = self.synthetics.get(from);
        let tail = self.synthetics.get(to);

        // Anchors are never synthetic, so the inner pair needs no further routing.
        let inner_from = head.map_or(from, |peg| &peg.anchor);
        let inner_to = tail.map_or(to, |peg| &peg.anchor);

        let mut quote = if inner_from == inner_to {
            Quote::identity(inner_from.clone())
        } else {
            self.source.lookup(inner_from, inner_to).await?
        };

        if let Some(peg) = head {
            quote = Quote::chain(peg.outbound(), quote)?;
        }
        if let Some(peg) = tail {
            quote = Quote::chain(quote, peg.inbound())?;
        }

        debug!(rate = quote.rate(), legs = quote.legs().len(), "resolved quote");
        Ok(quote)
    }

    /// Resolves `from -> to` and applies the rate to `amount`.
    pub async fn convert(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount: f64,
    ) -> Result<Conversion, XchangeError> {
        let quote = self.resolve(from, to).await?;
        Ok(Conversion::new(quote, amount))
    }
}
