//! Synthetic currencies pegged to a real anchor currency.
//!
//! A synthetic currency has no market quote. It is defined by a fixed number
//! of anchor units per synthetic unit, and every conversion involving it is
//! routed through its anchor.

use crate::domain::{CurrencyCode, Quote};
use crate::error::XchangeError;

/// Code of the built-in synthetic currency.
pub const R_CODE: &str = "r";
/// Anchor of the built-in synthetic currency.
pub const R_ANCHOR: &str = "JPY";
/// 1 r = 60000 JPY.
pub const R_ANCHOR_UNITS: f64 = 60000.0;

/// A fixed peg: one unit of `code` is worth `anchor_units` of `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct Peg {
    pub code: CurrencyCode,
    pub anchor: CurrencyCode,
    pub anchor_units: f64,
}

impl Peg {
    pub fn new(code: CurrencyCode, anchor: CurrencyCode, anchor_units: f64) -> Self {
        Self {
            code,
            anchor,
            anchor_units,
        }
    }

    /// `code -> anchor` at the fixed rate.
    pub fn outbound(&self) -> Quote {
        Quote::new(self.code.clone(), self.anchor.clone(), self.anchor_units)
    }

    /// `anchor -> code` at the reciprocal rate.
    pub fn inbound(&self) -> Quote {
        Quote::new(
            self.anchor.clone(),
            self.code.clone(),
            1.0 / self.anchor_units,
        )
    }
}

/// Lookup table of synthetic currencies, consulted before any rate source.
#[derive(Debug, Clone, Default)]
pub struct SyntheticTable {
    pegs: Vec<Peg>,
}

impl SyntheticTable {
    /// Builds a table, rejecting duplicate codes and anchors that are
    /// themselves synthetic (every route must bottom out in a real currency).
    pub fn new(pegs: Vec<Peg>) -> Result<Self, XchangeError> {
        for (i, peg) in pegs.iter().enumerate() {
            if pegs[..i].iter().any(|p| p.code == peg.code) {
                return Err(XchangeError::InvalidCode(peg.code.to_string()));
            }
            if pegs.iter().any(|p| p.code == peg.anchor) {
                return Err(XchangeError::InvalidCode(peg.anchor.to_string()));
            }
        }
        Ok(Self { pegs })
    }

    /// The built-in table: only `r`, pegged to JPY.
    pub fn standard() -> Self {
        Self {
            pegs: vec![Peg::new(
                CurrencyCode::from_static(R_CODE),
                CurrencyCode::from_static(R_ANCHOR),
                R_ANCHOR_UNITS,
            )],
        }
    }

    /// A table with no synthetic currencies.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&Peg> {
        self.pegs.iter().find(|p| &p.code == code)
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }
}
