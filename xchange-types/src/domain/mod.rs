//! Domain models for the exchange service.

pub mod currency;
pub mod quote;
pub mod synthetic;

pub use currency::CurrencyCode;
pub use quote::{Conversion, Quote};
pub use synthetic::{Peg, SyntheticTable};
