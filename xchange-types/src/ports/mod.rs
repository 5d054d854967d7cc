//! Port traits (interfaces for adapters).
//!
//! The resolver depends on these traits, not on concrete rate providers.

mod rate_source;

pub use rate_source::{RateSource, ensure_iso};
