//! # Xchange Types
//!
//! Domain types and port traits for the currency exchange service.
//! This crate has ZERO external IO dependencies - only values, the
//! composition rules for quotes, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, Quote, SyntheticTable)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Core and entrypoint error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Conversion, CurrencyCode, Peg, Quote, SyntheticTable};
pub use dto::*;
pub use error::{AppError, XchangeError};
pub use ports::{RateSource, ensure_iso};
