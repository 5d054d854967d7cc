//! # Xchange Hex
//!
//! Application service layer and HTTP adapter for the exchange service.
//!
//! ## Architecture
//!
//! - `service/` - Rate resolver (identity, synthetic currencies, source lookup)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - Generated API description
//!
//! The resolver is generic over `S: RateSource`, allowing different rate
//! providers to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::Resolver;
