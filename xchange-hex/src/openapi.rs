//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use utoipa::OpenApi;

use xchange_types::dto::{ExchangeQuery, ExchangeResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
async fn health() {}

/// Convert an amount between two currencies
///
/// Codes are passed through to the rate source as given, except for the
/// synthetic currency `r` (1 r = 60000 JPY). Converting a code to itself
/// always succeeds with rate 1.
#[utoipa::path(
    get,
    path = "/exchange.json",
    tag = "exchange",
    params(ExchangeQuery),
    responses(
        (status = 200, description = "Conversion result", body = ExchangeResponse),
        (status = 400, description = "Missing or invalid parameter, or the rate could not be resolved (body is plain text)", body = String, content_type = "text/plain"),
        (status = 405, description = "Method other than GET", body = String, content_type = "text/plain")
    )
)]
async fn exchange() {}

/// OpenAPI documentation for the exchange API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Xchange API",
        version = "1.0.0",
        description = "Currency conversion with optional routing through a fixed-rate synthetic currency.",
        license(name = "MIT"),
    ),
    paths(health, exchange),
    components(schemas(ExchangeResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "exchange", description = "Currency conversion"),
    )
)]
pub struct ApiDoc;
