//! Error types for the exchange service.

use crate::domain::CurrencyCode;

/// Errors produced while resolving a quote.
///
/// These propagate unchanged from the rate source through the resolver.
#[derive(Debug, thiserror::Error)]
pub enum XchangeError {
    #[error("invalid currency code: {0:?}")]
    InvalidCode(String),

    #[error("cannot chain quotes: before ends in {before}, after starts at {after}")]
    MismatchedChain {
        before: CurrencyCode,
        after: CurrencyCode,
    },

    #[error("rate source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("malformed rate source response: {0}")]
    MalformedResponse(String),
}

/// Entrypoint errors (request validation plus resolution failures).
///
/// The display strings are the response bodies of the HTTP endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("405 Method Not Allowed")]
    MethodNotAllowed,

    #[error("400 Bad Request")]
    MalformedQuery,

    #[error("400 Bad Request: from, to and amount are required parameter")]
    MissingParameter,

    #[error("400 Bad Request: amount must be float")]
    InvalidAmount,

    #[error("500 Internal Server Error: {0}")]
    Exchange(#[from] XchangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_messages() {
        assert_eq!(AppError::MethodNotAllowed.to_string(), "405 Method Not Allowed");
        assert_eq!(
            AppError::MissingParameter.to_string(),
            "400 Bad Request: from, to and amount are required parameter"
        );
        let err: AppError = XchangeError::SourceUnavailable("timed out".into()).into();
        assert_eq!(
            err.to_string(),
            "500 Internal Server Error: rate source unavailable: timed out"
        );
    }
}
