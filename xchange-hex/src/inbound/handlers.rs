//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use xchange_types::{
    AppError, CurrencyCode, ExchangeQuery, ExchangeResponse, RateSource, XchangeError,
};

use crate::Resolver;

/// Application state shared across handlers.
pub struct AppState<S: RateSource> {
    pub resolver: Resolver<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<XchangeError> for ApiError {
    fn from(err: XchangeError) -> Self {
        ApiError(AppError::Exchange(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Resolution failures answer 400 even though the body says 500;
        // existing clients key off the body text.
        let status = match &self.0 {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedQuery
            | AppError::MissingParameter
            | AppError::InvalidAmount
            | AppError::Exchange(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self.0 {
            AppError::MethodNotAllowed | AppError::MalformedQuery => self.0.to_string(),
            _ => format!("{}\n", self.0),
        };

        (status, body).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Converts an amount between two currencies.
///
/// Mounted for every method so that non-GET requests get the plain-text 405.
#[tracing::instrument(skip(state))]
pub async fn exchange<S: RateSource>(
    method: Method,
    State(state): State<Arc<AppState<S>>>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApiError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed.into());
    }

    let params = ExchangeQuery::parse(query.as_deref().unwrap_or_default())
        .inspect_err(|_| tracing::debug!("rejected query string"))?;

    let (from, to, amount) = match (params.from, params.to, params.amount) {
        (Some(from), Some(to), Some(amount))
            if !from.is_empty() && !to.is_empty() && !amount.is_empty() =>
        {
            (from, to, amount)
        }
        _ => return Err(AppError::MissingParameter.into()),
    };

    let amount: f64 = amount
        .parse()
        .ok()
        .filter(|a: &f64| a.is_finite())
        .ok_or(AppError::InvalidAmount)?;
    let from = CurrencyCode::new(from)?;
    let to = CurrencyCode::new(to)?;

    let conversion = state
        .resolver
        .convert(&from, &to, amount)
        .await
        .inspect_err(|e| tracing::warn!(%from, %to, error = %e, "resolution failed"))?;

    tracing::info!(
        %from,
        %to,
        rate = conversion.quote.rate(),
        "exchanged {} -> {}",
        conversion.amount,
        conversion.converted
    );
    Ok(Json(ExchangeResponse::from(&conversion)))
}
