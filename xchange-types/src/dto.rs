//! Data Transfer Objects (DTOs) for the HTTP boundary.

use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Conversion;
use crate::error::AppError;

/// Query parameters of `GET /exchange.json`.
///
/// All fields are optional at the decoding stage so that a missing value can
/// be reported with the required-parameter message instead of a decode error.
/// Built with [`ExchangeQuery::parse`].
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExchangeQuery {
    /// Source currency code
    #[param(example = "USD")]
    pub from: Option<String>,
    /// Target currency code
    #[param(example = "JPY")]
    pub to: Option<String>,
    /// Amount in the source currency
    #[param(example = "1.5")]
    pub amount: Option<String>,
}

impl ExchangeQuery {
    /// Parses a raw `application/x-www-form-urlencoded` query string.
    ///
    /// Pairs are separated by `&` only; a `;` anywhere in a pair and any
    /// `%` not followed by two hex digits are rejected. When a key repeats,
    /// the first value wins. Unknown keys are ignored.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let mut query = Self::default();

        for pair in raw.split('&') {
            if pair.contains(';') {
                return Err(AppError::MalformedQuery);
            }
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = unescape(key)?;
            let value = unescape(value)?;

            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "amount" => &mut query.amount,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Ok(query)
    }
}

/// Strict form decoding: `+` is a space, `%XX` a byte.
fn unescape(s: &str) -> Result<String, AppError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => out.push((hi * 16 + lo) as u8),
                    _ => return Err(AppError::MalformedQuery),
                }
                i += 2;
            }
            b => out.push(b),
        }
        i += 1;
    }

    String::from_utf8(out).map_err(|_| AppError::MalformedQuery)
}

/// Successful conversion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeResponse {
    /// Source currency code, as requested
    #[schema(example = "USD")]
    pub from: String,
    /// Target currency code, as requested
    #[schema(example = "JPY")]
    pub to: String,
    /// Resolved rate (target units per source unit)
    #[serde(rename = "Rate", serialize_with = "shortest_number")]
    #[schema(example = 110.0)]
    pub rate: f64,
    /// Converted amount in the target currency
    #[serde(serialize_with = "shortest_number")]
    #[schema(example = 165.0)]
    pub amount: f64,
}

/// Whole numbers are written without a fractional part (`1`, not `1.0`).
fn shortest_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Below 2^53 every whole f64 is an exact i64.
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl From<&Conversion> for ExchangeResponse {
    fn from(c: &Conversion) -> Self {
        Self {
            from: c.quote.source().to_string(),
            to: c.quote.target().to_string(),
            rate: c.quote.rate(),
            amount: c.converted,
        }
    }
}
