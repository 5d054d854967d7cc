//! Remote quote provider.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use xchange_types::{CurrencyCode, Quote, RateSource, XchangeError, ensure_iso};

/// Public YQL endpoint.
pub const DEFAULT_BASE_URL: &str = "https://query.yahooapis.com/v1/public/yql";

const QUERY_ENV: &str = "store://datatables.org/alltableswithkeys";

/// Rate source that queries a YQL-style quote provider over HTTP.
///
/// Each lookup is a single GET; there are no retries and nothing is cached.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    base_url: String,
    http: Client,
}

impl HttpRateSource {
    /// Creates a source for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("xchange/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl RateSource for HttpRateSource {
    #[instrument(name = "HttpRateLookup", skip_all, fields(from = %from, to = %to))]
    async fn lookup(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<Quote, XchangeError> {
        ensure_iso(from, to)?;

        let pair = format!("{}{}", from.normalized(), to.normalized());
        let query = format!(r#"select Rate from yahoo.finance.xchange where pair = "{pair}""#);
        debug!("Requesting rate for {} from {}", pair, self.base_url);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("env", QUERY_ENV),
            ])
            .send()
            .await
            .map_err(|e| XchangeError::SourceUnavailable(format!("{pair}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(XchangeError::SourceUnavailable(format!(
                "{pair}: provider answered {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| XchangeError::SourceUnavailable(format!("{pair}: {e}")))?;

        let rate = parse_rate(&body)?;
        debug!(rate, "Received rate for {}", pair);
        Ok(Quote::new(from.clone(), to.clone(), rate))
    }
}

#[derive(Debug, Deserialize)]
struct YqlResponse {
    query: YqlQuery,
}

#[derive(Debug, Deserialize)]
struct YqlQuery {
    results: Option<YqlResults>,
}

#[derive(Debug, Deserialize)]
struct YqlResults {
    rate: YqlRate,
}

#[derive(Debug, Deserialize)]
struct YqlRate {
    #[serde(rename = "Rate")]
    rate: RateValue,
}

/// The provider sends the rate as a string; a bare number is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RateValue {
    Number(f64),
    Text(String),
}

/// Extracts `query.results.rate.Rate` from a provider response body.
pub fn parse_rate(body: &str) -> Result<f64, XchangeError> {
    let data: YqlResponse = serde_json::from_str(body)
        .map_err(|e| XchangeError::MalformedResponse(format!("unreadable body: {e}")))?;

    let results = data
        .query
        .results
        .ok_or_else(|| XchangeError::MalformedResponse("no results in response".into()))?;

    let rate = match results.rate.rate {
        RateValue::Number(n) => n,
        RateValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| XchangeError::MalformedResponse(format!("rate {s:?} is not a number")))?,
    };

    if !rate.is_finite() || rate < 0.0 {
        return Err(XchangeError::MalformedResponse(format!(
            "rate {rate} out of range"
        )));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const YQL_PATH: &str = "/v1/public/yql";

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn source_for(server: &MockServer) -> HttpRateSource {
        HttpRateSource::new(
            format!("{}{}", server.uri(), YQL_PATH),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    async fn create_mock_server(pair: &str, status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let q = format!(r#"select Rate from yahoo.finance.xchange where pair = "{pair}""#);

        Mock::given(method("GET"))
            .and(path(YQL_PATH))
            .and(query_param("q", q.as_str()))
            .and(query_param("format", "json"))
            .and(query_param("env", QUERY_ENV))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[test]
    fn test_parse_rate_string_and_number() {
        let body = r#"{"query":{"results":{"rate":{"Rate":"110.25"}}}}"#;
        assert_eq!(parse_rate(body).unwrap(), 110.25);
        let body = r#"{"query":{"results":{"rate":{"Rate":0.9}}}}"#;
        assert_eq!(parse_rate(body).unwrap(), 0.9);
    }

    #[test]
    fn test_parse_rate_malformed() {
        for body in [
            "not json",
            r#"{"query":{"results":null}}"#,
            r#"{"query":{"results":{"rate":{}}}}"#,
            r#"{"query":{"results":{"rate":{"Rate":"N/A"}}}}"#,
            r#"{"query":{"results":{"rate":{"Rate":"-1"}}}}"#,
            r#"{"query":{"results":{"rate":{"Rate":"inf"}}}}"#,
        ] {
            assert!(
                matches!(parse_rate(body), Err(XchangeError::MalformedResponse(_))),
                "{body} should be malformed"
            );
        }
    }

    #[tokio::test]
    async fn test_successful_lookup() {
        let body = r#"{"query":{"count":1,"results":{"rate":{"id":"USDJPY","Rate":"110.0"}}}}"#;
        let server = create_mock_server("USDJPY", 200, body).await;

        let quote = source_for(&server)
            .lookup(&code("USD"), &code("JPY"))
            .await
            .unwrap();
        assert_eq!(quote.source().as_str(), "USD");
        assert_eq!(quote.target().as_str(), "JPY");
        assert_eq!(quote.rate(), 110.0);
    }

    #[tokio::test]
    async fn test_lookup_normalizes_pair_but_keeps_codes() {
        let body = r#"{"query":{"results":{"rate":{"Rate":"0.85"}}}}"#;
        let server = create_mock_server("USDEUR", 200, body).await;

        let quote = source_for(&server)
            .lookup(&code("usd"), &code("eur"))
            .await
            .unwrap();
        assert_eq!(quote.source().as_str(), "usd");
        assert_eq!(quote.rate(), 0.85);
    }

    #[tokio::test]
    async fn test_invalid_code_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = source_for(&server)
            .lookup(&code("USD"), &code("r"))
            .await
            .unwrap_err();
        assert!(matches!(err, XchangeError::InvalidCode(c) if c == "r"));
    }

    #[tokio::test]
    async fn test_missing_rate_is_malformed() {
        let server = create_mock_server("USDJPY", 200, r#"{"query":{"results":null}}"#).await;
        let err = source_for(&server)
            .lookup(&code("USD"), &code("JPY"))
            .await
            .unwrap_err();
        assert!(matches!(err, XchangeError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let server = create_mock_server("USDJPY", 503, "").await;
        let err = source_for(&server)
            .lookup(&code("USD"), &code("JPY"))
            .await
            .unwrap_err();
        assert!(matches!(err, XchangeError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let source = HttpRateSource::new(
            format!("{}{}", server.uri(), YQL_PATH),
            Duration::from_millis(100),
        )
        .unwrap();
        let err = source
            .lookup(&code("USD"), &code("JPY"))
            .await
            .unwrap_err();
        assert!(matches!(err, XchangeError::SourceUnavailable(_)));
    }
}
