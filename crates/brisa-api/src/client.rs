//! HTTP client for the two WeatherAPI endpoints the application uses.

use std::time::Duration;

use serde::Deserialize;

use crate::error::WeatherError;
use crate::records::{SearchLocation, WeatherReport, WireReport, WireSearchLocation};

/// Production endpoint; tests point the client at a local mock server.
pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

const USER_AGENT: &str = concat!("brisa/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Forecast days requested per fetch. The free plan caps at 3.
const FORECAST_DAYS: u8 = 3;

/// Response header carrying the remaining calls-per-month quota.
const QUOTA_HEADER: &str = "x-weatherapi-qpm-left";

/// Successful fetch payload plus the quota the response reported.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub quota_left: Option<u64>,
}

/// Success payload, upstream API error, or transport error.
pub type FetchOutcome<T> = Result<Fetched<T>, WeatherError>;

#[derive(Debug, Deserialize)]
struct WireApiError {
    error: WireApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct WireApiErrorBody {
    message: String,
    code: i64,
}

/// Client for WeatherAPI.com. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Fetch current conditions, air quality, and the forecast for
    /// `query` (a place name, `id:<ident>`, or `auto:ip`), localized to
    /// `lang` where the upstream supports it.
    pub async fn forecast(&self, query: &str, lang: &str) -> FetchOutcome<WeatherReport> {
        let url = format!("{}/v1/forecast.json", self.base_url);
        tracing::debug!(query, lang, "requesting forecast");

        let fetched = self
            .request::<WireReport>(
                self.http.get(url).query(&[
                    ("key", self.api_key.as_str()),
                    ("q", query),
                    ("days", &FORECAST_DAYS.to_string()),
                    ("aqi", "yes"),
                    ("lang", lang),
                ]),
            )
            .await?;

        Ok(Fetched {
            data: fetched.data.into(),
            quota_left: fetched.quota_left,
        })
    }

    /// Autocomplete search for locations matching `query`.
    pub async fn search(&self, query: &str) -> FetchOutcome<Vec<SearchLocation>> {
        let url = format!("{}/v1/search.json", self.base_url);
        tracing::debug!(query, "requesting location search");

        let fetched = self
            .request::<Vec<WireSearchLocation>>(
                self.http
                    .get(url)
                    .query(&[("key", self.api_key.as_str()), ("query", query)]),
            )
            .await?;

        Ok(Fetched {
            data: fetched.data.into_iter().map(SearchLocation::from).collect(),
            quota_left: fetched.quota_left,
        })
    }

    async fn request<W: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> FetchOutcome<W> {
        let response = req.send().await?;

        let quota_left = response
            .headers()
            .get(QUOTA_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let wire: WireApiError = serde_json::from_str(&body)?;
            tracing::warn!(code = wire.error.code, "WeatherAPI returned an error");
            return Err(WeatherError::Api {
                message: wire.error.message,
                code: wire.error.code,
            });
        }

        let data = serde_json::from_str(&body)?;
        Ok(Fetched { data, quota_left })
    }
}
