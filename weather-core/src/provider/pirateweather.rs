use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::{Result, WeatherError},
    model::{Currently, DailySummary, Location, WeatherRequest, WeatherSnapshot},
};

use super::WeatherProvider;

pub const BASE_URL: &str = "https://api.pirateweather.net";

/// Blocks the response does not need to carry.
const EXCLUDE: &str = "minutely,hourly,alerts";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct PirateWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for PirateWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PirateWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PirateWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { api_key, base_url: BASE_URL.to_string(), http })
    }

    /// Point at another host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn forecast_url(&self, request: &WeatherRequest) -> String {
        format!(
            "{}/forecast/{}/{}?units={}&exclude={}",
            self.base_url, self.api_key, request.location, request.units, EXCLUDE
        )
    }

    async fn fetch_forecast(&self, request: &WeatherRequest) -> Result<WeatherSnapshot> {
        tracing::debug!(
            base_url = %self.base_url,
            location = %request.location,
            units = %request.units,
            "requesting forecast"
        );

        let res = self.http.get(self.forecast_url(request)).send().await?;

        let status = res.status();
        // Only present when the server sent a non-canonical reason.
        let reason = res
            .extensions()
            .get::<ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned());
        // Reading to the end releases the connection on every path below.
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "forecast response received");

        parse_forecast(status, reason.as_deref(), &body, request.location)
    }
}

#[async_trait]
impl WeatherProvider for PirateWeatherProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherSnapshot> {
        self.fetch_forecast(request).await
    }
}

#[derive(Debug, Deserialize)]
struct PwDaily {
    data: Vec<DailySummary>,
}

#[derive(Debug, Deserialize)]
struct PwForecastResponse {
    // Missing zone only costs the sunrise/sunset lines.
    #[serde(default)]
    timezone: String,
    currently: Currently,
    daily: PwDaily,
}

/// Status line the way the server sent it, e.g. `520 Origin Error`.
///
/// `reason` is the wire reason phrase when it differs from the canonical one.
pub fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    match reason.or(status.canonical_reason()) {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

/// Turn a raw status + body into a snapshot for `location`.
pub fn parse_forecast(
    status: StatusCode,
    reason: Option<&str>,
    body: &str,
    location: Location,
) -> Result<WeatherSnapshot> {
    if status != StatusCode::OK {
        return Err(WeatherError::Status {
            code: status,
            status: status_line(status, reason),
            body: body.to_string(),
        });
    }

    let parsed: PwForecastResponse = serde_json::from_str(body)?;

    let today = parsed.daily.data.into_iter().next().ok_or(WeatherError::MissingDailySummary)?;

    Ok(WeatherSnapshot { location, timezone: parsed.timezone, currently: parsed.currently, today })
}
