use reqwest::StatusCode;
use thiserror::Error;

use crate::config::{API_KEY_VAR, Units};

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

/// Every way a lookup can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please set {} environment variable", API_KEY_VAR)]
    MissingApiKey,

    #[error("Invalid units '{}'. Must be one of: {}", .0, Units::joined())]
    InvalidUnits(String),

    #[error("Error making request")]
    Transport(#[source] reqwest::Error),

    /// Non-200 response. `status` is the status line as received and the body
    /// is kept verbatim, providers put the useful part of their error payload
    /// there.
    #[error("API returned error: {status}\n{body}")]
    Status { code: StatusCode, status: String, body: String },

    #[error("Error decoding response")]
    Decode(#[source] serde_json::Error),

    #[error("Error decoding response: daily forecast contained no entries")]
    MissingDailySummary,
}

impl WeatherError {
    /// True for errors detected before any request is made.
    pub fn is_config(&self) -> bool {
        matches!(self, WeatherError::MissingApiKey | WeatherError::InvalidUnits(_))
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        WeatherError::Transport(err.without_url())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Decode(err)
    }
}
