use std::fmt;

use serde::Deserialize;

use crate::config::{Config, Units};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRequest {
    pub location: Location,
    pub units: Units,
}

impl From<&Config> for WeatherRequest {
    fn from(config: &Config) -> Self {
        Self { location: config.location, units: config.units }
    }
}

/// Conditions right now. Missing scalar fields decode as zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currently {
    pub icon: String,
    pub summary: String,
    pub time: i64,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub precip_probability: f64,
    pub wind_speed: f64,
    pub humidity: f64,
}

/// Today's entry from the daily block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailySummary {
    pub moon_phase: f64,
    pub sunrise_time: i64,
    pub sunset_time: i64,
}

/// Everything one run needs to print its report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Echo of the requested coordinates.
    pub location: Location,
    pub timezone: String,
    pub currently: Currently,
    pub today: DailySummary,
}
