use std::{convert::TryFrom, fmt};

use crate::{
    error::{Result, WeatherError},
    model::Location,
};

pub const API_KEY_VAR: &str = "PIRATE_WEATHER_API_KEY";
pub const LAT_VAR: &str = "PIRATE_WEATHER_LAT";
pub const LON_VAR: &str = "PIRATE_WEATHER_LON";
pub const UNITS_VAR: &str = "PIRATE_WEATHER_UNITS";

/// New York City.
pub const DEFAULT_LOCATION: Location = Location { latitude: 40.7128, longitude: -74.0060 };
pub const DEFAULT_UNITS: Units = Units::Us;

/// Unit preset understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    Us,
    Si,
    Ca,
    Uk,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Us => "us",
            Units::Si => "si",
            Units::Ca => "ca",
            Units::Uk => "uk",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Us, Units::Si, Units::Ca, Units::Uk]
    }

    /// "us, si, ca, uk"
    pub fn joined() -> String {
        Units::all().iter().map(Units::as_str).collect::<Vec<_>>().join(", ")
    }

    pub fn temperature_unit(&self) -> &'static str {
        match self {
            Units::Us => "°F",
            Units::Si | Units::Ca | Units::Uk => "°C",
        }
    }

    pub fn wind_speed_unit(&self) -> &'static str {
        match self {
            Units::Us => "mph",
            Units::Si => "m/s",
            Units::Ca | Units::Uk => "km/h",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = WeatherError;

    /// Exact, case-sensitive match against the provider's preset names.
    fn try_from(value: &str) -> Result<Self> {
        Units::all()
            .iter()
            .copied()
            .find(|units| units.as_str() == value)
            .ok_or_else(|| WeatherError::InvalidUnits(value.to_string()))
    }
}

/// Values given on the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub units: Option<String>,
}

/// Fully resolved settings for one lookup.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub location: Location,
    pub units: Units,
    pub api_key: String,
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("location", &self.location)
            .field("units", &self.units)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Resolve against the process environment.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    /// Resolve using `env` to look variables up. Empty values count as unset.
    ///
    /// The API key is checked before the units, and both are checked before
    /// anything touches the network.
    pub fn resolve<F>(overrides: Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).filter(|value| !value.is_empty());

        let latitude = overrides.latitude.unwrap_or_else(|| {
            float_or_default(LAT_VAR, lookup(LAT_VAR), DEFAULT_LOCATION.latitude)
        });
        let longitude = overrides.longitude.unwrap_or_else(|| {
            float_or_default(LON_VAR, lookup(LON_VAR), DEFAULT_LOCATION.longitude)
        });
        let units = overrides
            .units
            .or_else(|| lookup(UNITS_VAR))
            .unwrap_or_else(|| DEFAULT_UNITS.as_str().to_string());

        let api_key = lookup(API_KEY_VAR).ok_or(WeatherError::MissingApiKey)?;
        let units = Units::try_from(units.as_str())?;

        Ok(Config { location: Location { latitude, longitude }, units, api_key })
    }
}

/// Unparseable input falls back to the default without surfacing an error.
fn float_or_default(name: &str, raw: Option<String>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(var = name, value = %raw, error = %err, "ignoring bad coordinate");
            default
        }
    }
}
