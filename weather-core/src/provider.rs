use crate::{
    Config, WeatherRequest, WeatherSnapshot, error::Result,
    provider::pirateweather::PirateWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod pirateweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions plus today's summary for one location.
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherSnapshot>;
}

/// Construct the provider for a resolved config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>> {
    let provider = PirateWeatherProvider::new(config.api_key.clone())?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Units};

    #[test]
    fn provider_from_config_builds_pirate_weather() {
        let cfg = Config {
            location: Location { latitude: 1.0, longitude: 2.0 },
            units: Units::Si,
            api_key: "KEY".into(),
        };

        let provider = provider_from_config(&cfg).expect("provider should build");
        let dbg = format!("{provider:?}");

        assert!(dbg.contains("PirateWeatherProvider"));
        assert!(!dbg.contains("KEY"));
    }
}
