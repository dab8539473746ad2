use clap::Parser;
use pirate_weather_core::{
    Config, Overrides, WeatherRequest, current_report, provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "pirate-weather",
    version,
    about = "Current weather from Pirate Weather",
    after_help = "The API key is read from PIRATE_WEATHER_API_KEY."
)]
pub struct Cli {
    /// Latitude (can also use PIRATE_WEATHER_LAT environment variable).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude (can also use PIRATE_WEATHER_LON environment variable).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Units system: us, si, ca or uk (can also use PIRATE_WEATHER_UNITS environment variable).
    #[arg(long)]
    pub units: Option<String>,

    /// Log requests and responses to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides { latitude: self.lat, longitude: self.lon, units: self.units.clone() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env(self.overrides())?;
        tracing::debug!(?config, "resolved configuration");

        let provider = provider_from_config(&config)?;
        let report = current_report(provider.as_ref(), &WeatherRequest::from(&config)).await?;

        print!("{report}");
        Ok(())
    }
}
