//! Human-readable summary printed by the CLI.

use std::fmt;

use crate::{
    clock::format_local_time,
    config::Units,
    error::Result,
    icons::icon_emoji,
    model::{WeatherRequest, WeatherSnapshot},
    provider::WeatherProvider,
};

pub const TITLE: &str = "Pirate Weather";

/// A snapshot paired with the unit preset it was requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub snapshot: WeatherSnapshot,
    pub units: Units,
}

impl Report {
    pub fn new(snapshot: WeatherSnapshot, units: Units) -> Self {
        Self { snapshot, units }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let WeatherSnapshot { location, timezone, currently, today } = &self.snapshot;
        let temp_unit = self.units.temperature_unit();
        let wind_unit = self.units.wind_speed_unit();

        writeln!(f, "{TITLE}")?;
        writeln!(f, "📍 {location}")?;
        writeln!(f, "{} {}", icon_emoji(&currently.icon, today.moon_phase), currently.summary)?;
        writeln!(f, "🌅 Sunrise:        {}", format_local_time(today.sunrise_time, timezone))?;
        writeln!(f, "🌇 Sunset:         {}", format_local_time(today.sunset_time, timezone))?;
        writeln!(f, "🌡️ Temperature:    {:.1}{temp_unit}", currently.temperature)?;
        writeln!(f, "🌡️ Feels Like:     {:.1}{temp_unit}", currently.apparent_temperature)?;
        writeln!(f, "☔️ Precip Chance:  {:.0}%", currently.precip_probability * 100.0)?;
        writeln!(f, "💧 Humidity:       {:.0}%", currently.humidity * 100.0)?;
        writeln!(f, "💨 Wind Speed:     {:.1} {wind_unit}", currently.wind_speed)
    }
}

/// Fetch the forecast for `request` and wrap it for display.
pub async fn current_report(
    provider: &dyn WeatherProvider,
    request: &WeatherRequest,
) -> Result<Report> {
    let snapshot = provider.get_weather(request).await?;
    Ok(Report::new(snapshot, request.units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::WeatherError,
        model::{Currently, DailySummary, Location},
    };
    use async_trait::async_trait;
    use reqwest::StatusCode;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location { latitude: 40.7128, longitude: -74.006 },
            timezone: "UTC".into(),
            currently: Currently {
                icon: "clear-day".into(),
                summary: "Clear".into(),
                time: 1_700_000_000,
                temperature: 72.3,
                apparent_temperature: 70.06,
                precip_probability: 0.1,
                wind_speed: 5.44,
                humidity: 0.55,
            },
            today: DailySummary {
                moon_phase: 0.55,
                // 06:05 and 22:13:20 UTC
                sunrise_time: 1_699_941_900,
                sunset_time: 1_700_000_000,
            },
        }
    }

    #[derive(Debug)]
    struct Canned(Option<WeatherSnapshot>);

    #[async_trait]
    impl WeatherProvider for Canned {
        async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherSnapshot> {
            match &self.0 {
                Some(snapshot) => {
                    Ok(WeatherSnapshot { location: request.location, ..snapshot.clone() })
                }
                None => Err(WeatherError::Status {
                    code: StatusCode::UNAUTHORIZED,
                    status: "401 Unauthorized".into(),
                    body: r#"{"message":"Invalid API key"}"#.into(),
                }),
            }
        }
    }

    #[test]
    fn renders_us_report() {
        let out = Report::new(snapshot(), Units::Us).to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            [
                "Pirate Weather",
                "📍 40.712800,-74.006000",
                "☀️ Clear",
                "🌅 Sunrise:        6:05 AM",
                "🌇 Sunset:         10:13 PM",
                "🌡️ Temperature:    72.3°F",
                "🌡️ Feels Like:     70.1°F",
                "☔️ Precip Chance:  10%",
                "💧 Humidity:       55%",
                "💨 Wind Speed:     5.4 mph",
            ]
        );
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn metric_presets_change_suffixes() {
        let si = Report::new(snapshot(), Units::Si).to_string();
        assert!(si.contains("🌡️ Temperature:    72.3°C"));
        assert!(si.contains("💨 Wind Speed:     5.4 m/s"));

        for units in [Units::Ca, Units::Uk] {
            let out = Report::new(snapshot(), units).to_string();
            assert!(out.contains("°C"));
            assert!(out.contains("💨 Wind Speed:     5.4 km/h"));
        }
    }

    #[test]
    fn clear_night_shows_moon_and_bad_zone_shows_na() {
        let mut snap = snapshot();
        snap.currently.icon = "clear-night".into();
        snap.timezone = "Not/ARealZone".into();

        let out = Report::new(snap, Units::Us).to_string();

        assert!(out.contains("🌕 Clear"));
        assert!(out.contains("🌅 Sunrise:        N/A"));
        assert!(out.contains("🌇 Sunset:         N/A"));
    }

    #[test]
    fn missing_zone_renders_utc() {
        let mut snap = snapshot();
        snap.timezone = String::new();

        let out = Report::new(snap, Units::Us).to_string();

        assert!(out.contains("🌅 Sunrise:        6:05 AM"));
        assert!(out.contains("🌇 Sunset:         10:13 PM"));
    }

    #[test]
    fn unknown_icon_falls_back() {
        let mut snap = snapshot();
        snap.currently.icon = "meteor-shower".into();

        let out = Report::new(snap, Units::Us).to_string();
        assert!(out.contains("🏴‍☠️ Clear"));
    }

    #[tokio::test]
    async fn current_report_echoes_request() {
        let request = WeatherRequest {
            location: Location { latitude: 51.5, longitude: -0.12 },
            units: Units::Uk,
        };

        let report = current_report(&Canned(Some(snapshot())), &request).await.unwrap();

        assert_eq!(report.units, Units::Uk);
        assert_eq!(report.snapshot.location, request.location);
        assert!(report.to_string().contains("📍 51.500000,-0.120000"));
    }

    #[tokio::test]
    async fn current_report_propagates_provider_error() {
        let request = WeatherRequest {
            location: Location { latitude: 0.0, longitude: 0.0 },
            units: Units::Us,
        };

        let err = current_report(&Canned(None), &request).await.unwrap_err();
        assert!(err.to_string().contains("401 Unauthorized"));
        assert!(err.to_string().contains("Invalid API key"));
    }
}
