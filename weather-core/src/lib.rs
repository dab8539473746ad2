//! Core library for the `pirate-weather` CLI.
//!
//! This crate defines:
//! - Configuration resolution from flags and environment
//! - The Pirate Weather forecast provider
//! - Emoji, moon phase and local time mapping
//! - The printed report
//!
//! It is used by `pirate-weather`, but can also be reused by other binaries.

pub mod clock;
pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod provider;
pub mod report;

pub use config::{Config, Overrides, Units};
pub use error::WeatherError;
pub use model::{Location, WeatherRequest, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use report::{Report, current_report};
