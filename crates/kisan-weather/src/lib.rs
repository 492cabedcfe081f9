//! Weather service for Kisan
//!
//! Fetches current conditions from the OpenWeather API and derives
//! farming-specific insights (soil moisture, irrigation advice, pest risk,
//! field work suitability).

pub mod provider;
pub mod types;

pub use provider::{WeatherProvider, WeatherQuery, DEFAULT_CITY};
pub use types::*;
