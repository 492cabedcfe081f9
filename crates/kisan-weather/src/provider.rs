//! OpenWeather current-weather client with farming-oriented transformation.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{
    Coordinates, CurrentConditions, FarmingInsights, LocationInfo, WeatherError, WeatherReport,
};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// City queried when the caller provides no location. Chosen for the
/// app's primary farming region.
pub const DEFAULT_CITY: &str = "Ludhiana,IN";

/// What to fetch weather for.
#[derive(Debug, Clone)]
pub enum WeatherQuery {
    Coordinates { lat: f64, lon: f64 },
    City(String),
}

impl Default for WeatherQuery {
    fn default() -> Self {
        Self::City(DEFAULT_CITY.to_string())
    }
}

/// Raw OpenWeather response shapes (only the fields we consume).
#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    sys: OwmSys,
    coord: OwmCoord,
    main: OwmMain,
    wind: OwmWind,
    weather: Vec<OwmWeather>,
    clouds: OwmClouds,
    visibility: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: u8,
}

/// Weather client over the OpenWeather current-weather API.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(api_key: Option<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: OPENWEATHER_URL.to_string(),
        })
    }

    /// Point the provider at a different endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current weather and derive farming insights.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let mut params: Vec<(&str, String)> = vec![
            ("appid", api_key.to_string()),
            ("units", "metric".to_string()),
        ];
        match query {
            WeatherQuery::Coordinates { lat, lon } => {
                params.push(("lat", lat.to_string()));
                params.push(("lon", lon.to_string()));
            }
            WeatherQuery::City(city) => {
                params.push(("q", city.clone()));
            }
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Weather API returned status {}", status);
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let raw: OwmResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Self::transform(raw)
    }

    /// Transform the raw API response into the farming report.
    fn transform(raw: OwmResponse) -> Result<WeatherReport, WeatherError> {
        let weather = raw
            .weather
            .first()
            .ok_or_else(|| WeatherError::Parse("response has no weather entry".to_string()))?;

        let farming = FarmingInsights::derive(
            raw.main.temp,
            raw.main.humidity,
            raw.clouds.all,
            &weather.main,
            raw.wind.speed,
        );

        Ok(WeatherReport {
            location: LocationInfo {
                name: raw.name,
                country: raw.sys.country.unwrap_or_default(),
                coordinates: Coordinates {
                    lat: raw.coord.lat,
                    lon: raw.coord.lon,
                },
            },
            current: CurrentConditions {
                temperature: raw.main.temp.round() as i32,
                feels_like: raw.main.feels_like.round() as i32,
                humidity: raw.main.humidity,
                pressure: raw.main.pressure,
                wind_speed: raw.wind.speed,
                wind_direction: raw.wind.deg,
                // Meters to km; the API caps visibility at 10 km
                visibility_km: raw.visibility.unwrap_or(10_000) as f64 / 1000.0,
                description: weather.description.clone(),
                icon: weather.icon.clone(),
                cloudiness: raw.clouds.all,
            },
            farming,
            fetched_at: Utc::now(),
        })
    }
}
