use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Soil moisture estimate derived from humidity and cloud cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoistureLevel {
    High,
    Medium,
    Low,
}

impl MoistureLevel {
    /// Estimate soil moisture from humidity (%) and cloudiness (%)
    pub fn from_conditions(humidity: u8, cloudiness: u8) -> Self {
        let moisture_level = (humidity as f64 + cloudiness as f64) / 2.0;
        if moisture_level > 70.0 {
            Self::High
        } else if moisture_level > 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Irrigation recommendation derived from temperature, humidity and cloud cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationAdvice {
    HighNeed,
    Moderate,
    Reduce,
    Normal,
}

impl IrrigationAdvice {
    /// Derive irrigation advice from temperature (°C), humidity (%) and cloudiness (%)
    pub fn from_conditions(temp: f64, humidity: u8, cloudiness: u8) -> Self {
        if temp > 35.0 && humidity < 40 {
            Self::HighNeed
        } else if temp > 30.0 && humidity < 50 && cloudiness < 30 {
            Self::Moderate
        } else if cloudiness > 70 {
            Self::Reduce
        } else {
            Self::Normal
        }
    }

    /// Get the advisory text shown to the farmer
    pub fn advice(&self) -> &'static str {
        match self {
            Self::HighNeed => "High irrigation needed due to hot and dry conditions",
            Self::Moderate => "Moderate irrigation recommended",
            Self::Reduce => "Reduce irrigation - cloudy conditions expected",
            Self::Normal => "Normal irrigation schedule",
        }
    }
}

/// Pest development risk derived from temperature and humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PestRisk {
    High,
    Medium,
    Low,
}

impl PestRisk {
    /// Derive pest risk from temperature (°C) and humidity (%)
    pub fn from_conditions(temp: f64, humidity: u8) -> Self {
        if temp > 25.0 && temp < 35.0 && humidity > 60 {
            Self::High
        } else if temp > 20.0 && humidity > 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get the advisory text shown to the farmer
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::High => "High - Ideal conditions for pest development",
            Self::Medium => "Medium - Monitor crops regularly",
            Self::Low => "Low - Conditions not favorable for pests",
        }
    }
}

/// Field work suitability derived from the weather condition and wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWorkSuitability {
    NotSuitable,
    Limited,
    Suitable,
}

impl FieldWorkSuitability {
    /// Derive suitability from the condition group (e.g. "Rain") and wind speed (m/s)
    pub fn from_conditions(condition: &str, wind_speed: f64) -> Self {
        let condition = condition.to_lowercase();
        if condition.contains("rain") || condition.contains("storm") {
            Self::NotSuitable
        } else if wind_speed > 10.0 {
            Self::Limited
        } else {
            Self::Suitable
        }
    }

    /// Get the advisory text shown to the farmer
    pub fn description(&self) -> &'static str {
        match self {
            Self::NotSuitable => "Not suitable - Weather conditions unsafe",
            Self::Limited => "Limited - High winds may affect spraying",
            Self::Suitable => "Suitable - Good conditions for field work",
        }
    }
}

/// Farming-specific insights derived from current conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmingInsights {
    pub soil_moisture: MoistureLevel,
    pub irrigation: IrrigationAdvice,
    pub pest_risk: PestRisk,
    pub field_work: FieldWorkSuitability,
}

impl FarmingInsights {
    /// Derive all insights from raw conditions
    pub fn derive(
        temp: f64,
        humidity: u8,
        cloudiness: u8,
        condition: &str,
        wind_speed: f64,
    ) -> Self {
        Self {
            soil_moisture: MoistureLevel::from_conditions(humidity, cloudiness),
            irrigation: IrrigationAdvice::from_conditions(temp, humidity, cloudiness),
            pest_risk: PestRisk::from_conditions(temp, humidity),
            field_work: FieldWorkSuitability::from_conditions(condition, wind_speed),
        }
    }
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Resolved location of a weather report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
}

/// Current weather conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub wind_direction: u16,
    pub visibility_km: f64,
    pub description: String,
    pub icon: String,
    pub cloudiness: u8,
}

/// Complete weather report bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    pub farming: FarmingInsights,
    pub fetched_at: DateTime<Utc>,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather API key not configured")]
    MissingApiKey,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API error: {status}")]
    Api { status: u16 },
    #[error("Parse error: {0}")]
    Parse(String),
}
