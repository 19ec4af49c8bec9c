use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Distance (and wind speed) unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

/// Pressure unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    #[default]
    Mbar,
    Inhg,
}

/// Precipitation height unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Mm,
    In,
}

/// A location the user has registered, identified by its WeatherAPI id.
///
/// Forecast queries use the `id:<ident>` query form so renamed places keep
/// resolving to the same spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLocation {
    pub name: String,
    pub ident: u64,
}

/// User preferences, persisted as `settings.json`.
///
/// Every field defaults individually so documents written by older
/// versions still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locations: Vec<StoredLocation>,
    pub language: String,
    pub temperature: TemperatureUnit,
    pub distance: DistanceUnit,
    pub pressure: PressureUnit,
    pub height: HeightUnit,
    pub round_temp_values: bool,
    pub show_quota: bool,
    pub time_24_hour: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            language: "en".to_string(),
            temperature: TemperatureUnit::Celsius,
            distance: DistanceUnit::Km,
            pressure: PressureUnit::Mbar,
            height: HeightUnit::Mm,
            round_temp_values: true,
            show_quota: false,
            time_24_hour: false,
        }
    }
}

/// API credentials, persisted as `secrets.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Secrets {
    /// WeatherAPI.com key.
    pub weatherapi: String,
}

impl Secrets {
    /// Whether a usable key has been entered.
    pub fn has_api_key(&self) -> bool {
        !self.weatherapi.trim().is_empty()
    }
}
