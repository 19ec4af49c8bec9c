//! WeatherAPI.com client for Brisa.
//!
//! The wire JSON is deserialized into private mirror structs and converted
//! once, at this boundary, into the typed records the rest of the
//! application consumes. A schema violation anywhere in a payload is
//! reported as a single [`WeatherError::MalformedResponse`].

pub mod client;
pub mod error;
pub mod records;

pub use client::{FetchOutcome, Fetched, WeatherClient, DEFAULT_BASE_URL};
pub use error::WeatherError;
pub use records::{
    AirQuality, Astronomy, Condition, CurrentWeather, Distance, Forecast, ForecastDay,
    ForecastHour, Height, Location, Pressure, SearchLocation, Speed, Temperature, WeatherReport,
};
