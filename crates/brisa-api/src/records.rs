//! Typed records for the WeatherAPI forecast and search schemas.
//!
//! The `Wire*` structs mirror the upstream JSON field-for-field; the
//! public records rename and regroup those fields (`tz_id` becomes
//! `timezone_id`, `temp_c`/`temp_f` become a [`Temperature`] pair, and so
//! on). Conversion is infallible once a payload has deserialized, so any
//! schema problem surfaces exactly once, as a serde error.

use serde::Deserialize;

/// A temperature in both scales, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub celsius: f64,
    pub fahrenheit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub kilometers: f64,
    pub miles: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    pub kilometers_per_hour: f64,
    pub miles_per_hour: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pressure {
    pub millibars: f64,
    pub inches_hg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Height {
    pub millimeters: f64,
    pub inches: f64,
}

/// Where the forecast applies, renamed from the wire `location` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_id: String,
    pub localtime_epoch: i64,
    pub localtime_formatted: String,
}

impl Location {
    /// "Name, Region, Country" with empty components skipped.
    pub fn full_name(&self) -> String {
        join_name_parts(&self.name, &self.region, &self.country)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: u16,
}

/// Pollutant concentrations (µg/m³) plus the two standardized indices.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQuality {
    pub co: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub us_epa_index: u8,
    pub gb_defra_index: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub last_updated_epoch: i64,
    pub last_updated_formatted: String,
    pub temperature: Temperature,
    pub feels_like: Temperature,
    pub windchill: Temperature,
    pub heat_index: Temperature,
    pub dew_point: Temperature,
    pub visibility: Distance,
    pub condition: Condition,
    pub wind_speed: Speed,
    pub wind_degree: u16,
    pub wind_direction: String,
    pub pressure: Pressure,
    pub precipitation: Height,
    pub humidity: u8,
    pub cloud_cover: u8,
    pub is_day: bool,
    pub uv_index: f64,
    pub gust_speed: Speed,
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub max_temperature: Temperature,
    pub min_temperature: Temperature,
    pub avg_temperature: Temperature,
    pub max_wind_speed: Speed,
    pub total_precipitation: Height,
    pub total_snowfall_cm: f64,
    pub avg_visibility: Distance,
    pub avg_humidity: f64,
    pub condition: Condition,
    pub uv_index: f64,
    pub will_it_rain: bool,
    pub will_it_snow: bool,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastHour {
    pub time_epoch: i64,
    pub time_formatted: String,
    pub temperature: Temperature,
    pub condition: Condition,
    pub wind_speed: Speed,
    pub wind_degree: u16,
    pub wind_direction: String,
    pub pressure: Pressure,
    pub precipitation: Height,
    pub snowfall_cm: f64,
    pub humidity: u8,
    pub cloud_cover: u8,
    pub feels_like: Temperature,
    pub windchill: Temperature,
    pub heat_index: Temperature,
    pub dew_point: Temperature,
    pub will_it_rain: bool,
    pub will_it_snow: bool,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
    pub is_day: bool,
    pub visibility: Distance,
    pub gust_speed: Speed,
    pub uv_index: f64,
}

/// Sunrise/sunset and moon data for one day. The rise/set strings stay in
/// the upstream "hh:mm AM" form; the API reports "No moonrise" and similar
/// sentinels which the view maps to a localized not-applicable marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: u8,
    pub is_moon_up: bool,
    pub is_sun_up: bool,
}

/// Predicted conditions for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub date_epoch: i64,
    pub date_formatted: String,
    pub day: ForecastDay,
    pub astronomy: Astronomy,
    pub hours: Vec<ForecastHour>,
}

/// The full forecast response: location, current conditions, and one
/// [`Forecast`] per requested day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentWeather,
    pub forecasts: Vec<Forecast>,
}

/// One autocomplete hit from the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLocation {
    pub ident: u64,
    pub name: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SearchLocation {
    pub fn full_name(&self) -> String {
        join_name_parts(&self.name, &self.region, &self.country)
    }
}

fn join_name_parts(name: &str, region: &str, country: &str) -> String {
    [name, region, country]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Wire mirrors

#[derive(Debug, Deserialize)]
pub(crate) struct WireReport {
    location: WireLocation,
    current: WireCurrent,
    forecast: WireForecastBlock,
}

#[derive(Debug, Deserialize)]
struct WireForecastBlock {
    forecastday: Vec<WireForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    name: String,
    region: String,
    country: String,
    lat: f64,
    lon: f64,
    tz_id: String,
    localtime_epoch: i64,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WireCondition {
    text: String,
    icon: String,
    code: u16,
}

#[derive(Debug, Deserialize)]
struct WireAirQuality {
    co: f64,
    o3: f64,
    no2: f64,
    so2: f64,
    pm2_5: f64,
    pm10: f64,
    #[serde(rename = "us-epa-index")]
    us_epa_index: u8,
    #[serde(rename = "gb-defra-index")]
    gb_defra_index: u8,
}

#[derive(Debug, Deserialize)]
struct WireCurrent {
    last_updated: String,
    last_updated_epoch: i64,
    temp_c: f64,
    temp_f: f64,
    feelslike_c: f64,
    feelslike_f: f64,
    windchill_c: f64,
    windchill_f: f64,
    heatindex_c: f64,
    heatindex_f: f64,
    dewpoint_c: f64,
    dewpoint_f: f64,
    vis_km: f64,
    vis_miles: f64,
    condition: WireCondition,
    wind_mph: f64,
    wind_kph: f64,
    wind_degree: u16,
    wind_dir: String,
    pressure_mb: f64,
    pressure_in: f64,
    precip_mm: f64,
    precip_in: f64,
    humidity: u8,
    cloud: u8,
    is_day: u8,
    uv: f64,
    gust_mph: f64,
    gust_kph: f64,
    air_quality: WireAirQuality,
}

#[derive(Debug, Deserialize)]
struct WireForecastDay {
    date: String,
    date_epoch: i64,
    day: WireDay,
    astro: WireAstro,
    hour: Vec<WireHour>,
}

#[derive(Debug, Deserialize)]
struct WireDay {
    maxtemp_c: f64,
    maxtemp_f: f64,
    mintemp_c: f64,
    mintemp_f: f64,
    avgtemp_c: f64,
    avgtemp_f: f64,
    maxwind_mph: f64,
    maxwind_kph: f64,
    totalprecip_mm: f64,
    totalprecip_in: f64,
    totalsnow_cm: f64,
    avgvis_km: f64,
    avgvis_miles: f64,
    avghumidity: f64,
    condition: WireCondition,
    uv: f64,
    daily_will_it_rain: u8,
    daily_will_it_snow: u8,
    daily_chance_of_rain: u8,
    daily_chance_of_snow: u8,
}

#[derive(Debug, Deserialize)]
struct WireAstro {
    sunrise: String,
    sunset: String,
    moonrise: String,
    moonset: String,
    moon_phase: String,
    moon_illumination: u8,
    is_moon_up: u8,
    is_sun_up: u8,
}

#[derive(Debug, Deserialize)]
struct WireHour {
    time_epoch: i64,
    time: String,
    temp_c: f64,
    temp_f: f64,
    condition: WireCondition,
    wind_mph: f64,
    wind_kph: f64,
    wind_degree: u16,
    wind_dir: String,
    pressure_mb: f64,
    pressure_in: f64,
    precip_mm: f64,
    precip_in: f64,
    snow_cm: f64,
    humidity: u8,
    cloud: u8,
    feelslike_c: f64,
    feelslike_f: f64,
    windchill_c: f64,
    windchill_f: f64,
    heatindex_c: f64,
    heatindex_f: f64,
    dewpoint_c: f64,
    dewpoint_f: f64,
    will_it_rain: u8,
    will_it_snow: u8,
    chance_of_rain: u8,
    chance_of_snow: u8,
    is_day: u8,
    vis_km: f64,
    vis_miles: f64,
    gust_mph: f64,
    gust_kph: f64,
    uv: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchLocation {
    id: u64,
    name: String,
    region: String,
    country: String,
    lat: f64,
    lon: f64,
}

// ---------------------------------------------------------------------------
// Wire -> record conversions

impl From<WireReport> for WeatherReport {
    fn from(wire: WireReport) -> Self {
        Self {
            location: wire.location.into(),
            current: wire.current.into(),
            forecasts: wire
                .forecast
                .forecastday
                .into_iter()
                .map(Forecast::from)
                .collect(),
        }
    }
}

impl From<WireLocation> for Location {
    fn from(wire: WireLocation) -> Self {
        Self {
            name: wire.name,
            region: wire.region,
            country: wire.country,
            latitude: wire.lat,
            longitude: wire.lon,
            timezone_id: wire.tz_id,
            localtime_epoch: wire.localtime_epoch,
            localtime_formatted: wire.localtime,
        }
    }
}

impl From<WireCondition> for Condition {
    fn from(wire: WireCondition) -> Self {
        Self {
            text: wire.text,
            icon: wire.icon,
            code: wire.code,
        }
    }
}

impl From<WireAirQuality> for AirQuality {
    fn from(wire: WireAirQuality) -> Self {
        Self {
            co: wire.co,
            o3: wire.o3,
            no2: wire.no2,
            so2: wire.so2,
            pm2_5: wire.pm2_5,
            pm10: wire.pm10,
            us_epa_index: wire.us_epa_index,
            gb_defra_index: wire.gb_defra_index,
        }
    }
}

impl From<WireCurrent> for CurrentWeather {
    fn from(wire: WireCurrent) -> Self {
        Self {
            last_updated_epoch: wire.last_updated_epoch,
            last_updated_formatted: wire.last_updated,
            temperature: Temperature {
                celsius: wire.temp_c,
                fahrenheit: wire.temp_f,
            },
            feels_like: Temperature {
                celsius: wire.feelslike_c,
                fahrenheit: wire.feelslike_f,
            },
            windchill: Temperature {
                celsius: wire.windchill_c,
                fahrenheit: wire.windchill_f,
            },
            heat_index: Temperature {
                celsius: wire.heatindex_c,
                fahrenheit: wire.heatindex_f,
            },
            dew_point: Temperature {
                celsius: wire.dewpoint_c,
                fahrenheit: wire.dewpoint_f,
            },
            visibility: Distance {
                kilometers: wire.vis_km,
                miles: wire.vis_miles,
            },
            condition: wire.condition.into(),
            wind_speed: Speed {
                kilometers_per_hour: wire.wind_kph,
                miles_per_hour: wire.wind_mph,
            },
            wind_degree: wire.wind_degree,
            wind_direction: wire.wind_dir,
            pressure: Pressure {
                millibars: wire.pressure_mb,
                inches_hg: wire.pressure_in,
            },
            precipitation: Height {
                millimeters: wire.precip_mm,
                inches: wire.precip_in,
            },
            humidity: wire.humidity,
            cloud_cover: wire.cloud,
            is_day: wire.is_day != 0,
            uv_index: wire.uv,
            gust_speed: Speed {
                kilometers_per_hour: wire.gust_kph,
                miles_per_hour: wire.gust_mph,
            },
            air_quality: wire.air_quality.into(),
        }
    }
}

impl From<WireForecastDay> for Forecast {
    fn from(wire: WireForecastDay) -> Self {
        Self {
            date_epoch: wire.date_epoch,
            date_formatted: wire.date,
            day: wire.day.into(),
            astronomy: wire.astro.into(),
            hours: wire.hour.into_iter().map(ForecastHour::from).collect(),
        }
    }
}

impl From<WireDay> for ForecastDay {
    fn from(wire: WireDay) -> Self {
        Self {
            max_temperature: Temperature {
                celsius: wire.maxtemp_c,
                fahrenheit: wire.maxtemp_f,
            },
            min_temperature: Temperature {
                celsius: wire.mintemp_c,
                fahrenheit: wire.mintemp_f,
            },
            avg_temperature: Temperature {
                celsius: wire.avgtemp_c,
                fahrenheit: wire.avgtemp_f,
            },
            max_wind_speed: Speed {
                kilometers_per_hour: wire.maxwind_kph,
                miles_per_hour: wire.maxwind_mph,
            },
            total_precipitation: Height {
                millimeters: wire.totalprecip_mm,
                inches: wire.totalprecip_in,
            },
            total_snowfall_cm: wire.totalsnow_cm,
            avg_visibility: Distance {
                kilometers: wire.avgvis_km,
                miles: wire.avgvis_miles,
            },
            avg_humidity: wire.avghumidity,
            condition: wire.condition.into(),
            uv_index: wire.uv,
            will_it_rain: wire.daily_will_it_rain != 0,
            will_it_snow: wire.daily_will_it_snow != 0,
            chance_of_rain: wire.daily_chance_of_rain,
            chance_of_snow: wire.daily_chance_of_snow,
        }
    }
}

impl From<WireAstro> for Astronomy {
    fn from(wire: WireAstro) -> Self {
        Self {
            sunrise: wire.sunrise,
            sunset: wire.sunset,
            moonrise: wire.moonrise,
            moonset: wire.moonset,
            moon_phase: wire.moon_phase,
            moon_illumination: wire.moon_illumination,
            is_moon_up: wire.is_moon_up != 0,
            is_sun_up: wire.is_sun_up != 0,
        }
    }
}

impl From<WireHour> for ForecastHour {
    fn from(wire: WireHour) -> Self {
        Self {
            time_epoch: wire.time_epoch,
            time_formatted: wire.time,
            temperature: Temperature {
                celsius: wire.temp_c,
                fahrenheit: wire.temp_f,
            },
            condition: wire.condition.into(),
            wind_speed: Speed {
                kilometers_per_hour: wire.wind_kph,
                miles_per_hour: wire.wind_mph,
            },
            wind_degree: wire.wind_degree,
            wind_direction: wire.wind_dir,
            pressure: Pressure {
                millibars: wire.pressure_mb,
                inches_hg: wire.pressure_in,
            },
            precipitation: Height {
                millimeters: wire.precip_mm,
                inches: wire.precip_in,
            },
            snowfall_cm: wire.snow_cm,
            humidity: wire.humidity,
            cloud_cover: wire.cloud,
            feels_like: Temperature {
                celsius: wire.feelslike_c,
                fahrenheit: wire.feelslike_f,
            },
            windchill: Temperature {
                celsius: wire.windchill_c,
                fahrenheit: wire.windchill_f,
            },
            heat_index: Temperature {
                celsius: wire.heatindex_c,
                fahrenheit: wire.heatindex_f,
            },
            dew_point: Temperature {
                celsius: wire.dewpoint_c,
                fahrenheit: wire.dewpoint_f,
            },
            will_it_rain: wire.will_it_rain != 0,
            will_it_snow: wire.will_it_snow != 0,
            chance_of_rain: wire.chance_of_rain,
            chance_of_snow: wire.chance_of_snow,
            is_day: wire.is_day != 0,
            visibility: Distance {
                kilometers: wire.vis_km,
                miles: wire.vis_miles,
            },
            gust_speed: Speed {
                kilometers_per_hour: wire.gust_kph,
                miles_per_hour: wire.gust_mph,
            },
            uv_index: wire.uv,
        }
    }
}

impl From<WireSearchLocation> for SearchLocation {
    fn from(wire: WireSearchLocation) -> Self {
        Self {
            ident: wire.id,
            name: wire.name,
            region: wire.region,
            country: wire.country,
            latitude: wire.lat,
            longitude: wire.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    const FORECAST_FIXTURE: &str = include_str!("../tests/fixtures/forecast.json");

    fn sample_report() -> WeatherReport {
        let wire: WireReport = serde_json::from_str(FORECAST_FIXTURE).unwrap();
        wire.into()
    }

    #[test]
    fn location_fields_are_renamed() {
        let report = sample_report();
        let location = &report.location;

        assert_eq!(location.name, "London");
        assert_eq!(location.timezone_id, "Europe/London");
        assert_eq!(location.latitude, 51.52);
        assert_eq!(location.longitude, -0.11);
        assert_eq!(location.localtime_epoch, 1756540800);
        assert_eq!(location.localtime_formatted, "2025-08-30 09:00");
        assert_eq!(
            location.full_name(),
            "London, City of London, Greater London, United Kingdom"
        );
    }

    #[test]
    fn full_name_skips_empty_components() {
        let location = SearchLocation {
            ident: 1,
            name: "Singapore".into(),
            region: String::new(),
            country: "Singapore".into(),
            latitude: 1.29,
            longitude: 103.86,
        };
        assert_eq!(location.full_name(), "Singapore, Singapore");
    }

    #[test]
    fn current_weather_preserves_numeric_fields() {
        let report = sample_report();
        let current = &report.current;

        assert_eq!(current.temperature.celsius, 16.3);
        assert_eq!(current.temperature.fahrenheit, 61.3);
        assert_eq!(current.feels_like.celsius, 16.3);
        assert_eq!(current.pressure.millibars, 1013.0);
        assert_eq!(current.pressure.inches_hg, 29.91);
        assert_eq!(current.precipitation.millimeters, 0.1);
        assert_eq!(current.visibility.kilometers, 10.0);
        assert_eq!(current.wind_speed.kilometers_per_hour, 14.4);
        assert_eq!(current.wind_degree, 230);
        assert_eq!(current.wind_direction, "SW");
        assert_eq!(current.humidity, 77);
        assert_eq!(current.cloud_cover, 25);
        assert!(current.is_day);
        assert_eq!(current.uv_index, 4.0);
        assert_eq!(current.condition.code, 1003);
    }

    #[test]
    fn air_quality_indices_are_renamed() {
        let report = sample_report();
        let aqi = &report.current.air_quality;

        assert_eq!(aqi.pm2_5, 5.8);
        assert_eq!(aqi.us_epa_index, 1);
        assert_eq!(aqi.gb_defra_index, 1);
    }

    #[test]
    fn forecast_day_maps_daily_flags_to_bools() {
        let report = sample_report();
        let forecast = &report.forecasts[0];

        assert_eq!(forecast.date_formatted, "2025-08-30");
        assert_eq!(forecast.day.max_temperature.celsius, 21.4);
        assert_eq!(forecast.day.total_snowfall_cm, 0.0);
        assert!(forecast.day.will_it_rain);
        assert!(!forecast.day.will_it_snow);
        assert_eq!(forecast.day.chance_of_rain, 89);
    }

    #[test]
    fn astronomy_flags_become_bools() {
        let report = sample_report();
        let astro = &report.forecasts[0].astronomy;

        assert_eq!(astro.sunrise, "06:11 AM");
        assert_eq!(astro.moon_phase, "First Quarter");
        assert_eq!(astro.moon_illumination, 45);
        assert!(!astro.is_moon_up);
        assert!(astro.is_sun_up);
    }

    #[test]
    fn hours_are_mapped_in_order() {
        let report = sample_report();
        let hours = &report.forecasts[0].hours;

        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].time_formatted, "2025-08-30 00:00");
        assert_eq!(hours[0].temperature.celsius, 14.9);
        assert!(!hours[0].is_day);
        assert_eq!(hours[1].snowfall_cm, 0.0);
        assert_eq!(hours[1].chance_of_rain, 62);
    }

    #[test]
    fn missing_key_is_one_typed_error() {
        let truncated = FORECAST_FIXTURE.replace("\"tz_id\": \"Europe/London\",", "");
        let result: Result<WireReport, _> = serde_json::from_str(&truncated);
        assert!(result.is_err());
    }
}
