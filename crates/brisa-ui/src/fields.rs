//! Lookup-key selection for bucketed weather values. Each function maps
//! a raw API value onto a localization key under the matching table.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("value {value} outside the {field} range")]
pub struct OutOfRangeError {
    pub field: &'static str,
    pub value: String,
}

impl OutOfRangeError {
    fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Buckets cloud cover percentage by tenths, METAR style.
pub fn cloud_cover_key(percent: u8) -> Result<&'static str, OutOfRangeError> {
    let key = match percent / 10 {
        0 => "weather.cloud_cover.clear",
        1..=3 => "weather.cloud_cover.few_clouds",
        4..=5 => "weather.cloud_cover.scattered_clouds",
        6..=9 => "weather.cloud_cover.broken_clouds",
        10 => "weather.cloud_cover.overcast",
        _ => return Err(OutOfRangeError::new("cloud cover", percent)),
    };
    Ok(key)
}

/// WHO UV index bands. Values above 11 are out of range.
pub fn uv_index_key(index: f64) -> Result<&'static str, OutOfRangeError> {
    let key = if (0.0..3.0).contains(&index) {
        "weather.uv_index.low"
    } else if (3.0..6.0).contains(&index) {
        "weather.uv_index.moderate"
    } else if (6.0..8.0).contains(&index) {
        "weather.uv_index.high"
    } else if (8.0..=10.0).contains(&index) {
        "weather.uv_index.very_high"
    } else if index > 10.0 && index <= 11.0 {
        "weather.uv_index.extreme"
    } else {
        return Err(OutOfRangeError::new("UV index", index));
    };
    Ok(key)
}

pub fn epa_index_key(index: u8) -> Result<&'static str, OutOfRangeError> {
    let key = match index {
        1 => "air_quality.epa.good",
        2 => "air_quality.epa.moderate",
        3 => "air_quality.epa.unhealthy_sensitive",
        4 => "air_quality.epa.unhealthy",
        5 => "air_quality.epa.very_unhealthy",
        6 => "air_quality.epa.hazardous",
        _ => return Err(OutOfRangeError::new("EPA index", index)),
    };
    Ok(key)
}

/// DEFRA PM2.5 bands: the localization key for the label plus the
/// 24-hour mean concentration range the band covers.
pub fn defra_band(index: u8) -> Result<(&'static str, &'static str), OutOfRangeError> {
    let band = match index {
        1 => ("air_quality.defra.low", "0-11 µg/m³"),
        2 => ("air_quality.defra.low", "12-23 µg/m³"),
        3 => ("air_quality.defra.low", "24-35 µg/m³"),
        4 => ("air_quality.defra.moderate", "36-41 µg/m³"),
        5 => ("air_quality.defra.moderate", "42-47 µg/m³"),
        6 => ("air_quality.defra.moderate", "48-53 µg/m³"),
        7 => ("air_quality.defra.high", "54-58 µg/m³"),
        8 => ("air_quality.defra.high", "59-64 µg/m³"),
        9 => ("air_quality.defra.high", "65-70 µg/m³"),
        10 => ("air_quality.defra.very_high", "71+ µg/m³"),
        _ => return Err(OutOfRangeError::new("DEFRA index", index)),
    };
    Ok(band)
}

/// Maps the API's compass abbreviation onto its spelled-out key.
pub fn compass_key(direction: &str) -> Option<&'static str> {
    let key = match direction {
        "N" => "point16.north",
        "NNE" => "point16.north_northeast",
        "NE" => "point16.northeast",
        "ENE" => "point16.east_northeast",
        "E" => "point16.east",
        "ESE" => "point16.east_southeast",
        "SE" => "point16.southeast",
        "SSE" => "point16.south_southeast",
        "S" => "point16.south",
        "SSW" => "point16.south_southwest",
        "SW" => "point16.southwest",
        "WSW" => "point16.west_southwest",
        "W" => "point16.west",
        "WNW" => "point16.west_northwest",
        "NW" => "point16.northwest",
        "NNW" => "point16.north_northwest",
        _ => return None,
    };
    Some(key)
}

/// Maps the API's English moon phase name onto its key.
pub fn moon_phase_key(phase: &str) -> Option<&'static str> {
    let key = match phase {
        "New Moon" => "astronomy.moon_phase.new_moon",
        "Waxing Crescent" => "astronomy.moon_phase.waxing_crescent",
        "First Quarter" => "astronomy.moon_phase.first_quarter",
        "Waxing Gibbous" => "astronomy.moon_phase.waxing_gibbous",
        "Full Moon" => "astronomy.moon_phase.full_moon",
        "Waning Gibbous" => "astronomy.moon_phase.waning_gibbous",
        "Last Quarter" => "astronomy.moon_phase.last_quarter",
        "Waning Crescent" => "astronomy.moon_phase.waning_crescent",
        _ => return None,
    };
    Some(key)
}

/// Every key the view layer resolves. Kept in one place so the
/// localization completeness test can walk all languages over it.
pub const VIEW_KEYS: &[&str] = &[
    "self.language",
    "app.yes",
    "app.no",
    "app.not_applicable",
    "app.manage_locations",
    "app.fetch_weather",
    "app.settings",
    "app.current_weather",
    "app.forecast",
    "app.powered_by",
    "app.quota_left",
    "app.fetch_error_title",
    "app.average",
    "app.creds_required",
    "app.creds_required_details",
    "app.enter_api_key",
    "app.confirm",
    "app.location_input_placeholder",
    "weather.feels_like",
    "weather.windchill",
    "weather.heat_index",
    "weather.dew_point",
    "weather.wind_speed",
    "weather.wind_gust",
    "weather.humidity",
    "weather.precipitation",
    "weather.pressure",
    "weather.visibility",
    "weather.cloud_cover.label",
    "weather.cloud_cover.clear",
    "weather.cloud_cover.few_clouds",
    "weather.cloud_cover.scattered_clouds",
    "weather.cloud_cover.broken_clouds",
    "weather.cloud_cover.overcast",
    "weather.uv_index.label",
    "weather.uv_index.low",
    "weather.uv_index.moderate",
    "weather.uv_index.high",
    "weather.uv_index.very_high",
    "weather.uv_index.extreme",
    "air_quality.label",
    "air_quality.co",
    "air_quality.o3",
    "air_quality.no2",
    "air_quality.so2",
    "air_quality.pm2_5",
    "air_quality.pm10",
    "air_quality.epa.label",
    "air_quality.epa.good",
    "air_quality.epa.moderate",
    "air_quality.epa.unhealthy_sensitive",
    "air_quality.epa.unhealthy",
    "air_quality.epa.very_unhealthy",
    "air_quality.epa.hazardous",
    "air_quality.defra.label",
    "air_quality.defra.low",
    "air_quality.defra.moderate",
    "air_quality.defra.high",
    "air_quality.defra.very_high",
    "astronomy.label",
    "astronomy.sunrise",
    "astronomy.sunset",
    "astronomy.moonrise",
    "astronomy.moonset",
    "astronomy.moon_illumination",
    "astronomy.moon_phase.label",
    "astronomy.moon_phase.new_moon",
    "astronomy.moon_phase.waxing_crescent",
    "astronomy.moon_phase.first_quarter",
    "astronomy.moon_phase.waxing_gibbous",
    "astronomy.moon_phase.full_moon",
    "astronomy.moon_phase.waning_gibbous",
    "astronomy.moon_phase.last_quarter",
    "astronomy.moon_phase.waning_crescent",
    "forecast.min_max_temp",
    "forecast.max_wind",
    "forecast.snowfall",
    "forecast.avg_visibility",
    "forecast.avg_humidity",
    "forecast.will_it_rain",
    "forecast.will_it_snow",
    "forecast.will_it_rain_template",
    "forecast.will_it_snow_template",
    "point16.north",
    "point16.north_northeast",
    "point16.northeast",
    "point16.east_northeast",
    "point16.east",
    "point16.east_southeast",
    "point16.southeast",
    "point16.south_southeast",
    "point16.south",
    "point16.south_southwest",
    "point16.southwest",
    "point16.west_southwest",
    "point16.west",
    "point16.west_northwest",
    "point16.northwest",
    "point16.north_northwest",
    "settings.language",
    "settings.weather_api_key",
    "settings.round_temp_values",
    "settings.show_remaining_quota",
    "settings.time_24_hour",
    "settings.temperature.label",
    "settings.temperature.celsius",
    "settings.temperature.fahrenheit",
    "settings.distance.label",
    "settings.distance.kilometers",
    "settings.distance.miles",
    "settings.pressure.label",
    "settings.pressure.millibars",
    "settings.pressure.inhg",
    "settings.height.label",
    "settings.height.millimeters",
    "settings.height.inches",
    "dialogs.add_location.title",
    "dialogs.add_location.add_button",
    "dialogs.add_location.searching",
    "dialogs.add_location.error",
    "dialogs.add_location.found_locations.zero",
    "dialogs.add_location.found_locations.one",
    "dialogs.add_location.found_locations.many",
    "dialogs.location_manager.title",
    "dialogs.location_manager.add_button",
    "dialogs.location_manager.delete_button",
    "dialogs.location_manager.up_button",
    "dialogs.location_manager.down_button",
    "wizard.welcome.page",
    "wizard.welcome.details",
    "wizard.api_setup.page",
    "wizard.api_setup.details",
    "wizard.api_setup.api_key",
    "wizard.api_setup.status_validating",
    "wizard.api_setup.status_valid",
    "wizard.api_setup.status_invalid",
    "wizard.location_prompt.page",
    "wizard.location_prompt.details",
    "wizard.location_prompt.manual",
    "wizard.location_prompt.auto",
    "wizard.location_prompt.status_adding",
    "wizard.location_prompt.status_success",
    "wizard.location_prompt.status_failure",
    "wizard.location_prompt.status_no_match",
    "wizard.location_manage.details",
    "wizard.conclusion.page",
    "wizard.conclusion.details",
    "errors.api.generic",
    "errors.api.key_not_provided",
    "errors.api.query_missing",
    "errors.api.invalid_url",
    "errors.api.location_not_found",
    "errors.api.invalid_key",
    "errors.api.quota_exceeded",
    "errors.api.key_disabled",
    "errors.api.no_access",
    "errors.api.internal",
];

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn cloud_cover_buckets() {
        assert_eq!(cloud_cover_key(0).unwrap(), "weather.cloud_cover.clear");
        assert_eq!(cloud_cover_key(9).unwrap(), "weather.cloud_cover.clear");
        assert_eq!(
            cloud_cover_key(25).unwrap(),
            "weather.cloud_cover.few_clouds"
        );
        assert_eq!(
            cloud_cover_key(45).unwrap(),
            "weather.cloud_cover.scattered_clouds"
        );
        assert_eq!(
            cloud_cover_key(75).unwrap(),
            "weather.cloud_cover.broken_clouds"
        );
        assert_eq!(cloud_cover_key(100).unwrap(), "weather.cloud_cover.overcast");
        assert!(cloud_cover_key(101).is_err());
    }

    #[test]
    fn uv_index_buckets() {
        assert_eq!(uv_index_key(0.0).unwrap(), "weather.uv_index.low");
        assert_eq!(uv_index_key(2.9).unwrap(), "weather.uv_index.low");
        assert_eq!(uv_index_key(3.0).unwrap(), "weather.uv_index.moderate");
        assert_eq!(uv_index_key(6.0).unwrap(), "weather.uv_index.high");
        assert_eq!(uv_index_key(8.0).unwrap(), "weather.uv_index.very_high");
        assert_eq!(uv_index_key(10.0).unwrap(), "weather.uv_index.very_high");
        assert_eq!(uv_index_key(10.5).unwrap(), "weather.uv_index.extreme");
        assert!(uv_index_key(-0.1).is_err());
        assert!(uv_index_key(11.1).is_err());
    }

    #[test]
    fn epa_index_range() {
        assert_eq!(epa_index_key(1).unwrap(), "air_quality.epa.good");
        assert_eq!(epa_index_key(6).unwrap(), "air_quality.epa.hazardous");
        assert!(epa_index_key(0).is_err());
        assert!(epa_index_key(7).is_err());
    }

    #[test]
    fn defra_bands_carry_concentrations() {
        assert_eq!(
            defra_band(1).unwrap(),
            ("air_quality.defra.low", "0-11 µg/m³")
        );
        assert_eq!(
            defra_band(5).unwrap(),
            ("air_quality.defra.moderate", "42-47 µg/m³")
        );
        assert_eq!(
            defra_band(10).unwrap(),
            ("air_quality.defra.very_high", "71+ µg/m³")
        );
        assert!(defra_band(0).is_err());
        assert!(defra_band(11).is_err());
    }

    #[test]
    fn compass_and_moon_phase_lookup() {
        assert_eq!(compass_key("SW"), Some("point16.southwest"));
        assert_eq!(compass_key("SSW"), Some("point16.south_southwest"));
        assert_eq!(compass_key("XYZ"), None);
        assert_eq!(
            moon_phase_key("First Quarter"),
            Some("astronomy.moon_phase.first_quarter")
        );
        assert_eq!(moon_phase_key("Blue Moon"), None);
    }
}
