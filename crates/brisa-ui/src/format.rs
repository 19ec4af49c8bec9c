//! Unit-converted display strings. Every function is a pure function of
//! the stored preference and the dual-unit pair from the API.

use brisa_api::{Distance, Height, Pressure, Speed, Temperature};
use brisa_core::{DistanceUnit, HeightUnit, PressureUnit, Settings, TemperatureUnit};
use brisa_i18n::Localizer;
use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;

pub fn format_temperature(settings: &Settings, temp: Temperature) -> String {
    let (value, unit) = match settings.temperature {
        TemperatureUnit::Celsius => (temp.celsius, "C"),
        TemperatureUnit::Fahrenheit => (temp.fahrenheit, "F"),
    };

    if settings.round_temp_values {
        format!("{} °{unit}", value.round())
    } else {
        format!("{value} °{unit}")
    }
}

pub fn format_distance(settings: &Settings, dist: Distance) -> String {
    match settings.distance {
        DistanceUnit::Km => format!("{} km", dist.kilometers),
        DistanceUnit::Mi => format!("{} mi", dist.miles),
    }
}

/// Wind speeds follow the distance preference.
pub fn format_speed(settings: &Settings, speed: Speed) -> String {
    match settings.distance {
        DistanceUnit::Km => format!("{} km/h", speed.kilometers_per_hour),
        DistanceUnit::Mi => format!("{} mi/h", speed.miles_per_hour),
    }
}

pub fn format_height(settings: &Settings, height: Height) -> String {
    match settings.height {
        HeightUnit::Mm => format!("{} mm", height.millimeters),
        HeightUnit::In => format!("{} in", height.inches),
    }
}

pub fn format_pressure(settings: &Settings, pressure: Pressure) -> String {
    match settings.pressure {
        PressureUnit::Mbar => format!("{} mbar", pressure.millibars),
        PressureUnit::Inhg => format!("{} inHg", pressure.inches_hg),
    }
}

pub fn format_bool(i18n: &Localizer, value: bool) -> String {
    if value {
        i18n.get("app.yes")
    } else {
        i18n.get("app.no")
    }
}

/// Rise/set strings arrive as "06:45 AM" and follow the 12/24-hour
/// preference. The API reports "No moonrise" and similar sentinels for
/// days without the event; those render as the not-applicable marker.
pub fn format_astro_time(settings: &Settings, i18n: &Localizer, raw: &str) -> String {
    match NaiveTime::parse_from_str(raw, "%I:%M %p") {
        Ok(time) if settings.time_24_hour => time.format("%H:%M").to_string(),
        Ok(time) => time.format("%I:%M %p").to_string(),
        Err(_) => i18n.get("app.not_applicable"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    Date,
    Time12,
    Time24,
}

/// Renders `epoch` in the IANA timezone the API reported for the
/// location. An unknown timezone id falls back to UTC.
pub fn format_datetime(epoch: i64, timezone_id: &str, style: TimeStyle) -> String {
    let tz = timezone_id.parse::<Tz>().unwrap_or(Tz::UTC);

    match DateTime::from_timestamp(epoch, 0) {
        Some(utc) => {
            let local = utc.with_timezone(&tz);
            match style {
                TimeStyle::Date => local.format("%A, %B %d, %Y").to_string(),
                TimeStyle::Time12 => local.format("%I:%M %p").to_string(),
                TimeStyle::Time24 => local.format("%H:%M").to_string(),
            }
        }
        None => String::new(),
    }
}

/// Time style matching the user's 12/24-hour preference.
pub fn preferred_time_style(settings: &Settings) -> TimeStyle {
    if settings.time_24_hour {
        TimeStyle::Time24
    } else {
        TimeStyle::Time12
    }
}
