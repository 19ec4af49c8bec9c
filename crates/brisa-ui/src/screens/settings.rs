//! The settings screen: a cursor over label/value rows.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use brisa_core::{DistanceUnit, HeightUnit, PressureUnit, TemperatureUnit};
use brisa_i18n::language_map;

use crate::app::App;
use crate::format;
use crate::screens::common::{selected_style, titled_block};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let settings = &app.store.settings;
    let i18n = &app.i18n;

    let language_name = language_map()
        .iter()
        .find(|(code, _)| code == &settings.language)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| settings.language.clone());

    let temperature = match settings.temperature {
        TemperatureUnit::Celsius => i18n.get("settings.temperature.celsius"),
        TemperatureUnit::Fahrenheit => i18n.get("settings.temperature.fahrenheit"),
    };
    let distance = match settings.distance {
        DistanceUnit::Km => i18n.get("settings.distance.kilometers"),
        DistanceUnit::Mi => i18n.get("settings.distance.miles"),
    };
    let pressure = match settings.pressure {
        PressureUnit::Mbar => i18n.get("settings.pressure.millibars"),
        PressureUnit::Inhg => i18n.get("settings.pressure.inhg"),
    };
    let height = match settings.height {
        HeightUnit::Mm => i18n.get("settings.height.millimeters"),
        HeightUnit::In => i18n.get("settings.height.inches"),
    };

    let api_key = if app.editing_api_key {
        format!("{}_", app.key_input)
    } else if app.store.secrets.has_api_key() {
        mask_key(&app.store.secrets.weatherapi)
    } else {
        i18n.get("app.enter_api_key")
    };

    let entries = [
        (i18n.get("settings.language"), language_name),
        (i18n.get("settings.temperature.label"), temperature),
        (i18n.get("settings.distance.label"), distance),
        (i18n.get("settings.pressure.label"), pressure),
        (i18n.get("settings.height.label"), height),
        (
            i18n.get("settings.round_temp_values"),
            format::format_bool(i18n, settings.round_temp_values),
        ),
        (
            i18n.get("settings.show_remaining_quota"),
            format::format_bool(i18n, settings.show_quota),
        ),
        (
            i18n.get("settings.time_24_hour"),
            format::format_bool(i18n, settings.time_24_hour),
        ),
        (i18n.get("settings.weather_api_key"), api_key),
    ];

    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let row = Row::new(vec![
                Cell::from(format!(" {label}")),
                Cell::from(value).style(Style::default().fg(Color::Green)),
            ]);
            if index == app.settings_index {
                row.style(selected_style())
            } else {
                row
            }
        })
        .collect::<Vec<_>>();

    let table = Table::new(rows, [Constraint::Length(28), Constraint::Fill(1)])
        .block(titled_block(i18n.get("app.settings")));
    frame.render_widget(table, area);
}

/// Show only the tail of the stored key.
fn mask_key(key: &str) -> String {
    let tail = key.chars().rev().take(4).collect::<Vec<_>>();
    let tail = tail.into_iter().rev().collect::<String>();
    format!("****{tail}")
}
