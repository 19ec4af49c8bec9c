//! The current-conditions screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Table},
    Frame,
};

use brisa_api::{AirQuality, Astronomy, CurrentWeather, WeatherReport};

use crate::app::App;
use crate::fields;
use crate::format::{self, TimeStyle};
use crate::screens::common::{kv_row, titled_block, MISSING};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else {
        render_placeholder(frame, app, area);
        return;
    };

    let [header, body] =
        Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(area);
    frame.render_widget(headline(app, report), header);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    frame.render_widget(conditions_table(app, report), left);

    let [aqi_area, astro_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(right);
    frame.render_widget(air_quality_table(app, &report.current.air_quality), aqi_area);

    let astronomy = report.forecasts.first().map(|forecast| &forecast.astronomy);
    frame.render_widget(astronomy_table(app, astronomy), astro_area);
}

fn render_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.fetching {
        app.i18n.get("app.fetch_weather")
    } else if app.current_location().is_none() {
        app.i18n.get("app.manage_locations")
    } else {
        MISSING.to_string()
    };
    let block = titled_block(app.i18n.get("app.current_weather"));
    frame.render_widget(Paragraph::new(format!("\n {text}")).block(block), area);
}

fn headline<'a>(app: &App, report: &'a WeatherReport) -> Paragraph<'a> {
    let location = &report.location;
    let time_style = format::preferred_time_style(&app.store.settings);
    let date = format::format_datetime(
        location.localtime_epoch,
        &location.timezone_id,
        TimeStyle::Date,
    );
    let time = format::format_datetime(location.localtime_epoch, &location.timezone_id, time_style);

    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                location.full_name(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                report.current.condition.text.clone(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(format!(" {date}  {time}")),
    ])
    .block(titled_block(String::new()))
}

fn conditions_table(app: &App, report: &WeatherReport) -> Table<'static> {
    let settings = &app.store.settings;
    let i18n = &app.i18n;
    let current = &report.current;

    let mut rows = vec![
        kv_row(
            i18n.get("settings.temperature.label"),
            format::format_temperature(settings, current.temperature),
        ),
        kv_row(
            i18n.get("weather.feels_like"),
            format::format_temperature(settings, current.feels_like),
        ),
        kv_row(
            i18n.get("weather.windchill"),
            format::format_temperature(settings, current.windchill),
        ),
        kv_row(
            i18n.get("weather.heat_index"),
            format::format_temperature(settings, current.heat_index),
        ),
        kv_row(
            i18n.get("weather.dew_point"),
            format::format_temperature(settings, current.dew_point),
        ),
        kv_row(i18n.get("weather.wind_speed"), wind_text(app, current)),
        kv_row(
            i18n.get("weather.wind_gust"),
            format::format_speed(settings, current.gust_speed),
        ),
        kv_row(
            i18n.get("weather.humidity"),
            format!("{}%", current.humidity),
        ),
        kv_row(
            i18n.get("weather.precipitation"),
            format::format_height(settings, current.precipitation),
        ),
        kv_row(
            i18n.get("weather.pressure"),
            format::format_pressure(settings, current.pressure),
        ),
        kv_row(
            i18n.get("weather.visibility"),
            format::format_distance(settings, current.visibility),
        ),
    ];

    let cloud = match fields::cloud_cover_key(current.cloud_cover) {
        Ok(key) => format!("{} ({}%)", i18n.get(key), current.cloud_cover),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("weather.cloud_cover.label"), cloud));

    let uv = match fields::uv_index_key(current.uv_index) {
        Ok(key) => format!("{} ({})", i18n.get(key), current.uv_index),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("weather.uv_index.label"), uv));

    Table::new(rows, [Constraint::Length(24), Constraint::Fill(1)])
        .block(titled_block(i18n.get("app.current_weather")))
}

fn wind_text(app: &App, current: &CurrentWeather) -> String {
    let speed = format::format_speed(&app.store.settings, current.wind_speed);
    let direction = fields::compass_key(&current.wind_direction)
        .map(|key| app.i18n.get(key))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| current.wind_direction.clone());
    format!("{speed} {direction} ({}°)", current.wind_degree)
}

fn air_quality_table(app: &App, aqi: &AirQuality) -> Table<'static> {
    let i18n = &app.i18n;
    let mut rows = vec![
        kv_row(i18n.get("air_quality.co"), format!("{:.1} µg/m³", aqi.co)),
        kv_row(i18n.get("air_quality.o3"), format!("{:.1} µg/m³", aqi.o3)),
        kv_row(i18n.get("air_quality.no2"), format!("{:.1} µg/m³", aqi.no2)),
        kv_row(i18n.get("air_quality.so2"), format!("{:.1} µg/m³", aqi.so2)),
        kv_row(
            i18n.get("air_quality.pm2_5"),
            format!("{:.1} µg/m³", aqi.pm2_5),
        ),
        kv_row(
            i18n.get("air_quality.pm10"),
            format!("{:.1} µg/m³", aqi.pm10),
        ),
    ];

    let epa = match fields::epa_index_key(aqi.us_epa_index) {
        Ok(key) => i18n.get(key),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("air_quality.epa.label"), epa));

    let defra = match fields::defra_band(aqi.gb_defra_index) {
        Ok((key, band)) => format!("{} ({band})", i18n.get(key)),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("air_quality.defra.label"), defra));

    Table::new(rows, [Constraint::Length(24), Constraint::Fill(1)])
        .block(titled_block(i18n.get("air_quality.label")))
}

pub(super) fn astronomy_table(app: &App, astronomy: Option<&Astronomy>) -> Table<'static> {
    let settings = &app.store.settings;
    let i18n = &app.i18n;
    let block = titled_block(i18n.get("astronomy.label"));

    let Some(astro) = astronomy else {
        return Table::new(
            vec![kv_row(String::new(), MISSING.to_string())],
            [Constraint::Length(24), Constraint::Fill(1)],
        )
        .block(block);
    };

    let phase = fields::moon_phase_key(&astro.moon_phase)
        .map(|key| i18n.get(key))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| astro.moon_phase.clone());
    let astro_time = |raw: &str| format::format_astro_time(settings, i18n, raw);

    let rows = vec![
        kv_row(i18n.get("astronomy.sunrise"), astro_time(&astro.sunrise)),
        kv_row(i18n.get("astronomy.sunset"), astro_time(&astro.sunset)),
        kv_row(i18n.get("astronomy.moonrise"), astro_time(&astro.moonrise)),
        kv_row(i18n.get("astronomy.moonset"), astro_time(&astro.moonset)),
        kv_row(i18n.get("astronomy.moon_phase.label"), phase),
        kv_row(
            i18n.get("astronomy.moon_illumination"),
            format!("{}%", astro.moon_illumination),
        ),
    ];

    Table::new(rows, [Constraint::Length(24), Constraint::Fill(1)]).block(block)
}
