//! Forecast drill-down: day list, day detail, hour detail.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{List, ListItem, Paragraph, Table},
    Frame,
};

use brisa_api::{Forecast, ForecastHour};

use crate::app::{App, MainTab};
use crate::fields;
use crate::format::{self, TimeStyle};
use crate::screens::common::{kv_row, selected_style, titled_block, MISSING};
use crate::screens::current::astronomy_table;

pub fn render(frame: &mut Frame, app: &App, tab: MainTab, area: Rect) {
    let Some(report) = &app.report else {
        let block = titled_block(app.i18n.get("app.forecast"));
        frame.render_widget(Paragraph::new(format!("\n {MISSING}")).block(block), area);
        return;
    };

    match tab {
        MainTab::Forecast { day } => {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(area);
            frame.render_widget(day_list(app, &report.forecasts, day), left);
            if let Some(forecast) = report.forecasts.get(day) {
                frame.render_widget(day_table(app, forecast), right);
            }
        }
        MainTab::DayDetail { day } => {
            if let Some(forecast) = report.forecasts.get(day) {
                let [table_area, astro_area] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(8)]).areas(area);
                frame.render_widget(day_table(app, forecast), table_area);
                frame.render_widget(astronomy_table(app, Some(&forecast.astronomy)), astro_area);
            }
        }
        MainTab::HourDetail { day, hour } => {
            let Some(forecast) = report.forecasts.get(day) else {
                return;
            };
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(area);
            frame.render_widget(
                hour_list(app, forecast, hour, &report.location.timezone_id),
                left,
            );
            let [table_area, astro_area] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(8)]).areas(right);
            if let Some(entry) = forecast.hours.get(hour) {
                frame.render_widget(hour_table(app, entry), table_area);
            }
            frame.render_widget(astronomy_table(app, Some(&forecast.astronomy)), astro_area);
        }
        MainTab::Current => {}
    }
}

fn day_list(app: &App, forecasts: &[Forecast], selected: usize) -> List<'static> {
    let settings = &app.store.settings;
    let items = forecasts
        .iter()
        .enumerate()
        .map(|(index, forecast)| {
            let line = format!(
                " {}  {} / {}  {}",
                forecast.date_formatted,
                format::format_temperature(settings, forecast.day.min_temperature),
                format::format_temperature(settings, forecast.day.max_temperature),
                forecast.day.condition.text
            );
            let item = ListItem::new(line);
            if index == selected {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect::<Vec<_>>();

    List::new(items).block(titled_block(app.i18n.get("app.forecast")))
}

fn day_table(app: &App, forecast: &Forecast) -> Table<'static> {
    let settings = &app.store.settings;
    let i18n = &app.i18n;
    let day = &forecast.day;

    let min_max = format!(
        "{} / {}",
        format::format_temperature(settings, day.min_temperature),
        format::format_temperature(settings, day.max_temperature)
    );
    let rain = chance_text(app, "forecast.will_it_rain_template", day.will_it_rain, day.chance_of_rain);
    let snow = chance_text(app, "forecast.will_it_snow_template", day.will_it_snow, day.chance_of_snow);

    let mut rows = vec![
        kv_row(i18n.get("forecast.min_max_temp"), min_max),
        kv_row(
            i18n.get("app.average"),
            format::format_temperature(settings, day.avg_temperature),
        ),
        kv_row(
            i18n.get("forecast.max_wind"),
            format::format_speed(settings, day.max_wind_speed),
        ),
        kv_row(
            i18n.get("weather.precipitation"),
            format::format_height(settings, day.total_precipitation),
        ),
        kv_row(
            i18n.get("forecast.snowfall"),
            format!("{} cm", day.total_snowfall_cm),
        ),
        kv_row(
            i18n.get("forecast.avg_visibility"),
            format::format_distance(settings, day.avg_visibility),
        ),
        kv_row(
            i18n.get("forecast.avg_humidity"),
            format!("{}%", day.avg_humidity),
        ),
        kv_row(i18n.get("forecast.will_it_rain"), rain),
        kv_row(i18n.get("forecast.will_it_snow"), snow),
    ];

    let uv = match fields::uv_index_key(day.uv_index) {
        Ok(key) => format!("{} ({})", i18n.get(key), day.uv_index),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("weather.uv_index.label"), uv));

    Table::new(rows, [Constraint::Length(24), Constraint::Fill(1)]).block(titled_block(format!(
        "{}  {}",
        forecast.date_formatted, day.condition.text
    )))
}

fn chance_text(app: &App, template_key: &str, will_it: bool, chance: u8) -> String {
    app.i18n
        .get(template_key)
        .replace("{value}", &format::format_bool(&app.i18n, will_it))
        .replace("{chance}", &chance.to_string())
}

fn hour_list(app: &App, forecast: &Forecast, selected: usize, timezone_id: &str) -> List<'static> {
    let settings = &app.store.settings;
    let time_style = if settings.time_24_hour {
        TimeStyle::Time24
    } else {
        TimeStyle::Time12
    };

    let items = forecast
        .hours
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let line = format!(
                " {}  {}  {}",
                format::format_datetime(entry.time_epoch, timezone_id, time_style),
                format::format_temperature(settings, entry.temperature),
                entry.condition.text
            );
            let item = ListItem::new(line);
            if index == selected {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect::<Vec<_>>();

    List::new(items).block(titled_block(forecast.date_formatted.clone()))
}

fn hour_table(app: &App, entry: &ForecastHour) -> Table<'static> {
    let settings = &app.store.settings;
    let i18n = &app.i18n;

    let wind = {
        let speed = format::format_speed(settings, entry.wind_speed);
        let direction = fields::compass_key(&entry.wind_direction)
            .map(|key| i18n.get(key))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| entry.wind_direction.clone());
        format!("{speed} {direction} ({}°)", entry.wind_degree)
    };
    let rain = chance_text(app, "forecast.will_it_rain_template", entry.will_it_rain, entry.chance_of_rain);
    let snow = chance_text(app, "forecast.will_it_snow_template", entry.will_it_snow, entry.chance_of_snow);

    let mut rows = vec![
        kv_row(
            i18n.get("settings.temperature.label"),
            format::format_temperature(settings, entry.temperature),
        ),
        kv_row(
            i18n.get("weather.feels_like"),
            format::format_temperature(settings, entry.feels_like),
        ),
        kv_row(
            i18n.get("weather.windchill"),
            format::format_temperature(settings, entry.windchill),
        ),
        kv_row(
            i18n.get("weather.heat_index"),
            format::format_temperature(settings, entry.heat_index),
        ),
        kv_row(
            i18n.get("weather.dew_point"),
            format::format_temperature(settings, entry.dew_point),
        ),
        kv_row(i18n.get("weather.wind_speed"), wind),
        kv_row(
            i18n.get("weather.wind_gust"),
            format::format_speed(settings, entry.gust_speed),
        ),
        kv_row(
            i18n.get("weather.pressure"),
            format::format_pressure(settings, entry.pressure),
        ),
        kv_row(
            i18n.get("weather.visibility"),
            format::format_distance(settings, entry.visibility),
        ),
        kv_row(
            i18n.get("weather.precipitation"),
            format::format_height(settings, entry.precipitation),
        ),
        kv_row(
            i18n.get("forecast.snowfall"),
            format!("{} cm", entry.snowfall_cm),
        ),
        kv_row(
            i18n.get("weather.humidity"),
            format!("{}%", entry.humidity),
        ),
        kv_row(i18n.get("forecast.will_it_rain"), rain),
        kv_row(i18n.get("forecast.will_it_snow"), snow),
    ];

    let cloud = match fields::cloud_cover_key(entry.cloud_cover) {
        Ok(key) => format!("{} ({}%)", i18n.get(key), entry.cloud_cover),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("weather.cloud_cover.label"), cloud));

    let uv = match fields::uv_index_key(entry.uv_index) {
        Ok(key) => format!("{} ({})", i18n.get(key), entry.uv_index),
        Err(_) => i18n.get("app.not_applicable"),
    };
    rows.push(kv_row(i18n.get("weather.uv_index.label"), uv));

    Table::new(rows, [Constraint::Length(24), Constraint::Fill(1)])
        .block(titled_block(entry.time_formatted.clone()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use ratatui::{backend::TestBackend, Terminal};

    use brisa_api::{
        Astronomy, Condition, CurrentWeather, Distance, Forecast, ForecastDay, ForecastHour,
        Height, Location, Pressure, Speed, Temperature, WeatherReport,
    };
    use brisa_core::Store;
    use brisa_i18n::Localizer;

    use super::*;

    fn temp(celsius: f64) -> Temperature {
        Temperature {
            celsius,
            fahrenheit: celsius * 1.8 + 32.0,
        }
    }

    fn condition() -> Condition {
        Condition {
            text: "Partly cloudy".into(),
            icon: String::new(),
            code: 1003,
        }
    }

    fn sample_hour() -> ForecastHour {
        ForecastHour {
            time_epoch: 1756540800,
            time_formatted: "2025-08-30 09:00".into(),
            temperature: temp(18.0),
            condition: condition(),
            wind_speed: Speed {
                kilometers_per_hour: 12.0,
                miles_per_hour: 7.5,
            },
            wind_degree: 270,
            wind_direction: "W".into(),
            pressure: Pressure {
                millibars: 1013.0,
                inches_hg: 29.91,
            },
            precipitation: Height {
                millimeters: 0.0,
                inches: 0.0,
            },
            snowfall_cm: 0.0,
            humidity: 60,
            cloud_cover: 25,
            feels_like: temp(18.0),
            windchill: temp(18.0),
            heat_index: temp(18.0),
            dew_point: temp(10.0),
            will_it_rain: false,
            will_it_snow: false,
            chance_of_rain: 10,
            chance_of_snow: 0,
            is_day: true,
            visibility: Distance {
                kilometers: 10.0,
                miles: 6.0,
            },
            gust_speed: Speed {
                kilometers_per_hour: 21.6,
                miles_per_hour: 13.4,
            },
            uv_index: 4.0,
        }
    }

    fn sample_report() -> WeatherReport {
        let hour = sample_hour();
        WeatherReport {
            location: Location {
                name: "London".into(),
                region: "City of London, Greater London".into(),
                country: "United Kingdom".into(),
                latitude: 51.52,
                longitude: -0.11,
                timezone_id: "Europe/London".into(),
                localtime_epoch: 1756540800,
                localtime_formatted: "2025-08-30 09:00".into(),
            },
            current: CurrentWeather {
                last_updated_epoch: 1756540800,
                last_updated_formatted: "2025-08-30 09:00".into(),
                temperature: hour.temperature,
                feels_like: hour.feels_like,
                windchill: hour.windchill,
                heat_index: hour.heat_index,
                dew_point: hour.dew_point,
                visibility: hour.visibility,
                condition: condition(),
                wind_speed: hour.wind_speed,
                wind_degree: hour.wind_degree,
                wind_direction: hour.wind_direction.clone(),
                pressure: hour.pressure,
                precipitation: hour.precipitation,
                humidity: hour.humidity,
                cloud_cover: hour.cloud_cover,
                is_day: true,
                uv_index: hour.uv_index,
                gust_speed: hour.gust_speed,
                air_quality: brisa_api::AirQuality {
                    co: 230.0,
                    o3: 60.0,
                    no2: 12.0,
                    so2: 3.0,
                    pm2_5: 5.0,
                    pm10: 8.0,
                    us_epa_index: 1,
                    gb_defra_index: 2,
                },
            },
            forecasts: vec![Forecast {
                date_epoch: 1756510200,
                date_formatted: "2025-08-30".into(),
                day: ForecastDay {
                    max_temperature: temp(21.0),
                    min_temperature: temp(13.0),
                    avg_temperature: temp(17.0),
                    max_wind_speed: Speed {
                        kilometers_per_hour: 25.0,
                        miles_per_hour: 15.5,
                    },
                    total_precipitation: Height {
                        millimeters: 0.2,
                        inches: 0.01,
                    },
                    total_snowfall_cm: 0.0,
                    avg_visibility: Distance {
                        kilometers: 10.0,
                        miles: 6.0,
                    },
                    avg_humidity: 65.0,
                    condition: condition(),
                    uv_index: 4.0,
                    will_it_rain: false,
                    will_it_snow: false,
                    chance_of_rain: 10,
                    chance_of_snow: 0,
                },
                astronomy: Astronomy {
                    sunrise: "06:10 AM".into(),
                    sunset: "07:49 PM".into(),
                    moonrise: "02:44 PM".into(),
                    moonset: "No moonset".into(),
                    moon_phase: "First Quarter".into(),
                    moon_illumination: 44,
                    is_moon_up: false,
                    is_sun_up: true,
                },
                hours: vec![hour],
            }],
        }
    }

    fn test_app() -> (tokio::runtime::Runtime, App) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let mut app = App::new(store, i18n, runtime.handle().clone());
        app.report = Some(sample_report());
        (runtime, app)
    }

    fn rendered_text(app: &App, tab: MainTab) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 45)).unwrap();
        terminal
            .draw(|frame| render(frame, app, tab, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn hour_detail_shows_gust_visibility_and_uv() {
        let (_runtime, app) = test_app();
        let text = rendered_text(&app, MainTab::HourDetail { day: 0, hour: 0 });

        assert!(text.contains("Gusts"));
        assert!(text.contains("21.6 km/h"));
        assert!(text.contains("Visibility"));
        assert!(text.contains("10 km"));
        assert!(text.contains("UV index"));
        assert!(text.contains("Moderate (4)"));
    }

    #[test]
    fn day_detail_shows_the_day_astronomy() {
        let (_runtime, app) = test_app();
        let text = rendered_text(&app, MainTab::DayDetail { day: 0 });

        assert!(text.contains("Sunrise"));
        assert!(text.contains("06:10 AM"));
        assert!(text.contains("First quarter"));
    }

    #[test]
    fn hour_detail_shows_the_day_astronomy() {
        let (_runtime, app) = test_app();
        let text = rendered_text(&app, MainTab::HourDetail { day: 0, hour: 0 });

        assert!(text.contains("Moonrise"));
        assert!(text.contains("02:44 PM"));
        // "No moonset" from the API renders as the localized marker.
        assert!(text.contains("Moonset"));
        assert!(text.contains("N/A"));
    }
}
