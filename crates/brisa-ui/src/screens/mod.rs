//! Terminal rendering, one module per screen.

mod common;
mod current;
mod forecast;
mod locations;
mod settings;
mod wizard;

use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, MainTab, Screen};

/// Top-level draw call: the active screen plus the status footer.
pub fn render(frame: &mut Frame, app: &App) {
    let [body, footer] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

    match app.screen {
        Screen::Main(MainTab::Current) => current::render(frame, app, body),
        Screen::Main(tab) => forecast::render(frame, app, tab, body),
        Screen::Locations => locations::render_manager(frame, app, body),
        Screen::AddLocation => locations::render_add(frame, app, body),
        Screen::Settings => settings::render(frame, app, body),
        Screen::Wizard => wizard::render(frame, app, body),
    }

    frame.render_widget(status_line(app), footer);
}

fn status_line(app: &App) -> Paragraph<'_> {
    if let Some(status) = &app.status {
        let text = format!(" {}: {status}", app.i18n.get("app.fetch_error_title"));
        return Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Red));
    }

    let mut text = format!(" {}", app.i18n.get("app.powered_by"));
    if app.store.settings.show_quota {
        if let Some(quota) = app.quota_left {
            let quota_text = app
                .i18n
                .get("app.quota_left")
                .replace("{quota}", &quota.to_string());
            text.push_str(&format!("  |  {quota_text}"));
        }
    }
    Paragraph::new(Line::from(text)).style(Style::default().fg(Color::DarkGray))
}
