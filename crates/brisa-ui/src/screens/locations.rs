//! Location manager and the add-location search dialog.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::screens::common::{selected_style, titled_block, MISSING};

pub fn render_manager(frame: &mut Frame, app: &App, area: Rect) {
    let [list_area, help_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let items = if app.store.settings.locations.is_empty() {
        vec![ListItem::new(format!(" {MISSING}"))]
    } else {
        app.store
            .settings
            .locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                let item = ListItem::new(format!(" {}", location.name));
                if index == app.manager_index {
                    item.style(selected_style())
                } else {
                    item
                }
            })
            .collect()
    };

    let list =
        List::new(items).block(titled_block(app.i18n.get("dialogs.location_manager.title")));
    frame.render_widget(list, list_area);

    let help = format!(
        " a: {}  d: {}  K: {}  J: {}",
        app.i18n.get("dialogs.location_manager.add_button"),
        app.i18n.get("dialogs.location_manager.delete_button"),
        app.i18n.get("dialogs.location_manager.up_button"),
        app.i18n.get("dialogs.location_manager.down_button"),
    );
    frame.render_widget(
        Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

pub fn render_add(frame: &mut Frame, app: &App, area: Rect) {
    let [input_area, count_area, results_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_search_input(frame, app, input_area);
    render_search_count(frame, app, count_area);
    render_search_results(frame, app, results_area);
}

pub fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.search_input.is_empty() {
        app.i18n.get("app.location_input_placeholder")
    } else {
        app.search_input.clone()
    };
    let style = if app.search_input.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input = Paragraph::new(format!(" {text}"))
        .style(style)
        .block(titled_block(app.i18n.get("dialogs.add_location.title")));
    frame.render_widget(input, area);
}

pub fn render_search_count(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.searching {
        app.i18n.get("dialogs.add_location.searching")
    } else {
        match app.search_results.len() {
            0 => app.i18n.get("dialogs.add_location.found_locations.zero"),
            1 => app.i18n.get("dialogs.add_location.found_locations.one"),
            count => app
                .i18n
                .get("dialogs.add_location.found_locations.many")
                .replace("{number}", &count.to_string()),
        }
    };
    frame.render_widget(
        Paragraph::new(format!(" {text}")).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

pub fn render_search_results(frame: &mut Frame, app: &App, area: Rect) {
    let items = app
        .search_results
        .iter()
        .enumerate()
        .map(|(index, hit)| {
            let item = ListItem::new(format!(" {}", hit.full_name()));
            if index == app.search_selected {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect::<Vec<_>>();

    frame.render_widget(List::new(items), area);
}
