//! First-run setup pages.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use brisa_i18n::language_map;

use crate::app::App;
use crate::screens::common::{selected_style, titled_block};
use crate::screens::locations;
use crate::wizard::WizardState;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(flow) = &app.wizard else {
        return;
    };

    let (page_key, details_key) = match flow.state {
        WizardState::Welcome => ("wizard.welcome.page", "wizard.welcome.details"),
        WizardState::ApiSetup => ("wizard.api_setup.page", "wizard.api_setup.details"),
        WizardState::LocationPrompt => {
            ("wizard.location_prompt.page", "wizard.location_prompt.details")
        }
        WizardState::LocationManage => (
            "dialogs.location_manager.title",
            "wizard.location_manage.details",
        ),
        WizardState::Conclusion => ("wizard.conclusion.page", "wizard.conclusion.details"),
        WizardState::Done | WizardState::Cancelled => return,
    };

    let [details_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let details = Paragraph::new(format!(" {}", app.i18n.get(details_key)))
        .wrap(Wrap { trim: false })
        .block(titled_block(app.i18n.get(page_key)));
    frame.render_widget(details, details_area);

    match flow.state {
        WizardState::Welcome => render_language_list(frame, flow.language_index, body_area),
        WizardState::ApiSetup => render_key_input(frame, app, &flow.key_input, body_area),
        WizardState::LocationPrompt => render_prompt(frame, app, flow.prompt_auto, body_area),
        WizardState::LocationManage => render_manage(frame, app, body_area),
        _ => {}
    }

    if let Some(status) = &flow.status {
        frame.render_widget(
            Paragraph::new(format!(" {status}")).style(Style::default().fg(Color::Yellow)),
            status_area,
        );
    }
}

fn render_language_list(frame: &mut Frame, selected: usize, area: Rect) {
    let items = language_map()
        .into_iter()
        .enumerate()
        .map(|(index, (_, name))| {
            let item = ListItem::new(format!(" {name}"));
            if index == selected {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect::<Vec<_>>();

    frame.render_widget(List::new(items), area);
}

fn render_key_input(frame: &mut Frame, app: &App, input: &str, area: Rect) {
    let [input_area] = Layout::vertical([Constraint::Length(3)]).areas(area);
    let text = if input.is_empty() {
        app.i18n.get("app.enter_api_key")
    } else {
        input.to_string()
    };
    let paragraph = Paragraph::new(format!(" {text}"))
        .block(titled_block(app.i18n.get("wizard.api_setup.api_key")));
    frame.render_widget(paragraph, input_area);
}

fn render_prompt(frame: &mut Frame, app: &App, auto: bool, area: Rect) {
    let options = [
        (app.i18n.get("wizard.location_prompt.auto"), auto),
        (app.i18n.get("wizard.location_prompt.manual"), !auto),
    ];
    let items = options
        .into_iter()
        .map(|(label, selected)| {
            let item = ListItem::new(format!(" {label}"));
            if selected {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect::<Vec<_>>();

    frame.render_widget(List::new(items), area);
}

fn render_manage(frame: &mut Frame, app: &App, area: Rect) {
    let [input_area, count_area, results_area, stored_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(6),
    ])
    .areas(area);

    locations::render_search_input(frame, app, input_area);
    locations::render_search_count(frame, app, count_area);
    locations::render_search_results(frame, app, results_area);

    let stored = app
        .store
        .settings
        .locations
        .iter()
        .map(|location| ListItem::new(format!(" {}", location.name)))
        .collect::<Vec<_>>();
    let list = List::new(stored).block(titled_block(app.i18n.get("app.manage_locations")));
    frame.render_widget(list, stored_area);
}
