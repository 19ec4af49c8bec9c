//! Application state and the terminal event loop.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use brisa_api::{SearchLocation, WeatherClient, WeatherError, WeatherReport};
use brisa_core::{
    DistanceUnit, HeightUnit, PressureUnit, Store, StoredLocation, TemperatureUnit,
};
use brisa_i18n::{language_map, Localizer};

use crate::screens;
use crate::services::{Debouncer, WeatherMessage, WeatherService};
use crate::wizard::{transition, WizardContext, WizardInput, WizardState};

const TICK: Duration = Duration::from_millis(100);

/// Minimum query length before a search request is sent.
const MIN_SEARCH_LEN: usize = 3;

/// Which top-level view the event loop is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main(MainTab),
    Locations,
    AddLocation,
    Settings,
    Wizard,
}

/// Drill-down levels of the main weather view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Current,
    Forecast { day: usize },
    DayDetail { day: usize },
    HourDetail { day: usize, hour: usize },
}

/// Rows of the settings screen, top to bottom.
pub const SETTINGS_ROWS: usize = 9;

/// Live state of the setup flow while the wizard screen is up.
#[derive(Debug)]
pub struct WizardFlow {
    pub state: WizardState,
    pub language_index: usize,
    pub key_input: String,
    pub status: Option<String>,
    pub prompt_auto: bool,
}

impl WizardFlow {
    fn new(language_index: usize) -> Self {
        Self {
            state: WizardState::Welcome,
            language_index,
            key_input: String::new(),
            status: None,
            prompt_auto: true,
        }
    }
}

pub struct App {
    pub store: Store,
    pub i18n: Localizer,
    client: Option<WeatherClient>,
    service: WeatherService,
    rx: Receiver<WeatherMessage>,

    pub screen: Screen,
    pub report: Option<WeatherReport>,
    pub quota_left: Option<u64>,
    pub status: Option<String>,
    pub fetching: bool,

    /// Index into `store.settings.locations` for fetches.
    pub selected_location: usize,
    /// Cursor in the location manager.
    pub manager_index: usize,

    pub search_input: String,
    pub search_results: Vec<SearchLocation>,
    pub search_selected: usize,
    pub searching: bool,
    search_generation: u64,
    debouncer: Debouncer,

    pub settings_index: usize,
    pub editing_api_key: bool,
    pub key_input: String,

    pub wizard: Option<WizardFlow>,
    /// Set when the first-run wizard was cancelled; the caller exits
    /// without entering the main view.
    pub cancelled: bool,
    should_exit: bool,
}

impl App {
    pub fn new(store: Store, i18n: Localizer, handle: tokio::runtime::Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        let service = WeatherService::new(handle, tx);

        let client = store
            .secrets
            .has_api_key()
            .then(|| WeatherClient::new(store.secrets.weatherapi.clone()).ok())
            .flatten();

        let needs_wizard = store.first_run()
            || !store.secrets.has_api_key()
            || store.settings.locations.is_empty();

        let language_index = language_map()
            .iter()
            .position(|(code, _)| code == &store.settings.language)
            .unwrap_or(0);

        let (screen, wizard) = if needs_wizard {
            (Screen::Wizard, Some(WizardFlow::new(language_index)))
        } else {
            (Screen::Main(MainTab::Current), None)
        };

        let mut app = Self {
            store,
            i18n,
            client,
            service,
            rx,
            screen,
            report: None,
            quota_left: None,
            status: None,
            fetching: false,
            selected_location: 0,
            manager_index: 0,
            search_input: String::new(),
            search_results: Vec::new(),
            search_selected: 0,
            searching: false,
            search_generation: 0,
            debouncer: Debouncer::default(),
            settings_index: 0,
            editing_api_key: false,
            key_input: String::new(),
            wizard,
            cancelled: false,
            should_exit: false,
        };

        if app.wizard.is_none() {
            app.request_forecast();
        }
        app
    }

    /// The stored location fetches are issued for.
    pub fn current_location(&self) -> Option<&StoredLocation> {
        self.store.settings.locations.get(self.selected_location)
    }

    pub fn request_forecast(&mut self) {
        let (Some(client), Some(location)) = (&self.client, self.current_location()) else {
            return;
        };
        let query = format!("id:{}", location.ident);
        self.fetching = true;
        self.status = None;
        self.service
            .request_forecast(client, query, self.store.settings.language.clone());
    }

    /// Turn a fetch error into the string the status line shows.
    pub fn describe_error(&self, err: &WeatherError) -> String {
        if let WeatherError::Api { message, code } = err {
            if let Some(text) = err
                .locale_key()
                .map(|key| self.i18n.get(key))
                .filter(|text| !text.is_empty())
            {
                return text;
            }
            return self
                .i18n
                .get("errors.api.generic")
                .replace("{message}", message)
                .replace("{code}", &code.to_string());
        }
        err.to_string()
    }

    /// Drain replies from background requests.
    fn drain_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.apply_message(message);
        }
    }

    fn apply_message(&mut self, message: WeatherMessage) {
        match message {
            WeatherMessage::ForecastDone(outcome) => {
                self.fetching = false;
                match outcome {
                    Ok(fetched) => {
                        self.quota_left = fetched.quota_left.or(self.quota_left);
                        self.report = Some(fetched.data);
                        self.status = None;
                    }
                    Err(err) => {
                        tracing::warn!(%err, "forecast fetch failed");
                        self.status = Some(self.describe_error(&err));
                    }
                }
            }
            WeatherMessage::SearchDone {
                generation,
                outcome,
            } => {
                // Replies from superseded queries are dropped.
                if generation != self.search_generation {
                    tracing::debug!(generation, "dropping stale search reply");
                    return;
                }
                self.searching = false;
                match outcome {
                    Ok(fetched) => {
                        self.quota_left = fetched.quota_left.or(self.quota_left);
                        self.search_results = fetched.data;
                        self.search_selected = 0;
                    }
                    Err(err) => {
                        tracing::warn!(%err, "location search failed");
                        self.status = Some(self.describe_error(&err));
                        self.search_results.clear();
                    }
                }
            }
            WeatherMessage::ProbeDone(outcome) => self.on_probe_done(outcome),
            WeatherMessage::AutoLocated(outcome) => self.on_auto_located(outcome),
        }
    }

    fn on_probe_done(&mut self, outcome: brisa_api::FetchOutcome<WeatherReport>) {
        let Some(flow) = &mut self.wizard else {
            return;
        };
        match outcome {
            Ok(_) => {
                self.store.secrets.weatherapi = flow.key_input.trim().to_string();
                if let Err(err) = self.store.save_secrets() {
                    tracing::error!(%err, "could not persist secrets");
                }
                self.client = WeatherClient::new(self.store.secrets.weatherapi.clone()).ok();
                flow.status = Some(self.i18n.get("wizard.api_setup.status_valid"));
                self.wizard_step(WizardInput::ProbeOk);
            }
            Err(err) => {
                tracing::warn!(%err, "API key probe failed");
                let text = match &err {
                    WeatherError::Api { message, code } => self
                        .i18n
                        .get("wizard.api_setup.status_invalid")
                        .replace("{message}", message)
                        .replace("{code}", &code.to_string()),
                    other => other.to_string(),
                };
                flow.status = Some(text);
                self.wizard_step(WizardInput::ProbeErr);
            }
        }
    }

    fn on_auto_located(&mut self, outcome: brisa_api::FetchOutcome<Vec<SearchLocation>>) {
        let Some(flow) = &mut self.wizard else {
            return;
        };
        match outcome.map(|fetched| fetched.data.into_iter().next()) {
            Ok(Some(hit)) => {
                self.store.settings.locations.push(StoredLocation {
                    name: hit.full_name(),
                    ident: hit.ident,
                });
                if let Err(err) = self.store.save_settings() {
                    tracing::error!(%err, "could not persist settings");
                }
                flow.status = Some(self.i18n.get("wizard.location_prompt.status_success"));
                self.wizard_step(WizardInput::AutoLocationOk);
            }
            Ok(None) => {
                flow.status = Some(self.i18n.get("wizard.location_prompt.status_no_match"));
                self.wizard_step(WizardInput::AutoLocationErr);
            }
            Err(err) => {
                tracing::warn!(%err, "auto location failed");
                let text = match &err {
                    WeatherError::Api { message, code } => self
                        .i18n
                        .get("wizard.location_prompt.status_failure")
                        .replace("{message}", message)
                        .replace("{code}", &code.to_string()),
                    other => other.to_string(),
                };
                flow.status = Some(text);
                self.wizard_step(WizardInput::AutoLocationErr);
            }
        }
    }

    /// Fire a pending search once the input has been idle long enough.
    fn fire_debounce(&mut self) {
        if !self.debouncer.fire() {
            return;
        }
        let query = self.search_input.trim().to_string();
        if query.len() < MIN_SEARCH_LEN {
            self.search_results.clear();
            return;
        }
        let Some(client) = &self.client else { return };
        self.search_generation += 1;
        self.searching = true;
        self.service
            .request_search(client, query, self.search_generation);
    }

    fn reset_search(&mut self) {
        self.search_input.clear();
        self.search_results.clear();
        self.search_selected = 0;
        self.searching = false;
        self.search_generation += 1;
        self.debouncer.cancel();
    }

    fn add_search_hit(&mut self) {
        let Some(hit) = self.search_results.get(self.search_selected) else {
            return;
        };
        let stored = StoredLocation {
            name: hit.full_name(),
            ident: hit.ident,
        };
        if !self
            .store
            .settings
            .locations
            .iter()
            .any(|loc| loc.ident == stored.ident)
        {
            self.store.settings.locations.push(stored);
            if let Err(err) = self.store.save_settings() {
                tracing::error!(%err, "could not persist settings");
            }
        }
    }

    fn apply_language(&mut self, code: &str) {
        if code == self.store.settings.language {
            return;
        }
        match Localizer::install(code) {
            Ok(i18n) => {
                self.i18n = i18n;
                self.store.settings.language = code.to_string();
                if let Err(err) = self.store.save_settings() {
                    tracing::error!(%err, "could not persist settings");
                }
            }
            Err(err) => tracing::error!(%err, "could not switch language"),
        }
    }

    fn wizard_step(&mut self, input: WizardInput) {
        let Some(flow) = &mut self.wizard else {
            return;
        };
        let ctx = WizardContext {
            has_api_key: self.store.secrets.has_api_key(),
            has_locations: !self.store.settings.locations.is_empty(),
            auto_location: flow.prompt_auto,
        };
        let next = transition(flow.state, input, ctx);
        if next != flow.state {
            flow.status = None;
        }
        flow.state = next;

        match flow.state {
            WizardState::Done => {
                self.wizard = None;
                self.screen = Screen::Main(MainTab::Current);
                self.request_forecast();
            }
            WizardState::Cancelled => {
                self.cancelled = true;
                self.should_exit = true;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Wizard => self.handle_wizard_key(key),
            Screen::Main(tab) => self.handle_main_key(tab, key),
            Screen::Locations => self.handle_locations_key(key),
            Screen::AddLocation => self.handle_add_location_key(key),
            Screen::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_main_key(&mut self, tab: MainTab, key: KeyEvent) {
        match (tab, key.code) {
            (_, KeyCode::Char('q')) => self.should_exit = true,
            (_, KeyCode::Char('l')) => {
                self.manager_index = 0;
                self.screen = Screen::Locations;
            }
            (_, KeyCode::Char('s')) => {
                self.settings_index = 0;
                self.editing_api_key = false;
                self.screen = Screen::Settings;
            }
            (_, KeyCode::Char('r')) => self.request_forecast(),
            (_, KeyCode::Char('[')) => self.cycle_location(-1),
            (_, KeyCode::Char(']')) => self.cycle_location(1),

            (MainTab::Current, KeyCode::Tab) => {
                self.screen = Screen::Main(MainTab::Forecast { day: 0 });
            }
            (MainTab::Forecast { .. }, KeyCode::Tab) => {
                self.screen = Screen::Main(MainTab::Current);
            }

            (MainTab::Forecast { day }, KeyCode::Up) => {
                self.screen = Screen::Main(MainTab::Forecast {
                    day: day.saturating_sub(1),
                });
            }
            (MainTab::Forecast { day }, KeyCode::Down) => {
                let last = self.forecast_days().saturating_sub(1);
                self.screen = Screen::Main(MainTab::Forecast {
                    day: (day + 1).min(last),
                });
            }
            (MainTab::Forecast { day }, KeyCode::Enter) => {
                if self.forecast_days() > 0 {
                    self.screen = Screen::Main(MainTab::DayDetail { day });
                }
            }

            (MainTab::DayDetail { day }, KeyCode::Enter | KeyCode::Char('h')) => {
                if self.forecast_hours(day) > 0 {
                    self.screen = Screen::Main(MainTab::HourDetail { day, hour: 0 });
                }
            }
            (MainTab::DayDetail { day }, KeyCode::Esc) => {
                self.screen = Screen::Main(MainTab::Forecast { day });
            }

            (MainTab::HourDetail { day, hour }, KeyCode::Up) => {
                self.screen = Screen::Main(MainTab::HourDetail {
                    day,
                    hour: hour.saturating_sub(1),
                });
            }
            (MainTab::HourDetail { day, hour }, KeyCode::Down) => {
                let last = self.forecast_hours(day).saturating_sub(1);
                self.screen = Screen::Main(MainTab::HourDetail {
                    day,
                    hour: (hour + 1).min(last),
                });
            }
            (MainTab::HourDetail { day, .. }, KeyCode::Esc) => {
                self.screen = Screen::Main(MainTab::DayDetail { day });
            }
            _ => {}
        }
    }

    fn forecast_days(&self) -> usize {
        self.report
            .as_ref()
            .map(|report| report.forecasts.len())
            .unwrap_or(0)
    }

    fn forecast_hours(&self, day: usize) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.forecasts.get(day))
            .map(|forecast| forecast.hours.len())
            .unwrap_or(0)
    }

    fn cycle_location(&mut self, step: isize) {
        let count = self.store.settings.locations.len();
        if count == 0 {
            return;
        }
        let next = (self.selected_location as isize + step).rem_euclid(count as isize);
        if next as usize != self.selected_location {
            self.selected_location = next as usize;
            self.request_forecast();
        }
    }

    fn handle_locations_key(&mut self, key: KeyEvent) {
        let count = self.store.settings.locations.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.selected_location = self.selected_location.min(count.saturating_sub(1));
                self.screen = Screen::Main(MainTab::Current);
                self.request_forecast();
            }
            KeyCode::Up => self.manager_index = self.manager_index.saturating_sub(1),
            KeyCode::Down => {
                self.manager_index = (self.manager_index + 1).min(count.saturating_sub(1));
            }
            KeyCode::Char('a') => {
                self.reset_search();
                self.screen = Screen::AddLocation;
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.manager_index < count {
                    self.store.settings.locations.remove(self.manager_index);
                    self.manager_index = self
                        .manager_index
                        .min(self.store.settings.locations.len().saturating_sub(1));
                    if let Err(err) = self.store.save_settings() {
                        tracing::error!(%err, "could not persist settings");
                    }
                }
            }
            KeyCode::Char('K') => self.move_location(-1),
            KeyCode::Char('J') => self.move_location(1),
            _ => {}
        }
    }

    fn move_location(&mut self, step: isize) {
        let count = self.store.settings.locations.len();
        let target = self.manager_index as isize + step;
        if count < 2 || target < 0 || target >= count as isize {
            return;
        }
        self.store
            .settings
            .locations
            .swap(self.manager_index, target as usize);
        self.manager_index = target as usize;
        if let Err(err) = self.store.save_settings() {
            tracing::error!(%err, "could not persist settings");
        }
    }

    fn handle_add_location_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.reset_search();
                self.screen = Screen::Locations;
            }
            KeyCode::Enter => {
                self.add_search_hit();
                self.reset_search();
                self.screen = Screen::Locations;
            }
            KeyCode::Up => self.search_selected = self.search_selected.saturating_sub(1),
            KeyCode::Down => {
                self.search_selected = (self.search_selected + 1)
                    .min(self.search_results.len().saturating_sub(1));
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                self.debouncer.poke();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.debouncer.poke();
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        if self.editing_api_key {
            match key.code {
                KeyCode::Esc => {
                    self.editing_api_key = false;
                    self.key_input.clear();
                }
                KeyCode::Enter => {
                    self.editing_api_key = false;
                    self.store.secrets.weatherapi = self.key_input.trim().to_string();
                    self.key_input.clear();
                    if let Err(err) = self.store.save_secrets() {
                        tracing::error!(%err, "could not persist secrets");
                    }
                    self.client =
                        WeatherClient::new(self.store.secrets.weatherapi.clone()).ok();
                }
                KeyCode::Backspace => {
                    self.key_input.pop();
                }
                KeyCode::Char(c) => self.key_input.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                if let Err(err) = self.store.save_settings() {
                    tracing::error!(%err, "could not persist settings");
                }
                self.screen = Screen::Main(MainTab::Current);
                self.request_forecast();
            }
            KeyCode::Up => self.settings_index = self.settings_index.saturating_sub(1),
            KeyCode::Down => {
                self.settings_index = (self.settings_index + 1).min(SETTINGS_ROWS - 1);
            }
            KeyCode::Left => self.cycle_setting(-1),
            KeyCode::Right => self.cycle_setting(1),
            KeyCode::Enter => {
                if self.settings_index == SETTINGS_ROWS - 1 {
                    self.editing_api_key = true;
                    self.key_input.clear();
                } else {
                    self.cycle_setting(1);
                }
            }
            _ => {}
        }
    }

    fn cycle_setting(&mut self, step: isize) {
        let settings = &mut self.store.settings;
        match self.settings_index {
            0 => {
                let map = language_map();
                if map.is_empty() {
                    return;
                }
                let current = map
                    .iter()
                    .position(|(code, _)| code == &settings.language)
                    .unwrap_or(0);
                let next =
                    (current as isize + step).rem_euclid(map.len() as isize) as usize;
                let code = map[next].0.clone();
                self.apply_language(&code);
            }
            1 => {
                settings.temperature = match settings.temperature {
                    TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
                    TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
                };
            }
            2 => {
                settings.distance = match settings.distance {
                    DistanceUnit::Km => DistanceUnit::Mi,
                    DistanceUnit::Mi => DistanceUnit::Km,
                };
            }
            3 => {
                settings.pressure = match settings.pressure {
                    PressureUnit::Mbar => PressureUnit::Inhg,
                    PressureUnit::Inhg => PressureUnit::Mbar,
                };
            }
            4 => {
                settings.height = match settings.height {
                    HeightUnit::Mm => HeightUnit::In,
                    HeightUnit::In => HeightUnit::Mm,
                };
            }
            5 => settings.round_temp_values = !settings.round_temp_values,
            6 => settings.show_quota = !settings.show_quota,
            7 => settings.time_24_hour = !settings.time_24_hour,
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let Some(flow) = &mut self.wizard else {
            return;
        };
        match flow.state {
            WizardState::Welcome => match key.code {
                KeyCode::Esc => self.wizard_step(WizardInput::Cancel),
                KeyCode::Up => flow.language_index = flow.language_index.saturating_sub(1),
                KeyCode::Down => {
                    flow.language_index =
                        (flow.language_index + 1).min(language_map().len().saturating_sub(1));
                }
                KeyCode::Enter => {
                    let code = language_map()
                        .get(flow.language_index)
                        .map(|(code, _)| code.clone());
                    if let Some(code) = code {
                        self.apply_language(&code);
                    }
                    self.wizard_step(WizardInput::Next);
                }
                _ => {}
            },
            WizardState::ApiSetup => match key.code {
                KeyCode::Esc => self.wizard_step(WizardInput::Back),
                KeyCode::Backspace => {
                    flow.key_input.pop();
                }
                KeyCode::Enter => {
                    let key_text = flow.key_input.trim().to_string();
                    if key_text.is_empty() {
                        return;
                    }
                    flow.status = Some(self.i18n.get("wizard.api_setup.status_validating"));
                    match WeatherClient::new(key_text) {
                        Ok(probe_client) => {
                            self.service.request_probe(
                                &probe_client,
                                self.store.settings.language.clone(),
                            );
                        }
                        Err(err) => tracing::error!(%err, "could not build client"),
                    }
                }
                KeyCode::Char(c) => flow.key_input.push(c),
                _ => {}
            },
            WizardState::LocationPrompt => match key.code {
                KeyCode::Esc => self.wizard_step(WizardInput::Back),
                KeyCode::Up | KeyCode::Down => flow.prompt_auto = !flow.prompt_auto,
                KeyCode::Enter => {
                    if flow.prompt_auto {
                        flow.status =
                            Some(self.i18n.get("wizard.location_prompt.status_adding"));
                        if let Some(client) = &self.client {
                            self.service.request_auto_location(client);
                        }
                    }
                    self.wizard_step(WizardInput::Next);
                }
                _ => {}
            },
            WizardState::LocationManage => match key.code {
                KeyCode::Esc => self.wizard_step(WizardInput::Back),
                KeyCode::Tab => self.wizard_step(WizardInput::Next),
                KeyCode::Enter => {
                    self.add_search_hit();
                    self.reset_search();
                }
                KeyCode::Up => self.search_selected = self.search_selected.saturating_sub(1),
                KeyCode::Down => {
                    self.search_selected = (self.search_selected + 1)
                        .min(self.search_results.len().saturating_sub(1));
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                    self.debouncer.poke();
                }
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                    self.debouncer.poke();
                }
                _ => {}
            },
            WizardState::Conclusion => match key.code {
                KeyCode::Esc => self.wizard_step(WizardInput::Back),
                KeyCode::Enter => self.wizard_step(WizardInput::Next),
                _ => {}
            },
            WizardState::Done | WizardState::Cancelled => {}
        }
    }
}

/// Draw, drain replies, fire debounced searches, and poll input until
/// the user quits or a first-run wizard is cancelled.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| screens::render(frame, app))?;

        app.drain_messages();
        app.fire_debounce();

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_exit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn settings_cycle_flips_units_both_ways() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let mut app = App::new(store, i18n, runtime.handle().clone());

        app.settings_index = 1;
        app.cycle_setting(1);
        assert_eq!(app.store.settings.temperature, TemperatureUnit::Fahrenheit);
        app.cycle_setting(-1);
        assert_eq!(app.store.settings.temperature, TemperatureUnit::Celsius);

        app.settings_index = 5;
        app.cycle_setting(1);
        assert!(!app.store.settings.round_temp_values);
    }

    #[test]
    fn fresh_store_opens_the_wizard() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let app = App::new(store, i18n, runtime.handle().clone());

        assert_eq!(app.screen, Screen::Wizard);
        assert!(app.wizard.is_some());
    }

    #[test]
    fn cancelled_wizard_requests_exit() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let mut app = App::new(store, i18n, runtime.handle().clone());

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.cancelled);
        assert!(app.should_exit);
    }

    #[test]
    fn stale_search_replies_are_dropped() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let mut app = App::new(store, i18n, runtime.handle().clone());

        let hit = |name: &str| SearchLocation {
            ident: 1,
            name: name.to_string(),
            region: String::new(),
            country: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        };
        let reply = |generation, name: &str| WeatherMessage::SearchDone {
            generation,
            outcome: Ok(brisa_api::Fetched {
                data: vec![hit(name)],
                quota_left: None,
            }),
        };

        app.search_generation = 2;
        app.apply_message(reply(1, "old"));
        assert!(app.search_results.is_empty());

        app.apply_message(reply(2, "new"));
        assert_eq!(app.search_results.len(), 1);
        assert_eq!(app.search_results[0].name, "new");

        // A late reply from the superseded query cannot overwrite.
        app.apply_message(reply(1, "old"));
        assert_eq!(app.search_results[0].name, "new");
    }

    #[test]
    fn empty_auto_location_reply_reports_a_localized_status() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let mut app = App::new(store, i18n, runtime.handle().clone());
        assert!(app.wizard.is_some());

        app.apply_message(WeatherMessage::AutoLocated(Ok(brisa_api::Fetched {
            data: Vec::new(),
            quota_left: None,
        })));

        let flow = app.wizard.as_ref().unwrap();
        assert_eq!(
            flow.status.as_deref(),
            Some("Could not find a location matching your address")
        );
        assert!(app.store.settings.locations.is_empty());
    }

    #[test]
    fn unknown_api_codes_fall_back_to_the_generic_template() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path()).unwrap();
        let i18n = Localizer::install("en").unwrap();
        let app = App::new(store, i18n, runtime.handle().clone());

        let err = WeatherError::Api {
            message: "mystery".into(),
            code: 4242,
        };
        assert_eq!(
            app.describe_error(&err),
            "The weather service reported an error: mystery (4242)"
        );

        let known = WeatherError::Api {
            message: "API key provided is invalid".into(),
            code: 2006,
        };
        assert_eq!(app.describe_error(&known), "Your API key is invalid.");
    }
}
