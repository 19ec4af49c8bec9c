use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use brisa_core::Store;
use brisa_i18n::Localizer;
use brisa_ui::app::{run_app, App};

fn main() -> Result<()> {
    brisa_ui::init()?;

    let store = Store::load(Store::default_dir()?).context("could not load configuration")?;

    // A broken fallback language leaves nothing to render with.
    let i18n = match Localizer::install(&store.settings.language) {
        Ok(i18n) => i18n,
        Err(err) => {
            tracing::error!(%err, "localization unavailable");
            eprintln!("brisa: {err}");
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new().context("could not start async runtime")?;
    let mut app = App::new(store, i18n, runtime.handle().clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
