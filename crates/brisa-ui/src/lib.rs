//! Terminal front end for Brisa: screens, unit formatting, the setup
//! wizard state machine, and the async fetch dispatch feeding the UI loop.

pub mod app;
pub mod fields;
pub mod format;
pub mod screens;
pub mod services;
pub mod wizard;

use anyhow::Result;

/// Initialize logging for the application.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("brisa ui initialized");
    Ok(())
}
