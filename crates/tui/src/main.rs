mod app;
mod config;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    tracing::info!(title = %config.title, "starting balance sheet");
    let mut app = app::App::new(&config);
    let result = app.run();
    match &result {
        Ok(()) => tracing::info!(
            transactions = app.state.ledger.len(),
            "balance sheet closed"
        ),
        Err(err) => tracing::error!("balance sheet failed: {err}"),
    }
    result
}

/// Logs go to `log_file` only; stdout is owned by the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "balance_sheet_tui={level},ledger={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
