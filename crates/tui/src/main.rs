//! `stockroom` binary: load the inventory, run the form until exit.

use std::process::ExitCode;

use anyhow::{Context, Result};

use stockroom_inventory::{FileBackend, InventoryStore};
use stockroom_observability::LogTarget;
use stockroom_tui::{App, AppConfig, TerminalSession, input, ui};

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    if let LogTarget::Disabled(reason) = stockroom_observability::init(&config.log_file) {
        eprintln!("stockroom: logging disabled ({reason})");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "stockroom exited with error");
            eprintln!("stockroom: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<()> {
    tracing::info!(
        inventory_file = %config.inventory_file.display(),
        policy = ?config.decode_policy,
        "starting"
    );

    // Load before touching the terminal so a fatal diagnostic stays readable.
    let store = InventoryStore::open(
        FileBackend::new(&config.inventory_file),
        config.decode_policy,
    )
    .context("failed to load inventory")?;
    tracing::info!(
        path = %store.backend().path().display(),
        items = store.len(),
        "inventory ready"
    );

    let mut app = App::new(store);
    let mut session = TerminalSession::new().context("failed to set up terminal")?;

    while app.is_running() {
        session
            .terminal()
            .draw(|frame| ui::draw(frame, &app))
            .context("failed to draw")?;

        if let Some(action) = input::read_action().context("failed to read terminal input")? {
            app.handle(action);
        }
    }

    Ok(())
}
