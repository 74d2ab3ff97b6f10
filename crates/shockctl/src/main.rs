use std::env;
use std::fs;
use std::panic;

use anyhow::Result;
use shockctl::application::cli;
use shockctl::application::ui;
use shockctl::domain::models::Credentials;
use shockctl::domain::models::DispatcherName;
use shockctl::infrastructure::clients::DispatcherManager;
use tracing_appender::non_blocking::WorkerGuard;

// Stdout belongs to the TUI, so logs go to a file in the cache directory.
fn setup_tracing() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("shockctl");
    fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "shockctl.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    return Ok(guard);
}

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    if !cli::parse().await? {
        return Ok(());
    }

    let _guard = setup_tracing()?;

    // Credentials are resolved once, before the loop. A missing token or
    // device ID terminates the process here with a user-visible message.
    let credentials = Credentials::from_config()?;
    let dispatcher = DispatcherManager::get(DispatcherName::default(), credentials)?;

    tracing::info!(dispatcher = %dispatcher.name(), "starting interaction loop");

    return ui::start_loop(dispatcher).await;
}
