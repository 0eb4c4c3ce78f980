// logreel - a scrolling log panel that rotates demo content
//
// Once per period the rotator appends the next block of sample content (a
// code sample, a table, or an error traceback) to a bounded log buffer,
// unless the panel is hidden or the user is scrolling it.
//
// Architecture:
// - Rotator: tick counter, content generators, renderer, bounded sink
// - Scheduler: fixed-rate tokio interval + visibility gate
// - TUI (ratatui): side panel, logs panel, buttons; supplies visibility
// - Headless: prints produced content to stdout

mod cli;
mod config;
mod headless;
mod logging;
mod rotator;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle CLI commands first (config --show, --reset, --path)
    // so a broken config file can still be located and reset
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: flags > env > file > defaults
    let mut config = Config::load()?;
    cli.apply(&mut config);

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init_tracing(&config.logging, config.enable_tui);

    tracing::debug!(
        period_ms = config.period.as_millis() as u64,
        capacity = config.capacity,
        tui = config.enable_tui,
        "Configuration loaded"
    );

    if config.enable_tui {
        if config.tick_limit.is_some() {
            tracing::warn!("--ticks only applies to headless mode, ignoring");
        }
        if let Err(e) = tui::run_tui(config).await {
            tracing::error!("TUI error: {:?}", e);
            return Err(e);
        }
    } else {
        headless::run_headless(&config).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
