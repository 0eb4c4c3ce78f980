// CLI module - command-line argument parsing and handlers
//
// Run flags override the layered config; the `config` subcommand manages
// the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Print the config file location

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// logreel - a scrolling log panel that rotates demo content
#[derive(Parser, Debug)]
#[command(name = "logreel")]
#[command(version = VERSION)]
#[command(about = "Scrolling log panel with periodic, visibility-aware content", long_about = None)]
pub struct Cli {
    /// Print produced content to stdout instead of drawing the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Rotation period in milliseconds
    #[arg(long, value_name = "MS")]
    pub period_ms: Option<u64>,

    /// Log panel capacity in lines
    #[arg(long, value_name = "LINES")]
    pub capacity: Option<usize>,

    /// Stop after this many scheduler ticks (headless only)
    #[arg(long, value_name = "N")]
    pub ticks: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply run flags on top of the loaded configuration (flags win)
    pub fn apply(&self, config: &mut Config) {
        if self.headless {
            config.enable_tui = false;
        }
        if let Some(ms) = self.period_ms {
            config.period = Duration::from_millis(ms);
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity.max(1);
        }
        if self.ticks.is_some() {
            config.tick_limit = self.ticks;
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
///
/// Runs before any config is loaded, so `--path` and `--reset` still work
/// when the config file is broken. Only `--show` loads the config.
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                let mut config = Config::load()?;
                cli.apply(&mut config);
                handle_config_show(&config);
            } else if reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: logreel config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the log panel
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if reset_config_at(&path, confirm_overwrite)? {
        println!("Config reset to defaults: {}", path.display());
    } else {
        println!("Aborted.");
    }
    Ok(())
}

/// Ask on stderr before overwriting an existing file
fn confirm_overwrite(path: &Path) -> Result<bool> {
    eprint!(
        "Config file exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read confirmation")?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Write the default config to `path`. An existing file (parseable or not)
/// is only replaced when `confirm` agrees. Returns whether it was written.
fn reset_config_at(path: &Path, confirm: impl FnOnce(&Path) -> Result<bool>) -> Result<bool> {
    if path.exists() && !confirm(path)? {
        return Ok(false);
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(true)
}
