//! Configuration for the log rotator and its hosts
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by `cli`)
//! 2. Environment variables
//! 3. Config file (~/.config/logreel/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_PERIOD_MS: u64 = 1000;
const DEFAULT_SCROLL_GRACE_MS: u64 = 750;
const DEFAULT_FRAME_MS: u64 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How often the rotator ticks
    pub period: Duration,

    /// Log panel capacity in lines
    pub capacity: usize,

    /// How long after a scroll input the user still counts as scrolling
    pub scroll_grace: Duration,

    /// Terminal redraw period
    pub frame: Duration,

    /// Whether to run the terminal UI (false = headless stdout output)
    pub enable_tui: bool,

    /// Stop after this many scheduler ticks (headless only, CLI only)
    pub tick_limit: Option<u64>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
            capacity: crate::rotator::sink::DEFAULT_CAPACITY,
            scroll_grace: Duration::from_millis(DEFAULT_SCROLL_GRACE_MS),
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
            enable_tui: true,
            tick_limit: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub period_ms: Option<u64>,
    pub capacity: Option<usize>,
    pub scroll_grace_ms: Option<u64>,
    pub frame_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/logreel/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("logreel").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail fast, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment lookups (`env` returns the
    /// variable's value, if set)
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let env_u64 = |key: &str| env(key).and_then(|v| v.trim().parse::<u64>().ok());

        // Period: env > file > default
        let period_ms = env_u64("LOGREEL_PERIOD_MS")
            .or(file.period_ms)
            .unwrap_or(DEFAULT_PERIOD_MS);

        // Capacity: env > file > default
        let capacity = env("LOGREEL_CAPACITY")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .or(file.capacity)
            .unwrap_or(crate::rotator::sink::DEFAULT_CAPACITY);

        // Scroll grace: file > default
        let scroll_grace_ms = file.scroll_grace_ms.unwrap_or(DEFAULT_SCROLL_GRACE_MS);

        // Frame period: file > default
        let frame_ms = file.frame_ms.unwrap_or(DEFAULT_FRAME_MS);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("LOGREEL_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Logging settings: file config only (RUST_LOG env var handled in logging)
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            period: Duration::from_millis(period_ms),
            capacity: capacity.max(1),
            scroll_grace: Duration::from_millis(scroll_grace_ms),
            frame: Duration::from_millis(frame_ms.max(1)),
            enable_tui,
            tick_limit: None,
            logging,
        }
    }
}
