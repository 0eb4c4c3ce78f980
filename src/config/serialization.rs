//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use std::path::Path;

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# logreel configuration
# Precedence: command-line flags > environment > this file > defaults

# Rotation period in milliseconds (LOGREEL_PERIOD_MS)
period_ms = {period_ms}

# Log panel capacity in lines; oldest lines are dropped first (LOGREEL_CAPACITY)
capacity = {capacity}

# After a scroll input, pause rotation for this many milliseconds
scroll_grace_ms = {scroll_grace_ms}

# Terminal redraw period in milliseconds
frame_ms = {frame_ms}

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = "{level}"              # trace, debug, info, warn, error
file_enabled = {file_enabled}        # The TUI never logs to the terminal; enable to keep a log file
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"      # hourly, daily, never
file_prefix = "{file_prefix}"
"#,
            period_ms = self.period.as_millis(),
            capacity = self.capacity,
            scroll_grace_ms = self.scroll_grace.as_millis(),
            frame_ms = self.frame.as_millis(),
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml())
    }
}
