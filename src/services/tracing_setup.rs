//! Log file setup
//!
//! The terminal is in raw mode while the editor runs, so diagnostics go to a
//! file. Set `QUILL_LOG` (e.g. `QUILL_LOG=debug`) to change the level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "QUILL_LOG";

/// Default log location: `<data_local_dir>/quill/quill.log`, or the temp dir
pub fn main_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("quill"))
        .unwrap_or_else(std::env::temp_dir)
        .join("quill.log")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_file`.
///
/// Returns false if the file could not be opened or a subscriber is already
/// installed; the editor runs without logging in that case.
pub fn init_global(log_file: &Path) -> bool {
    if let Some(parent) = log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {}", log_file.display(), e);
            return false;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
