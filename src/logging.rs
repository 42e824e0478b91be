// Logging setup and conditional logging macros.
//
// Logs go to a file, never to the terminal, so the TUI screen stays intact.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "assembly-endgame";
const LOG_FILE_NAME: &str = "game.log";

/// `<cache dir>/assembly-endgame/game.log`, if the platform has a cache dir.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
}

/// Route `log` output to `path`, filtered by `RUST_LOG` (default `info`).
///
/// Returns the path actually used.
pub fn init_logging(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no cache directory available")
        })?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
