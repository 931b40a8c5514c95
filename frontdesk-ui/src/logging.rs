//! Logging bootstrap.

use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paths;

/// Rotates old logs and installs the file logger.
///
/// Called once by the embedding application before anything else logs.
pub fn init(level: LevelFilter) -> io::Result<()> {
    paths::rotate_logs();

    let path = paths::log_file()
        .ok_or_else(|| io::Error::other("cannot determine log directory"))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|err| io::Error::other(err.to_string()))?;

    log::info!("logging to {}", path.display());
    Ok(())
}
