//! Filesystem locations for config and logs

use std::path::PathBuf;

use crate::constants::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOGS_DIR_NAME};

/// Root config directory (`~/.folio`), falling back to the working directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path of the user config file
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Directory log files are written to
pub fn logs_dir() -> PathBuf {
    config_dir().join(LOGS_DIR_NAME)
}
