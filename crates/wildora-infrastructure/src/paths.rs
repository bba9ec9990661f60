//! Path management for Wildora configuration files.
//!
//! ```text
//! ~/.config/wildora/
//! └── config.toml
//! ```
//!
//! `XDG_CONFIG_HOME` replaces `~/.config` when set.

use std::path::PathBuf;

use wildora_core::{Result, WildoraError};

const APP_DIR: &str = "wildora";
const CONFIG_FILE: &str = "config.toml";

pub struct WildoraPaths;

impl WildoraPaths {
    /// Returns the Wildora configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        Self::config_dir_from(std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from))
    }

    fn config_dir_from(xdg_config_home: Option<PathBuf>) -> Result<PathBuf> {
        let base = match xdg_config_home.filter(|p| p.is_absolute()) {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or_else(|| WildoraError::config("Cannot find home directory"))?
                .join(".config"),
        };
        Ok(base.join(APP_DIR))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
