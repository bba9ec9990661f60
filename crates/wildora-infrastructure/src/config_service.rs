//! Configuration service.
//!
//! Loads `AppConfig` from `config.toml`, writing a default file on first run,
//! then layers environment overrides on top.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use wildora_core::config::AppConfig;
use wildora_core::{Result, WildoraError};

use crate::paths::WildoraPaths;

pub const ENV_API_URL: &str = "WILDORA_API_URL";
pub const ENV_SESSION_TOKEN: &str = "WILDORA_SESSION_TOKEN";
pub const ENV_LOG_LEVEL: &str = "WILDORA_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to `~/.config/wildora/config.toml`.
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(WildoraPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents plus environment overrides.
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads the file, creating it with defaults when missing.
    pub fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::info!(
                "[ConfigService] No config at {}, writing defaults",
                self.path.display()
            );
            let config = AppConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            WildoraError::config(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!("[ConfigService] Loaded {}", self.path.display());
        Ok(config)
    }

    /// Writes the config through a temporary file and rename.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(config)?;
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| WildoraError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| WildoraError::io("Path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Applies `WILDORA_*` overrides. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = lookup(ENV_API_URL) {
        config.api.base_url = url;
    }
    if let Some(token) = lookup(ENV_SESSION_TOKEN) {
        config.api.session_token = Some(token);
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.debug.log_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::new(dir.path().join("nested").join("config.toml"));

        let config = service.load_file().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(service.path().exists());

        let reloaded = service.load_file().unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::new(dir.path().join("config.toml"));

        let mut config = AppConfig::default();
        config.api.timeout_secs = Some(15);
        config.notifications.stagger_ms = 500;
        service.save(&config).unwrap();

        assert_eq!(service.load_file().unwrap(), config);
        assert!(!dir.path().join(".config.toml.tmp").exists());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = ConfigService::new(path).load_file().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_URL, "https://api.wildora.example"),
            (ENV_SESSION_TOKEN, "secret"),
            (ENV_LOG_LEVEL, ""),
        ]);
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://api.wildora.example");
        assert_eq!(config.api.session_token.as_deref(), Some("secret"));
        assert_eq!(config.debug.log_level, "info");
    }
}
