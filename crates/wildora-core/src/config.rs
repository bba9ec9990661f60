//! Client configuration model (`config.toml`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8787";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

/// Where the profile API lives and how to authenticate against it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token issued by the auth provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Request timeout; unset means requests wait until they resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_token: None,
            timeout_secs: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

fn default_stagger_ms() -> u64 {
    2000
}

fn default_display_ms() -> u64 {
    4000
}

fn default_fade_ms() -> u64 {
    300
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            stagger_ms: default_stagger_ms(),
            display_ms: default_display_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

/// Logging settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}
