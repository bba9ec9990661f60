//! Composition root: wires config, the HTTP client and the use cases.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use wildora_application::{
    AchievementService, EasterEggService, EraSwitcher, NotificationCenter, ProfileStore,
    QuizUseCase,
};
use wildora_core::activity::ActivityApi;
use wildora_core::config::AppConfig;
use wildora_core::notification::{NotificationEvent, NotificationTiming};
use wildora_core::user::ProfileApi;
use wildora_infrastructure::{ConfigService, HttpWildoraApi, StylesheetFontProvider};

pub struct AppContext {
    pub store: Arc<ProfileStore>,
    pub eras: EraSwitcher,
    pub quiz: QuizUseCase,
    pub eggs: EasterEggService,
    achievements: Arc<AchievementService>,
    notifications: mpsc::UnboundedReceiver<NotificationEvent>,
}

impl AppContext {
    /// Waits for outstanding achievement records, then drops every service
    /// and keeps the event stream. The notification driver closes it once
    /// the queue has drained.
    pub async fn shutdown(self) -> mpsc::UnboundedReceiver<NotificationEvent> {
        self.achievements.flush().await;
        self.notifications
    }
}

/// Loads the config file (plus environment overrides).
pub fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    let service = match path {
        Some(path) => ConfigService::new(path),
        None => ConfigService::new_default().context("Failed to resolve config path")?,
    };
    service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))
}

/// Builds every service. Must run inside the tokio runtime.
pub fn build(config: AppConfig) -> AppContext {
    let http = Arc::new(HttpWildoraApi::from_settings(&config.api));
    let profiles: Arc<dyn ProfileApi> = http.clone();
    let activity: Arc<dyn ActivityApi> = http;

    let store = Arc::new(ProfileStore::new(profiles));
    let achievements = Arc::new(AchievementService::new(store.clone(), activity.clone()));
    let (center, notifications) =
        NotificationCenter::spawn(NotificationTiming::from(&config.notifications));

    AppContext {
        eras: EraSwitcher::new(store.clone(), Arc::new(StylesheetFontProvider::new())),
        quiz: QuizUseCase::new(store.clone(), activity, achievements.clone())
            .with_notifications(center.clone()),
        eggs: EasterEggService::new(store.clone(), achievements.clone())
            .with_notifications(center),
        store,
        achievements,
        notifications,
    }
}
