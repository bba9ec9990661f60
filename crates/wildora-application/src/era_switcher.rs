//! Active era theme, kept in step with the profile's favorite era.

use std::sync::Arc;

use tokio::sync::RwLock;
use wildora_core::era::{EraTheme, FontProvider, ThemeContext, era_or_default, find_era};
use wildora_core::user::ProfileUpdate;
use wildora_core::{Result, WildoraError};

use crate::profile_store::ProfileStore;

pub struct EraSwitcher {
    store: Arc<ProfileStore>,
    fonts: Arc<dyn FontProvider>,
    context: RwLock<ThemeContext>,
}

impl EraSwitcher {
    pub fn new(store: Arc<ProfileStore>, fonts: Arc<dyn FontProvider>) -> Self {
        Self {
            store,
            fonts,
            context: RwLock::new(ThemeContext::default()),
        }
    }

    pub async fn context(&self) -> ThemeContext {
        self.context.read().await.clone()
    }

    /// Applies the loaded profile's favorite era. Unknown ids fall back to
    /// the default era.
    pub async fn sync_from_profile(&self) -> ThemeContext {
        let Some(profile) = self.store.profile().await else {
            return self.context().await;
        };
        let theme = era_or_default(&profile.favorite_era);
        self.apply(theme).await
    }

    /// Validates an era id against the catalog.
    pub fn select_era(era_id: &str) -> Result<&'static EraTheme> {
        find_era(era_id)
            .ok_or_else(|| WildoraError::validation(format!("unknown era '{}'", era_id)))
    }

    /// Switches theme and persists the choice as the favorite era.
    ///
    /// A failed profile update is logged; the theme switches regardless.
    pub async fn switch(&self, era_id: &str) -> Result<ThemeContext> {
        let theme = Self::select_era(era_id)?;
        let context = self.apply(theme).await;

        if let Err(e) = self
            .store
            .update(ProfileUpdate::favorite_era(&theme.id))
            .await
        {
            tracing::warn!("[EraSwitcher] Failed to save favorite era {}: {}", theme.id, e);
        }
        Ok(context)
    }

    async fn apply(&self, theme: &EraTheme) -> ThemeContext {
        if let Err(e) = self.fonts.ensure_loaded(&theme.font) {
            tracing::warn!("[EraSwitcher] Failed to load font {}: {}", theme.font, e);
        }
        let context = ThemeContext::for_era(theme);
        *self.context.write().await = context.clone();
        tracing::debug!("[EraSwitcher] Theme set to {}", theme.id);
        context
    }
}
