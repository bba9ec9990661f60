//! Badge granting on top of the profile store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use wildora_core::achievement::{Achievement, find_achievement};
use wildora_core::activity::{AchievementRecord, ActivityApi};
use wildora_core::{Result, WildoraError};

use crate::profile_store::{BadgeGrant, ProfileStore};

pub struct AchievementService {
    store: Arc<ProfileStore>,
    activity: Arc<dyn ActivityApi>,
    /// Record requests not yet awaited by [`AchievementService::flush`]
    pending_records: Mutex<Vec<JoinHandle<()>>>,
}

impl AchievementService {
    pub fn new(store: Arc<ProfileStore>, activity: Arc<dyn ActivityApi>) -> Self {
        Self {
            store,
            activity,
            pending_records: Mutex::new(Vec::new()),
        }
    }

    /// Grants a catalog badge.
    ///
    /// Returns the achievement when this call granted it. A successful grant
    /// is also recorded through `POST /api/achievements` in the background;
    /// the outcome of that call is only logged.
    pub async fn grant(&self, badge_id: &str) -> Result<Option<&'static Achievement>> {
        let achievement = find_achievement(badge_id)
            .ok_or_else(|| WildoraError::validation(format!("unknown badge '{}'", badge_id)))?;

        match self.store.add_achievement(badge_id).await? {
            BadgeGrant::Granted(_) => {
                self.record_in_background(achievement).await;
                Ok(Some(achievement))
            }
            other => {
                tracing::debug!("[AchievementService] {} not granted: {:?}", badge_id, other);
                Ok(None)
            }
        }
    }

    /// Grants each badge in order. Failures are logged and skipped.
    pub async fn grant_all<I, S>(&self, badge_ids: I) -> Vec<&'static Achievement>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut granted = Vec::new();
        for badge_id in badge_ids {
            let badge_id = badge_id.as_ref();
            match self.grant(badge_id).await {
                Ok(Some(achievement)) => granted.push(achievement),
                Ok(None) => {}
                Err(e) => tracing::warn!(
                    "[AchievementService] Failed to grant {}: {}",
                    badge_id,
                    e
                ),
            }
        }
        granted
    }

    /// Waits for every record request started so far.
    ///
    /// The responses are not read; this only keeps the requests from being
    /// cancelled when the runtime shuts down.
    pub async fn flush(&self) {
        let pending = std::mem::take(&mut *self.pending_records.lock().await);
        if pending.is_empty() {
            return;
        }
        tracing::debug!("[AchievementService] Waiting for {} record(s)", pending.len());
        for handle in pending {
            if let Err(e) = handle.await {
                tracing::warn!("[AchievementService] Record task failed: {}", e);
            }
        }
    }

    async fn record_in_background(&self, achievement: &Achievement) {
        let activity = Arc::clone(&self.activity);
        let record = AchievementRecord::from(achievement);
        let handle = tokio::spawn(async move {
            if let Err(e) = activity.record_achievement(&record).await {
                tracing::warn!(
                    "[AchievementService] Failed to record {}: {}",
                    record.achievement_id,
                    e
                );
            }
        });

        let mut pending = self.pending_records.lock().await;
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}
