//! Easter-egg hunt wired to profile rewards.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use wildora_core::Result;
use wildora_core::achievement::Achievement;
use wildora_core::easter_egg::{EasterEgg, EggHunt, EggReward, FOUND_BANNER_DURATION, HINT_DELAY};

use crate::achievement_service::AchievementService;
use crate::notification_center::NotificationCenter;
use crate::profile_store::ProfileStore;

/// What finding an egg produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EggFound {
    pub reward: EggReward,
    pub coins_awarded: bool,
    pub badge: Option<&'static Achievement>,
    /// How long the found banner stays up
    pub banner_duration: Duration,
}

pub struct EasterEggService {
    store: Arc<ProfileStore>,
    achievements: Arc<AchievementService>,
    hunt: Mutex<EggHunt>,
    notifications: Option<NotificationCenter>,
}

impl EasterEggService {
    pub fn new(store: Arc<ProfileStore>, achievements: Arc<AchievementService>) -> Self {
        Self {
            store,
            achievements,
            hunt: Mutex::new(EggHunt::new()),
            notifications: None,
        }
    }

    pub fn with_notifications(mut self, notifications: NotificationCenter) -> Self {
        self.notifications = Some(notifications);
        self
    }

    /// Page visit: rolls whether the hunt is on.
    pub async fn visit(&self) -> bool {
        let mut hunt = self.hunt.lock().await;
        let active = hunt.roll_activation(&mut rand::thread_rng());
        if active {
            tracing::debug!("[EasterEggService] Hunt activated");
        }
        active
    }

    pub async fn set_active(&self, active: bool) {
        self.hunt.lock().await.set_active(active);
    }

    pub async fn hidden_eggs(&self) -> Vec<EasterEgg> {
        self.hunt.lock().await.hidden_eggs().cloned().collect()
    }

    /// Waits out the hint delay, then returns the hints of the eggs still
    /// hidden. Empty when the hunt is inactive.
    pub async fn hints(&self) -> Vec<String> {
        tokio::time::sleep(HINT_DELAY).await;
        self.hidden_eggs()
            .await
            .into_iter()
            .map(|egg| egg.hint)
            .collect()
    }

    /// Marks the egg found, then awards its coins and badge. A granted badge
    /// is queued as an unlock notification.
    ///
    /// Returns `Ok(None)` when the egg is unknown, already found or the hunt
    /// is inactive. Reward failures are logged.
    pub async fn find(&self, egg_id: &str) -> Result<Option<EggFound>> {
        let Some(reward) = self.hunt.lock().await.find(egg_id) else {
            return Ok(None);
        };
        tracing::info!("[EasterEggService] Found egg {}", egg_id);

        let coins_awarded = match self.store.add_swift_coins(reward.coins).await {
            Ok(updated) => updated.is_some(),
            Err(e) => {
                tracing::warn!("[EasterEggService] Failed to award egg coins: {}", e);
                false
            }
        };

        let badge = match &reward.badge {
            Some(badge_id) => self
                .achievements
                .grant_all([badge_id.as_str()])
                .await
                .into_iter()
                .next(),
            None => None,
        };
        if let (Some(center), Some(achievement)) = (&self.notifications, badge) {
            center.enqueue(vec![achievement.clone()]);
        }

        Ok(Some(EggFound {
            reward,
            coins_awarded,
            badge,
            banner_duration: FOUND_BANNER_DURATION,
        }))
    }
}
