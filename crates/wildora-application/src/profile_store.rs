//! Cached user profile synchronized with the profile API.
//!
//! The server is the source of truth: every successful call replaces the
//! cached copy with the response body. Failures are logged, kept as a
//! displayable message and returned; nothing is retried.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use wildora_core::user::{NewProfile, ProfileApi, ProfileUpdate, UserProfile};
use wildora_core::Result;

/// Point-in-time view of the store for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Outcome of [`ProfileStore::add_achievement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeGrant {
    /// The update went through; carries the server's profile
    Granted(UserProfile),
    /// The cached profile already holds the badge
    AlreadyHeld,
    /// Another grant of the same badge has not resolved yet
    InFlight,
    /// No profile is loaded
    NoProfile,
}

impl BadgeGrant {
    pub fn is_granted(&self) -> bool {
        matches!(self, BadgeGrant::Granted(_))
    }
}

pub struct ProfileStore {
    api: Arc<dyn ProfileApi>,
    state: RwLock<ProfileSnapshot>,
    /// Badge ids with an update request outstanding
    badges_in_flight: Mutex<HashSet<String>>,
}

impl ProfileStore {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self {
            api,
            state: RwLock::new(ProfileSnapshot::default()),
            badges_in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn profile(&self) -> Option<UserProfile> {
        self.state.read().await.profile.clone()
    }

    pub async fn snapshot(&self) -> ProfileSnapshot {
        self.state.read().await.clone()
    }

    /// Loads the current user's profile, creating it when the API has none.
    pub async fn fetch(&self) -> Result<UserProfile> {
        self.state.write().await.loading = true;

        let result = match self.api.fetch_profile().await {
            Ok(profile) => Ok(profile),
            Err(e) if e.is_not_found() => {
                tracing::info!("[ProfileStore] No profile yet, creating one");
                self.api.create_profile(&NewProfile::default()).await
            }
            Err(e) => Err(e),
        };

        self.settle(result, "Failed to fetch profile").await
    }

    /// Submits the default profile and caches the server's copy.
    pub async fn create(&self) -> Result<UserProfile> {
        self.state.write().await.loading = true;
        let result = self.api.create_profile(&NewProfile::default()).await;
        self.settle(result, "Failed to create profile").await
    }

    /// Sends the changed fields.
    ///
    /// Returns `Ok(None)` without a request when no profile is loaded.
    pub async fn update(&self, update: ProfileUpdate) -> Result<Option<UserProfile>> {
        if self.state.read().await.profile.is_none() {
            tracing::debug!("[ProfileStore] Update skipped: no profile loaded");
            return Ok(None);
        }

        let result = self.api.update_profile(&update).await;
        let mut state = self.state.write().await;
        match result {
            Ok(profile) => {
                tracing::debug!(
                    "[ProfileStore] Profile updated: coins={}, badges={}",
                    profile.swift_coins,
                    profile.achievement_badges.len()
                );
                state.profile = Some(profile.clone());
                state.error = None;
                Ok(Some(profile))
            }
            Err(e) => {
                tracing::warn!("[ProfileStore] Failed to update profile: {}", e);
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Adds `amount` to the cached balance and pushes the new total.
    pub async fn add_swift_coins(&self, amount: u64) -> Result<Option<UserProfile>> {
        let Some(current) = self.profile().await.map(|p| p.swift_coins) else {
            tracing::debug!("[ProfileStore] Coin award skipped: no profile loaded");
            return Ok(None);
        };
        self.update(ProfileUpdate::swift_coins(current.saturating_add(amount)))
            .await
    }

    /// Grants a badge unless it is already held or already being granted.
    ///
    /// The in-flight slot is claimed before the cache is read, so the badge
    /// check always sees the result of any grant that released the slot.
    pub async fn add_achievement(&self, badge_id: &str) -> Result<BadgeGrant> {
        if !self
            .badges_in_flight
            .lock()
            .await
            .insert(badge_id.to_string())
        {
            tracing::debug!("[ProfileStore] Badge {} already in flight", badge_id);
            return Ok(BadgeGrant::InFlight);
        }

        let profile = match self.profile().await {
            Some(profile) if !profile.has_badge(badge_id) => profile,
            current => {
                self.badges_in_flight.lock().await.remove(badge_id);
                return Ok(match current {
                    Some(_) => BadgeGrant::AlreadyHeld,
                    None => BadgeGrant::NoProfile,
                });
            }
        };

        let result = self
            .update(ProfileUpdate::badge_added(&profile, badge_id))
            .await;
        self.badges_in_flight.lock().await.remove(badge_id);

        match result? {
            Some(updated) => {
                tracing::info!("[ProfileStore] Badge granted: {}", badge_id);
                Ok(BadgeGrant::Granted(updated))
            }
            None => Ok(BadgeGrant::NoProfile),
        }
    }

    /// Drops the cached profile (sign-out).
    pub async fn clear(&self) {
        *self.state.write().await = ProfileSnapshot::default();
    }

    async fn settle(&self, result: Result<UserProfile>, action: &str) -> Result<UserProfile> {
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(profile) => {
                tracing::info!(
                    "[ProfileStore] Profile loaded for {} (era: {}, coins: {})",
                    profile.user_id,
                    profile.favorite_era,
                    profile.swift_coins
                );
                state.profile = Some(profile.clone());
                state.error = None;
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!("[ProfileStore] {}: {}", action, e);
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
