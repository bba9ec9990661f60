//! UserProfile domain model and request payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::era::DEFAULT_ERA_ID;

/// User profile as owned by the profile API.
///
/// The client only ever holds a cached copy; every mutation goes through the
/// API and the server response replaces the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: String,
    pub favorite_era: String,
    /// SwiftCoin balance
    pub swift_coins: u64,
    /// Granted badge ids, each present at most once
    #[serde(default, deserialize_with = "deserialize_badges")]
    pub achievement_badges: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserProfile {
    /// Returns true if the badge has already been granted.
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.achievement_badges.iter().any(|b| b == badge_id)
    }
}

/// Drops repeated badge ids while keeping grant order.
fn deserialize_badges<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    let mut badges: Vec<String> = Vec::new();
    for badge in raw.unwrap_or_default() {
        if !badges.contains(&badge) {
            badges.push(badge);
        }
    }
    Ok(badges)
}

/// Body of `POST /api/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub favorite_era: String,
    pub swift_coins: u64,
    pub achievement_badges: Vec<String>,
}

impl Default for NewProfile {
    fn default() -> Self {
        Self {
            favorite_era: DEFAULT_ERA_ID.to_string(),
            swift_coins: 0,
            achievement_badges: Vec::new(),
        }
    }
}

/// Body of `PUT /api/user/profile`: only the fields that changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_era: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_coins: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_badges: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn favorite_era(era: impl Into<String>) -> Self {
        Self {
            favorite_era: Some(era.into()),
            ..Self::default()
        }
    }

    pub fn swift_coins(balance: u64) -> Self {
        Self {
            swift_coins: Some(balance),
            ..Self::default()
        }
    }

    /// Full badge list with `badge_id` appended to the profile's current set.
    pub fn badge_added(profile: &UserProfile, badge_id: &str) -> Self {
        let mut badges = profile.achievement_badges.clone();
        if !badges.iter().any(|b| b == badge_id) {
            badges.push(badge_id.to_string());
        }
        Self {
            achievement_badges: Some(badges),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.favorite_era.is_none()
            && self.swift_coins.is_none()
            && self.achievement_badges.is_none()
    }
}
