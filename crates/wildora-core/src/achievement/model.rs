//! Achievement domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Icon shown on the unlock notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AchievementIcon {
    Trophy,
    Star,
}

/// Static achievement definition.
///
/// Only the id is persisted per user, inside `UserProfile::achievement_badges`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: AchievementIcon,
    pub color: String,
}

impl Achievement {
    pub(crate) fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: AchievementIcon,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon,
            color: color.to_string(),
        }
    }
}
