//! Easter-egg hunt.
//!
//! A hunt is activated at random when a page is visited. Each egg can be
//! found once; finding it yields the reward the caller then applies to the
//! profile.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::achievement::{ALL_TOO_WELL, LAVENDER_HAZE, LUCKY_13, SNAKE_FINDER};

/// Probability that visiting a page starts a hunt.
pub const HUNT_ACTIVATION_CHANCE: f64 = 0.3;
/// Delay between activation and showing the hints.
pub const HINT_DELAY: Duration = Duration::from_secs(2);
/// How long the "egg found" banner stays up.
pub const FOUND_BANNER_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EggKind {
    Number,
    Symbol,
    Color,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggReward {
    pub coins: u64,
    pub badge: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterEgg {
    pub id: String,
    pub kind: EggKind,
    pub content: String,
    pub hint: String,
    pub reward: EggReward,
    pub found: bool,
}

impl EasterEgg {
    fn new(id: &str, kind: EggKind, content: &str, hint: &str, reward: (u64, &str, &str)) -> Self {
        let (coins, badge, description) = reward;
        Self {
            id: id.to_string(),
            kind,
            content: content.to_string(),
            hint: hint.to_string(),
            reward: EggReward {
                coins,
                badge: Some(badge.to_string()),
                description: description.to_string(),
            },
            found: false,
        }
    }
}

fn default_eggs() -> Vec<EasterEgg> {
    vec![
        EasterEgg::new(
            "13",
            EggKind::Number,
            "13",
            "Taylor's lucky number is hidden somewhere...",
            (13, LUCKY_13, "Found the lucky number 13!"),
        ),
        EasterEgg::new(
            "snake",
            EggKind::Symbol,
            "🐍",
            "A certain reptile from the Reputation era lurks nearby...",
            (20, SNAKE_FINDER, "Spotted the reputation snake!"),
        ),
        EasterEgg::new(
            "purple",
            EggKind::Color,
            "lavender",
            "A dreamy purple hue from Midnights is calling...",
            (15, LAVENDER_HAZE, "Found the lavender haze!"),
        ),
        EasterEgg::new(
            "red_scarf",
            EggKind::Word,
            "scarf",
            "A red accessory from a famous breakup song...",
            (25, ALL_TOO_WELL, "Found the legendary red scarf!"),
        ),
    ]
}

/// Per-visit hunt state.
#[derive(Debug, Clone)]
pub struct EggHunt {
    eggs: Vec<EasterEgg>,
    active: bool,
}

impl EggHunt {
    /// Inactive hunt over the built-in eggs.
    pub fn new() -> Self {
        Self {
            eggs: default_eggs(),
            active: false,
        }
    }

    /// Rolls the activation chance; returns whether the hunt is now active.
    pub fn roll_activation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.active = rng.gen_bool(HUNT_ACTIVATION_CHANCE);
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn eggs(&self) -> &[EasterEgg] {
        &self.eggs
    }

    /// Eggs still waiting to be found; empty while the hunt is inactive.
    pub fn hidden_eggs(&self) -> impl Iterator<Item = &EasterEgg> {
        self.eggs.iter().filter(move |e| self.active && !e.found)
    }

    /// Marks the egg found and returns its reward.
    ///
    /// Returns `None` if the hunt is inactive, the egg is unknown, or it was
    /// already found.
    pub fn find(&mut self, egg_id: &str) -> Option<EggReward> {
        if !self.active {
            return None;
        }
        let egg = self.eggs.iter_mut().find(|e| e.id == egg_id)?;
        if egg.found {
            return None;
        }
        egg.found = true;
        Some(egg.reward.clone())
    }

    pub fn found_count(&self) -> usize {
        self.eggs.iter().filter(|e| e.found).count()
    }
}

impl Default for EggHunt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_inactive_hunt_hides_nothing() {
        let mut hunt = EggHunt::new();
        assert_eq!(hunt.hidden_eggs().count(), 0);
        assert_eq!(hunt.find("13"), None);
    }

    #[test]
    fn test_egg_is_found_once() {
        let mut hunt = EggHunt::new();
        hunt.set_active(true);
        assert_eq!(hunt.hidden_eggs().count(), 4);

        let reward = hunt.find("snake").unwrap();
        assert_eq!(reward.coins, 20);
        assert_eq!(reward.badge.as_deref(), Some(SNAKE_FINDER));

        assert_eq!(hunt.find("snake"), None);
        assert_eq!(hunt.find("missing"), None);
        assert_eq!(hunt.found_count(), 1);
        assert_eq!(hunt.hidden_eggs().count(), 3);
    }

    #[test]
    fn test_activation_rate_is_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut hunt = EggHunt::new();
        let active = (0..10_000)
            .filter(|_| hunt.roll_activation(&mut rng))
            .count();
        assert!((2_700..3_300).contains(&active), "activated {} times", active);
    }
}
