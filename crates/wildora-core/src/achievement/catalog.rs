//! Achievement catalog.

use once_cell::sync::Lazy;

use super::model::{Achievement, AchievementIcon};

pub const FIRST_QUIZ: &str = "first_quiz";
pub const PERFECT_SCORE: &str = "perfect_score";
pub const SPEED_DEMON: &str = "speed_demon";
pub const LUCKY_13: &str = "lucky_13";
pub const SNAKE_FINDER: &str = "snake_finder";
pub const LAVENDER_HAZE: &str = "lavender_haze";
pub const ALL_TOO_WELL: &str = "all_too_well";

static ACHIEVEMENTS: Lazy<Vec<Achievement>> = Lazy::new(|| {
    vec![
        Achievement::new(
            FIRST_QUIZ,
            "Quiz Rookie",
            "Complete your first quiz!",
            AchievementIcon::Star,
            "yellow",
        ),
        Achievement::new(
            PERFECT_SCORE,
            "Swiftie Scholar",
            "Get a perfect score on any quiz!",
            AchievementIcon::Trophy,
            "purple",
        ),
        Achievement::new(
            SPEED_DEMON,
            "Lightning Fast",
            "Complete a quiz in under 30 seconds!",
            AchievementIcon::Star,
            "blue",
        ),
        Achievement::new(
            LUCKY_13,
            "Lucky 13",
            "Found the lucky number 13!",
            AchievementIcon::Star,
            "yellow",
        ),
        Achievement::new(
            SNAKE_FINDER,
            "Snake Finder",
            "Spotted the reputation snake!",
            AchievementIcon::Trophy,
            "gray",
        ),
        Achievement::new(
            LAVENDER_HAZE,
            "Lavender Haze",
            "Found the lavender haze!",
            AchievementIcon::Star,
            "purple",
        ),
        Achievement::new(
            ALL_TOO_WELL,
            "All Too Well",
            "Found the legendary red scarf!",
            AchievementIcon::Trophy,
            "red",
        ),
    ]
});

pub fn achievements() -> &'static [Achievement] {
    &ACHIEVEMENTS
}

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}
