//! Achievement domain module.
//!
//! - `model`: `Achievement` definition
//! - `catalog`: static achievement list and badge ids
//! - `evaluator`: pure badge rules over a `QuizResult`

mod catalog;
mod evaluator;
mod model;

pub use catalog::{
    ALL_TOO_WELL, FIRST_QUIZ, LAVENDER_HAZE, LUCKY_13, PERFECT_SCORE, SNAKE_FINDER, SPEED_DEMON,
    achievements, find_achievement,
};
pub use evaluator::{SPEED_DEMON_THRESHOLD_SECS, evaluate_quiz};
pub use model::{Achievement, AchievementIcon};
