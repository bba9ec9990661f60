//! Badge rules for a finished quiz.

use super::catalog::{FIRST_QUIZ, PERFECT_SCORE, SPEED_DEMON};
use crate::quiz::QuizResult;

/// Quizzes finished strictly under this many seconds earn `speed_demon`.
pub const SPEED_DEMON_THRESHOLD_SECS: u64 = 30;

/// Returns the badge ids newly earned by `result`.
///
/// Each rule is independent and skips badges already in `existing_badges`.
/// The order of the returned ids is `first_quiz`, `perfect_score`,
/// `speed_demon`, which is also the order unlock notifications are shown in.
pub fn evaluate_quiz<S: AsRef<str>>(
    result: &QuizResult,
    existing_badges: &[S],
) -> Vec<&'static str> {
    let held = |id: &str| existing_badges.iter().any(|b| b.as_ref() == id);
    let rules: [(&'static str, bool); 3] = [
        (FIRST_QUIZ, true),
        (PERFECT_SCORE, result.score == result.total_points),
        (
            SPEED_DEMON,
            result.time_taken_secs < SPEED_DEMON_THRESHOLD_SECS,
        ),
    ];

    rules
        .into_iter()
        .filter(|(id, earned)| *earned && !held(id))
        .map(|(id, _)| id)
        .collect()
}
