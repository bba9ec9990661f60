//! Quiz attempt and achievement recording port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;
use crate::error::Result;
use crate::quiz::{QuizKind, QuizResult};

/// Body of `POST /api/quiz/attempt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub quiz_type: QuizKind,
    pub score: u32,
    pub questions_answered: usize,
    /// Seconds
    pub time_taken: u64,
}

impl QuizAttempt {
    pub fn from_result(kind: QuizKind, result: &QuizResult, questions_answered: usize) -> Self {
        Self {
            quiz_type: kind,
            score: result.score,
            questions_answered,
            time_taken: result.time_taken_secs,
        }
    }
}

/// Response of `POST /api/quiz/attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttemptReceipt {
    pub coins_earned: u64,
}

/// Body of `POST /api/achievements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub achievement_id: String,
    pub achievement_name: String,
}

impl From<&Achievement> for AchievementRecord {
    fn from(achievement: &Achievement) -> Self {
        Self {
            achievement_id: achievement.id.clone(),
            achievement_name: achievement.name.clone(),
        }
    }
}

/// Remote endpoints that record user activity.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// `POST /api/quiz/attempt`
    async fn submit_quiz_attempt(&self, attempt: &QuizAttempt) -> Result<QuizAttemptReceipt>;

    /// `POST /api/achievements`; the response body is not consumed.
    async fn record_achievement(&self, record: &AchievementRecord) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{PERFECT_SCORE, find_achievement};

    #[test]
    fn test_attempt_wire_format() {
        let result = QuizResult {
            score: 25,
            total_points: 45,
            time_taken_secs: 42,
            dominant_era: Some("folklore".to_string()),
        };
        let body = serde_json::to_value(QuizAttempt::from_result(QuizKind::Mixed, &result, 5))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "quiz_type": "mixed",
                "score": 25,
                "questions_answered": 5,
                "time_taken": 42
            })
        );
    }

    #[test]
    fn test_achievement_record_from_catalog() {
        let record = AchievementRecord::from(find_achievement(PERFECT_SCORE).unwrap());
        assert_eq!(record.achievement_id, "perfect_score");
        assert_eq!(record.achievement_name, "Swiftie Scholar");
    }
}
