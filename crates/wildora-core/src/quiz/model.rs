//! Quiz domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which quiz is being played; sent as `quiz_type` with the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuizKind {
    /// Era preference questions mixed with scored lyrics/trivia questions
    Mixed,
    /// "Which era are you?" personality quiz, preference questions only
    Era,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuestionKind {
    /// Preference question, answers carry an era
    Era,
    Lyrics,
    Trivia,
}

impl QuestionKind {
    /// Scored questions contribute to `score`/`total_points`.
    pub fn is_scored(self) -> bool {
        !matches!(self, QuestionKind::Era)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl Answer {
    pub fn era(text: &str, era: &str) -> Self {
        Self {
            text: text.to_string(),
            era: Some(era.to_string()),
            is_correct: None,
        }
    }

    pub fn choice(text: &str, is_correct: bool) -> Self {
        Self {
            text: text.to_string(),
            era: None,
            is_correct: Some(is_correct),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub points: u32,
    pub answers: Vec<Answer>,
}

/// Outcome of one finished attempt. Never persisted beyond the attempt
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total_points: u32,
    pub time_taken_secs: u64,
    /// Most chosen era across preference questions, if any were asked
    pub dominant_era: Option<String>,
}

impl QuizResult {
    /// Score as a whole percentage of `total_points`.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_points == 0 {
            return 0;
        }
        ((self.score as f64 / self.total_points as f64) * 100.0).round() as u32
    }
}
