//! Quiz state machine.
//!
//! ```text
//! InProgress(0, []) --answer--> InProgress(i + 1, answers + a) --last answer--> Completed(result)
//!        ^                                                                          |
//!        +------------------------------------ reset -------------------------------+
//! ```

use chrono::{DateTime, Utc};

use super::model::{Question, QuizKind, QuizResult};
use super::tally::dominant_era;
use crate::error::{Result, WildoraError};

/// What the user picked for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAnswer {
    /// Preference answer and the era it maps to
    Era(Option<String>),
    /// Scored answer
    Scored { correct: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        question_index: usize,
        answers: Vec<RecordedAnswer>,
    },
    Completed(QuizResult),
}

impl QuizState {
    fn initial() -> Self {
        QuizState::InProgress {
            question_index: 0,
            answers: Vec::new(),
        }
    }
}

/// Result of feeding one answer into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizProgress {
    Next { question_index: usize },
    Completed(QuizResult),
}

/// One play-through of a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    kind: QuizKind,
    questions: Vec<Question>,
    state: QuizState,
    /// When the first question was shown
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Starts a session whose clock begins now.
    pub fn new(kind: QuizKind, questions: Vec<Question>) -> Result<Self> {
        Self::new_at(kind, questions, Utc::now())
    }

    pub fn new_at(kind: QuizKind, questions: Vec<Question>, now: DateTime<Utc>) -> Result<Self> {
        if questions.is_empty() {
            return Err(WildoraError::validation("a quiz needs at least one question"));
        }
        Ok(Self {
            kind,
            questions,
            state: QuizState::initial(),
            started_at: now,
        })
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed(_))
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            QuizState::Completed(result) => Some(result),
            QuizState::InProgress { .. } => None,
        }
    }

    /// The question awaiting an answer, `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            QuizState::InProgress { question_index, .. } => self.questions.get(*question_index),
            QuizState::Completed(_) => None,
        }
    }

    pub fn answer(&mut self, choice: usize) -> Result<QuizProgress> {
        self.answer_at(choice, Utc::now())
    }

    /// Records answer `choice` for the current question.
    ///
    /// Fails without changing state if the quiz is already completed or the
    /// choice does not exist.
    pub fn answer_at(&mut self, choice: usize, now: DateTime<Utc>) -> Result<QuizProgress> {
        let QuizState::InProgress {
            question_index,
            answers,
        } = &mut self.state
        else {
            return Err(WildoraError::validation(
                "quiz already completed, reset to play again",
            ));
        };

        let question = &self.questions[*question_index];
        let answer = question.answers.get(choice).ok_or_else(|| {
            WildoraError::validation(format!(
                "question {} has no answer #{}",
                question.id, choice
            ))
        })?;

        let recorded = if question.kind.is_scored() {
            RecordedAnswer::Scored {
                correct: answer.is_correct.unwrap_or(false),
            }
        } else {
            RecordedAnswer::Era(answer.era.clone())
        };
        answers.push(recorded);

        if *question_index + 1 < self.questions.len() {
            *question_index += 1;
            return Ok(QuizProgress::Next {
                question_index: *question_index,
            });
        }

        let time_taken_secs = (now - self.started_at).num_seconds().max(0) as u64;
        let result = score_answers(&self.questions, answers, time_taken_secs);
        tracing::debug!(
            "[QuizSession] {} quiz completed: {}/{} in {}s",
            self.kind,
            result.score,
            result.total_points,
            result.time_taken_secs
        );
        self.state = QuizState::Completed(result.clone());
        Ok(QuizProgress::Completed(result))
    }

    pub fn reset(&mut self) {
        self.reset_at(Utc::now());
    }

    /// Back to the first question with an empty answer list and a fresh clock.
    pub fn reset_at(&mut self, now: DateTime<Utc>) {
        self.state = QuizState::initial();
        self.started_at = now;
    }
}

fn score_answers(
    questions: &[Question],
    answers: &[RecordedAnswer],
    time_taken_secs: u64,
) -> QuizResult {
    let mut score = 0;
    let mut total_points = 0;
    let mut eras: Vec<&str> = Vec::new();

    for (question, answer) in questions.iter().zip(answers) {
        match answer {
            RecordedAnswer::Scored { correct } => {
                total_points += question.points;
                if *correct {
                    score += question.points;
                }
            }
            RecordedAnswer::Era(Some(era)) => eras.push(era),
            RecordedAnswer::Era(None) => {}
        }
    }

    QuizResult {
        score,
        total_points,
        time_taken_secs,
        dominant_era: dominant_era(eras),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{Answer, Difficulty, QuestionKind};
    use crate::quiz::questions_for;
    use chrono::Duration;

    fn scored(id: u32, points: u32) -> Question {
        Question {
            id,
            prompt: format!("Question {}", id),
            kind: QuestionKind::Trivia,
            difficulty: Difficulty::Medium,
            points,
            answers: vec![Answer::choice("right", true), Answer::choice("wrong", false)],
        }
    }

    fn preference(id: u32) -> Question {
        Question {
            id,
            prompt: format!("Preference {}", id),
            kind: QuestionKind::Era,
            difficulty: Difficulty::Easy,
            points: 5,
            answers: vec![
                Answer::era("party", "1989"),
                Answer::era("cabin", "folklore"),
            ],
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-07-16T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_empty_quiz_is_rejected() {
        let err = QuizSession::new(QuizKind::Mixed, Vec::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_two_scored_questions_answered_quickly() {
        let t0 = start();
        let mut session =
            QuizSession::new_at(QuizKind::Mixed, vec![scored(1, 10), scored(2, 15)], t0).unwrap();

        assert_eq!(
            session.answer_at(0, t0 + Duration::seconds(10)).unwrap(),
            QuizProgress::Next { question_index: 1 }
        );
        let progress = session.answer_at(0, t0 + Duration::seconds(25)).unwrap();

        let expected = QuizResult {
            score: 25,
            total_points: 25,
            time_taken_secs: 25,
            dominant_era: None,
        };
        assert_eq!(progress, QuizProgress::Completed(expected.clone()));
        assert_eq!(session.result(), Some(&expected));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_preference_questions_only_feed_the_tally() {
        let t0 = start();
        let questions = vec![preference(1), scored(2, 10), preference(3), preference(4)];
        let mut session = QuizSession::new_at(QuizKind::Mixed, questions, t0).unwrap();

        session.answer_at(0, t0).unwrap(); // 1989
        session.answer_at(1, t0).unwrap(); // wrong
        session.answer_at(1, t0).unwrap(); // folklore
        let QuizProgress::Completed(result) =
            session.answer_at(0, t0 + Duration::seconds(40)).unwrap()
        else {
            panic!("expected completion");
        };

        assert_eq!(result.score, 0);
        assert_eq!(result.total_points, 10);
        assert_eq!(result.dominant_era.as_deref(), Some("1989"));
        assert_eq!(result.time_taken_secs, 40);
    }

    #[test]
    fn test_completed_session_rejects_answers_until_reset() {
        let t0 = start();
        let mut session = QuizSession::new_at(QuizKind::Mixed, vec![scored(1, 10)], t0).unwrap();
        session.answer_at(1, t0).unwrap();

        assert!(session.answer_at(0, t0).unwrap_err().is_validation());
        assert!(session.is_completed());

        session.reset_at(t0 + Duration::seconds(100));
        assert_eq!(
            session.state(),
            &QuizState::InProgress {
                question_index: 0,
                answers: Vec::new()
            }
        );
        assert_eq!(session.current_question().map(|q| q.id), Some(1));
    }

    #[test]
    fn test_out_of_range_choice_leaves_state_untouched() {
        let t0 = start();
        let mut session = QuizSession::new_at(QuizKind::Mixed, vec![scored(1, 10)], t0).unwrap();

        assert!(session.answer_at(7, t0).unwrap_err().is_validation());
        assert_eq!(
            session.state(),
            &QuizState::InProgress {
                question_index: 0,
                answers: Vec::new()
            }
        );
    }

    #[test]
    fn test_builtin_mixed_quiz_perfect_run() {
        let t0 = start();
        let mut session =
            QuizSession::new_at(QuizKind::Mixed, questions_for(QuizKind::Mixed), t0).unwrap();

        // Friday night: folklore, lyric: correct, trivia: 1989, aesthetic: folklore, trivia: correct
        for choice in [2, 0, 1, 0] {
            session.answer_at(choice, t0).unwrap();
        }
        let QuizProgress::Completed(result) =
            session.answer_at(1, t0 + Duration::seconds(61)).unwrap()
        else {
            panic!("expected completion");
        };

        assert_eq!(result.score, 45);
        assert_eq!(result.total_points, 45);
        assert_eq!(result.dominant_era.as_deref(), Some("folklore"));
        assert_eq!(result.accuracy_percent(), 100);
    }
}
