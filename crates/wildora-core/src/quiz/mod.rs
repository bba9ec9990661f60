//! Quiz domain module.
//!
//! - `model`: questions, answers and `QuizResult`
//! - `catalog`: built-in quizzes
//! - `session`: the `InProgress -> Completed` state machine
//! - `tally`: dominant-era tally

mod catalog;
mod model;
mod session;
mod tally;

pub use catalog::questions_for;
pub use model::{Answer, Difficulty, Question, QuestionKind, QuizKind, QuizResult};
pub use session::{QuizProgress, QuizSession, QuizState, RecordedAnswer};
pub use tally::dominant_era;
