//! Fan-theory discussion board.

mod board;
mod model;

pub use board::{NewComment, NewThread, TheoryBoard};
pub use model::{Comment, TheoryCategory, Thread, VoteType};
