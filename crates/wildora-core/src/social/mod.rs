//! Simulated social feed and fan mood boards.

mod feed;
mod mood_board;

pub use feed::{Post, SocialFeed, Story};
pub use mood_board::{MoodBoard, MoodBoards, MoodItem, MoodItemKind, NewMoodBoard, MOOD_BOARD_CREATOR};
