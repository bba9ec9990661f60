use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::era::DEFAULT_ERA_ID;
use crate::error::{Result, WildoraError};

/// Creator recorded on boards made locally.
pub const MOOD_BOARD_CREATOR: &str = "You";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoodItemKind {
    Image,
    Text,
    Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodItem {
    pub id: String,
    pub kind: MoodItemKind,
    pub content: String,
    pub position: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodBoard {
    pub id: String,
    pub title: String,
    pub era: String,
    pub items: Vec<MoodItem>,
    pub likes: u64,
    pub is_liked: bool,
    pub creator: String,
}

/// Input for [`MoodBoards::create`].
#[derive(Debug, Clone, Default)]
pub struct NewMoodBoard {
    pub title: String,
    /// Defaults to `midnights` when unset
    pub era: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MoodBoards {
    boards: Vec<MoodBoard>,
}

impl MoodBoards {
    pub fn new(boards: Vec<MoodBoard>) -> Self {
        Self { boards }
    }

    pub fn sample() -> Self {
        Self::new(sample_boards())
    }

    pub fn boards(&self) -> &[MoodBoard] {
        &self.boards
    }

    /// Creates an empty board and puts it first.
    pub fn create(&mut self, request: NewMoodBoard) -> Result<&MoodBoard> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(WildoraError::validation("mood board title is required"));
        }
        let era = request
            .era
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ERA_ID.to_string());

        self.boards.insert(
            0,
            MoodBoard {
                id: Uuid::new_v4().to_string(),
                title: title.to_string(),
                era,
                items: Vec::new(),
                likes: 0,
                is_liked: false,
                creator: MOOD_BOARD_CREATOR.to_string(),
            },
        );
        Ok(&self.boards[0])
    }

    pub fn toggle_like(&mut self, board_id: &str) -> Option<&MoodBoard> {
        let board = self.boards.iter_mut().find(|b| b.id == board_id)?;
        if board.is_liked {
            board.likes = board.likes.saturating_sub(1);
        } else {
            board.likes += 1;
        }
        board.is_liked = !board.is_liked;
        Some(board)
    }
}

fn item(id: &str, kind: MoodItemKind, content: &str, position: (f32, f32)) -> MoodItem {
    MoodItem {
        id: id.to_string(),
        kind,
        content: content.to_string(),
        position,
    }
}

fn sample_boards() -> Vec<MoodBoard> {
    vec![
        MoodBoard {
            id: "1".to_string(),
            title: "Folklore Cabin Vibes".to_string(),
            era: "folklore".to_string(),
            items: vec![
                item(
                    "1",
                    MoodItemKind::Image,
                    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=200&h=200&fit=crop",
                    (10.0, 10.0),
                ),
                item("2", MoodItemKind::Text, "cozy autumn mornings", (60.0, 20.0)),
                item("3", MoodItemKind::Color, "#708090", (30.0, 60.0)),
            ],
            likes: 234,
            is_liked: false,
            creator: "folklore_dreamer".to_string(),
        },
        MoodBoard {
            id: "2".to_string(),
            title: "Midnights Purple Dreams".to_string(),
            era: "midnights".to_string(),
            items: vec![
                item(
                    "1",
                    MoodItemKind::Image,
                    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=200&h=200&fit=crop",
                    (20.0, 15.0),
                ),
                item("2", MoodItemKind::Text, "3am thoughts", (50.0, 50.0)),
            ],
            likes: 567,
            is_liked: true,
            creator: "midnight_rain".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_prepends_with_defaults() {
        let mut boards = MoodBoards::sample();
        let board = boards
            .create(NewMoodBoard {
                title: "Red Scarf Autumn".to_string(),
                era: None,
            })
            .unwrap()
            .clone();

        assert_eq!(board.era, "midnights");
        assert_eq!(board.creator, "You");
        assert_eq!(board.likes, 0);
        assert!(board.items.is_empty());
        assert!(Uuid::parse_str(&board.id).is_ok());
        assert_eq!(boards.boards()[0].id, board.id);
        assert_eq!(boards.boards().len(), 3);
    }

    #[test]
    fn test_create_requires_title() {
        let mut boards = MoodBoards::default();
        let err = boards.create(NewMoodBoard::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(boards.boards().is_empty());
    }

    #[test]
    fn test_toggle_like() {
        let mut boards = MoodBoards::sample();
        assert_eq!(boards.toggle_like("2").unwrap().likes, 566);
        assert_eq!(boards.toggle_like("2").unwrap().likes, 567);
        assert!(boards.toggle_like("nope").is_none());
    }
}
