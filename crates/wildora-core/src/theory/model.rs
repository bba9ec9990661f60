use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum TheoryCategory {
    #[default]
    #[serde(rename = "Music Video")]
    #[strum(serialize = "Music Video")]
    MusicVideo,
    #[serde(rename = "Secret Message")]
    #[strum(serialize = "Secret Message")]
    SecretMessage,
    #[serde(rename = "Easter Egg")]
    #[strum(serialize = "Easter Egg")]
    EasterEgg,
}

/// How votes on a thread are displayed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum VoteType {
    #[default]
    Hearts,
    #[serde(rename = "Snake Rings")]
    #[strum(serialize = "Snake Rings")]
    SnakeRings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: TheoryCategory,
    /// Net votes; may go negative
    pub votes: i64,
    pub vote_type: VoteType,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}
