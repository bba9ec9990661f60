//! Lyrics library search.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub album: String,
    pub era: String,
    pub lyrics: String,
    pub image: String,
}

impl Song {
    fn new(id: &str, title: &str, album: &str, era: &str, lyrics: &str, image: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            album: album.to_string(),
            era: era.to_string(),
            lyrics: lyrics.to_string(),
            image: image.to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.album.to_lowercase().contains(needle)
            || self.lyrics.to_lowercase().contains(needle)
    }
}

static SONGS: Lazy<Vec<Song>> = Lazy::new(|| {
    vec![
        Song::new(
            "1",
            "Shake It Off",
            "1989",
            "1989",
            "I stay out too late, got nothing in my brain, that's what people say...",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop",
        ),
        Song::new(
            "2",
            "Look What You Made Me Do",
            "reputation",
            "Reputation",
            "I don't like your little games, don't like your tilted stage...",
            "https://images.unsplash.com/photo-1614624532983-4ce03382d63d?w=300&h=300&fit=crop",
        ),
        Song::new(
            "3",
            "cardigan",
            "folklore",
            "Folklore",
            "Vintage tee, brand new phone, high heels on cobblestones...",
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=300&h=300&fit=crop",
        ),
        Song::new(
            "4",
            "Anti-Hero",
            "Midnights",
            "Midnights",
            "I have this thing where I get older but just never wiser...",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=300&h=300&fit=crop",
        ),
    ]
});

pub fn songs() -> &'static [Song] {
    &SONGS
}

/// Case-insensitive substring search over title, album and lyrics.
///
/// An empty term matches every song.
pub fn search<'a>(songs: &'a [Song], term: &str) -> Vec<&'a Song> {
    let needle = term.trim().to_lowercase();
    songs.iter().filter(|s| s.matches(&needle)).collect()
}
