use colored::Colorize;
use strum::IntoEnumIterator;
use wildora_core::era::era_themes;
use wildora_core::lyrics::{search, songs};
use wildora_core::navigation::{Route, nav_items};
use wildora_core::theory::TheoryBoard;

pub fn eras() {
    for theme in era_themes() {
        println!(
            "{:<16} {:<14} {} ({})",
            theme.id.bold(),
            theme.name,
            theme.description,
            theme.font
        );
    }
}

pub fn lyrics(term: &str) {
    let found = search(songs(), term);
    if found.is_empty() {
        println!("No songs match '{}'", term);
        return;
    }
    for song in found {
        println!("🎵 {} ({})", song.title.bold(), song.album);
        println!("   {}", song.lyrics);
    }
}

pub fn theories() {
    let board = TheoryBoard::sample();
    for thread in board.threads() {
        println!(
            "#{} [{}] {} ({} {})",
            thread.id,
            thread.category,
            thread.title.bold(),
            thread.votes,
            thread.vote_type
        );
        for comment in &thread.comments {
            println!("    💬 {}: {}", comment.author, comment.content);
        }
    }
}

pub fn routes() {
    for route in Route::iter() {
        let label = nav_items()
            .iter()
            .find(|item| item.route == route)
            .map(|item| item.label)
            .unwrap_or("");
        println!("{:<16} {}", route.path(), label);
    }
}
