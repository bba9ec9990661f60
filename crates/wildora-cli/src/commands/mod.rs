pub mod catalog;
pub mod hunt;
pub mod profile;
pub mod quiz;

use colored::Colorize;
use tokio::sync::mpsc;
use wildora_core::notification::NotificationEvent;
use wildora_core::user::UserProfile;

pub fn print_profile(profile: &UserProfile) {
    println!("👤 {}", profile.user_id.bold());
    println!("  Era:    {}", profile.favorite_era);
    println!("  Coins:  {}", profile.swift_coins.to_string().yellow());
    if profile.achievement_badges.is_empty() {
        println!("  Badges: none yet");
    } else {
        println!("  Badges: {}", profile.achievement_badges.join(", "));
    }
}

/// Prints unlock notifications until the driver shuts down.
pub async fn drain_notifications(mut events: mpsc::UnboundedReceiver<NotificationEvent>) {
    while let Some(event) = events.recv().await {
        if let NotificationEvent::Shown(achievement) = event {
            println!(
                "🏆 {} {}: {}",
                "Achievement unlocked!".bright_magenta().bold(),
                achievement.name.bold(),
                achievement.description
            );
        }
    }
}
