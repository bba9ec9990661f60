//! Application layer for Wildora.
//!
//! Use cases that coordinate the domain rules in `wildora-core` with the
//! API ports implemented in `wildora-infrastructure`.

pub mod achievement_service;
pub mod easter_egg_service;
pub mod era_switcher;
pub mod notification_center;
pub mod profile_store;
pub mod quiz_usecase;
pub mod shell;

pub use achievement_service::AchievementService;
pub use easter_egg_service::{EasterEggService, EggFound};
pub use era_switcher::EraSwitcher;
pub use notification_center::NotificationCenter;
pub use profile_store::{BadgeGrant, ProfileSnapshot, ProfileStore};
pub use quiz_usecase::{QuizOutcome, QuizUseCase};
pub use shell::NavigationShell;
