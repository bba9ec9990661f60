//! Domain models, pure rules and ports for the Wildora client.

pub mod achievement;
pub mod activity;
pub mod config;
pub mod easter_egg;
pub mod era;
pub mod error;
pub mod lyrics;
pub mod navigation;
pub mod notification;
pub mod quiz;
pub mod social;
pub mod theory;
pub mod user;

// Re-export common error type
pub use error::{Result, WildoraError};
