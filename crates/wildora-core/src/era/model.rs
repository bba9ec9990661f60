//! Era theme domain model.

use serde::{Deserialize, Serialize};

/// Color palette of an era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    /// Gradient utility classes used by era cards and buttons
    pub gradient: String,
}

/// Presentation theme for one era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraTheme {
    /// Stable id stored in `UserProfile::favorite_era`
    pub id: String,
    pub name: String,
    pub colors: EraColors,
    /// Font family name as published on the font CDN
    pub font: String,
    pub description: String,
}

impl EraTheme {
    pub(crate) fn new(
        id: &str,
        name: &str,
        colors: [&str; 4],
        font: &str,
        description: &str,
    ) -> Self {
        let [primary, secondary, accent, gradient] = colors;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            colors: EraColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                accent: accent.to_string(),
                gradient: gradient.to_string(),
            },
            font: font.to_string(),
            description: description.to_string(),
        }
    }
}
