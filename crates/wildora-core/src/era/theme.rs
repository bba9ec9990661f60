//! Explicit theme context and the font-loading capability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::default_era;
use super::model::EraTheme;
use crate::error::Result;

pub const CSS_VAR_PRIMARY: &str = "--era-primary";
pub const CSS_VAR_SECONDARY: &str = "--era-secondary";
pub const CSS_VAR_ACCENT: &str = "--era-accent";
pub const CSS_VAR_FONT: &str = "--era-font";

/// Active theme handed to rendering code.
///
/// Replaces document-level variable injection: renderers read the variables
/// from this value instead of a shared global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContext {
    pub theme: EraTheme,
}

impl ThemeContext {
    pub fn for_era(theme: &EraTheme) -> Self {
        Self {
            theme: theme.clone(),
        }
    }

    pub fn era_id(&self) -> &str {
        &self.theme.id
    }

    /// CSS custom properties for the active era.
    pub fn css_variables(&self) -> BTreeMap<&'static str, String> {
        let colors = &self.theme.colors;
        BTreeMap::from([
            (CSS_VAR_PRIMARY, colors.primary.clone()),
            (CSS_VAR_SECONDARY, colors.secondary.clone()),
            (CSS_VAR_ACCENT, colors.accent.clone()),
            (CSS_VAR_FONT, self.theme.font.clone()),
        ])
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::for_era(default_era())
    }
}

/// Loads web fonts on demand.
///
/// Loading the same family twice must be a no-op.
pub trait FontProvider: Send + Sync {
    /// Ensures the font family is available.
    ///
    /// Returns `true` if this call triggered the load, `false` if the family
    /// was already loaded.
    fn ensure_loaded(&self, font_family: &str) -> Result<bool>;
}
