//! Web-font provider backed by stylesheet links.

use std::collections::HashSet;
use std::sync::Mutex;

use wildora_core::era::FontProvider;
use wildora_core::{Result, WildoraError};

const FONT_CSS_BASE: &str = "https://fonts.googleapis.com/css2";
const FONT_WEIGHTS: &str = "300;400;600;700";

/// Stylesheet URL for a font family, e.g. `Space+Grotesk`.
pub fn font_stylesheet_url(font_family: &str) -> String {
    format!(
        "{}?family={}:wght@{}&display=swap",
        FONT_CSS_BASE,
        font_family.trim().replace(' ', "+"),
        FONT_WEIGHTS
    )
}

#[derive(Default)]
struct LoadedFonts {
    families: HashSet<String>,
    stylesheets: Vec<String>,
}

/// Records one stylesheet link per font family.
#[derive(Default)]
pub struct StylesheetFontProvider {
    loaded: Mutex<LoadedFonts>,
}

impl StylesheetFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stylesheet links added so far, in load order.
    pub fn stylesheets(&self) -> Vec<String> {
        self.loaded
            .lock()
            .map(|l| l.stylesheets.clone())
            .unwrap_or_default()
    }
}

impl FontProvider for StylesheetFontProvider {
    fn ensure_loaded(&self, font_family: &str) -> Result<bool> {
        if font_family.trim().is_empty() {
            return Err(WildoraError::validation("font family is empty"));
        }
        let mut loaded = self
            .loaded
            .lock()
            .map_err(|e| WildoraError::internal(format!("font registry poisoned: {}", e)))?;

        if !loaded.families.insert(font_family.to_string()) {
            return Ok(false);
        }
        let url = font_stylesheet_url(font_family);
        tracing::debug!("[FontProvider] Adding stylesheet {}", url);
        loaded.stylesheets.push(url);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_replaces_every_space() {
        assert_eq!(
            font_stylesheet_url("Space Grotesk"),
            "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;600;700&display=swap"
        );
        assert!(font_stylesheet_url("Im Fell English SC").contains("family=Im+Fell+English+SC:"));
    }

    #[test]
    fn test_each_family_loads_once() {
        let provider = StylesheetFontProvider::new();
        assert!(provider.ensure_loaded("Bebas Neue").unwrap());
        assert!(!provider.ensure_loaded("Bebas Neue").unwrap());
        assert!(provider.ensure_loaded("Pacifico").unwrap());
        assert_eq!(provider.stylesheets().len(), 2);
    }

    #[test]
    fn test_empty_family_rejected() {
        let provider = StylesheetFontProvider::new();
        assert!(provider.ensure_loaded(" ").unwrap_err().is_validation());
    }
}
