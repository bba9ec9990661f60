//! Client routes, the navigation bar model and page transitions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::era::EraTheme;
use crate::error::{Result, WildoraError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Route {
    Landing,
    Eras,
    Theory,
    Lyrics,
    Quiz,
    Social,
    AuthCallback,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Eras => "/eras",
            Route::Theory => "/theory",
            Route::Lyrics => "/lyrics",
            Route::Quiz => "/quiz",
            Route::Social => "/social",
            Route::AuthCallback => "/auth/callback",
        }
    }

    /// Resolves a location path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Result<Route> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Route::iter()
            .find(|r| r.path() == normalized)
            .ok_or_else(|| WildoraError::not_found("route", path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { route: Route::Eras, label: "Eras" },
    NavItem { route: Route::Lyrics, label: "Lyrics" },
    NavItem { route: Route::Quiz, label: "Quiz" },
    NavItem { route: Route::Social, label: "Social" },
    NavItem { route: Route::Theory, label: "Theory" },
];

/// Entries shown in the navigation bar, in display order.
pub fn nav_items() -> &'static [NavItem] {
    &NAV_ITEMS
}

/// Tween applied to the page container after a route change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageTransition {
    pub from_opacity: f32,
    pub to_opacity: f32,
    pub from_y: f32,
    pub to_y: f32,
    pub duration_secs: f32,
    pub ease: &'static str,
}

impl Default for PageTransition {
    fn default() -> Self {
        Self {
            from_opacity: 0.0,
            to_opacity: 1.0,
            from_y: 30.0,
            to_y: 0.0,
            duration_secs: 0.6,
            ease: "power2.out",
        }
    }
}

/// Identity reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub given_name: Option<String>,
    pub picture: Option<String>,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.given_name.as_deref().unwrap_or("User")
    }
}

/// Right-hand side of the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellHeader {
    Anonymous,
    SignedIn {
        name: String,
    },
    SignedInWithProfile {
        name: String,
        swift_coins: u64,
        theme: &'static EraTheme,
    },
}
