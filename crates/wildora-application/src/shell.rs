//! Navigation shell: current route, header state and page transitions.

use std::sync::Arc;

use tokio::sync::RwLock;
use wildora_core::Result;
use wildora_core::era::era_or_default;
use wildora_core::navigation::{AuthUser, PageTransition, Route, ShellHeader};

use crate::profile_store::ProfileStore;

pub struct NavigationShell {
    store: Arc<ProfileStore>,
    route: RwLock<Route>,
    user: RwLock<Option<AuthUser>>,
}

impl NavigationShell {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self {
            store,
            route: RwLock::new(Route::Landing),
            user: RwLock::new(None),
        }
    }

    pub async fn route(&self) -> Route {
        *self.route.read().await
    }

    pub async fn sign_in(&self, user: AuthUser) {
        *self.user.write().await = Some(user);
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
        self.store.clear().await;
    }

    /// Moves to `path`. No transition plays when the path is unchanged.
    pub async fn navigate(&self, path: &str) -> Result<Option<PageTransition>> {
        let next = Route::from_path(path)?;
        let mut route = self.route.write().await;
        if *route == next {
            return Ok(None);
        }
        tracing::debug!("[NavigationShell] {} -> {}", route.path(), next.path());
        *route = next;
        Ok(Some(PageTransition::default()))
    }

    pub async fn header(&self) -> ShellHeader {
        let Some(user) = self.user.read().await.clone() else {
            return ShellHeader::Anonymous;
        };
        let name = user.display_name().to_string();
        match self.store.profile().await {
            Some(profile) => ShellHeader::SignedInWithProfile {
                name,
                swift_coins: profile.swift_coins,
                theme: era_or_default(&profile.favorite_era),
            },
            None => ShellHeader::SignedIn { name },
        }
    }
}
