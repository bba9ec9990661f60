//! Profile API port.

use async_trait::async_trait;

use super::model::{NewProfile, ProfileUpdate, UserProfile};
use crate::error::Result;

/// Access to the remote user profile resource.
///
/// Implementations talk to `/api/user/profile`. A missing profile must be
/// reported as [`WildoraError::NotFound`](crate::WildoraError::NotFound) so
/// callers can auto-create it; every other failure is a
/// [`WildoraError::Network`](crate::WildoraError::Network).
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET /api/user/profile`
    async fn fetch_profile(&self) -> Result<UserProfile>;

    /// `POST /api/user/profile`
    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile>;

    /// `PUT /api/user/profile`; the response is the full updated profile.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile>;
}
