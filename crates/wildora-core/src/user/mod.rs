//! User profile domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserProfile` and the create/update payloads
//! - `api`: `ProfileApi` port implemented by the HTTP adapter
//!
//! # Usage
//!
//! ```ignore
//! use wildora_core::user::{ProfileApi, ProfileUpdate, UserProfile};
//! ```

mod api;
mod model;

// Re-export public API
pub use api::ProfileApi;
pub use model::{NewProfile, ProfileUpdate, UserProfile};
