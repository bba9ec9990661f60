//! Achievement notification sequencing.

mod queue;

pub use queue::{NotificationEvent, NotificationQueue, NotificationTiming};
