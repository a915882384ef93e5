//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::HealthFlags;
use crate::store::ColorStore;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Every field is resolved once at startup and immutable afterwards, so
/// handlers need no locking. The store is present only when DB_URL was set.
#[derive(Clone)]
pub struct AppState {
    pub color: Arc<str>,
    pub hostname: Arc<str>,
    pub flags: HealthFlags,
    pub store: Option<ColorStore>,
}

impl AppState {
    /// Creates a new application state from the startup-resolved values.
    pub fn new(
        color: String,
        hostname: String,
        flags: HealthFlags,
        store: Option<ColorStore>,
    ) -> Self {
        Self {
            color: color.into(),
            hostname: hostname.into(),
            flags,
            store,
        }
    }
}
