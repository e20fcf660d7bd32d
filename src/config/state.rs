// Application state module
// Immutable per-process state shared across request handlers

use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::content::ContentStore;

/// Application state
///
/// Built once at startup and shared behind an `Arc`. Nothing here is
/// mutated after construction, so request handlers need no locks.
pub struct AppState {
    pub config: Config,
    /// Landing page catalog, read-only after startup
    pub content: ContentStore,

    // Cached config value for fast access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` from loaded configuration
    pub fn new(config: &Config) -> Self {
        Self {
            cached_access_log: AtomicBool::new(config.logging.access_log),
            content: ContentStore::new(),
            config: config.clone(),
        }
    }
}
