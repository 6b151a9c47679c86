//! Shared server state.

use podium::DashboardContext;
use std::sync::Arc;

/// Application state handed to every handler: the immutable dashboard
/// context. No handler mutates it, so no locking is needed.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    /// Loaded table plus derived control ranges.
    pub(crate) ctx: Arc<DashboardContext>,
}

impl AppState {
    /// Create new application state.
    pub(crate) fn new(ctx: Arc<DashboardContext>) -> Self {
        Self { ctx }
    }
}
