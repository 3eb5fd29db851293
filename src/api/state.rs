use std::sync::Arc;

use crate::modules::brain::Advisor;
use crate::modules::perception::NewsSentinel;

/// Shared provider handles. Built once at startup, read-only afterwards,
/// so handlers can use them concurrently without locking.
pub struct AppState {
    pub news: NewsSentinel,
    pub advisor: Advisor,
}

pub type SharedState = Arc<AppState>;
