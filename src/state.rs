// src/state.rs
use std::sync::Arc;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state. Handlers share nothing mutable.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
