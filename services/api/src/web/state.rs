//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use nearbyskillz_core::ports::DirectoryService;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryService>,
    pub config: Arc<Config>,
}
