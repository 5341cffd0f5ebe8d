// src/state.rs

use crate::categorizer::Categorizer;

/// Shared application state for HTTP handlers.
pub struct AppState {
    pub categorizer: Categorizer,
}
