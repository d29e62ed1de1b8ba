//! Application State

use std::sync::Arc;

use advisor_core::LlmProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Completion provider (a0, or a mock in tests)
    pub provider: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}
