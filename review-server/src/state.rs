use std::sync::Arc;

use crate::config::AppConfig;

/// Shared, read-only application state. The review core itself is stateless;
/// this only carries the configuration knobs the HTTP layer needs.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
