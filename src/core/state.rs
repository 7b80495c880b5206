// Application state (AppState)

use crate::core::config::{Config, Service};
use std::sync::Arc;

/// Shared application state
///
/// Read-only for the lifetime of the process; cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Which service this process is running as
    pub service: Service,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: Service, config: Config) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}
