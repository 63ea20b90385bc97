//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, MetricsService};

/// Application state shared across all request handlers.
///
/// Built once in [`crate::server::run`] and cloned per request; both store
/// clients live behind the services, so no handler touches a connection
/// directly.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    /// Creates application state from the two services.
    pub fn new(link_service: Arc<LinkService>, metrics_service: Arc<MetricsService>) -> Self {
        Self {
            link_service,
            metrics_service,
        }
    }
}
