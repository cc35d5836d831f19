//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Link service over whichever backend was selected at startup.
pub type SharedLinkService = Arc<LinkService<dyn LinkRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: SharedLinkService,
    /// Public prefix for short URLs. When `None`, the request `Host` is used.
    pub base_url: Option<String>,
    /// Prefix `https://` onto scheme-less input before shortening.
    pub assume_https: bool,
}

impl AppState {
    /// Wraps `repository` in a [`LinkService`] and builds the state around it.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        base_url: Option<String>,
        assume_https: bool,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
            base_url,
            assume_https,
        }
    }
}
