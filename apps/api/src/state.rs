use std::sync::Arc;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The store is a trait object so the router runs unchanged
/// over PostgreSQL in production and the in-memory backend in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
}
