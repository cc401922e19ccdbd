pub mod auth;
pub mod health;
pub mod resume;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Draft store
        .route(
            "/api/v1/resume/draft",
            get(resume::handle_get_draft).post(resume::handle_save_draft),
        )
        // Version archive
        .route("/api/v1/resume/version", post(resume::handle_create_version))
        .route("/api/v1/resume/versions", get(resume::handle_list_versions))
        .route(
            "/api/v1/resume/version/:version_id",
            delete(resume::handle_delete_version).put(resume::handle_update_version),
        )
        // External collaborators, exposed here for clients but out of scope
        .route("/api/v1/resume/download-pdf", post(not_implemented))
        .route("/api/v1/ai/enhance", post(not_implemented))
        .with_state(state)
}
