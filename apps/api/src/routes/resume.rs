//! Draft and version handlers.
//!
//! Thin wrappers over the `ResumeStore` trait: all semantics (lazy draft
//! creation, snapshot copies, idempotent deletes) live in the store.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewVersion, ResumeData, Version, VersionPatch};
use crate::routes::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftRequest {
    pub resume_data: ResumeData,
}

/// GET /api/v1/resume/draft
pub async fn handle_get_draft(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ResumeData>, AppError> {
    let draft = state.store.get_draft(user.id).await?;
    Ok(Json(draft))
}

/// POST /api/v1/resume/draft
pub async fn handle_save_draft(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let saved = state.store.save_draft(user.id, &req.resume_data).await?;
    info!("Saved draft for user {}", user.id);
    Ok(Json(saved))
}

/// POST /api/v1/resume/version
pub async fn handle_create_version(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<NewVersion>,
) -> Result<Json<Version>, AppError> {
    let version = state.store.create_version(user.id, req).await?;
    Ok(Json(version))
}

/// GET /api/v1/resume/versions
pub async fn handle_list_versions(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Version>>, AppError> {
    let versions = state.store.list_versions(user.id).await?;
    Ok(Json(versions))
}

/// DELETE /api/v1/resume/version/:version_id
pub async fn handle_delete_version(
    State(state): State<AppState>,
    user: AuthUser,
    Path(version_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_version(user.id, version_id).await?;
    Ok(Json(json!({ "message": "Version deleted" })))
}

/// PUT /api/v1/resume/version/:version_id
pub async fn handle_update_version(
    State(state): State<AppState>,
    user: AuthUser,
    Path(version_id): Path<Uuid>,
    Json(patch): Json<VersionPatch>,
) -> Result<Json<Version>, AppError> {
    let version = state.store.update_version(user.id, version_id, patch).await?;
    Ok(Json(version))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use super::*;
    use crate::routes::build_router;
    use crate::store::memory::MemoryStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryStore::new()),
        })
    }

    fn request(method: &str, path: &str, user: Option<Uuid>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user.to_string());
        }
        match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_identity_is_rejected() {
        let response = app()
            .oneshot(request("GET", "/api/v1/resume/draft", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_first_draft_fetch_returns_empty_document() {
        let response = app()
            .oneshot(request(
                "GET",
                "/api/v1/resume/draft",
                Some(Uuid::new_v4()),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["personalInfo"]["fullName"], "");
        assert_eq!(body["experience"], json!([]));
        assert_eq!(body["certifications"], json!([]));
    }

    #[tokio::test]
    async fn test_draft_save_and_reload_roundtrip() {
        let app = app();
        let user = Uuid::new_v4();
        let payload = json!({ "resumeData": { "personalInfo": { "fullName": "Jordan Lee" } } });

        let response = app
            .clone()
            .oneshot(request("POST", "/api/v1/resume/draft", Some(user), Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/api/v1/resume/draft", Some(user), None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["personalInfo"]["fullName"], "Jordan Lee");
        // Omitted sections come back as empty lists, not null.
        assert_eq!(body["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_create_version_requires_name() {
        let app = app();
        let user = Uuid::new_v4();
        app.clone()
            .oneshot(request(
                "POST",
                "/api/v1/resume/draft",
                Some(user),
                Some(json!({ "resumeData": {} })),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(request(
                "POST",
                "/api/v1/resume/version",
                Some(user),
                Some(json!({ "name": "" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_version_without_resume_is_not_found() {
        let response = app()
            .oneshot(request(
                "POST",
                "/api/v1/resume/version",
                Some(Uuid::new_v4()),
                Some(json!({ "name": "V1" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_version_lifecycle_over_rest() {
        let app = app();
        let user = Uuid::new_v4();
        app.clone()
            .oneshot(request(
                "POST",
                "/api/v1/resume/draft",
                Some(user),
                Some(json!({ "resumeData": { "personalInfo": { "fullName": "Jordan Lee" } } })),
            ))
            .await
            .unwrap();

        // Create from the stored draft (no explicit resumeData).
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/v1/resume/version",
                Some(user),
                Some(json!({ "name": "V1", "description": "first" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = json_body(response).await;
        assert_eq!(created["resumeData"]["personalInfo"]["fullName"], "Jordan Lee");
        let version_id = created["versionId"].as_str().unwrap().to_string();

        // Rename only; snapshot stays put.
        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/api/v1/resume/version/{version_id}"),
                Some(user),
                Some(json!({ "name": "V1 final" })),
            ))
            .await
            .unwrap();
        let updated = json_body(response).await;
        assert_eq!(updated["name"], "V1 final");
        assert_eq!(updated["description"], "first");
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/v1/resume/version/{version_id}"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Version deleted");

        // Idempotent second delete.
        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/v1/resume/version/{version_id}"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/api/v1/resume/versions", Some(user), None))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_pdf_export_stub_is_not_implemented() {
        let response = app()
            .oneshot(request(
                "POST",
                "/api/v1/resume/download-pdf",
                Some(Uuid::new_v4()),
                Some(json!({ "resumeData": {} })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
