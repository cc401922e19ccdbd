#![allow(dead_code)]

//! HTTP `ResumeStore` backend.
//!
//! The client-side transport: implements the same trait as the server
//! backends by calling the REST surface with `reqwest`. The `EditSession`
//! runs on top of this in a deployed client; tests run it against a locally
//! bound router.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::models::resume::{NewVersion, ResumeData, Version, VersionPatch};
use crate::store::{ResumeStore, StoreError};

pub struct HttpResumeStore {
    client: Client,
    base_url: String,
}

impl HttpResumeStore {
    /// `base_url` without a trailing slash, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/resume{path}", self.base_url)
    }

    /// Maps the structured `{ "error": { "code", "message" } }` body back to
    /// the domain error kinds; transport failures are `Storage`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| StoreError::Storage(format!("invalid response body: {e}")));
        }

        let body: Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"]
            .as_str()
            .unwrap_or("request failed")
            .to_string();
        Err(match status {
            StatusCode::NOT_FOUND => StoreError::NotFound(message),
            StatusCode::BAD_REQUEST => StoreError::Validation(message),
            _ => StoreError::Storage(format!("{status}: {message}")),
        })
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[async_trait]
impl ResumeStore for HttpResumeStore {
    async fn get_draft(&self, user_id: Uuid) -> Result<ResumeData, StoreError> {
        let response = self
            .client
            .get(self.url("/draft"))
            .header("x-user-id", user_id.to_string())
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn save_draft(&self, user_id: Uuid, data: &ResumeData) -> Result<ResumeData, StoreError> {
        let response = self
            .client
            .post(self.url("/draft"))
            .header("x-user-id", user_id.to_string())
            .json(&serde_json::json!({ "resumeData": data }))
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn create_version(&self, user_id: Uuid, new: NewVersion) -> Result<Version, StoreError> {
        let response = self
            .client
            .post(self.url("/version"))
            .header("x-user-id", user_id.to_string())
            .json(&new)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn list_versions(&self, user_id: Uuid) -> Result<Vec<Version>, StoreError> {
        let response = self
            .client
            .get(self.url("/versions"))
            .header("x-user-id", user_id.to_string())
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn delete_version(&self, user_id: Uuid, version_id: Uuid) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/version/{version_id}")))
            .header("x-user-id", user_id.to_string())
            .send()
            .await
            .map_err(transport)?;
        Self::decode::<Value>(response).await.map(|_| ())
    }

    async fn update_version(
        &self,
        user_id: Uuid,
        version_id: Uuid,
        patch: VersionPatch,
    ) -> Result<Version, StoreError> {
        let response = self
            .client
            .put(self.url(&format!("/version/{version_id}")))
            .header("x-user-id", user_id.to_string())
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }
}
