//! Resume persistence seam.
//!
//! `ResumeStore` is the single trait behind which the draft store and the
//! version archive live. Three backends implement it:
//!
//! - `PgResumeStore` — PostgreSQL, used by the server in production.
//! - `MemoryStore`   — in-process map, used by tests and local tooling.
//! - `HttpResumeStore` — reqwest client over the REST surface, used by the
//!   client-side `EditSession`.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`, so the router can be driven
//! against any backend.

pub mod http;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{NewVersion, ResumeData, Version, VersionPatch};

/// Structured failure kinds shared by every backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed Resume or Version does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was malformed (e.g. empty version name). No partial write.
    #[error("validation error: {0}")]
    Validation(String),

    /// Backing store unreachable or a write failed. Retryable.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Storage(e.to_string())
    }
}

/// Draft store + version archive operations, scoped by an authenticated
/// user id. All backends share these semantics:
///
/// - the draft is lazily created on first access and replaced wholesale on
///   save (last-write-wins, no merge);
/// - versions are deep snapshots, listed descending by `created_at`;
/// - version deletion is idempotent for a missing version, but a missing
///   Resume is a hard `NotFound` for every version operation.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Returns the user's draft, creating an empty Resume if none exists.
    async fn get_draft(&self, user_id: Uuid) -> Result<ResumeData, StoreError>;

    /// Unconditionally replaces the stored draft (full replace, idempotent).
    /// Creates the Resume if it does not exist yet.
    async fn save_draft(&self, user_id: Uuid, data: &ResumeData) -> Result<ResumeData, StoreError>;

    /// Appends a named snapshot. An omitted `resume_data` snapshots the
    /// stored draft at call time (read-then-copy, never the live buffer).
    async fn create_version(&self, user_id: Uuid, new: NewVersion) -> Result<Version, StoreError>;

    /// All versions for the user, descending by `created_at`. Empty (not an
    /// error) when no Resume exists yet.
    async fn list_versions(&self, user_id: Uuid) -> Result<Vec<Version>, StoreError>;

    /// Removes the matching version. No-op if `version_id` is unknown.
    async fn delete_version(&self, user_id: Uuid, version_id: Uuid) -> Result<(), StoreError>;

    /// Patches `name`/`description` only; `resume_data` and `created_at`
    /// are immutable.
    async fn update_version(
        &self,
        user_id: Uuid,
        version_id: Uuid,
        patch: VersionPatch,
    ) -> Result<Version, StoreError>;
}

/// A version must always carry a non-empty name, both at creation and when
/// renamed.
pub(crate) fn validate_version_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation(
            "version name is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_name_must_be_non_empty() {
        assert!(validate_version_name("V1").is_ok());
        assert!(matches!(
            validate_version_name(""),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_version_name("   "),
            Err(StoreError::Validation(_))
        ));
    }
}
