//! PostgreSQL `ResumeStore` backend.
//!
//! One `resumes` row per user holds the draft as JSONB; versions live in a
//! child table keyed by `version_id`. Snapshot semantics come for free: the
//! version row carries its own JSONB copy, so later draft writes never touch
//! it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{NewVersion, ResumeData, Version, VersionPatch};
use crate::store::{validate_version_name, ResumeStore, StoreError};

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_draft(&self, user_id: Uuid) -> Result<Option<ResumeData>, StoreError> {
        let draft: Option<Json<ResumeData>> =
            sqlx::query_scalar("SELECT draft FROM resumes WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(draft.map(|j| j.0))
    }
}

#[derive(FromRow)]
struct VersionRow {
    version_id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    resume_data: Json<ResumeData>,
}

impl From<VersionRow> for Version {
    fn from(row: VersionRow) -> Self {
        Version {
            version_id: row.version_id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            resume_data: row.resume_data.0,
        }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn get_draft(&self, user_id: Uuid) -> Result<ResumeData, StoreError> {
        if let Some(draft) = self.fetch_draft(user_id).await? {
            return Ok(draft);
        }

        // Lazy create. ON CONFLICT tolerates a concurrent first access from
        // a second session of the same user.
        let empty = ResumeData::default();
        sqlx::query(
            "INSERT INTO resumes (user_id, draft) VALUES ($1, $2) ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(Json(&empty))
        .execute(&self.pool)
        .await?;
        info!("Created empty resume for user {user_id}");
        Ok(empty)
    }

    async fn save_draft(&self, user_id: Uuid, data: &ResumeData) -> Result<ResumeData, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO resumes (user_id, draft, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (user_id) DO UPDATE SET draft = EXCLUDED.draft, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(Json(data))
        .execute(&self.pool)
        .await?;
        Ok(data.clone())
    }

    async fn create_version(&self, user_id: Uuid, new: NewVersion) -> Result<Version, StoreError> {
        validate_version_name(&new.name)?;

        // A draft must exist first; version operations never auto-create.
        let draft = self
            .fetch_draft(user_id)
            .await?
            .ok_or_else(|| StoreError::NotFound("resume not found".to_string()))?;

        let version = Version {
            version_id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            created_at: Utc::now(),
            resume_data: new.resume_data.unwrap_or(draft),
        };
        sqlx::query(
            r#"
            INSERT INTO resume_versions (version_id, user_id, name, description, created_at, resume_data)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(version.version_id)
        .bind(user_id)
        .bind(&version.name)
        .bind(&version.description)
        .bind(version.created_at)
        .bind(Json(&version.resume_data))
        .execute(&self.pool)
        .await?;

        info!("Created version {} for user {user_id}", version.version_id);
        Ok(version)
    }

    async fn list_versions(&self, user_id: Uuid) -> Result<Vec<Version>, StoreError> {
        let rows: Vec<VersionRow> = sqlx::query_as(
            r#"
            SELECT version_id, name, description, created_at, resume_data
            FROM resume_versions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Version::from).collect())
    }

    async fn delete_version(&self, user_id: Uuid, version_id: Uuid) -> Result<(), StoreError> {
        if self.fetch_draft(user_id).await?.is_none() {
            return Err(StoreError::NotFound("resume not found".to_string()));
        }

        // Idempotent: deleting an unknown version is success.
        sqlx::query("DELETE FROM resume_versions WHERE user_id = $1 AND version_id = $2")
            .bind(user_id)
            .bind(version_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_version(
        &self,
        user_id: Uuid,
        version_id: Uuid,
        patch: VersionPatch,
    ) -> Result<Version, StoreError> {
        if let Some(name) = &patch.name {
            validate_version_name(name)?;
        }

        let row: Option<VersionRow> = sqlx::query_as(
            r#"
            UPDATE resume_versions
            SET name = COALESCE($3, name),
                description = COALESCE($4, description)
            WHERE user_id = $1 AND version_id = $2
            RETURNING version_id, name, description, created_at, resume_data
            "#,
        )
        .bind(user_id)
        .bind(version_id)
        .bind(patch.name)
        .bind(patch.description)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Version::from)
            .ok_or_else(|| StoreError::NotFound(format!("version {version_id} not found")))
    }
}
