#![allow(dead_code)]

//! In-memory `ResumeStore` backend.
//!
//! Behaviorally identical to the PostgreSQL backend; used by unit tests and
//! local tooling where a database is unavailable.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::resume::{NewVersion, ResumeData, Version, VersionPatch};
use crate::store::{validate_version_name, ResumeStore, StoreError};

#[derive(Debug, Default, Clone)]
struct ResumeDoc {
    draft: ResumeData,
    // Insertion order; list_versions sorts for display.
    versions: Vec<Version>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<Uuid, ResumeDoc>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of Resume documents held. Test hook for the lazy-create path.
    pub fn resume_count(&self) -> usize {
        self.docs.read().expect("store lock poisoned").len()
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn get_draft(&self, user_id: Uuid) -> Result<ResumeData, StoreError> {
        let mut docs = self.docs.write().expect("store lock poisoned");
        Ok(docs.entry(user_id).or_default().draft.clone())
    }

    async fn save_draft(&self, user_id: Uuid, data: &ResumeData) -> Result<ResumeData, StoreError> {
        let mut docs = self.docs.write().expect("store lock poisoned");
        let doc = docs.entry(user_id).or_default();
        doc.draft = data.clone();
        Ok(doc.draft.clone())
    }

    async fn create_version(&self, user_id: Uuid, new: NewVersion) -> Result<Version, StoreError> {
        validate_version_name(&new.name)?;
        let mut docs = self.docs.write().expect("store lock poisoned");
        let doc = docs
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("resume not found".to_string()))?;

        let version = Version {
            version_id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            created_at: Utc::now(),
            resume_data: new.resume_data.unwrap_or_else(|| doc.draft.clone()),
        };
        doc.versions.push(version.clone());
        Ok(version)
    }

    async fn list_versions(&self, user_id: Uuid) -> Result<Vec<Version>, StoreError> {
        let docs = self.docs.read().expect("store lock poisoned");
        let Some(doc) = docs.get(&user_id) else {
            return Ok(Vec::new());
        };
        // Reverse first so the stable sort keeps newest-inserted ahead on
        // equal timestamps.
        let mut versions: Vec<Version> = doc.versions.iter().rev().cloned().collect();
        versions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(versions)
    }

    async fn delete_version(&self, user_id: Uuid, version_id: Uuid) -> Result<(), StoreError> {
        let mut docs = self.docs.write().expect("store lock poisoned");
        let doc = docs
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("resume not found".to_string()))?;
        doc.versions.retain(|v| v.version_id != version_id);
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
        let mut docs = self.docs.write().expect("store lock poisoned");
        let doc = docs
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("resume not found".to_string()))?;
        let version = doc
            .versions
            .iter_mut()
            .find(|v| v.version_id == version_id)
            .ok_or_else(|| StoreError::NotFound(format!("version {version_id} not found")))?;

        if let Some(name) = patch.name {
            version.name = name;
        }
        if let Some(description) = patch.description {
            version.description = Some(description);
        }
        Ok(version.clone())
    }
}
