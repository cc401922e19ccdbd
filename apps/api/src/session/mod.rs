#![allow(dead_code)]

//! Client-side edit session.
//!
//! Bridges continuous form edits and the discrete `ResumeStore` operations.
//! Three copies of resume data can diverge — the server draft, the in-memory
//! buffer, and the most recent version — and the rules for when each wins
//! are deterministic:
//!
//! - edits mutate the buffer and mark it dirty; a debounced autosave pushes
//!   the buffer to the draft store and clears the flag on success;
//! - a failed save never discards the buffer and always leaves it dirty;
//! - restoring a version persists first and only then adopts the snapshot;
//! - switching templates preserves a dirty buffer as an automatic version
//!   before overwriting it.
//!
//! The session handle is cheaply cloneable; state lives behind a sync mutex
//! that is never held across an await. Saves are serialized by an async
//! gate so only one is ever in flight.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, NewVersion, ProjectEntry, ResumeData,
    SkillGroup, Version, VersionPatch,
};
use crate::store::{ResumeStore, StoreError};
use crate::templates;

/// Default autosave quiet period: one second after the last edit.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Field-patch targets inside `personalInfo`. List sections are never
/// patched field-wise; they are replaced wholesale via `SectionData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Linkedin,
    Portfolio,
    Address,
    Summary,
}

/// Whole-array replacement payloads for the list sections. Reordering and
/// removal cannot be expressed as a field patch, so list edits always carry
/// the full new array.
#[derive(Debug, Clone)]
pub enum SectionData {
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<SkillGroup>),
    Projects(Vec<ProjectEntry>),
    Certifications(Vec<CertificationEntry>),
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// The buffer is byte-for-byte identical to the most recent version;
    /// no request was issued.
    #[error("no changes since the most recent version")]
    DuplicateVersion,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
struct SessionState {
    current: ResumeData,
    dirty: bool,
    versions: Vec<Version>,
    status: SessionStatus,
    last_saved: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current: ResumeData::default(),
            dirty: false,
            versions: Vec::new(),
            status: SessionStatus::Idle,
            last_saved: None,
            last_error: None,
        }
    }
}

pub struct EditSession<S> {
    store: Arc<S>,
    user_id: Uuid,
    quiet_period: Duration,
    state: Arc<Mutex<SessionState>>,
    /// Serializes saves: never two `save_draft` calls in flight.
    save_gate: Arc<tokio::sync::Mutex<()>>,
    /// The armed autosave timer, if any. Re-arming aborts the previous one.
    autosave: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<S> Clone for EditSession<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            user_id: self.user_id,
            quiet_period: self.quiet_period,
            state: Arc::clone(&self.state),
            save_gate: Arc::clone(&self.save_gate),
            autosave: Arc::clone(&self.autosave),
        }
    }
}

impl<S: ResumeStore + 'static> EditSession<S> {
    pub fn new(store: Arc<S>, user_id: Uuid) -> Self {
        Self::with_quiet_period(store, user_id, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(store: Arc<S>, user_id: Uuid, quiet_period: Duration) -> Self {
        Self {
            store,
            user_id,
            quiet_period,
            state: Arc::new(Mutex::new(SessionState::default())),
            save_gate: Arc::new(tokio::sync::Mutex::new(())),
            autosave: Arc::new(Mutex::new(None)),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut SessionState) -> T) -> T {
        f(&mut self.state.lock().expect("session lock poisoned"))
    }

    // ── observers ───────────────────────────────────────────────────────

    pub fn current(&self) -> ResumeData {
        self.with_state(|s| s.current.clone())
    }

    /// True while the buffer differs from the last persisted draft. Hosts
    /// use this for the unsaved-changes navigation guard.
    pub fn is_dirty(&self) -> bool {
        self.with_state(|s| s.dirty)
    }

    pub fn status(&self) -> SessionStatus {
        self.with_state(|s| s.status)
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.with_state(|s| s.last_saved)
    }

    pub fn last_error(&self) -> Option<String> {
        self.with_state(|s| s.last_error.clone())
    }

    pub fn versions(&self) -> Vec<Version> {
        self.with_state(|s| s.versions.clone())
    }

    // ── lifecycle ───────────────────────────────────────────────────────

    /// Fetches the draft and version list. An entirely empty draft is
    /// substituted with the built-in starter template and persisted
    /// immediately (first-run convenience); the session comes up clean
    /// unless that persist fails, in which case it stays dirty so autosave
    /// can retry. A failed fetch keeps any previously loaded buffer.
    pub async fn load(&self) -> Result<(), SessionError> {
        self.with_state(|s| s.status = SessionStatus::Loading);

        let draft = match self.store.get_draft(self.user_id).await {
            Ok(draft) => draft,
            Err(e) => {
                self.with_state(|s| {
                    s.status = SessionStatus::Failed;
                    s.last_error = Some(e.to_string());
                });
                return Err(e.into());
            }
        };
        self.with_state(|s| {
            s.current = draft;
            s.dirty = false;
            s.status = SessionStatus::Succeeded;
            s.last_error = None;
        });

        // Best effort; an unavailable history never blocks editing.
        match self.store.list_versions(self.user_id).await {
            Ok(versions) => self.with_state(|s| s.versions = versions),
            Err(e) => {
                warn!("failed to fetch version history: {e}");
                self.with_state(|s| s.last_error = Some(e.to_string()));
            }
        }

        if self.with_state(|s| s.current.is_empty()) {
            let starter = templates::fresher_resume();
            self.with_state(|s| {
                s.current = starter.clone();
                s.dirty = false;
            });
            if let Err(e) = self.store.save_draft(self.user_id, &starter).await {
                self.with_state(|s| {
                    s.dirty = true;
                    s.status = SessionStatus::Failed;
                    s.last_error = Some(e.to_string());
                });
                return Err(e.into());
            }
            self.with_state(|s| s.last_saved = Some(Utc::now()));
        }
        Ok(())
    }

    // ── edits ───────────────────────────────────────────────────────────

    /// Field-patch for the personal-info record.
    pub fn patch_personal(&self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        self.with_state(|s| {
            let p = &mut s.current.personal_info;
            match field {
                PersonalField::FullName => p.full_name = value,
                PersonalField::Email => p.email = value,
                PersonalField::Phone => p.phone = value,
                PersonalField::Linkedin => p.linkedin = value,
                PersonalField::Portfolio => p.portfolio = value,
                PersonalField::Address => p.address = value,
                PersonalField::Summary => p.summary = value,
            }
            s.dirty = true;
        });
        self.arm_autosave();
    }

    /// Whole-array replacement for a list section.
    pub fn replace_section(&self, section: SectionData) {
        self.with_state(|s| {
            match section {
                SectionData::Experience(v) => s.current.experience = v,
                SectionData::Education(v) => s.current.education = v,
                SectionData::Skills(v) => s.current.skills = v,
                SectionData::Projects(v) => s.current.projects = v,
                SectionData::Certifications(v) => s.current.certifications = v,
            }
            s.dirty = true;
        });
        self.arm_autosave();
    }

    /// Programmatic wholesale replacement. Unlike `load_template`, this
    /// counts as an ordinary edit and marks the session dirty.
    pub fn set_resume_data(&self, data: ResumeData) {
        self.with_state(|s| {
            s.current = data;
            s.dirty = true;
        });
        self.arm_autosave();
    }

    /// Blanks the buffer. Counts as an edit.
    pub fn reset(&self) {
        self.set_resume_data(ResumeData::default());
    }

    // ── autosave ────────────────────────────────────────────────────────

    fn arm_autosave(&self) {
        let mut slot = self.autosave.lock().expect("autosave lock poisoned");
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        let session = self.clone();
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(session.quiet_period).await;
            if let Err(e) = session.flush().await {
                warn!("autosave failed, buffer stays dirty: {e}");
            }
        }));
    }

    /// Aborts the armed autosave timer, e.g. on navigation-away.
    pub fn cancel_autosave(&self) {
        if let Some(handle) = self
            .autosave
            .lock()
            .expect("autosave lock poisoned")
            .take()
        {
            handle.abort();
        }
    }

    /// Pushes the buffer to the draft store now. No-op when clean. On
    /// success the dirty flag clears only if the buffer has not moved since
    /// the snapshot was taken; on failure it stays set so a later flush can
    /// retry. Used by both the autosave timer and the manual save action.
    pub async fn flush(&self) -> Result<(), SessionError> {
        let _gate = self.save_gate.lock().await;

        let snapshot = match self.with_state(|s| s.dirty.then(|| s.current.clone())) {
            Some(snapshot) => snapshot,
            None => return Ok(()),
        };
        match self.store.save_draft(self.user_id, &snapshot).await {
            Ok(_) => {
                self.with_state(|s| {
                    if s.current == snapshot {
                        s.dirty = false;
                    }
                    s.last_saved = Some(Utc::now());
                    s.status = SessionStatus::Succeeded;
                    s.last_error = None;
                });
                Ok(())
            }
            Err(e) => {
                self.with_state(|s| {
                    s.status = SessionStatus::Failed;
                    s.last_error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    // ── versions ────────────────────────────────────────────────────────

    /// Manual "Save Version". Rejected locally, with no request issued,
    /// when the buffer equals the most recent version's snapshot. Always
    /// sends the buffer explicitly, never the server-side draft fallback,
    /// so an un-autosaved buffer cannot diverge from what gets archived.
    pub async fn save_version(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Version, SessionError> {
        let snapshot = self.with_state(|s| {
            if let Some(latest) = s.versions.first() {
                if latest.resume_data == s.current {
                    return Err(SessionError::DuplicateVersion);
                }
            }
            Ok(s.current.clone())
        })?;

        let version = self
            .store
            .create_version(
                self.user_id,
                NewVersion {
                    name: name.to_string(),
                    description: description.map(str::to_string),
                    resume_data: Some(snapshot),
                },
            )
            .await?;
        self.with_state(|s| s.versions.insert(0, version.clone()));
        Ok(version)
    }

    /// Overwrites the draft with a version's snapshot. Persists first: if
    /// the save fails the buffer is left untouched and the restore fails as
    /// a whole — the buffer never points at state the server does not hold.
    pub async fn restore_version(&self, version: &Version) -> Result<(), SessionError> {
        let _gate = self.save_gate.lock().await;
        match self.store.save_draft(self.user_id, &version.resume_data).await {
            Ok(_) => {
                self.with_state(|s| {
                    s.current = version.resume_data.clone();
                    s.dirty = false;
                    s.last_saved = Some(Utc::now());
                    s.status = SessionStatus::Succeeded;
                    s.last_error = None;
                });
                Ok(())
            }
            Err(e) => {
                self.with_state(|s| {
                    s.status = SessionStatus::Failed;
                    s.last_error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    /// Loads a built-in template: a dirty buffer is first preserved as an
    /// automatic version (best effort — on failure, warn and proceed), then
    /// the template overwrites the buffer and is persisted as the draft.
    /// Clean once the persist succeeds; a failed persist leaves the session
    /// dirty so autosave can retry.
    pub async fn load_template(
        &self,
        template: ResumeData,
        label: &str,
    ) -> Result<(), SessionError> {
        let dirty_buffer = self.with_state(|s| s.dirty.then(|| s.current.clone()));
        if let Some(buffer) = dirty_buffer {
            let auto = NewVersion {
                name: format!("Auto-save {}", Utc::now().format("%H:%M:%S")),
                description: Some(format!(
                    "Automatically saved before loading {label} template"
                )),
                resume_data: Some(buffer),
            };
            match self.store.create_version(self.user_id, auto).await {
                Ok(version) => self.with_state(|s| s.versions.insert(0, version)),
                Err(e) => warn!("could not preserve unsaved work before template switch: {e}"),
            }
        }

        self.cancel_autosave();
        self.with_state(|s| {
            s.current = template.clone();
            s.dirty = false;
        });

        let _gate = self.save_gate.lock().await;
        match self.store.save_draft(self.user_id, &template).await {
            Ok(_) => {
                self.with_state(|s| {
                    s.last_saved = Some(Utc::now());
                    s.status = SessionStatus::Succeeded;
                    s.last_error = None;
                });
                Ok(())
            }
            Err(e) => {
                self.with_state(|s| {
                    s.dirty = true;
                    s.status = SessionStatus::Failed;
                    s.last_error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    pub async fn refresh_versions(&self) -> Result<(), SessionError> {
        let versions = self.store.list_versions(self.user_id).await?;
        self.with_state(|s| s.versions = versions);
        Ok(())
    }

    pub async fn delete_version(&self, version_id: Uuid) -> Result<(), SessionError> {
        self.store.delete_version(self.user_id, version_id).await?;
        self.with_state(|s| s.versions.retain(|v| v.version_id != version_id));
        Ok(())
    }

    pub async fn update_version(
        &self,
        version_id: Uuid,
        patch: VersionPatch,
    ) -> Result<Version, SessionError> {
        let updated = self
            .store
            .update_version(self.user_id, version_id, patch)
            .await?;
        self.with_state(|s| {
            if let Some(v) = s.versions.iter_mut().find(|v| v.version_id == version_id) {
                *v = updated.clone();
            }
        });
        Ok(updated)
    }
}
