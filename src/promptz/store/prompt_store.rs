use super::{KeyValueBackend, DEFAULT_STORAGE_KEY};
use crate::error::{BackendError, CreateError, DeleteError};
use crate::model::Prompt;
use crate::text::{normalize, sanitize};
use serde_json::Value;
use tokio::sync::Mutex;

/// Outcome of [`PromptStore::load`].
///
/// Loading never fails hard: a backend error leaves the store empty and is
/// reported in `failure` so the caller can show a notice.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The loaded collection, newest first.
    pub prompts: Vec<Prompt>,
    /// Persisted entries dropped for failing shape validation. A stored value
    /// that is not a list at all counts as one.
    pub discarded: usize,
    pub failure: Option<BackendError>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// The prompt collection and the rules that guard it.
///
/// The collection is cached in memory and every mutation writes the whole
/// collection back under one key. A mutation is committed to memory only
/// after the backend accepted the write, so memory and storage agree whether
/// the call succeeded or not. The mutex is held for the full
/// read → compute → persist → commit sequence, serializing overlapping calls.
pub struct PromptStore<B: KeyValueBackend> {
    backend: B,
    key: String,
    prompts: Mutex<Vec<Prompt>>,
}

impl<B: KeyValueBackend> PromptStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the in-memory collection with what the backend holds.
    pub async fn load(&self) -> LoadReport {
        let mut prompts = self.prompts.lock().await;

        let raw = match self.backend.get(&self.key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to load prompts");
                prompts.clear();
                return LoadReport {
                    failure: Some(e),
                    ..Default::default()
                };
            }
        };

        let (mut loaded, discarded) = parse_collection(raw);
        if discarded > 0 {
            tracing::debug!(discarded, "dropped malformed prompt entries");
        }
        loaded.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        *prompts = loaded.clone();
        tracing::debug!(count = loaded.len(), "loaded prompts");
        LoadReport {
            prompts: loaded,
            discarded,
            failure: None,
        }
    }

    /// Save a new prompt.
    ///
    /// Input is sanitized before storage; duplicates are detected on the
    /// whitespace-normalized form against every existing prompt.
    pub async fn create(&self, raw: &str) -> Result<Prompt, CreateError> {
        let text = sanitize(raw);
        if text.is_empty() {
            return Err(CreateError::EmptyInput);
        }

        let mut prompts = self.prompts.lock().await;

        let normalized = normalize(&text);
        if prompts.iter().any(|p| normalize(&p.text) == normalized) {
            return Err(CreateError::DuplicateExists);
        }

        let prompt = Prompt::new(text);
        let mut updated = Vec::with_capacity(prompts.len() + 1);
        updated.push(prompt.clone());
        updated.extend(prompts.iter().cloned());

        self.persist(&updated)
            .await
            .map_err(CreateError::PersistenceFailed)?;

        *prompts = updated;
        tracing::debug!(id = %prompt.id, "created prompt");
        Ok(prompt)
    }

    /// Remove the prompt with `id`.
    ///
    /// Returns the removed prompt, or `None` when nothing matched. Deleting an
    /// unknown id does not touch the backend.
    pub async fn delete(&self, id: &str) -> Result<Option<Prompt>, DeleteError> {
        let mut prompts = self.prompts.lock().await;

        let Some(position) = prompts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let mut updated = prompts.clone();
        let removed = updated.remove(position);

        self.persist(&updated)
            .await
            .map_err(DeleteError::PersistenceFailed)?;

        *prompts = updated;
        tracing::debug!(id, "deleted prompt");
        Ok(Some(removed))
    }

    /// Remove every prompt whose id is in `ids` with a single write.
    ///
    /// Either all matching prompts are removed or, when the write fails, none
    /// are. Returns the removed prompts in collection order; unknown ids are
    /// skipped, and when nothing matches the backend is not touched.
    pub async fn delete_many(&self, ids: &[String]) -> Result<Vec<Prompt>, DeleteError> {
        let mut prompts = self.prompts.lock().await;

        let (removed, kept): (Vec<Prompt>, Vec<Prompt>) = prompts
            .iter()
            .cloned()
            .partition(|p| ids.iter().any(|id| *id == p.id));
        if removed.is_empty() {
            return Ok(removed);
        }

        self.persist(&kept)
            .await
            .map_err(DeleteError::PersistenceFailed)?;

        *prompts = kept;
        tracing::debug!(count = removed.len(), "deleted prompts");
        Ok(removed)
    }

    /// Snapshot of the current collection.
    pub async fn list(&self) -> Vec<Prompt> {
        self.prompts.lock().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Prompt> {
        self.prompts.lock().await.iter().find(|p| p.id == id).cloned()
    }

    async fn persist(&self, prompts: &[Prompt]) -> Result<(), BackendError> {
        let value = serde_json::to_value(prompts)?;
        self.backend.set(&self.key, value).await.inspect_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "failed to save prompts");
        })
    }
}

/// Keeps the well-formed entries of a stored value, counting the rest.
fn parse_collection(raw: Option<Value>) -> (Vec<Prompt>, usize) {
    match raw {
        None => (Vec::new(), 0),
        Some(Value::Array(entries)) => {
            let total = entries.len();
            let prompts: Vec<Prompt> = entries.iter().filter_map(Prompt::from_value).collect();
            let discarded = total - prompts.len();
            (prompts, discarded)
        }
        Some(_) => (Vec::new(), 1),
    }
}
