//! # Storage Layer
//!
//! Prompts live under a single key of a flat key-value store. The store offers
//! exactly two operations, `get` and `set`, with no transactions and no partial
//! updates, so every mutation rewrites the whole collection.
//!
//! ## Layers
//!
//! - [`KeyValueBackend`]: the raw async capability ("how" bytes are stored).
//! - [`prompt_store::PromptStore`]: the in-memory collection and its rules
//!   ("what" is stored: dedup, ordering, rollback on failed writes).
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production backend. One JSON object on disk mapping
//!   keys to values.
//! - [`memory::MemBackend`]: For tests. Supports injected read/write failures.
//! - [`callback::CallbackAdapter`]: Wraps a callback-style storage so it can be
//!   used wherever an async backend is expected.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── config.json         # PromptzConfig
//! └── storage.json        # {"savedPrompts": [{"id", "text", "createdAt"}, ...]}
//! ```

use crate::error::BackendError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub mod callback;
pub mod fs;
pub mod memory;
pub mod prompt_store;

/// Key the prompt collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "savedPrompts";

/// Async single-key get/set storage.
///
/// Values are kept in their JSON representation. A missing key is `Ok(None)`,
/// not an error.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Value>, BackendError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), BackendError>;
}

#[async_trait]
impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Arc<B> {
    async fn get(&self, key: &str) -> Result<Option<Value>, BackendError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), BackendError> {
        (**self).set(key, value).await
    }
}
