//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every promptz operation, regardless of the UI in front of it.
//!
//! It:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (selector strings → [`PromptSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! ## Generic Over KeyValueBackend
//!
//! `PromptzApi<B: KeyValueBackend>`:
//! - Production: `PromptzApi<FileBackend>`
//! - Testing: `PromptzApi<MemBackend>`

use crate::commands;
use crate::error::{PromptzError, Result};
use crate::index::PromptSelector;
use crate::search;
use crate::store::prompt_store::PromptStore;
use crate::store::KeyValueBackend;
use std::path::{Path, PathBuf};

/// The main API facade for promptz operations.
///
/// Call [`PromptzApi::load`] once before anything else; until then the
/// library is empty.
pub struct PromptzApi<B: KeyValueBackend> {
    store: PromptStore<B>,
    data_dir: PathBuf,
}

impl<B: KeyValueBackend> PromptzApi<B> {
    pub fn new(store: PromptStore<B>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub async fn load(&self) -> commands::CmdResult {
        commands::load::run(&self.store).await
    }

    pub async fn create_prompt(&self, text: &str) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, text).await
    }

    pub async fn list_prompts(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query.unwrap_or_default()).await
    }

    pub async fn view_prompts<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors).await
    }

    pub async fn delete_prompts<I: AsRef<str>>(
        &self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&self.store, &selectors).await
    }

    /// Case-insensitive substring filter over the current library, without
    /// listing indexes or messages.
    pub async fn filter(&self, query: &str) -> Vec<crate::model::Prompt> {
        search::filter(&self.store.list().await, query)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn store(&self) -> &PromptStore<B> {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PromptSelector>> {
    if inputs.is_empty() {
        return Err(PromptzError::Api("No prompt selected".to_string()));
    }
    inputs
        .iter()
        .map(|s| s.as_ref().parse::<PromptSelector>().map_err(PromptzError::Api))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
