//! # Command Layer
//!
//! One submodule per user action. Commands call into the
//! [`PromptStore`](crate::store::prompt_store::PromptStore), then turn its
//! outcomes into a structured [`CmdResult`]: the prompts involved plus leveled
//! messages. They never print, never exit, and never assume a terminal.
//!
//! ## Outcome Mapping
//!
//! | Store outcome        | Command result                                   |
//! |----------------------|--------------------------------------------------|
//! | load failure         | `Ok`, warning message, empty library             |
//! | `EmptyInput`         | `Err`                                            |
//! | `DuplicateExists`    | `Ok`, info message, nothing affected             |
//! | `PersistenceFailed`  | `Err`                                            |
//! | delete of unknown id | `Ok`, info message                               |
//!
//! ## Command Modules
//!
//! - [`load`]: Load the library at startup
//! - [`create`]: Save a new prompt
//! - [`list`]: List prompts, optionally filtered by a search query
//! - [`view`]: Fetch prompts by selector
//! - [`delete`]: Remove prompts
//! - [`config`]: Read and change configuration
//! - [`helpers`]: Selector resolution and previews

use crate::config::PromptzConfig;
use crate::index::DisplayPrompt;
use crate::model::Prompt;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod load;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Prompts created or removed by the command
    pub affected_prompts: Vec<Prompt>,
    /// Prompts to display, with their listing index
    pub listed_prompts: Vec<DisplayPrompt>,
    pub config: Option<PromptzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_prompts(mut self, prompts: Vec<Prompt>) -> Self {
        self.affected_prompts = prompts;
        self
    }

    pub fn with_listed_prompts(mut self, prompts: Vec<DisplayPrompt>) -> Self {
        self.listed_prompts = prompts;
        self
    }

    pub fn with_config(mut self, config: PromptzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
