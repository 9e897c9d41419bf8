//! # Promptz Architecture
//!
//! Promptz is a **UI-agnostic prompt library**: save short text snippets, search
//! them, fetch one for reuse, delete the ones you no longer need. The CLI is one
//! client of the library, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses selectors              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into structured CmdResults          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/prompt_store.rs, text.rs, search.rs)           │
//! │  - Dedup, sanitization, ordering, rollback on failed writes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backend (store/)                                           │
//! │  - Async single-key get/set: FileBackend, MemBackend,       │
//! │    CallbackAdapter                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns Rust types, never
//! prints and never exits. Failures come back as values: a failed load is a
//! warning in the result, a rejected duplicate is an info message, a failed
//! write is an `Err` and the library is left exactly as it was.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`store`]: Backend trait, backends, and the [`store::prompt_store::PromptStore`]
//! - [`text`]: Sanitization and normalization rules
//! - [`search`]: Substring filtering and library views
//! - [`model`]: The `Prompt` record
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod search;
pub mod store;
pub mod text;
