//! # CLI Layer
//!
//! This module is **one possible UI client** for promptz. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Decides exit codes (through the `Result` handed back to `main.rs`)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! Listing output goes to stdout. Load warnings go to stderr so `view` output
//! stays clean when piped.

use super::print::{print_messages, print_notices, print_prompts, print_raw_prompts};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use promptz::api::{ConfigAction, PromptzApi};
use promptz::config::{PromptzConfig, CONFIG_KEYS};
use promptz::error::{PromptzError, Result};
use promptz::store::fs::FileBackend;
use promptz::store::prompt_store::PromptStore;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

/// Overrides the platform data directory when `--data-dir` is not given.
const HOME_ENV: &str = "PROMPTZ_HOME";

struct AppContext {
    api: PromptzApi<FileBackend>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;

    // Config never touches the prompt library, so it skips the load.
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(data_dir, key, value);
    }

    let ctx = init_context(data_dir).await?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&ctx, text).await,
        Some(Commands::List { search, ids }) => handle_list(&ctx, search, ids).await,
        Some(Commands::Search { query, ids }) => {
            handle_list(&ctx, Some(query.join(" ")), ids).await
        }
        Some(Commands::View { selectors }) => handle_view(&ctx, selectors).await,
        Some(Commands::Delete { selectors }) => handle_delete(&ctx, selectors).await,
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None, false).await,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (e.g. in-process tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "promptz", "promptz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PromptzError::Api("Could not determine data directory".to_string()))
}

async fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    let config = PromptzConfig::load(&data_dir)?;
    let backend = FileBackend::new(config.storage_path(&data_dir));
    let store = PromptStore::with_key(backend, config.storage_key.clone());
    let api = PromptzApi::new(store, data_dir);

    let loaded = api.load().await;
    print_notices(&loaded.messages);

    Ok(AppContext { api })
}

async fn handle_add(ctx: &AppContext, text: Vec<String>) -> Result<()> {
    let text = if text.is_empty() {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        text.join(" ")
    };

    let result = ctx.api.create_prompt(&text).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_list(ctx: &AppContext, search: Option<String>, show_ids: bool) -> Result<()> {
    let result = ctx.api.list_prompts(search.as_deref()).await?;
    print_prompts(&result.listed_prompts, show_ids);
    print_messages(&result.messages);
    Ok(())
}

async fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_prompts(&selectors).await?;
    print_raw_prompts(&result.listed_prompts);
    print_notices(&result.messages);
    Ok(())
}

async fn handle_delete(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_prompts(&selectors).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = promptz::commands::config::run(&data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
