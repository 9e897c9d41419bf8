use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptz", bin_name = "promptz", version)]
#[command(about = "Save, search and reuse text prompts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the prompt library (defaults to $PROMPTZ_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new prompt (reads stdin when no text is given)
    #[command(alias = "a")]
    Add {
        /// Prompt text; words are joined with spaces
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// List saved prompts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show prompts containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Show prompt ids
        #[arg(long)]
        ids: bool,
    },

    /// Search prompts (case-insensitive substring)
    Search {
        /// Search text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Show prompt ids
        #[arg(long)]
        ids: bool,
    },

    /// Print the raw text of one or more prompts
    #[command(alias = "v")]
    View {
        /// Listing indexes or prompt ids (e.g. 1 3 1718000000000_k3j9x0qa)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete one or more prompts
    #[command(alias = "rm")]
    Delete {
        /// Listing indexes or prompt ids (e.g. 1 3 1718000000000_k3j9x0qa)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-file, storage-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
