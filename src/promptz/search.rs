//! # Search
//!
//! Filtering is a plain case-insensitive substring test over a collection
//! snapshot. There is no index and no ranking: relative order is always the
//! order of the input, and the filter runs again on every query change.

use crate::model::Prompt;

/// Prompts whose text contains `query`, ignoring case.
///
/// An empty query returns the collection unchanged.
pub fn filter(prompts: &[Prompt], query: &str) -> Vec<Prompt> {
    if query.is_empty() {
        return prompts.to_vec();
    }

    let query = query.to_lowercase();
    prompts
        .iter()
        .filter(|p| p.text.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Shape of a filtered library, for choosing empty-state wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryState {
    /// No prompts saved at all.
    Empty,
    /// Prompts exist but none match the active query.
    NoMatches,
    Single,
    Many,
}

/// A filtered view plus what is needed to describe it.
#[derive(Debug, Clone)]
pub struct LibraryView {
    pub matches: Vec<Prompt>,
    pub total: usize,
    pub query: String,
}

impl LibraryView {
    pub fn build(prompts: &[Prompt], query: &str) -> Self {
        Self {
            matches: filter(prompts, query),
            total: prompts.len(),
            query: query.to_string(),
        }
    }

    pub fn query_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn state(&self) -> LibraryState {
        match self.matches.len() {
            _ if self.total == 0 => LibraryState::Empty,
            0 => LibraryState::NoMatches,
            1 => LibraryState::Single,
            _ => LibraryState::Many,
        }
    }
}
