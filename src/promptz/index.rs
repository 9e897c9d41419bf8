//! # Display Indexes
//!
//! Prompt ids (`1718000000000_k3j9x0qa`) are unpleasant to type, so the CLI
//! also accepts 1-based positions in the default listing order (newest first).
//!
//! Indexes are always assigned over the **full** collection before any search
//! filter is applied. A prompt listed as `3.` under `promptz search foo` is
//! still `3` for `promptz view 3` and `promptz delete 3`.

use crate::model::Prompt;
use std::str::FromStr;

/// A prompt paired with its position in the default listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPrompt {
    pub prompt: Prompt,
    pub index: usize,
}

/// User input referring to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSelector {
    Index(usize),
    Id(String),
}

impl std::fmt::Display for PromptSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptSelector::Index(i) => write!(f, "{}", i),
            PromptSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for PromptSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty prompt selector".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) => Err("Indexes start at 1".to_string()),
                Ok(n) => Ok(PromptSelector::Index(n)),
                Err(e) => Err(format!("Invalid index {}: {}", s, e)),
            };
        }
        Ok(PromptSelector::Id(s.to_string()))
    }
}

/// Numbers prompts 1..n in the order given.
pub fn index_prompts(prompts: Vec<Prompt>) -> Vec<DisplayPrompt> {
    prompts
        .into_iter()
        .enumerate()
        .map(|(i, prompt)| DisplayPrompt {
            prompt,
            index: i + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indexes_and_ids() {
        assert_eq!("3".parse(), Ok(PromptSelector::Index(3)));
        assert_eq!(" 12 ".parse(), Ok(PromptSelector::Index(12)));
        assert_eq!(
            "1718000000000_k3j9x0qa".parse(),
            Ok(PromptSelector::Id("1718000000000_k3j9x0qa".to_string()))
        );
    }

    #[test]
    fn rejects_zero_and_empty() {
        assert!("0".parse::<PromptSelector>().is_err());
        assert!("".parse::<PromptSelector>().is_err());
    }

    #[test]
    fn indexes_are_one_based() {
        let prompts = vec![
            Prompt {
                id: "b".into(),
                text: "newer".into(),
                created_at: 2,
            },
            Prompt {
                id: "a".into(),
                text: "older".into(),
                created_at: 1,
            },
        ];
        let indexed = index_prompts(prompts);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].prompt.id, "b");
        assert_eq!(indexed[1].index, 2);
    }
}
