use crate::error::{PromptzError, Result};
use crate::index::{index_prompts, DisplayPrompt, PromptSelector};
use crate::model::Prompt;

const PREVIEW_CHARS: usize = 40;

/// Finds the prompt a selector points at in an indexed snapshot.
pub fn find_selected<'a>(
    indexed: &'a [DisplayPrompt],
    selector: &PromptSelector,
) -> Option<&'a DisplayPrompt> {
    match selector {
        PromptSelector::Index(n) => indexed.iter().find(|dp| dp.index == *n),
        PromptSelector::Id(id) => indexed.iter().find(|dp| &dp.prompt.id == id),
    }
}

/// Resolves every selector against one snapshot, failing on the first miss.
pub fn prompts_by_selectors(
    prompts: Vec<Prompt>,
    selectors: &[PromptSelector],
) -> Result<Vec<DisplayPrompt>> {
    let indexed = index_prompts(prompts);
    selectors
        .iter()
        .map(|selector| {
            find_selected(&indexed, selector)
                .cloned()
                .ok_or_else(|| PromptzError::PromptNotFound(selector.to_string()))
        })
        .collect()
}

/// First line of `text`, shortened for status messages.
pub fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    let mut chars = first_line.chars();
    let mut short: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() || text.trim().lines().count() > 1 {
        short = short.trim_end().to_string();
        short.push_str("...");
    }
    short
}
