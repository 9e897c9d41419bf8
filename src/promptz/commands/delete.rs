use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PromptzError, Result};
use crate::index::{index_prompts, PromptSelector};
use crate::store::prompt_store::PromptStore;
use crate::store::KeyValueBackend;
use std::collections::HashSet;

use super::helpers::{find_selected, preview};

/// Deletes the selected prompts.
///
/// Indexes are resolved against one snapshot taken before anything is
/// removed, so `delete 1 2` removes the first two prompts as listed. An
/// unknown index is an error and nothing is deleted. An unknown id is not:
/// deleting is idempotent. All removals go out in one write, so a failed
/// write deletes nothing.
pub async fn run<B: KeyValueBackend>(
    store: &PromptStore<B>,
    selectors: &[PromptSelector],
) -> Result<CmdResult> {
    let indexed = index_prompts(store.list().await);

    let mut ids = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match (selector, find_selected(&indexed, selector)) {
            (_, Some(dp)) => ids.push(dp.prompt.id.clone()),
            (PromptSelector::Id(id), None) => ids.push(id.clone()),
            (PromptSelector::Index(_), None) => {
                return Err(PromptzError::PromptNotFound(selector.to_string()))
            }
        }
    }
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));

    let removed = store.delete_many(&ids).await?;

    let mut result = CmdResult::default();
    for id in &ids {
        match removed.iter().find(|p| p.id == *id) {
            Some(prompt) => {
                result.add_message(CmdMessage::success(format!(
                    "Prompt deleted: {}",
                    preview(&prompt.text)
                )));
                result.affected_prompts.push(prompt.clone());
            }
            None => {
                result.add_message(CmdMessage::info(format!(
                    "No prompt with id {}; nothing to delete.",
                    id
                )));
            }
        }
    }

    Ok(result)
}
