use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::PromptSelector;
use crate::store::prompt_store::PromptStore;
use crate::store::KeyValueBackend;

use super::helpers::prompts_by_selectors;

pub async fn run<B: KeyValueBackend>(
    store: &PromptStore<B>,
    selectors: &[PromptSelector],
) -> Result<CmdResult> {
    let prompts = prompts_by_selectors(store.list().await, selectors)?;
    Ok(CmdResult::default().with_listed_prompts(prompts))
}
