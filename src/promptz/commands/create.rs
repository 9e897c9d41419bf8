use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::prompt_store::PromptStore;
use crate::store::KeyValueBackend;

pub async fn run<B: KeyValueBackend>(store: &PromptStore<B>, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.create(text).await {
        Ok(prompt) => {
            result.add_message(CmdMessage::success("Prompt saved."));
            result.affected_prompts.push(prompt);
        }
        Err(e) if e.is_informational() => {
            result.add_message(CmdMessage::info(e.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::{CreateError, PromptzError};
    use crate::store::memory::MemBackend;

    async fn loaded_store() -> PromptStore<MemBackend> {
        let store = PromptStore::with_backend(MemBackend::new());
        store.load().await;
        store
    }

    #[tokio::test]
    async fn saves_prompt() {
        let store = loaded_store().await;
        let result = run(&store, "  Explain like I'm five  ").await.unwrap();

        assert_eq!(result.affected_prompts.len(), 1);
        assert_eq!(result.affected_prompts[0].text, "Explain like I'm five");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Prompt saved.");
    }

    #[tokio::test]
    async fn duplicate_is_informational() {
        let store = loaded_store().await;
        run(&store, "Hello   world").await.unwrap();

        let result = run(&store, "Hello world\n").await.unwrap();
        assert!(result.affected_prompts.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(
            result.messages[0].content,
            "This prompt already exists in your library."
        );
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn empty_input_is_an_error() {
        let store = loaded_store().await;
        let err = run(&store, " \n ").await.unwrap_err();
        assert!(matches!(err, PromptzError::Create(CreateError::EmptyInput)));
    }

    #[tokio::test]
    async fn persistence_failure_is_an_error() {
        let store = loaded_store().await;
        store.backend().set_simulate_write_error(true);

        let err = run(&store, "will not stick").await.unwrap_err();
        assert!(matches!(
            err,
            PromptzError::Create(CreateError::PersistenceFailed(_))
        ));
        assert!(store.list().await.is_empty());
    }
}
