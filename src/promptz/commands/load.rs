use crate::commands::{CmdMessage, CmdResult};
use crate::store::prompt_store::PromptStore;
use crate::store::KeyValueBackend;

/// Loads the library. Never fails: a storage error leaves the library empty
/// and is reported as a warning.
pub async fn run<B: KeyValueBackend>(store: &PromptStore<B>) -> CmdResult {
    let report = store.load().await;
    let mut result = CmdResult::default();

    if let Some(failure) = &report.failure {
        result.add_message(CmdMessage::warning(format!(
            "Could not load prompts from local storage. ({})",
            failure
        )));
    }

    if report.discarded > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} unreadable saved prompt{}.",
            report.discarded,
            if report.discarded == 1 { "" } else { "s" }
        )));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemBackend;
    use crate::store::DEFAULT_STORAGE_KEY;
    use serde_json::json;

    #[tokio::test]
    async fn clean_load_is_silent() {
        let store = PromptStore::with_backend(MemBackend::new());
        let result = run(&store).await;
        assert!(result.messages.is_empty());
    }

    #[tokio::test]
    async fn failure_becomes_warning() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let store = PromptStore::with_backend(backend);

        let result = run(&store).await;
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0]
            .content
            .contains("Could not load prompts from local storage."));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn discarded_entries_are_counted() {
        let backend = MemBackend::new();
        backend.insert_raw(
            DEFAULT_STORAGE_KEY,
            json!([{"id": "a", "text": "ok", "createdAt": 1}, {"bogus": true}]),
        );
        let store = PromptStore::with_backend(backend);

        let result = run(&store).await;
        assert_eq!(result.messages[0].content, "Skipped 1 unreadable saved prompt.");
        assert_eq!(store.list().await.len(), 1);
    }
}
