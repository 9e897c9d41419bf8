use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_prompts;
use crate::search::{LibraryState, LibraryView};
use crate::store::prompt_store::PromptStore;
use crate::store::KeyValueBackend;
use std::collections::HashSet;

const QUERY_CLIP_CHARS: usize = 28;

/// Lists the library, filtered by `query` when it is not blank.
///
/// Listed prompts keep the index they have in the unfiltered listing.
pub async fn run<B: KeyValueBackend>(store: &PromptStore<B>, query: &str) -> Result<CmdResult> {
    let query = query.trim();
    let prompts = store.list().await;
    let view = LibraryView::build(&prompts, query);

    let matching: HashSet<&str> = view.matches.iter().map(|p| p.id.as_str()).collect();
    let listed = index_prompts(prompts)
        .into_iter()
        .filter(|dp| matching.contains(dp.prompt.id.as_str()))
        .collect();

    let mut result = CmdResult::default().with_listed_prompts(listed);
    result.add_message(summary(&view));
    Ok(result)
}

fn count_label(count: usize) -> String {
    format!("{} prompt{}", count, if count == 1 { "" } else { "s" })
}

fn summary(view: &LibraryView) -> CmdMessage {
    let found = view.matches.len();
    match view.state() {
        LibraryState::Empty => {
            CmdMessage::info("No prompts yet. Save your first one with `promptz add`.")
        }
        LibraryState::NoMatches => CmdMessage::info(format!(
            "No matches for \"{}\".",
            clip_query(&view.query)
        )),
        _ if view.query_active() => CmdMessage::info(format!(
            "{} match{} found ({} of {}).",
            found,
            if found == 1 { "" } else { "es" },
            found,
            view.total
        )),
        LibraryState::Single => CmdMessage::info("One saved prompt, ready to reuse."),
        LibraryState::Many => CmdMessage::info(format!("{} ready to copy.", count_label(view.total))),
    }
}

fn clip_query(query: &str) -> String {
    if query.chars().count() > QUERY_CLIP_CHARS {
        let clipped: String = query.chars().take(QUERY_CLIP_CHARS).collect();
        format!("{}...", clipped.trim_end())
    } else {
        query.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::MemBackend;

    async fn store_with(texts: &[&str]) -> PromptStore<MemBackend> {
        let store = PromptStore::with_backend(MemBackend::new());
        store.load().await;
        for text in texts {
            create::run(&store, text).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let store = store_with(&["first", "second"]).await;
        let result = run(&store, "").await.unwrap();

        let texts: Vec<&str> = result
            .listed_prompts
            .iter()
            .map(|dp| dp.prompt.text.as_str())
            .collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_eq!(result.messages[0].content, "2 prompts ready to copy.");
    }

    #[tokio::test]
    async fn filtered_prompts_keep_full_listing_index() {
        let store = store_with(&["Rust question", "Poem", "Another rust one"]).await;
        let result = run(&store, "  RUST ").await.unwrap();

        let indexes: Vec<usize> = result.listed_prompts.iter().map(|dp| dp.index).collect();
        assert_eq!(indexes, vec![1, 3]);
        assert_eq!(result.messages[0].content, "2 matches found (2 of 3).");
    }

    #[tokio::test]
    async fn empty_library_message() {
        let store = store_with(&[]).await;
        let result = run(&store, "").await.unwrap();
        assert!(result.listed_prompts.is_empty());
        assert!(result.messages[0].content.starts_with("No prompts yet."));

        // An active query over an empty library still reports the library as empty.
        let result = run(&store, "anything").await.unwrap();
        assert!(result.messages[0].content.starts_with("No prompts yet."));
    }

    #[tokio::test]
    async fn no_matches_message_clips_long_queries() {
        let store = store_with(&["something"]).await;
        let result = run(&store, "zzz").await.unwrap();
        assert_eq!(result.messages[0].content, "No matches for \"zzz\".");

        let long = "a very long query that goes on and on";
        let result = run(&store, long).await.unwrap();
        assert_eq!(
            result.messages[0].content,
            "No matches for \"a very long query that goes...\"."
        );
    }

    #[tokio::test]
    async fn single_prompt_message() {
        let store = store_with(&["only one"]).await;
        let result = run(&store, "").await.unwrap();
        assert_eq!(result.messages[0].content, "One saved prompt, ready to reuse.");

        let result = run(&store, "one").await.unwrap();
        assert_eq!(result.messages[0].content, "1 match found (1 of 1).");
    }
}
