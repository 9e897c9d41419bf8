//! # Text Normalization
//!
//! Two canonical forms of user input:
//!
//! - [`sanitize`]: what gets stored. Trimmed and capped at [`MAX_PROMPT_LENGTH`]
//!   characters, otherwise the user's formatting is kept as typed.
//! - [`normalize`]: what gets compared. Every whitespace run collapses to a single
//!   space, so `"Hello world\n"` and `"Hello   world"` count as the same prompt.
//!
//! Lengths are measured in Unicode scalar values (`char`s), never bytes, so the
//! cap never splits a character.

/// Maximum stored prompt length, in characters.
pub const MAX_PROMPT_LENGTH: usize = 4000;

/// Trims surrounding whitespace and truncates to [`MAX_PROMPT_LENGTH`] characters.
///
/// Returns an empty string for empty or whitespace-only input.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(MAX_PROMPT_LENGTH) {
        Some((cut, _)) => trimmed[..cut].to_string(),
        None => trimmed.to_string(),
    }
}

/// Collapses whitespace runs (spaces, tabs, newlines) into one space and trims.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length of `text` in the unit [`MAX_PROMPT_LENGTH`] is expressed in.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_but_keeps_inner_spacing() {
        assert_eq!(sanitize("  Hello   world  "), "Hello   world");
        assert_eq!(sanitize("\n\tline one\nline two\n"), "line one\nline two");
    }

    #[test]
    fn sanitize_whitespace_only_is_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n\t  "), "");
    }

    #[test]
    fn sanitize_caps_length() {
        let long = "a".repeat(MAX_PROMPT_LENGTH + 250);
        let result = sanitize(&long);
        assert_eq!(char_count(&result), MAX_PROMPT_LENGTH);
    }

    #[test]
    fn sanitize_caps_by_chars_not_bytes() {
        let long = "é".repeat(MAX_PROMPT_LENGTH + 1);
        let result = sanitize(&long);
        assert_eq!(char_count(&result), MAX_PROMPT_LENGTH);
        assert_eq!(result.len(), MAX_PROMPT_LENGTH * 2);
    }

    #[test]
    fn sanitize_trims_before_capping() {
        let padded = format!("{}{}", " ".repeat(100), "b".repeat(MAX_PROMPT_LENGTH));
        assert_eq!(sanitize(&padded), "b".repeat(MAX_PROMPT_LENGTH));
    }

    #[test]
    fn normalize_collapses_all_whitespace() {
        assert_eq!(normalize("  Hello   world  "), "Hello world");
        assert_eq!(normalize("Hello\n\n\tworld\n"), "Hello world");
        assert_eq!(normalize("Hello world"), "Hello world");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(" \n "), "");
    }
}
