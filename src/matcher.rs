//! Whole-token word matching.

use std::sync::LazyLock;

use regex::Regex;

/// A token is a maximal run of word characters and hyphens, so
/// "multi-word-token" is one token rather than three.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w-]+").expect("token pattern compiles"));

/// Count case-insensitive whole-token occurrences of `word` in `content`.
///
/// Content is interpreted as UTF-8; invalid byte sequences are replaced and
/// never match. Only whole tokens compare equal, so "golang" is not a match
/// for "go".
pub fn count_word(content: &[u8], word: &str) -> usize {
    let text = String::from_utf8_lossy(content);
    let word = word.to_lowercase();

    TOKEN
        .find_iter(&text)
        .filter(|token| token.as_str().to_lowercase() == word)
        .count()
}
