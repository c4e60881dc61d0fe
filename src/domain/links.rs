//! URL detection in note content.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<>]+").expect("URL pattern is valid")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

/// A URL found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlMatch {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub url: String,
}

/// Finds every URL in `text`, in order of appearance.
///
/// Matches `http://`, `https://` and bare `www.` addresses. Trailing
/// punctuation is not considered part of the URL, so `see https://x.org.`
/// yields `https://x.org`.
pub fn find_urls(text: &str) -> Vec<UrlMatch> {
    URL_RE
        .find_iter(text)
        .filter_map(|m| {
            let trimmed = trim_trailing(m.as_str());
            // "www." alone or "https://" alone is not a link
            if trimmed.ends_with("://") || trimmed.eq_ignore_ascii_case("www") {
                return None;
            }
            let start = m.start();
            Some(UrlMatch {
                start,
                end: start + trimmed.len(),
                url: trimmed.to_string(),
            })
        })
        .collect()
}

/// Strips sentence punctuation from the end of a match.
///
/// A closing `)` or `]` is kept while the URL has an unmatched opener for
/// it, as in `https://en.wikipedia.org/wiki/Rust_(programming_language)`.
fn trim_trailing(url: &str) -> &str {
    let mut url = url;
    while let Some(last) = url.chars().last() {
        let opener = match last {
            ')' => Some('('),
            ']' => Some('['),
            c if TRAILING_PUNCTUATION.contains(&c) => None,
            _ => break,
        };
        if let Some(opener) = opener {
            if url.matches(opener).count() >= url.matches(last).count() {
                break;
            }
        }
        url = &url[..url.len() - last.len_utf8()];
    }
    url
}
