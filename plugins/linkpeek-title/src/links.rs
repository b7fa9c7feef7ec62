//! First-URL extraction from sanitized chat text.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Spans that look like scheme-qualified URLs. This only locates
/// candidates; syntactic validity is decided by `url::Url`.
static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-z][a-z0-9+.-]*://\S+").expect("url pattern is valid"));

/// Prose punctuation that commonly trails a URL but is not part of it.
const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '>', '\'', '"'];

/// The first well-formed absolute URL in `text`, if any.
///
/// A match requires an explicit scheme and a host; relative references and
/// bare paths never match. The returned string is the matched span
/// verbatim, minus trailing prose punctuation.
pub fn find_first_url(text: &str) -> Option<String> {
    for span in CANDIDATE.find_iter(text) {
        let candidate = span.as_str().trim_end_matches(TRAILING);
        match Url::parse(candidate) {
            Ok(parsed) if parsed.has_host() => return Some(candidate.to_string()),
            _ => {}
        }
    }
    None
}
