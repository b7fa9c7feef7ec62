//! Markup stripping for incoming chat text.
//!
//! Chat payloads carry lightweight inline formatting such as `[b]...[/b]`
//! or `[COLOR=red]...[/COLOR]`'s closing tag. A tag boundary can fall in
//! the middle of a URL, so tags are removed before URL matching runs.

use std::sync::LazyLock;

use regex::Regex;

/// An opening or closing inline-format tag: `[`, optional `/`, one or more
/// word characters, `]`.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[/?[A-Za-z0-9_]+\]").expect("tag pattern is valid"));

/// Remove every inline formatting tag, left to right, non-overlapping.
///
/// Removing a tag can splice surrounding bracket text into a new tag
/// (`[a[b]c]` becomes `[ac]`), so passes repeat until the text is stable.
/// Total over arbitrary input, and idempotent: the result never contains a
/// substring matching the tag pattern.
pub fn strip_markup(text: &str) -> String {
    let mut stripped = TAG.replace_all(text, "").into_owned();
    loop {
        let next = TAG.replace_all(&stripped, "").into_owned();
        if next == stripped {
            return next;
        }
        stripped = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_opening_and_closing_tags() {
        assert_eq!(
            strip_markup("check [b]this[/b] out: https://example.com/page"),
            "check this out: https://example.com/page"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
    }

    #[test]
    fn test_unmatched_and_nested_tags() {
        assert_eq!(strip_markup("[i][b]deep[/b]"), "deep");
        assert_eq!(strip_markup("dangling [u] tag"), "dangling  tag");
        assert_eq!(strip_markup("[a[b]c]"), "");
    }

    #[test]
    fn test_tag_with_attribute_value_keeps_attribute_form() {
        // `[COLOR=red]` carries an attribute, so only its closing tag
        // matches the bare-word pattern.
        assert_eq!(strip_markup("[COLOR=red]x[/COLOR]"), "[COLOR=red]x");
    }

    #[test]
    fn test_bracket_text_that_is_not_a_tag_survives() {
        assert_eq!(strip_markup("[not a tag]"), "[not a tag]");
        assert_eq!(strip_markup("a[1]"), "a");
        assert_eq!(strip_markup("[[nested]]"), "[]");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "plain",
            "[b]bold[/b]",
            "[[nested]]",
            "[a[b]c]",
            "a [i]b[/i] c https://example.com",
        ];
        for input in inputs {
            let once = strip_markup(input);
            assert_eq!(strip_markup(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_output_contains_no_tag_substring() {
        for input in ["[b][/b]", "[a[b]c]", "[x[y[z]]]", "x[tag]y[/tag]z"] {
            assert!(!TAG.is_match(&strip_markup(input)), "input: {input:?}");
        }
    }
}
