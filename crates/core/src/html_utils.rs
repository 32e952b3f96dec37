// ABOUTME: HTML utility functions for scraped page fragments.
// ABOUTME: Provides comment/tag/entity stripping, style/script removal, and field-level unescaping.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG_OR_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.*?>|&([a-z0-9]+|#[0-9]{1,6}|#x[0-9a-f]{1,6});").unwrap());
static STYLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style\b.*?</style>").unwrap());
static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());
// Truncated scrapes leave entities terminated by a comma instead of a semicolon.
static FIELD_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&(amp|nbsp)[;,]").unwrap());

/// Strips comments, tags, and character entities from an HTML fragment.
///
/// Comments are removed first and may span lines. Every remaining tag and
/// every named or numeric entity is replaced by a single space. Whitespace
/// is left as-is so callers can decide how to lay the text out.
pub fn clean_html(raw_html: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(raw_html, "");
    TAG_OR_ENTITY_RE
        .replace_all(&without_comments, " ")
        .into_owned()
}

/// Removes every `<style>...</style>` block, case-insensitively.
pub fn remove_style_tags(html: &str) -> String {
    STYLE_RE.replace_all(html, "").into_owned()
}

/// Removes every `<script>...</script>` block, case-insensitively.
pub fn remove_script_tags(html: &str) -> String {
    SCRIPT_RE.replace_all(html, "").into_owned()
}

/// Removes both script and style blocks so field patterns only see markup.
pub fn strip_inert_blocks(html: &str) -> String {
    remove_style_tags(&remove_script_tags(html))
}

/// Decodes the ampersand and non-breaking-space entities found in scraped fields.
///
/// Accepts both the well-formed (`&amp;`) and the comma-terminated (`&amp,`)
/// spellings. Decoding is single-pass, so `&amp;nbsp;` becomes `&nbsp;`.
pub fn unescape_entities(s: &str) -> String {
    FIELD_ENTITY_RE
        .replace_all(s, |caps: &Captures| match &caps[1] {
            "amp" => "&",
            _ => " ",
        })
        .into_owned()
}
