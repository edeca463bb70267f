/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").expect("valid script regex")
});
static SRC_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bsrc\s*=\s*["']([^"']+)["']"#).expect("valid src regex")
});
static CANVAS_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<canvas\b[^>]*?\bid\s*=\s*["']([^"']+)["']"#).expect("valid canvas regex")
});

/// Bodies of inline `<script>` tags, in document order
///
/// Tags with a `src` attribute and empty bodies are skipped.
pub fn script_blocks(html: &str) -> Vec<&str> {
    SCRIPT_BLOCK
        .captures_iter(html)
        .filter(|c| !SRC_ATTR.is_match(c.get(1).map_or("", |m| m.as_str())))
        .filter_map(|c| c.get(2).map(|m| m.as_str()))
        .filter(|body| !body.trim().is_empty())
        .collect()
}

/// `src` URLs of external `<script>` tags, in document order
pub fn external_scripts(html: &str) -> Vec<&str> {
    SCRIPT_BLOCK
        .captures_iter(html)
        .filter_map(|c| {
            let attrs = c.get(1)?.as_str();
            SRC_ATTR.captures(attrs)?.get(1)
        })
        .map(|m| m.as_str())
        .collect()
}

/// `id` attributes of `<canvas>` elements, in document order
pub fn canvas_ids(html: &str) -> Vec<&str> {
    CANVAS_ID
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Removes tags and collapses whitespace, leaving the visible text
pub fn visible_text(html: &str) -> String {
    static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));
    let without_scripts = SCRIPT_BLOCK.replace_all(html, " ");
    let text = TAG.replace_all(&without_scripts, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
