//! Document id extraction from user-supplied input.

use std::sync::LazyLock;

use regex::Regex;

static DOCUMENT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").unwrap());

static SHORT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap());

static BARE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z0-9_-]{20,})").unwrap());

static VALID_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{20,44}$").unwrap());

/// Pull a document id out of a raw id or a sharing URL.
///
/// Input that looks like a bare id (no slashes, no scheme) is returned as-is;
/// URLs are matched against the canonical `/document/d/<id>` path, then the
/// shortened `/d/<id>` form, then any id-shaped token.
#[must_use]
pub fn parse_doc_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.contains('/') && !trimmed.contains("http") {
        return Some(trimmed.to_owned());
    }

    DOCUMENT_PATH_RE
        .captures(trimmed)
        .or_else(|| SHORT_PATH_RE.captures(trimmed))
        .or_else(|| BARE_ID_RE.captures(trimmed))
        .map(|captures| captures[1].to_owned())
}

/// Whether a string is shaped like a document id.
#[must_use]
pub fn is_valid_doc_id(id: &str) -> bool {
    VALID_ID_RE.is_match(id)
}
