//! Content types and cache classes for served files.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Extensions that must always be revalidated. Source and markup files
/// change during development; everything else gets a long max-age.
static NO_CACHE_EXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(html|htm|jsx|js|mjs|css)$").unwrap());

/// The Content-Type for a file path, by extension.
///
/// Unknown extensions fall back to `application/octet-stream`.
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" | "jsx" => "text/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Whether the path belongs to the no-cache class.
#[must_use]
pub fn is_no_cache(path: &Path) -> bool {
    path.to_str().is_some_and(|p| NO_CACHE_EXT.is_match(p))
}
