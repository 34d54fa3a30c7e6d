//! URL path normalization

use url::Url;

const HOME_SEGMENT: &str = "/home/";
const HTML_EXTENSION: &str = ".html";

/// Normalize a page URL (or bare path) to its `/home/...` suffix
///
/// Everything before the first `/home/` segment is dropped, a trailing
/// `.html` is removed from the path, and any query or fragment is re-appended.
/// Returns `None` when the input cannot be parsed or has no `/home/` segment.
pub fn normalize_path(raw: &str) -> Option<String> {
    let parts = split_url(raw.trim())?;

    let start = parts.path.find(HOME_SEGMENT)?;
    let rest = &parts.path[start + HOME_SEGMENT.len()..];
    let rest = rest.strip_suffix(HTML_EXTENSION).unwrap_or(rest);

    let mut normalized = String::with_capacity(HOME_SEGMENT.len() + rest.len());
    normalized.push_str(HOME_SEGMENT);
    normalized.push_str(rest);
    if let Some(query) = parts.query {
        normalized.push('?');
        normalized.push_str(&query);
    }
    if let Some(fragment) = parts.fragment {
        normalized.push('#');
        normalized.push_str(&fragment);
    }
    Some(normalized)
}

/// Join a locale prefix and a normalized path
pub fn localize(prefix: &str, normalized: &str) -> String {
    format!("{prefix}{normalized}")
}

/// Parse an absolute http(s) URL, rejecting everything else
pub fn parse_web_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Some(url),
        _ => None,
    }
}

struct UrlParts {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

fn split_url(raw: &str) -> Option<UrlParts> {
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with('/') {
        return Some(split_reference(raw));
    }

    // `Url` only validates; the parts are cut from the raw text so the path
    // keeps its characters and dot segments as written
    Url::parse(raw).ok()?;
    let (_, after_scheme) = raw.split_once("://")?;
    let path_start = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    Some(split_reference(&after_scheme[path_start..]))
}

/// Split `path?query#fragment` without decoding or re-encoding anything
fn split_reference(reference: &str) -> UrlParts {
    let (rest, fragment) = match reference.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (reference, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (rest, None),
    };
    UrlParts {
        path: path.to_string(),
        query,
        fragment,
    }
}
