//! URL shape checks and cache-busting segment removal.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static ABSOLUTE_HTTP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid scheme pattern"));

static STATIC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/static/version[0-9]+/").expect("valid version pattern"));

/// True if `url` starts with `http://` or `https://` (case-sensitive).
pub fn is_absolute_http(url: &str) -> bool {
    ABSOLUTE_HTTP.is_match(url)
}

/// True if `url` is root-relative (`/path...`).
pub fn is_root_relative(url: &str) -> bool {
    url.starts_with('/')
}

/// Collapses deployed static asset segments such as `/static/version1712345678/`
/// to `/static/`. Borrows `url` unchanged when there is nothing to strip.
pub fn strip_static_version(url: &str) -> Cow<'_, str> {
    STATIC_VERSION.replace_all(url, "/static/")
}

/// Substring containment used for every prefix check. An empty prefix never
/// matches.
pub(super) fn contains_prefix(url: &str, prefix: &str) -> bool {
    !prefix.is_empty() && url.contains(prefix)
}

/// Replaces every occurrence of `prefix` with `folder/`.
pub(super) fn replace_prefix(url: &str, prefix: &str, folder: &str) -> String {
    url.replace(prefix, &format!("{folder}/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_http_schemes() {
        assert!(is_absolute_http("http://example.com/a.png"));
        assert!(is_absolute_http("https://example.com/a.png"));
        assert!(!is_absolute_http("/media/a.png"));
        assert!(!is_absolute_http("ftp://example.com/a.png"));
        assert!(!is_absolute_http("//example.com/a.png"));
        assert!(!is_absolute_http("HTTPS://example.com/a.png"));
        assert!(!is_absolute_http("see https://example.com/"));
    }

    #[test]
    fn strips_version_segment() {
        assert_eq!(
            strip_static_version("https://host/static/version123456/foo/bar.png"),
            "https://host/static/foo/bar.png"
        );
        assert_eq!(
            strip_static_version("/static/version1/frontend/logo.svg"),
            "/static/frontend/logo.svg"
        );
    }

    #[test]
    fn leaves_unversioned_urls_borrowed() {
        let url = "https://host/static/versionless/foo.png";
        assert!(matches!(strip_static_version(url), Cow::Borrowed(_)));
        let url = "https://host/static/version/foo.png";
        assert_eq!(strip_static_version(url), url);
        let url = "https://host/media/version12/foo.png";
        assert_eq!(strip_static_version(url), url);
    }

    #[test]
    fn empty_prefix_never_matches() {
        assert!(!contains_prefix("https://host/a.png", ""));
        assert!(contains_prefix("https://host/a.png", "https://host/"));
    }

    #[test]
    fn replace_prefix_appends_separator() {
        assert_eq!(
            replace_prefix("https://host/media/a.png", "https://host/media/", "/srv/media"),
            "/srv/media/a.png"
        );
    }
}
