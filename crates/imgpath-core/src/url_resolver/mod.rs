//! Maps image URLs served by this site to files on disk.
//!
//! Prefixes are checked by substring containment in a fixed order: media,
//! static, base, then root-relative. Media and static URLs are usually
//! subpaths of the base URL, so they are checked first. Every call re-reads
//! prefixes and folders from the providers.

mod normalize;

use crate::error::{LookupError, NotFoundError};
use crate::providers::{FolderProvider, UrlProvider};

use normalize::{contains_prefix, replace_prefix};
pub use normalize::{is_absolute_http, is_root_relative, strip_static_version};

/// Resolves locally served URLs to filesystem paths.
///
/// Holds no state besides its providers, so a shared reference can be used
/// from many threads when the providers are `Sync`.
#[derive(Debug, Clone)]
pub struct UrlResolver<U, F> {
    urls: U,
    folders: F,
}

impl<U: UrlProvider, F: FolderProvider> UrlResolver<U, F> {
    pub fn new(urls: U, folders: F) -> Self {
        Self { urls, folders }
    }

    /// Returns true if `url` is served by this site.
    ///
    /// Anything that is not an absolute `http(s)://` URL is considered local.
    /// Absolute URLs are local when they contain the base URL or the media URL.
    /// A missing store context makes the media check answer `false`.
    pub fn is_local(&self, url: &str) -> bool {
        if !is_absolute_http(url) {
            return true;
        }

        if contains_prefix(url, &self.urls.base_url()) {
            return true;
        }

        match self.urls.media_url() {
            Ok(media_url) => contains_prefix(url, &media_url),
            Err(e) => {
                tracing::debug!(url, error = %e, "media URL unavailable, treating as remote");
                false
            }
        }
    }

    /// Translates `url` into the path of the file that serves it.
    ///
    /// `/static/version<digits>/` segments are removed first. Lookup failures
    /// from the providers are reported as [`NotFoundError`] and never leak.
    pub fn resolve_to_path(&self, url: &str) -> Result<String, NotFoundError> {
        let normalized = strip_static_version(url);
        let url: &str = &normalized;

        if !self.is_local(url) {
            return Err(NotFoundError::not_local(url));
        }

        if let Some(path) = map_prefixed(
            url,
            self.urls.media_url(),
            || self.folders.media_folder(),
            NotFoundError::media_folder_missing,
        )? {
            tracing::debug!(url, path = %path, "mapped to media folder");
            return Ok(path);
        }

        if let Some(path) = map_prefixed(
            url,
            self.urls.static_url(),
            || self.folders.static_folder(),
            NotFoundError::static_folder_missing,
        )? {
            tracing::debug!(url, path = %path, "mapped to static folder");
            return Ok(path);
        }

        let base_url = self.urls.base_url();
        if contains_prefix(url, &base_url) {
            let path = replace_prefix(url, &base_url, &self.folders.base_folder());
            tracing::debug!(url, path = %path, "mapped to base folder");
            return Ok(path);
        }

        if is_root_relative(url) {
            let path = format!("{}{}", self.folders.base_folder(), url);
            tracing::debug!(url, path = %path, "mapped root-relative URL to base folder");
            return Ok(path);
        }

        Err(NotFoundError::unmatched(url))
    }

    /// Resolves each URL independently, keeping input order.
    pub fn resolve_all<'a, I>(&self, urls: I) -> Vec<(String, Result<String, NotFoundError>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        urls.into_iter()
            .map(|url| (url.to_string(), self.resolve_to_path(url)))
            .collect()
    }
}

/// Rewrites `url` with the folder paired to `prefix` when it contains it.
/// The folder is only looked up on a match.
fn map_prefixed(
    url: &str,
    prefix: Result<String, LookupError>,
    folder: impl FnOnce() -> Result<String, LookupError>,
    missing: fn() -> NotFoundError,
) -> Result<Option<String>, NotFoundError> {
    let prefix = prefix.map_err(|e| {
        tracing::debug!(url, error = %e, "prefix lookup failed");
        missing()
    })?;
    if !contains_prefix(url, &prefix) {
        return Ok(None);
    }
    let folder = folder().map_err(|e| {
        tracing::debug!(url, error = %e, "folder lookup failed");
        missing()
    })?;
    Ok(Some(replace_prefix(url, &prefix, &folder)))
}
