//! Error types for location lookups and URL resolution.

use thiserror::Error;

/// Failure reported by a URL or folder provider.
///
/// These never reach callers of [`crate::UrlResolver`]; the resolver maps them
/// to `false` or to a [`NotFoundError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No current store is available to answer a store-scoped URL lookup.
    #[error("no store context available")]
    NoStoreContext,
    /// A named directory is not configured or does not exist.
    #[error("directory \"{0}\" does not exist")]
    DirectoryNotFound(String),
}

/// Why a URL could not be resolved to a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    NotLocal,
    MediaFolderMissing,
    StaticFolderMissing,
    Unmatched,
}

/// The only error returned by [`crate::UrlResolver::resolve_to_path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotFoundError {
    pub reason: NotFoundReason,
    message: String,
}

impl NotFoundError {
    pub(crate) fn not_local(url: &str) -> Self {
        Self {
            reason: NotFoundReason::NotLocal,
            message: format!("URL \"{url}\" does not appear to be a local file"),
        }
    }

    pub(crate) fn media_folder_missing() -> Self {
        Self {
            reason: NotFoundReason::MediaFolderMissing,
            message: "Media folder does not exist".to_string(),
        }
    }

    pub(crate) fn static_folder_missing() -> Self {
        Self {
            reason: NotFoundReason::StaticFolderMissing,
            message: "Static folder does not exist".to_string(),
        }
    }

    pub(crate) fn unmatched(url: &str) -> Self {
        Self {
            reason: NotFoundReason::Unmatched,
            message: format!("URL \"{url}\" is not matched with a local file"),
        }
    }

    /// Human-readable reason, suitable for logs and CLI output.
    pub fn message(&self) -> &str {
        &self.message
    }
}
