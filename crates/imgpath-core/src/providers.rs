//! Provider interfaces for the URL prefixes and folders of the running site.
//!
//! The resolver only depends on these traits and does not know where the
//! values come from (a config file, a store manager, a test fixture).
//! Implementations are queried on every resolver call, so they must reflect
//! the current store when store configuration can change.

use std::sync::Arc;

use crate::error::LookupError;

/// URL prefixes under which the site serves files.
pub trait UrlProvider {
    /// Base URL of the site, e.g. `https://shop.example.com/`.
    fn base_url(&self) -> String;

    /// Media URL of the current store. Fails with
    /// [`LookupError::NoStoreContext`] when there is no current store.
    fn media_url(&self) -> Result<String, LookupError>;

    /// Static asset URL of the current store. Fails with
    /// [`LookupError::NoStoreContext`] when there is no current store.
    fn static_url(&self) -> Result<String, LookupError>;
}

/// Filesystem folders paired with the URL prefixes of [`UrlProvider`].
pub trait FolderProvider {
    /// Public document root (no trailing slash).
    fn base_folder(&self) -> String;

    /// Media folder (no trailing slash). Fails with
    /// [`LookupError::DirectoryNotFound`].
    fn media_folder(&self) -> Result<String, LookupError>;

    /// Static asset folder (no trailing slash). Fails with
    /// [`LookupError::DirectoryNotFound`].
    fn static_folder(&self) -> Result<String, LookupError>;
}

impl<T: UrlProvider + ?Sized> UrlProvider for &T {
    fn base_url(&self) -> String {
        (**self).base_url()
    }

    fn media_url(&self) -> Result<String, LookupError> {
        (**self).media_url()
    }

    fn static_url(&self) -> Result<String, LookupError> {
        (**self).static_url()
    }
}

impl<T: FolderProvider + ?Sized> FolderProvider for &T {
    fn base_folder(&self) -> String {
        (**self).base_folder()
    }

    fn media_folder(&self) -> Result<String, LookupError> {
        (**self).media_folder()
    }

    fn static_folder(&self) -> Result<String, LookupError> {
        (**self).static_folder()
    }
}

impl<T: UrlProvider + ?Sized> UrlProvider for Arc<T> {
    fn base_url(&self) -> String {
        (**self).base_url()
    }

    fn media_url(&self) -> Result<String, LookupError> {
        (**self).media_url()
    }

    fn static_url(&self) -> Result<String, LookupError> {
        (**self).static_url()
    }
}

impl<T: FolderProvider + ?Sized> FolderProvider for Arc<T> {
    fn base_folder(&self) -> String {
        (**self).base_folder()
    }

    fn media_folder(&self) -> Result<String, LookupError> {
        (**self).media_folder()
    }

    fn static_folder(&self) -> Result<String, LookupError> {
        (**self).static_folder()
    }
}
