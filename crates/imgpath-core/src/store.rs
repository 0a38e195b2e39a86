//! Config-backed provider for the URLs and folders of a single store.

use std::path::Path;

use crate::config::ImgpathConfig;
use crate::error::LookupError;
use crate::providers::{FolderProvider, UrlProvider};
use crate::url_resolver::UrlResolver;

/// Public document root below the installation root.
const PUBLIC_SUBDIR: &str = "pub";

/// Answers URL and folder lookups from an [`ImgpathConfig`].
#[derive(Debug, Clone)]
pub struct StoreLocations {
    config: ImgpathConfig,
}

impl StoreLocations {
    pub fn new(config: ImgpathConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImgpathConfig {
        &self.config
    }

    /// Resolver borrowing this store for both URLs and folders.
    pub fn resolver(&self) -> UrlResolver<&Self, &Self> {
        UrlResolver::new(self, self)
    }

    fn store_url(value: Option<&str>) -> Result<String, LookupError> {
        value
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .ok_or(LookupError::NoStoreContext)
    }

    fn directory(&self, name: &str, value: Option<&str>) -> Result<String, LookupError> {
        let dir = value
            .filter(|dir| !dir.is_empty())
            .ok_or_else(|| LookupError::DirectoryNotFound(name.to_string()))?;
        if self.config.require_existing_dirs && !Path::new(dir).is_dir() {
            tracing::debug!(name, dir, "configured directory is missing on disk");
            return Err(LookupError::DirectoryNotFound(dir.to_string()));
        }
        Ok(trim_dir(dir).to_string())
    }
}

/// Drops trailing separators so `folder + "/"` never doubles them.
fn trim_dir(dir: &str) -> &str {
    dir.trim_end_matches('/')
}

impl UrlProvider for StoreLocations {
    fn base_url(&self) -> String {
        self.config.base_url.clone()
    }

    fn media_url(&self) -> Result<String, LookupError> {
        Self::store_url(self.config.media_url.as_deref())
    }

    fn static_url(&self) -> Result<String, LookupError> {
        Self::store_url(self.config.static_url.as_deref())
    }
}

impl FolderProvider for StoreLocations {
    fn base_folder(&self) -> String {
        format!("{}/{}", trim_dir(&self.config.root_dir), PUBLIC_SUBDIR)
    }

    fn media_folder(&self) -> Result<String, LookupError> {
        self.directory("media", self.config.media_dir.as_deref())
    }

    fn static_folder(&self) -> Result<String, LookupError> {
        self.directory("static", self.config.static_dir.as_deref())
    }
}
