//! Switchable in-memory site for resolver integration tests.
//!
//! Values sit behind a lock so tests can change the "current store" between
//! resolver calls, the way a multi-store request cycle does.

use imgpath_core::{FolderProvider, LookupError, UrlProvider};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct SiteState {
    pub base_url: String,
    pub media_url: Option<String>,
    pub static_url: Option<String>,
    pub base_folder: String,
    pub media_folder: Option<String>,
    pub static_folder: Option<String>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            base_url: "https://host/".to_string(),
            media_url: Some("https://host/media/".to_string()),
            static_url: Some("https://host/static/".to_string()),
            base_folder: "/var/www/pub".to_string(),
            media_folder: Some("/var/www/media".to_string()),
            static_folder: Some("/var/www/static".to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeSite {
    state: RwLock<SiteState>,
}

impl FakeSite {
    pub fn new(state: SiteState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut SiteState)) {
        f(&mut self.state.write().unwrap());
    }

    fn read(&self) -> SiteState {
        self.state.read().unwrap().clone()
    }
}

impl UrlProvider for FakeSite {
    fn base_url(&self) -> String {
        self.read().base_url
    }

    fn media_url(&self) -> Result<String, LookupError> {
        self.read().media_url.ok_or(LookupError::NoStoreContext)
    }

    fn static_url(&self) -> Result<String, LookupError> {
        self.read().static_url.ok_or(LookupError::NoStoreContext)
    }
}

impl FolderProvider for FakeSite {
    fn base_folder(&self) -> String {
        self.read().base_folder
    }

    fn media_folder(&self) -> Result<String, LookupError> {
        self.read()
            .media_folder
            .ok_or_else(|| LookupError::DirectoryNotFound("media".to_string()))
    }

    fn static_folder(&self) -> Result<String, LookupError> {
        self.read()
            .static_folder
            .ok_or_else(|| LookupError::DirectoryNotFound("static".to_string()))
    }
}
