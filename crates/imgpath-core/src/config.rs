use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Site locations loaded from `~/.config/imgpath/config.toml`.
///
/// A missing `media_url`/`static_url` means there is no current store; a
/// missing `media_dir`/`static_dir` means that directory is not configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImgpathConfig {
    /// Base URL of the site, e.g. `https://shop.example.com/`.
    pub base_url: String,
    /// Media URL of the current store.
    #[serde(default)]
    pub media_url: Option<String>,
    /// Static asset URL of the current store.
    #[serde(default)]
    pub static_url: Option<String>,
    /// Installation root; the public document root is `<root_dir>/pub`.
    pub root_dir: String,
    /// Directory backing `media_url`.
    #[serde(default)]
    pub media_dir: Option<String>,
    /// Directory backing `static_url`.
    #[serde(default)]
    pub static_dir: Option<String>,
    /// If true, media and static directories must exist on disk to be used.
    #[serde(default)]
    pub require_existing_dirs: bool,
}

impl Default for ImgpathConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".to_string(),
            media_url: Some("http://localhost/media/".to_string()),
            static_url: Some("http://localhost/static/".to_string()),
            root_dir: "/var/www/html".to_string(),
            media_dir: Some("/var/www/html/pub/media".to_string()),
            static_dir: Some("/var/www/html/pub/static".to_string()),
            require_existing_dirs: false,
        }
    }
}

impl ImgpathConfig {
    /// Serialize as it would be written to `config.toml`.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgpath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgpathConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgpathConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file (e.g. `--config`).
pub fn load_from(path: &Path) -> Result<ImgpathConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ImgpathConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
