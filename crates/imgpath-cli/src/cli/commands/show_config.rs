//! `imgpath config` – show where config lives and what the resolver will use.

use anyhow::Result;
use imgpath_core::{FolderProvider, LookupError, StoreLocations, UrlProvider};
use std::path::Path;

fn or_reason(value: Result<String, LookupError>) -> String {
    value.unwrap_or_else(|e| format!("<{e}>"))
}

pub fn run_show_config(store: &StoreLocations, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", store.config().to_toml_string()?);
    println!();
    println!("# effective locations");
    println!("{:<14} {}", "base_url", store.base_url());
    println!("{:<14} {}", "media_url", or_reason(store.media_url()));
    println!("{:<14} {}", "static_url", or_reason(store.static_url()));
    println!("{:<14} {}", "base_folder", store.base_folder());
    println!("{:<14} {}", "media_folder", or_reason(store.media_folder()));
    println!("{:<14} {}", "static_folder", or_reason(store.static_folder()));
    Ok(())
}
