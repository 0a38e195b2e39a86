//! `imgpath resolve <url>...` – map URLs to local file paths.

use anyhow::Result;
use imgpath_core::{NotFoundError, StoreLocations};
use std::path::Path;

/// One output line per URL, and whether it counts as a failure.
fn report_line(
    url: &str,
    result: &Result<String, NotFoundError>,
    check_exists: bool,
) -> (String, bool) {
    match result {
        Ok(path) if check_exists && !Path::new(path).is_file() => {
            (format!("{url} -> {path} (missing)"), false)
        }
        Ok(path) => (format!("{url} -> {path}"), true),
        Err(e) => (format!("{url}: {e}"), false),
    }
}

pub fn run_resolve(store: &StoreLocations, urls: &[String], check_exists: bool) -> Result<()> {
    let resolver = store.resolver();
    let results = resolver.resolve_all(urls.iter().map(String::as_str));

    let mut failed = 0usize;
    for (url, result) in &results {
        let (line, ok) = report_line(url, result, check_exists);
        if !ok {
            tracing::info!(url = %url, "not resolved: {}", line);
            failed += 1;
        }
        println!("{line}");
    }

    if failed > 0 {
        anyhow::bail!("{} of {} URL(s) not resolved", failed, results.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgpath_core::config::ImgpathConfig;

    fn store(root: &str) -> StoreLocations {
        StoreLocations::new(ImgpathConfig {
            base_url: "https://shop.example.com/".to_string(),
            media_url: Some("https://shop.example.com/media/".to_string()),
            static_url: Some("https://shop.example.com/static/".to_string()),
            root_dir: root.to_string(),
            media_dir: Some(format!("{root}/pub/media")),
            static_dir: Some(format!("{root}/pub/static")),
            require_existing_dirs: false,
        })
    }

    #[test]
    fn report_line_formats() {
        let ok: Result<String, NotFoundError> = Ok("/srv/pub/a.png".to_string());
        assert_eq!(
            report_line("/a.png", &ok, false),
            ("/a.png -> /srv/pub/a.png".to_string(), true)
        );
        let (line, good) = report_line("/a.png", &ok, true);
        assert!(line.ends_with("(missing)"));
        assert!(!good);
    }

    #[test]
    fn run_resolve_reports_failures() {
        let s = store("/srv/shop");
        let urls = vec![
            "https://shop.example.com/media/a.png".to_string(),
            "https://elsewhere.example.com/b.png".to_string(),
        ];
        let err = run_resolve(&s, &urls, false).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 URL(s) not resolved");
    }

    #[test]
    fn run_resolve_with_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let media = root.path().join("pub/media/catalog");
        std::fs::create_dir_all(&media).unwrap();
        std::fs::write(media.join("a.png"), b"png").unwrap();

        let s = store(&root.path().to_string_lossy());
        let urls = vec!["https://shop.example.com/media/catalog/a.png".to_string()];
        run_resolve(&s, &urls, true).unwrap();

        let urls = vec!["https://shop.example.com/media/catalog/b.png".to_string()];
        assert!(run_resolve(&s, &urls, true).is_err());
    }
}
