//! Static site writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use storefront_leptos::{NOT_FOUND_FILE, Route, Site, render_not_found, render_page};

/// Render every route plus the 404 page into `out_dir`.
///
/// Returns the written paths in navigation order, 404 last.
pub fn build_site(site: &Site, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(Route::ALL.len() + 1);
    for route in Route::ALL {
        let path = out_dir.join(route.output_file());
        write_page(&path, &render_page(route, site))?;
        tracing::info!(route = %route, file = %path.display(), "wrote page");
        written.push(path);
    }

    let not_found = out_dir.join(NOT_FOUND_FILE);
    write_page(&not_found, &render_not_found(site))?;
    tracing::info!(file = %not_found.display(), "wrote not-found page");
    written.push(not_found);

    Ok(written)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_every_route_and_the_404_page() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let written = build_site(&Site::default(), &out).expect("build");

        assert_eq!(written.len(), 6);
        for route in Route::ALL {
            let html = fs::read_to_string(out.join(route.output_file())).expect("page written");
            assert!(html.contains(&format!("data-route=\"{}\"", route.key())));
        }
        assert!(out.join("404.html").is_file());
    }

    #[test]
    fn rebuild_overwrites_existing_files() {
        let temp = TempDir::new().expect("temp dir");
        let index = temp.path().join("index.html");
        fs::write(&index, "stale").expect("seed");

        build_site(&Site::default(), temp.path()).expect("build");

        let html = fs::read_to_string(&index).expect("index");
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn out_dir_that_is_a_file_fails_with_context() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("dist");
        fs::write(&blocker, "not a dir").expect("seed");

        let err = build_site(&Site::default(), &blocker).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to create"));
    }
}
