//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve an app-relative URL to a file under `serve_root`.
///
/// Directories are not served: they fall through to the route table.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    if clean.is_empty() || clean.contains("..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: decode, strip query string and fragment, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    decoded.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();
        fs::write(dir.path().join("assets/a b.css"), "body{}").unwrap();
        dir
    }

    #[test]
    fn test_resolves_files() {
        let dir = site();
        let path = resolve_path("/assets/app.js?v=3", dir.path()).unwrap();
        assert!(path.ends_with("assets/app.js"));

        let path = resolve_path("/assets/a%20b.css", dir.path()).unwrap();
        assert!(path.ends_with("a b.css"));
    }

    #[test]
    fn test_directories_fall_through() {
        let dir = site();
        assert!(resolve_path("/", dir.path()).is_none());
        assert!(resolve_path("", dir.path()).is_none());
        assert!(resolve_path("/assets/", dir.path()).is_none());
    }

    #[test]
    fn test_missing_and_traversal() {
        let dir = site();
        assert!(resolve_path("/book/genesis", dir.path()).is_none());
        assert!(resolve_path("/../etc/passwd", dir.path()).is_none());
        assert!(resolve_path("/%2e%2e/etc/passwd", dir.path()).is_none());
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("/book/G%C3%AAnesis/?x#y"), "book/Gênesis");
        assert_eq!(normalize_url("/"), "");
    }
}
