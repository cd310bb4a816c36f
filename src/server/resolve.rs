//! Request path resolution.
//!
//! URL paths are resolved lexically, component by component, before any
//! filesystem access. A path that walks above the serving root is rejected
//! outright rather than canonicalized, so symlinks inside the root keep
//! working while `..` escapes do not.

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of resolving a request path against the serving root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A readable file to serve.
    Serve(PathBuf),
    /// Malformed or root-escaping path.
    BadRequest,
    /// A directory with no index file.
    Forbidden,
    /// Nothing at this path.
    NotFound,
}

/// Resolve a raw URL path (percent-encoded, query already stripped) to a
/// file under `root`.
#[must_use]
pub fn resolve(root: &Path, raw_path: &str) -> Resolution {
    let Ok(decoded) = urlencoding::decode(raw_path) else {
        return Resolution::BadRequest;
    };
    let mut path = decoded.replace('\\', "/");
    if path == "/" {
        path = "/index.html".to_string();
    }

    let Some(relative) = within_root(&path) else {
        return Resolution::BadRequest;
    };
    locate(&root.join(relative))
}

/// Lexically resolve the path's components, rejecting any walk above the
/// root. Returns the safe relative path.
fn within_root(path: &str) -> Option<PathBuf> {
    let mut parts: Vec<&str> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    Some(parts.iter().collect())
}

/// Map a resolved filesystem path to a serving decision.
fn locate(path: &Path) -> Resolution {
    let Ok(meta) = fs::metadata(path) else {
        return Resolution::NotFound;
    };
    if meta.is_dir() {
        let index = path.join("index.html");
        return match fs::metadata(&index) {
            Ok(m) if m.is_file() => Resolution::Serve(index),
            _ => Resolution::Forbidden,
        };
    }
    Resolution::Serve(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_file(&root.join("index.html"), "<html>home</html>");
        write_file(&root.join("logo.png"), "png-bytes");
        fs::create_dir_all(root.join("docs")).unwrap();
        write_file(&root.join("docs/index.html"), "<html>docs</html>");
        fs::create_dir_all(root.join("assets")).unwrap();
        write_file(&root.join("assets/app.js"), "console.log(1)");
        dir
    }

    fn write_file(path: &Path, contents: &str) {
        let mut f = File::create(path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_root_serves_index() {
        let dir = site();
        let expected = dir.path().join("index.html");
        assert_eq!(resolve(dir.path(), "/"), Resolution::Serve(expected));
    }

    #[test]
    fn test_plain_file() {
        let dir = site();
        let expected = dir.path().join("logo.png");
        assert_eq!(resolve(dir.path(), "/logo.png"), Resolution::Serve(expected));
    }

    #[test]
    fn test_nested_file() {
        let dir = site();
        let expected = dir.path().join("assets/app.js");
        assert_eq!(resolve(dir.path(), "/assets/app.js"), Resolution::Serve(expected));
    }

    #[test]
    fn test_directory_with_index() {
        let dir = site();
        let expected = dir.path().join("docs/index.html");
        assert_eq!(resolve(dir.path(), "/docs"), Resolution::Serve(expected.clone()));
        assert_eq!(resolve(dir.path(), "/docs/"), Resolution::Serve(expected));
    }

    #[test]
    fn test_directory_without_index_is_forbidden() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/assets"), Resolution::Forbidden);
        assert_eq!(resolve(dir.path(), "/assets/"), Resolution::Forbidden);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/nope.html"), Resolution::NotFound);
        assert_eq!(resolve(dir.path(), "/deep/nope"), Resolution::NotFound);
    }

    #[test]
    fn test_traversal_is_bad_request() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/../../etc/passwd"), Resolution::BadRequest);
        assert_eq!(resolve(dir.path(), "/../x"), Resolution::BadRequest);
        assert_eq!(resolve(dir.path(), "/docs/../../x"), Resolution::BadRequest);
    }

    #[test]
    fn test_encoded_traversal_is_bad_request() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/%2e%2e/%2e%2e/etc/passwd"), Resolution::BadRequest);
        assert_eq!(resolve(dir.path(), "/..%2f..%2fetc/passwd"), Resolution::BadRequest);
    }

    #[test]
    fn test_backslash_traversal_is_bad_request() {
        let dir = site();
        assert_eq!(resolve(dir.path(), "/..\\..\\etc\\passwd"), Resolution::BadRequest);
        assert_eq!(resolve(dir.path(), "/%5c..%5c..%5cetc"), Resolution::BadRequest);
    }

    #[test]
    fn test_dotdot_within_root_is_allowed() {
        let dir = site();
        let expected = dir.path().join("logo.png");
        assert_eq!(resolve(dir.path(), "/docs/../logo.png"), Resolution::Serve(expected));
    }

    #[test]
    fn test_dot_components_are_skipped() {
        let dir = site();
        let expected = dir.path().join("logo.png");
        assert_eq!(resolve(dir.path(), "/./logo.png"), Resolution::Serve(expected));
    }

    proptest! {
        #[test]
        fn test_served_paths_stay_under_root(raw in "/[ -~]{0,40}") {
            let dir = site();
            if let Resolution::Serve(path) = resolve(dir.path(), &raw) {
                prop_assert!(path.starts_with(dir.path()));
            }
        }
    }
}
