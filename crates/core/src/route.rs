//! Route mapping between mirrored file paths and site routes.
//!
//! A route is a canonical absolute path (`/`, `/foo/bar`) derived from a
//! mirror-relative file path. Routes never carry the `.html` suffix; the home
//! document always maps to `/`.

use std::path::{Path, PathBuf};

/// Recognized suffix for mirrored documents.
pub const DOCUMENT_SUFFIX: &str = ".html";

/// Mirror file that maps to the home route.
const HOME_FILE: &str = "index.html";

/// Extension of generated page files.
const PAGE_SUFFIX: &str = ".astro";

/// Shared page layout, relative to the source root above the pages directory.
const LAYOUT_FILE: &str = "layouts/BaseLayout.astro";

/// Map a mirror-relative file path to its canonical route.
///
/// Returns `None` for paths that do not carry the document suffix; those are
/// filtered input, not an error condition.
///
/// # Example
///
/// ```rust
/// use sitegraft_core::route_from_source_path;
///
/// assert_eq!(route_from_source_path("index.html"), Some("/".to_string()));
/// assert_eq!(route_from_source_path("foo/bar.html"), Some("/foo/bar".to_string()));
/// assert_eq!(route_from_source_path("notes.txt"), None);
/// ```
pub fn route_from_source_path(rel: &str) -> Option<String> {
    if rel == HOME_FILE {
        return Some("/".to_string());
    }
    let stem = rel.strip_suffix(DOCUMENT_SUFFIX)?;
    Some(format!("/{}", stem))
}

/// Location of the generated page file for a route.
///
/// The home route maps to the fixed `index` page; every other route mirrors
/// its path segments below the output root, the last segment becoming the
/// leaf page file.
pub fn output_path_for_route(route: &str, output_root: &Path) -> PathBuf {
    if route == "/" {
        return output_root.join(format!("index{}", PAGE_SUFFIX));
    }
    output_root.join(format!("{}{}", route.trim_start_matches('/'), PAGE_SUFFIX))
}

/// True when a route duplicates the home document and must be skipped.
///
/// The legacy mirror carries the home page twice, once as `index.html` and
/// once under the welcome alias; the driver drops the alias before any
/// downstream stage runs.
pub fn is_home_duplicate(route: &str, home_alias: &str) -> bool {
    route.trim_start_matches('/') == home_alias
}

/// Relative import path from a route's page file to the shared layout.
///
/// Page files live under the pages directory and the layout lives beside it,
/// so at least one `../` is always needed; deeper routes add one per nesting
/// level.
pub fn layout_import_for_route(route: &str) -> String {
    let depth = if route == "/" { 0 } else { route.trim_start_matches('/').matches('/').count() };
    format!("{}{}", "../".repeat(depth + 1), LAYOUT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("index.html", Some("/"))]
    #[case("foo/bar.html", Some("/foo/bar"))]
    #[case("Welcome.html", Some("/Welcome"))]
    #[case("a/b/c.html", Some("/a/b/c"))]
    #[case("notes.txt", None)]
    #[case("styles.css", None)]
    #[case("html", None)]
    fn test_route_from_source_path(#[case] rel: &str, #[case] expected: Option<&str>) {
        assert_eq!(route_from_source_path(rel), expected.map(str::to_string));
    }

    #[test]
    fn test_output_path_home() {
        let path = output_path_for_route("/", Path::new("src/pages"));
        assert_eq!(path, Path::new("src/pages/index.astro"));
    }

    #[test]
    fn test_output_path_nested() {
        let path = output_path_for_route("/foo/bar", Path::new("src/pages"));
        assert_eq!(path, Path::new("src/pages/foo/bar.astro"));
    }

    #[test]
    fn test_home_duplicate() {
        assert!(is_home_duplicate("/Welcome", "Welcome"));
        assert!(!is_home_duplicate("/Welcome-back", "Welcome"));
        assert!(!is_home_duplicate("/foo/Welcome", "Welcome"));
        assert!(!is_home_duplicate("/", "Welcome"));
    }

    #[rstest]
    #[case("/", "../layouts/BaseLayout.astro")]
    #[case("/about", "../layouts/BaseLayout.astro")]
    #[case("/about/team", "../../layouts/BaseLayout.astro")]
    #[case("/a/b/c", "../../../layouts/BaseLayout.astro")]
    fn test_layout_import_depth(#[case] route: &str, #[case] expected: &str) {
        assert_eq!(layout_import_for_route(route), expected);
    }
}
