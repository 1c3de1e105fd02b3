//! Import run configuration.
//!
//! All knobs of the pipeline live in one explicit [`ImportConfig`] value that
//! is handed to [`Pipeline`](crate::Pipeline) at construction, so alternate
//! sites and test fixtures can swap every setting without touching globals.

use std::path::PathBuf;

/// Configuration for an import run.
///
/// The default carries the constants for the osint.al mirror import.
///
/// # Example
///
/// ```rust
/// use sitegraft_core::ImportConfig;
///
/// let config = ImportConfig {
///     base_path: "/archive".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.home_alias, "Welcome");
/// ```
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Directory containing the mirrored HTML tree
    pub mirror_root: PathBuf,
    /// Directory receiving the generated page files
    pub output_root: PathBuf,
    /// Base path prefix applied to rewritten internal links
    pub base_path: String,
    /// Origin used to synthesize per-document source URLs
    pub source_origin: String,
    /// Site title, appended to every page title and used as the fallback title
    pub site_title: String,
    /// Legacy document name (without suffix) that duplicates the home document
    pub home_alias: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            mirror_root: PathBuf::from("tmp/osint.al-mirror/www.osint.al"),
            output_root: PathBuf::from("src/pages"),
            base_path: "/sara.osint".to_string(),
            source_origin: "https://www.osint.al".to_string(),
            site_title: "Sara's OSINT Resources".to_string(),
            home_alias: "Welcome".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ImportConfig::default();
        assert_eq!(config.base_path, "/sara.osint");
        assert_eq!(config.home_alias, "Welcome");
        assert_eq!(config.site_title, "Sara's OSINT Resources");
        assert!(config.output_root.ends_with("pages"));
    }

    #[test]
    fn test_config_override() {
        let config = ImportConfig { base_path: "/archive".to_string(), ..Default::default() };
        assert_eq!(config.base_path, "/archive");
        assert_eq!(config.home_alias, "Welcome");
    }
}
