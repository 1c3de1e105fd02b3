//! Pipeline driver: discovery, per-document transformation, page output.
//!
//! Documents are processed strictly one at a time in lexicographic order of
//! their mirror-relative paths, so runs are deterministic and re-runnable.
//! Per-document extraction failures are recorded and skipped; filesystem
//! failures abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;
use walkdir::WalkDir;

use crate::config::ImportConfig;
use crate::extract::{ArticleExtractor, HeuristicExtractor};
use crate::links::LinkRewriter;
use crate::page::PageRecord;
use crate::route::{DOCUMENT_SUFFIX, is_home_duplicate, output_path_for_route, route_from_source_path};
use crate::sanitize::sanitize_fragment;
use crate::title::extract_title;
use crate::{Result, SitegraftError};

/// One successfully generated page, for end-of-run reporting.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub route: String,
    pub output_path: PathBuf,
}

/// One document that produced no page, and why.
#[derive(Debug, Clone)]
pub struct SkippedDocument {
    pub source_path: String,
    pub reason: String,
}

/// Result of an import run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Pages written, in processing order
    pub pages: Vec<GeneratedPage>,
    /// Documents skipped for lack of extractable content
    pub skipped: Vec<SkippedDocument>,
}

/// Drives the import: enumerates mirrored documents and runs each through
/// route mapping, extraction, sanitization, title extraction, and page
/// serialization.
pub struct Pipeline {
    config: ImportConfig,
    extractor: Box<dyn ArticleExtractor>,
}

impl Pipeline {
    /// Pipeline with the built-in heuristic extractor.
    pub fn new(config: ImportConfig) -> Self {
        Self::with_extractor(config, Box::new(HeuristicExtractor::new()))
    }

    /// Pipeline with an injected extraction capability.
    pub fn with_extractor(config: ImportConfig, extractor: Box<dyn ArticleExtractor>) -> Self {
        Self { config, extractor }
    }

    /// Process every mirrored document and write one page per route.
    ///
    /// Never fails on a per-document basis: extraction failures land in
    /// [`ImportSummary::skipped`] and unmappable files are filtered silently.
    /// Only filesystem problems abort the run.
    pub fn run(&self) -> Result<ImportSummary> {
        if !self.config.mirror_root.is_dir() {
            return Err(SitegraftError::MirrorRootNotFound(self.config.mirror_root.clone()));
        }

        let links = LinkRewriter::from_config(&self.config);
        let mut summary = ImportSummary::default();

        for rel in discover_documents(&self.config.mirror_root)? {
            let Some(route) = route_from_source_path(&rel) else {
                continue;
            };
            // the welcome page duplicates the home document
            if is_home_duplicate(&route, &self.config.home_alias) {
                continue;
            }

            let html = fs::read_to_string(self.config.mirror_root.join(&rel))?;
            let origin = origin_url(&self.config.source_origin, &rel)?;

            let article = match self.extractor.extract(&html, &origin) {
                Ok(article) => article,
                Err(err) => {
                    summary
                        .skipped
                        .push(SkippedDocument { source_path: rel, reason: err.to_string() });
                    continue;
                }
            };

            let cleaned = sanitize_fragment(&article.content_html, &origin, &links)?;
            let (heading, body_html) = extract_title(&cleaned, &self.config.site_title)?;
            let title = format!("{} - {}", heading, self.config.site_title);
            let output_path = output_path_for_route(&route, &self.config.output_root);

            let record = PageRecord {
                route: route.clone(),
                title,
                heading,
                body_html,
                output_path: output_path.clone(),
            };

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, record.render()?)?;

            summary.pages.push(GeneratedPage { route, output_path });
        }

        Ok(summary)
    }
}

/// Mirror-relative, `/`-separated paths of all documents under `root`,
/// sorted lexicographically for reproducible output ordering.
fn discover_documents(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative_to_string(entry.path().strip_prefix(root).unwrap_or(entry.path()));
        if rel.ends_with(DOCUMENT_SUFFIX) {
            files.push(rel);
        }
    }

    files.sort();
    Ok(files)
}

fn relative_to_string(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Synthetic origin URL for a mirrored document, used to resolve relative
/// links during sanitization.
fn origin_url(origin: &str, rel: &str) -> Result<Url> {
    let full = format!("{}/{}", origin.trim_end_matches('/'), rel);
    Url::parse(&full).map_err(|_| SitegraftError::InvalidUrl(full.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_url() {
        let url = origin_url("https://www.osint.al", "about/team.html").unwrap();
        assert_eq!(url.as_str(), "https://www.osint.al/about/team.html");
    }

    #[test]
    fn test_origin_url_trailing_slash() {
        let url = origin_url("https://www.osint.al/", "index.html").unwrap();
        assert_eq!(url.as_str(), "https://www.osint.al/index.html");
    }

    #[test]
    fn test_missing_mirror_root_is_fatal() {
        let config = ImportConfig {
            mirror_root: PathBuf::from("/definitely/not/a/mirror"),
            ..Default::default()
        };
        let result = Pipeline::new(config).run();
        assert!(matches!(result, Err(SitegraftError::MirrorRootNotFound(_))));
    }
}
