//! Href rewriting onto the new site's routing scheme.
//!
//! Every `href` encountered during sanitization passes through
//! [`LinkRewriter::rewrite`] exactly once. External, `mailto:`, `tel:` and
//! fragment-only links pass through untouched; everything else is treated as
//! an internal path and remapped under the configured base path.

use regex::Regex;

use crate::config::ImportConfig;
use crate::route::DOCUMENT_SUFFIX;

/// Rewrites hrefs found in mirrored markup.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    base_path: String,
    home_alias: String,
}

impl LinkRewriter {
    /// Creates a rewriter for the given base path and home alias.
    pub fn new(base_path: &str, home_alias: &str) -> Self {
        Self { base_path: base_path.to_string(), home_alias: home_alias.to_string() }
    }

    /// Creates a rewriter from an import configuration.
    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(&config.base_path, &config.home_alias)
    }

    /// Rewrite one href. Total: any input maps to some output, never fails.
    ///
    /// Internal links lose their fragment and query, then the document
    /// suffix; the legacy welcome alias maps to the home path; the result is
    /// made absolute, de-duplicated of slashes, and prefixed with the base
    /// path. Must be called once per original href, not on its own output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitegraft_core::LinkRewriter;
    ///
    /// let links = LinkRewriter::new("/sara.osint", "Welcome");
    /// assert_eq!(links.rewrite("contact.html"), "/sara.osint/contact");
    /// assert_eq!(links.rewrite("https://example.com/x"), "https://example.com/x");
    /// assert_eq!(links.rewrite("Welcome.html"), "/sara.osint/");
    /// ```
    pub fn rewrite(&self, href: &str) -> String {
        if is_passthrough(href) {
            return href.to_string();
        }

        let no_fragment = href.split('#').next().unwrap_or("");
        let no_query = no_fragment.split('?').next().unwrap_or("");
        let mut path = no_query.to_string();

        if let Some(stripped) = path.strip_suffix(DOCUMENT_SUFFIX) {
            path = stripped.to_string();
        }
        // the mirror links the home page through its legacy welcome name
        if path.trim_matches('/') == self.home_alias {
            path.clear();
        }
        if !path.starts_with('/') {
            path.insert(0, '/');
        }

        let path = collapse_slashes(&path);

        if path == "/" {
            format!("{}/", self.base_path)
        } else {
            format!("{}{}", self.base_path, path)
        }
    }
}

/// True for hrefs that pass through rewriting unchanged: absolute external
/// URLs, non-navigational schemes, fragment-only links, and empty values.
pub fn is_passthrough(href: &str) -> bool {
    href.is_empty()
        || is_external(href)
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
}

/// True for absolute `http://` / `https://` URLs, case-insensitive scheme.
pub fn is_external(href: &str) -> bool {
    let scheme_end = match href.find("://") {
        Some(idx) => idx,
        None => return false,
    };
    matches!(href[..scheme_end].to_ascii_lowercase().as_str(), "http" | "https")
}

fn collapse_slashes(path: &str) -> String {
    let re = Regex::new(r"/+").unwrap();
    re.replace_all(path, "/").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new("/sara.osint", "Welcome")
    }

    #[rstest]
    #[case("https://example.com/page", "https://example.com/page")]
    #[case("HTTP://EXAMPLE.COM", "HTTP://EXAMPLE.COM")]
    #[case("mailto:sara@example.com", "mailto:sara@example.com")]
    #[case("tel:+355123456", "tel:+355123456")]
    #[case("#section-2", "#section-2")]
    #[case("", "")]
    fn test_passthrough(#[case] href: &str, #[case] expected: &str) {
        assert_eq!(rewriter().rewrite(href), expected);
    }

    #[rstest]
    #[case("contact.html", "/sara.osint/contact")]
    #[case("/contact.html", "/sara.osint/contact")]
    #[case("about/team.html", "/sara.osint/about/team")]
    #[case("contact.html#top", "/sara.osint/contact")]
    #[case("contact.html?ref=nav", "/sara.osint/contact")]
    #[case("contact.html?ref=nav#top", "/sara.osint/contact")]
    #[case("//double//slash.html", "/sara.osint/double/slash")]
    #[case("plain-path", "/sara.osint/plain-path")]
    fn test_internal_rewrites(#[case] href: &str, #[case] expected: &str) {
        assert_eq!(rewriter().rewrite(href), expected);
    }

    #[rstest]
    #[case("Welcome")]
    #[case("Welcome/")]
    #[case("/Welcome")]
    #[case("Welcome.html")]
    fn test_home_alias_maps_to_root(#[case] href: &str) {
        assert_eq!(rewriter().rewrite(href), "/sara.osint/");
    }

    #[test]
    fn test_home_alias_only_matches_whole_path() {
        assert_eq!(rewriter().rewrite("Welcome-back.html"), "/sara.osint/Welcome-back");
        assert_eq!(rewriter().rewrite("foo/Welcome.html"), "/sara.osint/foo/Welcome");
    }

    #[test]
    fn test_internal_results_are_well_formed() {
        let links = rewriter();
        for href in ["a.html", "a/b.html", "x", "/x/", "q.html?a=1", "r.html#f", "//y"] {
            let out = links.rewrite(href);
            assert!(out.starts_with("/sara.osint"), "{} -> {}", href, out);
            assert!(!out.contains(DOCUMENT_SUFFIX), "{} -> {}", href, out);
            assert!(!out.contains("//"), "{} -> {}", href, out);
        }
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("http://a.example"));
        assert!(is_external("HTTPS://a.example"));
        assert!(!is_external("ftp://a.example"));
        assert!(!is_external("/local/path"));
        assert!(!is_external("page.html"));
    }
}
