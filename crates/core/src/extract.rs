//! Content extraction from raw mirrored documents.
//!
//! The pipeline consumes extraction through the [`ArticleExtractor`] trait so
//! the engine can be swapped or stubbed in tests. The built-in
//! [`HeuristicExtractor`] scores candidate containers with readability-style
//! signals and returns the best one.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{Result, SitegraftError};

/// An extracted article: best-effort title plus the main content markup.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    /// Document title, when one could be located
    pub title: Option<String>,
    /// Markup of the main content region
    pub content_html: String,
}

/// The readability capability consumed by the pipeline.
///
/// Extraction is deterministic and side-effect-free for a given input; there
/// is nothing to retry. Failure to find usable content is signalled with
/// [`SitegraftError::NoContent`] or [`SitegraftError::NotReadable`] and is
/// terminal for that document only.
pub trait ArticleExtractor {
    /// Attempt extraction from a raw HTML document and its origin URL.
    fn extract(&self, html: &str, url: &Url) -> Result<ExtractedArticle>;
}

/// Configuration for the heuristic extractor
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Minimum score threshold for the top candidate
    pub min_score_threshold: f64,
    /// Minimum character count for content
    pub char_threshold: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { min_score_threshold: 10.0, char_threshold: 500 }
    }
}

/// Tags that are considered potential content containers
const CANDIDATE_TAGS: &str = "article, main, section, div, td, pre, blockquote, p";

/// Positive patterns that suggest an element contains main content
const POSITIVE_PATTERNS: &str = r"(?i)(article|body|content|entry|main|page|post|text|story)";

/// Negative patterns that suggest an element does NOT contain main content
const NEGATIVE_PATTERNS: &str =
    r"(?i)(banner|breadcrumbs?|comment|foot|header|menu|related|sidebar|sponsor|pagination|pager|popup)";

/// Built-in extraction engine.
///
/// Scores every candidate container by tag type, class/id patterns, content
/// density, and link density, then returns the top candidate's markup and a
/// document title. Good enough for mirrored legacy sites whose pages carry a
/// single content region; swap in another [`ArticleExtractor`] for anything
/// more demanding.
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor {
    config: ExtractConfig,
}

impl HeuristicExtractor {
    /// Creates an extractor with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with custom thresholds.
    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }
}

impl ArticleExtractor for HeuristicExtractor {
    fn extract(&self, html: &str, _url: &Url) -> Result<ExtractedArticle> {
        let cleaned = strip_boilerplate(html);
        let doc = Html::parse_document(&cleaned);

        let selector = Selector::parse(CANDIDATE_TAGS)
            .map_err(|e| SitegraftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        let mut best: Option<(f64, ElementRef<'_>)> = None;
        for element in doc.select(&selector) {
            let tag = element.value().name();
            let text = element.text().collect::<String>();
            if !matches!(tag, "article" | "main" | "section")
                && text.chars().count() < self.config.char_threshold / 10
            {
                continue;
            }

            let score = score_element(&element, &text);
            // strict comparison keeps the first (document-order) winner on ties
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, element));
            }
        }

        let (score, element) = best.ok_or(SitegraftError::NoContent)?;
        if score < self.config.min_score_threshold {
            return Err(SitegraftError::NotReadable { score, threshold: self.config.min_score_threshold });
        }

        let content_html = match element.value().name() {
            "article" | "main" | "section" | "div" | "td" => element.inner_html(),
            _ => element.html(),
        };

        Ok(ExtractedArticle { title: document_title(&doc), content_html })
    }
}

/// Calculate the score for a candidate element
///
/// Combines the base tag score, class/ID pattern weight, and content density,
/// penalized by link density so navigation blocks lose to prose.
fn score_element(element: &ElementRef<'_>, text: &str) -> f64 {
    let base = base_tag_score(element.value().name());
    let weight = class_id_weight(element);
    let density = content_density_score(text);
    let ld = link_density(element, text);

    (base + weight + density) * (1.0 - ld)
}

/// Base score for an element from its tag name alone
fn base_tag_score(tag: &str) -> f64 {
    match tag {
        "article" | "main" => 10.0,
        "section" => 8.0,
        "div" => 5.0,
        "td" | "blockquote" => 3.0,
        _ => 0.0,
    }
}

/// Weight adjustment from positive/negative class and id patterns
fn class_id_weight(element: &ElementRef<'_>) -> f64 {
    let positive = Regex::new(POSITIVE_PATTERNS).unwrap();
    let negative = Regex::new(NEGATIVE_PATTERNS).unwrap();

    if let Some(id) = element.value().attr("id") {
        if positive.is_match(id) {
            return 25.0;
        }
        if negative.is_match(id) {
            return -25.0;
        }
    }

    if let Some(class) = element.value().attr("class") {
        for name in class.split_whitespace() {
            if positive.is_match(name) {
                return 25.0;
            }
            if negative.is_match(name) {
                return -25.0;
            }
        }
    }

    0.0
}

/// Content density from text length and comma count, both capped
fn content_density_score(text: &str) -> f64 {
    let char_score = ((text.chars().count() / 100) as f64).min(3.0);
    let comma_score = (text.matches(',').count() as f64).min(3.0);

    char_score + comma_score
}

/// Ratio of link text characters to total text characters
fn link_density(element: &ElementRef<'_>, text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    let selector = match Selector::parse("a") {
        Ok(sel) => sel,
        Err(_) => return 0.0,
    };
    let link_chars: usize = element
        .select(&selector)
        .map(|link| link.text().map(|t| t.chars().count()).sum::<usize>())
        .sum();

    link_chars as f64 / total as f64
}

/// Remove script, style, noscript, and iframe elements before scoring so
/// their text never counts toward content density.
fn strip_boilerplate(html: &str) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![
                lol_html::element!("script", |el| {
                    el.remove();
                    Ok(())
                }),
                lol_html::element!("style", |el| {
                    el.remove();
                    Ok(())
                }),
                lol_html::element!("noscript", |el| {
                    el.remove();
                    Ok(())
                }),
                lol_html::element!("iframe", |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    match rewriter.write(html.as_bytes()) {
        Ok(_) => {}
        Err(_) => return remove_comments(html),
    }
    match rewriter.end() {
        Ok(_) => {}
        Err(_) => return remove_comments(html),
    }

    remove_comments(&output)
}

/// Remove HTML comments
fn remove_comments(html: &str) -> String {
    let re = Regex::new(r"(?s)<!--.*?-->").unwrap();
    re.replace_all(html, "").to_string()
}

/// Document title with priority fallback: `og:title`, the `<title>` element,
/// then the first `<h1>`.
fn document_title(doc: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse(r#"meta[property="og:title"]"#)
        && let Some(meta) = doc.select(&selector).next()
        && let Some(content) = meta.value().attr("content")
    {
        let content = content.trim();
        if !content.is_empty() {
            return Some(content.to_string());
        }
    }

    if let Ok(selector) = Selector::parse("title")
        && let Some(title) = doc.select(&selector).next()
    {
        let text = title.text().collect::<String>();
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    if let Ok(selector) = Selector::parse("h1")
        && let Some(heading) = doc.select(&selector).next()
    {
        let text = heading.text().collect::<String>();
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    None
}
