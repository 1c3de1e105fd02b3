//! Page title extraction from sanitized fragments.
//!
//! The page template renders titles itself, so the leading heading is pulled
//! out of the body markup: its text becomes the title and the element is
//! dropped from the fragment.

use std::cell::Cell;

use scraper::{Html, Selector};

use crate::{Result, SitegraftError};

/// Extract the page title from a sanitized fragment.
///
/// The first `h1` or `h2` in document order supplies the title and is removed
/// from the markup. When no heading exists, or its text collapses to nothing,
/// `fallback` is used and the fragment is returned unchanged apart from
/// trimming.
///
/// Returns `(title, residual_fragment)`.
pub fn extract_title(fragment: &str, fallback: &str) -> Result<(String, String)> {
    let doc = Html::parse_fragment(fragment);
    let selector = Selector::parse("h1, h2")
        .map_err(|e| SitegraftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

    let Some(heading) = doc.select(&selector).next() else {
        return Ok((fallback.to_string(), fragment.trim().to_string()));
    };

    let text = collapse_whitespace(&heading.text().collect::<String>());
    let title = if text.is_empty() { fallback.to_string() } else { text };

    let residual = remove_first_heading(fragment)?;

    Ok((title, residual.trim().to_string()))
}

/// Drop the first `h1`/`h2` from the fragment, leaving the rest untouched.
fn remove_first_heading(fragment: &str) -> Result<String> {
    let removed = Cell::new(false);
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![
                lol_html::element!("h1", |el| {
                    if !removed.get() {
                        el.remove();
                        removed.set(true);
                    }
                    Ok(())
                }),
                lol_html::element!("h2", |el| {
                    if !removed.get() {
                        el.remove();
                        removed.set(true);
                    }
                    Ok(())
                }),
            ],
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    rewriter
        .write(fragment.as_bytes())
        .map_err(|e| SitegraftError::HtmlParseError(e.to_string()))?;
    rewriter.end().map_err(|e| SitegraftError::HtmlParseError(e.to_string()))?;

    Ok(output)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Sara's OSINT Resources";

    #[test]
    fn test_h1_becomes_title_and_is_removed() {
        let (title, residual) = extract_title("<h1>Team</h1><p>Hello</p>", FALLBACK).unwrap();
        assert_eq!(title, "Team");
        assert_eq!(residual, "<p>Hello</p>");
    }

    #[test]
    fn test_h2_used_when_first() {
        let (title, residual) = extract_title("<h2>Notes</h2><h1>Later</h1>", FALLBACK).unwrap();
        assert_eq!(title, "Notes");
        assert_eq!(residual, "<h1>Later</h1>");
    }

    #[test]
    fn test_heading_text_collapsed() {
        let (title, _) = extract_title("<h1>  Team \n  Page </h1>", FALLBACK).unwrap();
        assert_eq!(title, "Team Page");
    }

    #[test]
    fn test_fallback_when_no_heading() {
        let (title, residual) = extract_title("<p>Only body</p>", FALLBACK).unwrap();
        assert_eq!(title, FALLBACK);
        assert_eq!(residual, "<p>Only body</p>");
    }

    #[test]
    fn test_fallback_when_heading_empty() {
        let (title, residual) = extract_title("<h1>   </h1><p>Body</p>", FALLBACK).unwrap();
        assert_eq!(title, FALLBACK);
        assert_eq!(residual, "<p>Body</p>");
    }

    #[test]
    fn test_only_first_heading_removed() {
        let (title, residual) = extract_title("<h1>First</h1><p>x</p><h2>Second</h2>", FALLBACK).unwrap();
        assert_eq!(title, "First");
        assert_eq!(residual, "<p>x</p><h2>Second</h2>");
    }
}
