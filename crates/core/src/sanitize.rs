//! Markup sanitization for extracted content fragments.
//!
//! Produces body-only markup safe for embedding: noisy and unsafe elements
//! are removed outright, layout wrappers are replaced by their children,
//! attributes are reduced to a minimal per-tag allowlist, internal links are
//! remapped through the [`LinkRewriter`], and empty paragraphs are dropped.

use regex::Regex;
use url::Url;

use crate::links::{LinkRewriter, is_external, is_passthrough};
use crate::{Result, SitegraftError};

/// Tags removed together with their content.
pub const DISALLOWED_TAGS: &[&str] = &[
    "script", "style", "iframe", "form", "button", "input", "textarea", "select", "noscript",
];

/// Layout wrappers replaced by their children. The mirror uses these purely
/// for presentation, so flattening them loses nothing.
const UNWRAPPED_TAGS: &[&str] = &["span", "div"];

/// Attributes that survive sanitization, per tag. Everything else is deleted.
const ALLOWED_A_ATTRS: &[&str] = &["href", "target", "rel"];
const ALLOWED_IMG_ATTRS: &[&str] = &["src", "alt", "width", "height"];

const MAX_EMPTY_PARAGRAPH_PASSES: usize = 10;

/// Sanitize an extracted content fragment.
///
/// `base_url` is the document's synthetic origin, used to resolve relative
/// hrefs onto origin-absolute paths before they are remapped; the rewriting
/// itself is [`LinkRewriter::rewrite`]. The result is trimmed, body-only
/// markup with the guarantees listed in the module docs.
pub fn sanitize_fragment(html: &str, base_url: &Url, links: &LinkRewriter) -> Result<String> {
    let rewritten = rewrite_elements(html, base_url, links)?;
    let cleaned = remove_empty_paragraphs(&rewritten, MAX_EMPTY_PARAGRAPH_PASSES);

    Ok(cleaned.trim().to_string())
}

/// Single streaming pass over the fragment: element removal, wrapper
/// unwrapping, attribute allowlisting, and link rewriting.
///
/// Streaming keeps this safe against the usual remove-while-iterating hazard
/// of DOM cleanup: nothing here mutates a collection mid-traversal, and
/// nested wrappers each get their own handler invocation, so none survive.
fn rewrite_elements(html: &str, base_url: &Url, links: &LinkRewriter) -> Result<String> {
    let mut handlers = Vec::new();

    for tag in DISALLOWED_TAGS {
        handlers.push(lol_html::element!(*tag, |el| {
            el.remove();
            Ok(())
        }));
    }

    for tag in UNWRAPPED_TAGS {
        handlers.push(lol_html::element!(*tag, |el| {
            el.remove_and_keep_content();
            Ok(())
        }));
    }

    handlers.push(lol_html::element!("*", move |el| {
        clean_attributes(el);

        if el.tag_name() == "a"
            && let Some(href) = el.get_attribute("href")
        {
            let rewritten = links.rewrite(&resolve_internal(&href, base_url));
            el.set_attribute("href", &rewritten)?;
            if is_external(&rewritten) {
                el.set_attribute("target", "_blank")?;
                el.set_attribute("rel", "noopener noreferrer")?;
            }
        }

        if el.tag_name() == "img" && el.get_attribute("alt").is_none() {
            el.set_attribute("alt", "")?;
        }

        Ok(())
    }));

    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings { element_content_handlers: handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| SitegraftError::HtmlParseError(e.to_string()))?;
    rewriter.end().map_err(|e| SitegraftError::HtmlParseError(e.to_string()))?;

    Ok(output)
}

/// Delete every attribute not in the per-tag allowlist.
///
/// Names are snapshotted before any removal so the attribute list is never
/// mutated while it is being read.
fn clean_attributes(el: &mut lol_html::html_content::Element<'_, '_>) {
    let allowed: &[&str] = match el.tag_name().as_str() {
        "a" => ALLOWED_A_ATTRS,
        "img" => ALLOWED_IMG_ATTRS,
        _ => &[],
    };

    let doomed: Vec<String> = el
        .attributes()
        .iter()
        .map(|attr| attr.name())
        .filter(|name| !allowed.contains(&name.as_str()))
        .collect();

    for name in doomed {
        el.remove_attribute(&name);
    }
}

/// Resolve a relative internal href against the document origin, yielding an
/// origin-absolute path for the rewriter. Pass-through forms and already
/// absolute paths are left alone.
fn resolve_internal(href: &str, base_url: &Url) -> String {
    if is_passthrough(href) || href.starts_with('/') {
        return href.to_string();
    }

    match base_url.join(href) {
        Ok(resolved) if resolved.origin() == base_url.origin() => resolved.path().to_string(),
        _ => href.to_string(),
    }
}

/// Remove paragraphs whose collapsed text is empty and which contain no
/// image, iterating until a pass changes nothing.
fn remove_empty_paragraphs(html: &str, max_passes: usize) -> String {
    let paragraph_re = Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap();
    let mut result = html.to_string();

    for _ in 0..max_passes {
        let next = paragraph_re
            .replace_all(&result, |caps: &regex::Captures| {
                let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                let has_image = inner.to_ascii_lowercase().contains("<img");
                // non-breaking spaces count as blank
                let text = strip_tags(inner).replace("&nbsp;", " ");

                if !has_image && text.split_whitespace().next().is_none() {
                    String::new()
                } else {
                    caps.get(0).map(|m| m.as_str()).unwrap_or("").to_string()
                }
            })
            .to_string();

        if next == result {
            break;
        }
        result = next;
    }

    result
}

/// Strip HTML tags from a string, keeping only text content
fn strip_tags(html: &str) -> String {
    let re = Regex::new(r"<[^>]*>").unwrap();
    re.replace_all(html, "").to_string()
}
