//! Generated page records and their serialization.
//!
//! A [`PageRecord`] is the finalized representation of one output page. It
//! renders itself into the Astro page format: a frontmatter import of the
//! shared layout, the layout invocation with the composed title, and the
//! sanitized body embedded as an escaped literal.

use std::path::PathBuf;

use serde::Serialize;

use crate::route::layout_import_for_route;
use crate::{Result, SitegraftError};

/// The finalized, serializable representation of one output page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// Canonical route of the page
    pub route: String,
    /// Composed human-facing title (heading plus site suffix)
    pub title: String,
    /// Heading rendered at the top of the page body
    pub heading: String,
    /// Sanitized body markup
    pub body_html: String,
    /// Destination of the generated page file
    pub output_path: PathBuf,
}

impl PageRecord {
    /// Serialize to the Astro page format.
    ///
    /// The title and body are JSON-escaped; the body is injected through
    /// `set:html` as an opaque string so Astro renders it as literal markup
    /// and never re-parses it as a nested template.
    pub fn render(&self) -> Result<String> {
        let layout_import = layout_import_for_route(&self.route);
        let title = json_string(&self.title)?;
        let body = json_string(&self.body_html)?;

        Ok(format!(
            r#"---
import BaseLayout from '{layout}';
---

<BaseLayout title={title}>
  <article class="surface p-6 sm:p-10 prose prose-invert max-w-none">
    <h1 class="gradient-text mb-8 text-5xl font-bold">{heading}</h1>
    <div set:html={{{body}}} />
  </article>
</BaseLayout>
"#,
            layout = layout_import,
            title = title,
            heading = self.heading,
            body = body
        ))
    }
}

fn json_string(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| SitegraftError::HtmlParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PageRecord {
        PageRecord {
            route: "/about/team".to_string(),
            title: "Team - Sara's OSINT Resources".to_string(),
            heading: "Team".to_string(),
            body_html: r#"<p>Hello <a href="/sara.osint/about/contact">us</a></p>"#.to_string(),
            output_path: PathBuf::from("src/pages/about/team.astro"),
        }
    }

    #[test]
    fn test_render_imports_layout_by_depth() {
        let rendered = record().render().unwrap();
        assert!(rendered.starts_with("---\nimport BaseLayout from '../../layouts/BaseLayout.astro';\n---\n"));
    }

    #[test]
    fn test_render_escapes_title_and_body() {
        let rendered = record().render().unwrap();
        assert!(rendered.contains(r#"<BaseLayout title="Team - Sara's OSINT Resources">"#));
        assert!(rendered.contains(r#"set:html={"<p>Hello <a href=\"/sara.osint/about/contact\">us</a></p>"}"#));
    }

    #[test]
    fn test_render_heading_rendered_raw() {
        let rendered = record().render().unwrap();
        assert!(rendered.contains(r#"<h1 class="gradient-text mb-8 text-5xl font-bold">Team</h1>"#));
    }

    #[test]
    fn test_render_home_page_layout_import() {
        let mut page = record();
        page.route = "/".to_string();
        let rendered = page.render().unwrap();
        assert!(rendered.contains("import BaseLayout from '../layouts/BaseLayout.astro';"));
    }

    #[test]
    fn test_record_serializes() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains(r#""route":"/about/team""#));
        assert!(json.contains(r#""title":"Team - Sara's OSINT Resources""#));
    }
}
