//! Page renderer module
//!
//! Owns the single parsed HTML template and produces the page body from
//! a `PageData` record. The template source is embedded at compile time
//! and parsed exactly once at startup; a parse failure is fatal, the
//! process must not start with a broken template.

use handlebars::Handlebars;
use rust_embed::RustEmbed;
use serde::Serialize;

use crate::config::PageConfig;

/// Template sources bundled into the binary at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateAssets;

/// Display fields substituted into the template, built per request
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub message: Option<String>,
}

impl PageData {
    pub fn from_config(page: &PageConfig) -> Self {
        Self {
            title: page.title.clone(),
            message: page.message.clone(),
        }
    }
}

/// Renderer holding the parsed template registry
pub struct PageRenderer {
    registry: Handlebars<'static>,
    template_name: String,
}

impl PageRenderer {
    /// Parse the configured embedded template
    ///
    /// Fails if the template is not in the embedded set or does not
    /// parse. Never retried; the condition cannot change at runtime.
    pub fn new(page: &PageConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let file = TemplateAssets::get(&page.template)
            .ok_or_else(|| format!("embedded template not found: {}", page.template))?;
        let source = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| format!("template {} is not valid UTF-8: {e}", page.template))?;
        Ok(Self::from_source(&page.template, source)?)
    }

    /// Parse a template from an in-memory source
    pub fn from_source(name: &str, source: &str) -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        // Strict mode turns a placeholder with no matching field into a
        // render error instead of silently producing an empty string.
        registry.set_strict_mode(true);
        registry.register_template_string(name, source)?;
        Ok(Self {
            registry,
            template_name: name.to_string(),
        })
    }

    /// Substitute `data` into the template placeholders
    ///
    /// Field values are HTML-escaped by the engine, so reserved
    /// characters in the configured title or message cannot inject
    /// markup into the page.
    pub fn render(&self, data: &PageData) -> Result<String, handlebars::RenderError> {
        self.registry.render(&self.template_name, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_page(title: &str, message: Option<&str>) -> PageConfig {
        PageConfig {
            title: title.to_string(),
            message: message.map(ToString::to_string),
            template: "index.html".to_string(),
        }
    }

    #[test]
    fn test_render_contains_title() {
        let page = test_page("Welcome to the Gitex Asia Workshop", None);
        let renderer = PageRenderer::new(&page).expect("embedded template should parse");
        let html = renderer
            .render(&PageData::from_config(&page))
            .expect("render should succeed");
        assert!(html.contains("Welcome to the Gitex Asia Workshop"));
    }

    #[test]
    fn test_render_message_when_present() {
        let page = test_page("Title", Some("hello from the workshop"));
        let renderer = PageRenderer::new(&page).expect("embedded template should parse");
        let html = renderer
            .render(&PageData::from_config(&page))
            .expect("render should succeed");
        assert!(html.contains("hello from the workshop"));
    }

    #[test]
    fn test_render_omits_absent_message() {
        let page = test_page("Title", None);
        let renderer = PageRenderer::new(&page).expect("embedded template should parse");
        let html = renderer
            .render(&PageData::from_config(&page))
            .expect("render should succeed");
        assert!(!html.contains("class=\"message\""));
    }

    #[test]
    fn test_field_values_are_html_escaped() {
        let page = test_page("<script>alert(1)</script>", None);
        let renderer = PageRenderer::new(&page).expect("embedded template should parse");
        let html = renderer
            .render(&PageData::from_config(&page))
            .expect("render should succeed");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let page = test_page("Same input, same output", Some("twice"));
        let renderer = PageRenderer::new(&page).expect("embedded template should parse");
        let data = PageData::from_config(&page);
        let first = renderer.render(&data).expect("render should succeed");
        let second = renderer.render(&data).expect("render should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_template_fails_to_parse() {
        let result = PageRenderer::from_source("broken.html", "{{#if title}}unclosed block");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let mut page = test_page("Title", None);
        page.template = "nope.html".to_string();
        assert!(PageRenderer::new(&page).is_err());
    }

    #[test]
    fn test_unmatched_placeholder_is_render_error() {
        let renderer = PageRenderer::from_source("strict.html", "{{title}} {{build_id}}")
            .expect("template should parse");
        let data = PageData {
            title: "Title".to_string(),
            message: None,
        };
        assert!(renderer.render(&data).is_err());
    }
}
