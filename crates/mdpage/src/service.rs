//! PageService - the main entry point for rendering Markdown pages.

use mdpage_core::{extract_title, markdown_to_html_node_with, ConvertOptions, DelimiterMode};

use crate::Result;

/// Options for PageService
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Options passed to the Markdown converter
    pub convert: ConvertOptions,

    /// Title used when a page has no `# ` heading
    pub fallback_title: String,

    /// Placeholder in the template replaced by the page title
    pub title_placeholder: String,

    /// Placeholder in the template replaced by the rendered HTML
    pub content_placeholder: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            convert: ConvertOptions::default(),
            fallback_title: "Untitled Page".to_string(),
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

/// A page rendered into a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Extracted or fallback title
    pub title: String,
    /// Serialized HTML of the Markdown body
    pub content: String,
    /// The template with both placeholders substituted
    pub html: String,
}

/// The main service for converting Markdown pages to HTML
pub struct PageService {
    options: PageOptions,
}

impl PageService {
    /// Create a new PageService with default options
    pub fn new() -> Self {
        Self {
            options: PageOptions::default(),
        }
    }

    /// Create a PageService with custom options
    pub fn with_options(options: PageOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown to a serialized HTML fragment
    pub fn render_content(&self, markdown: &str) -> Result<String> {
        let node = markdown_to_html_node_with(markdown, &self.options.convert)?;
        Ok(node.serialize()?)
    }

    /// Page title, falling back to the configured default
    pub fn title(&self, markdown: &str) -> String {
        extract_title(markdown).unwrap_or_else(|| {
            tracing::warn!(
                fallback = %self.options.fallback_title,
                "no h1 title found, using fallback"
            );
            self.options.fallback_title.clone()
        })
    }

    /// Render a Markdown page into `template`
    pub fn render_page(&self, markdown: &str, template: &str) -> Result<RenderedPage> {
        let title = self.title(markdown);
        let content = self.render_content(markdown)?;
        tracing::debug!(%title, bytes = content.len(), "rendered page");

        let html = template
            .replace(&self.options.title_placeholder, &title)
            .replace(&self.options.content_placeholder, &content);

        Ok(RenderedPage {
            title,
            content,
            html,
        })
    }

    /// Reject unbalanced inline delimiters instead of splitting leniently
    pub fn strict(&mut self) -> &mut Self {
        self.options.convert.delimiter_mode = DelimiterMode::Strict;
        self
    }

    /// Get the current options
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut PageOptions {
        &mut self.options
    }
}

impl Default for PageService {
    fn default() -> Self {
        Self::new()
    }
}
