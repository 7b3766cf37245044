//! # mdpage
//!
//! Render Markdown pages into HTML templates.
//!
//! This crate is the page-level layer over [`mdpage_core`]: it converts a
//! page's Markdown to HTML, picks the page title from its first `# ` heading
//! and substitutes both into a template string. Reading content files and
//! writing the output is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use mdpage::PageService;
//!
//! let service = PageService::new();
//! let page = service
//!     .render_page("# Hello\n\nWorld", "<h1>{{ Title }}</h1>{{ Content }}")
//!     .unwrap();
//!
//! assert_eq!(page.title, "Hello");
//! assert!(page.html.contains("<p>World</p>"));
//! ```

mod service;

pub use mdpage_core::{ConvertOptions, DelimiterMode, HtmlNode};
pub use service::{PageOptions, PageService, RenderedPage};

/// Error type for page rendering
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Conversion error: {0}")]
    Convert(#[from] mdpage_core::Error),
}

pub type Result<T> = std::result::Result<T, PageError>;
