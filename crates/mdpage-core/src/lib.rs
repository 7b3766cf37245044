//! mdpage-core - Markdown to HTML conversion pipeline
//!
//! This crate turns a Markdown page into a tree of HTML nodes by way of two
//! intermediate forms: blank-line separated blocks, and flat sequences of
//! inline text spans inside each block.
//!
//! # Architecture
//!
//! ```text
//!                 ┌────────┐  classify  ┌──────────────┐
//! Markdown ─────▶ │ blocks │ ─────────▶ │              │
//!                 └────────┘            │  HtmlNode    │ ──▶ HTML String
//!                 ┌──────────────┐      │  tree (div)  │
//! block text ───▶ │ inline spans │ ───▶ │              │
//!                 └──────────────┘      └──────────────┘
//! ```
//!
//! Every conversion is a pure function of its input, so documents can be
//! converted in parallel without coordination.
//!
//! # Example
//!
//! ```rust
//! use mdpage_core::{extract_title, markdown_to_html_node};
//!
//! let markdown = "# Title\n\nSome **bold** text";
//!
//! let html = markdown_to_html_node(markdown).unwrap().serialize().unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
//! assert_eq!(extract_title(markdown).as_deref(), Some("Title"));
//! ```

mod block;
mod convert;
mod error;
mod html;
mod inline;
mod options;
mod text;

pub use block::{block_to_block_type, heading_level, markdown_to_blocks, BlockType};
pub use convert::{
    block_to_html_node, extract_title, markdown_to_html_node, markdown_to_html_node_with,
};
pub use error::{Error, Result};
pub use html::{attributes_string, Attributes, HtmlNode};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter,
    split_nodes_delimiter_strict, split_nodes_image, split_nodes_link, text_to_inline_nodes,
    text_to_inline_nodes_with,
};
pub use options::{ConvertOptions, DelimiterMode};
pub use text::{text_node_to_html_node, TextNode, TextType};
