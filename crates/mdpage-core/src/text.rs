//! Inline text nodes and their conversion into HTML leaves.

use crate::error::{Error, Result};
use crate::html::HtmlNode;

/// Inline formatting kind of a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Unformatted text
    Plain,
    Bold,
    Italic,
    Code,
    /// Anchor; the node's url is the href
    Link,
    /// Image; the node's text is the alt text and the url is the src
    Image,
}

/// A typed span of inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    pub url: Option<String>,
}

impl TextNode {
    /// Create a node without a url
    pub fn new(text: &str, text_type: TextType) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: None,
        }
    }

    /// Create a node carrying a url (links and images)
    pub fn with_url(text: &str, text_type: TextType, url: &str) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: Some(url.to_string()),
        }
    }

    /// Create a plain text node
    pub fn plain(text: &str) -> Self {
        Self::new(text, TextType::Plain)
    }

    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Plain
    }

    /// Url if present and non-empty
    fn required_url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingUrl {
                kind: self.text_type,
            })
    }
}

/// Convert an inline text node into a single HTML leaf
pub fn text_node_to_html_node(node: &TextNode) -> Result<HtmlNode> {
    let text = node.text.as_str();

    let html = match node.text_type {
        TextType::Plain => HtmlNode::text(text),
        TextType::Bold => HtmlNode::leaf(Some("b"), text),
        TextType::Italic => HtmlNode::leaf(Some("i"), text),
        TextType::Code => HtmlNode::leaf(Some("code"), text),
        TextType::Link => HtmlNode::leaf(Some("a"), text).with_attr("href", node.required_url()?),
        TextType::Image => HtmlNode::leaf(Some("img"), "")
            .with_attr("src", node.required_url()?)
            .with_attr("alt", text),
    };

    Ok(html)
}
