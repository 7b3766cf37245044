//! HTML node tree produced by the conversion pipeline.
//!
//! A node is either a leaf (tag, text value, attributes) or a parent (tag,
//! ordered children, attributes). Fields are public so callers can inspect
//! the tree, which is also why serialization re-validates what the checked
//! constructors already guarantee.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Attribute map, serialized in insertion order
pub type Attributes = IndexMap<String, String>;

/// An HTML element or raw text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Element with text content and no children.
    /// A leaf without a tag renders its value as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },

    /// Element wrapping child nodes
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Create a leaf node
    pub fn leaf(tag: Option<&str>, value: &str) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: Some(value.to_string()),
            attrs: Attributes::new(),
        }
    }

    /// Create an untagged leaf holding raw text
    pub fn text(value: &str) -> Self {
        Self::leaf(None, value)
    }

    /// Create a leaf node, failing when no value is supplied
    pub fn try_leaf(tag: Option<&str>, value: Option<&str>) -> Result<Self> {
        let value = value.ok_or(Error::MissingValue)?;
        Ok(Self::leaf(tag, value))
    }

    /// Create a parent node
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Attributes::new(),
        }
    }

    /// Create a parent node, failing when the tag or children are missing
    pub fn try_parent(tag: Option<&str>, children: Option<Vec<HtmlNode>>) -> Result<Self> {
        let tag = tag.ok_or(Error::MissingTag)?;
        let children = children.ok_or(Error::MissingChildren)?;
        Ok(Self::parent(tag, children))
    }

    /// Append an attribute, replacing the value if the name is already set
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.insert(name.to_string(), value.to_string());
            }
        }
        self
    }

    /// Tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.get(name).map(String::as_str)
            }
        }
    }

    /// Text value of a leaf; parents have none
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Child nodes of a parent; leaves yield nothing
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        let children = match self {
            HtmlNode::Parent { children, .. } => children.as_deref(),
            HtmlNode::Leaf { .. } => None,
        };
        children.into_iter().flatten()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Serialize this node and its descendants to an HTML string
    pub fn serialize(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(Error::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attrs, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_deref().ok_or(Error::MissingTag)?;
                let children = children.as_deref().ok_or(Error::MissingChildren)?;

                open_tag(tag, attrs, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes_string(attrs));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Render attributes as ` name="value"` pairs. Values are not escaped.
pub fn attributes_string(attrs: &Attributes) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, value))
        .collect()
}
