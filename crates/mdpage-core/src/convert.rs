//! Convert a Markdown document into an HTML node tree
//!
//! Each block becomes one child of an outer `div`. Inline content of every
//! block except code blocks goes through the inline splitter.

use crate::block::{block_to_block_type, markdown_to_blocks, BlockType, CODE_FENCE};
use crate::error::Result;
use crate::html::HtmlNode;
use crate::inline::text_to_inline_nodes_with;
use crate::options::ConvertOptions;
use crate::text::{text_node_to_html_node, TextNode, TextType};

/// Convert a Markdown document to a `div` node using default options
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    markdown_to_html_node_with(markdown, &ConvertOptions::default())
}

/// Convert a Markdown document to a `div` node
pub fn markdown_to_html_node_with(markdown: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    tracing::debug!(blocks = blocks.len(), "converting markdown");

    let children = blocks
        .into_iter()
        .map(|block| block_to_html_node(block, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Build the HTML subtree for a single trimmed block
pub fn block_to_html_node(block: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    let block_type = block_to_block_type(block);
    tracing::debug!(?block_type, "classified block");

    match block_type {
        BlockType::Heading(level) => {
            let text = &block[usize::from(level) + 1..];
            Ok(HtmlNode::parent(
                &format!("h{}", level),
                text_to_children(text, options)?,
            ))
        }

        BlockType::Code => {
            let code = TextNode::new(code_block_text(block), TextType::Code);
            Ok(HtmlNode::parent("pre", vec![text_node_to_html_node(&code)?]))
        }

        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| {
                    let line = line.strip_prefix('>').unwrap_or(line);
                    line.strip_prefix(' ').unwrap_or(line)
                })
                .collect::<Vec<_>>()
                .join("\n");
            Ok(HtmlNode::parent("blockquote", text_to_children(&text, options)?))
        }

        BlockType::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(line.strip_prefix("- ").unwrap_or(line), options))
                .collect::<Result<Vec<_>>>()?;
            Ok(HtmlNode::parent("ul", items))
        }

        BlockType::OrderedList => {
            let items = block
                .lines()
                .map(|line| {
                    let text = line.split_once(". ").map_or(line, |(_, rest)| rest);
                    list_item(text, options)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(HtmlNode::parent("ol", items))
        }

        BlockType::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            Ok(HtmlNode::parent("p", text_to_children(&text, options)?))
        }
    }
}

fn list_item(text: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", text_to_children(text, options)?))
}

/// Inline-split text and convert every span to an HTML leaf
fn text_to_children(text: &str, options: &ConvertOptions) -> Result<Vec<HtmlNode>> {
    text_to_inline_nodes_with(text, options)?
        .iter()
        .map(text_node_to_html_node)
        .collect()
}

/// Code between the fences; the newline before the closing fence is kept
fn code_block_text(block: &str) -> &str {
    let end = block.len().saturating_sub(CODE_FENCE.len());
    let start = block.find('\n').map_or(end, |i| i + 1).min(end);
    &block[start..end]
}

/// Text of the first `# ` heading line, trimmed.
///
/// Leading whitespace before the `#` is ignored. Returns `None` when the
/// document has no such line; choosing a fallback is up to the caller.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}
