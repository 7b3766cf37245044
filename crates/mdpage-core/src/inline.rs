//! Inline splitting
//!
//! Turns a run of Markdown text into a flat sequence of typed [`TextNode`]s.
//! Each pass only looks at nodes that are still [`TextType::Plain`] and
//! leaves everything else untouched, so the pass order decides precedence:
//!
//! ```text
//! "**" -> Bold, "_" -> Italic, "`" -> Code, ![alt](src) -> Image, [text](href) -> Link
//! ```
//!
//! Emphasis does not nest and delimiters cannot be escaped.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::options::{ConvertOptions, DelimiterMode};
use crate::text::{TextNode, TextType};

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid image pattern"));

// No lookbehind in `regex`; matches preceded by `!` are skipped in `find_links`
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// Delimiter passes in the order they are applied
const DELIMITERS: &[(&str, TextType)] = &[
    ("**", TextType::Bold),
    ("_", TextType::Italic),
    ("`", TextType::Code),
];

/// Split Markdown text into inline nodes using default options
pub fn text_to_inline_nodes(text: &str) -> Vec<TextNode> {
    let mut nodes = vec![TextNode::plain(text)];
    for &(delimiter, text_type) in DELIMITERS {
        nodes = split_nodes_delimiter(nodes, delimiter, text_type);
    }
    finish_inline_nodes(nodes)
}

/// Split Markdown text into inline nodes, honouring the delimiter mode
pub fn text_to_inline_nodes_with(text: &str, options: &ConvertOptions) -> Result<Vec<TextNode>> {
    match options.delimiter_mode {
        DelimiterMode::Lenient => Ok(text_to_inline_nodes(text)),
        DelimiterMode::Strict => {
            let mut nodes = vec![TextNode::plain(text)];
            for &(delimiter, text_type) in DELIMITERS {
                nodes = split_nodes_delimiter_strict(nodes, delimiter, text_type)?;
            }
            Ok(finish_inline_nodes(nodes))
        }
    }
}

/// Image and link passes, shared by both delimiter modes
fn finish_inline_nodes(nodes: Vec<TextNode>) -> Vec<TextNode> {
    let nodes = split_nodes_link(split_nodes_image(nodes));
    tracing::trace!(nodes = nodes.len(), "split inline text");
    nodes
}

/// Split plain nodes on `delimiter`, retyping the enclosed parts as `text_type`.
///
/// Parts alternate outside/inside starting with outside. Empty parts are
/// dropped. An odd number of delimiters is not an error: the trailing part
/// simply ends up inside.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    text_type: TextType,
) -> Vec<TextNode> {
    let mut result = Vec::with_capacity(nodes.len());
    for node in nodes {
        push_delimited(node, delimiter, text_type, &mut result);
    }
    result
}

/// Like [`split_nodes_delimiter`], but fails on a plain node whose delimiter
/// count is odd.
pub fn split_nodes_delimiter_strict(
    nodes: Vec<TextNode>,
    delimiter: &str,
    text_type: TextType,
) -> Result<Vec<TextNode>> {
    let mut result = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.is_plain()
            && !delimiter.is_empty()
            && node.text.matches(delimiter).count() % 2 == 1
        {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: node.text,
            });
        }
        push_delimited(node, delimiter, text_type, &mut result);
    }
    Ok(result)
}

fn push_delimited(node: TextNode, delimiter: &str, text_type: TextType, out: &mut Vec<TextNode>) {
    if !node.is_plain() || delimiter.is_empty() || !node.text.contains(delimiter) {
        out.push(node);
        return;
    }

    for (i, part) in node.text.split(delimiter).enumerate() {
        if part.is_empty() {
            continue;
        }
        if i % 2 == 0 {
            out.push(TextNode::plain(part));
        } else {
            out.push(TextNode::new(part, text_type));
        }
    }
}

/// A `[text](url)` style match inside a larger string
#[derive(Debug, Clone, PartialEq, Eq)]
struct InlineMatch<'a> {
    range: Range<usize>,
    text: &'a str,
    url: &'a str,
}

fn find_images(text: &str) -> Vec<InlineMatch<'_>> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            Some(InlineMatch {
                range: caps.get(0)?.range(),
                text: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<InlineMatch<'_>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_PATTERN.captures_at(text, pos) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        // An image: retry just past the bracket, a later `[` may still start a link
        if text[..whole.start()].ends_with('!') {
            pos = whole.start() + 1;
            continue;
        }

        matches.push(InlineMatch {
            range: whole.range(),
            text: label.as_str(),
            url: url.as_str(),
        });
        pos = whole.end();
    }

    matches
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text).into_iter().map(|m| (m.text, m.url)).collect()
}

/// Extract `(text, url)` pairs for every `[text](url)` in `text` that is not an image
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text).into_iter().map(|m| (m.text, m.url)).collect()
}

/// Pull `![alt](url)` images out of plain nodes
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_matching(nodes, TextType::Image, find_images)
}

/// Pull `[text](url)` links out of plain nodes.
///
/// Image syntax is never matched here, but it is not converted either: run
/// [`split_nodes_image`] first or it stays in the text verbatim.
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_matching(nodes, TextType::Link, find_links)
}

fn split_nodes_matching(
    nodes: Vec<TextNode>,
    text_type: TextType,
    find: for<'a> fn(&'a str) -> Vec<InlineMatch<'a>>,
) -> Vec<TextNode> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            result.push(node);
            continue;
        }

        match split_text_matching(&node.text, text_type, find) {
            Some(pieces) => result.extend(pieces),
            None => result.push(node),
        }
    }

    result
}

/// Split one plain text around its matches; `None` when nothing matched
fn split_text_matching(
    text: &str,
    text_type: TextType,
    find: for<'a> fn(&'a str) -> Vec<InlineMatch<'a>>,
) -> Option<Vec<TextNode>> {
    let matches = find(text);
    if matches.is_empty() {
        return None;
    }

    let mut pieces = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;
    for m in matches {
        if m.range.start > last {
            pieces.push(TextNode::plain(&text[last..m.range.start]));
        }
        pieces.push(TextNode::with_url(m.text, text_type, m.url));
        last = m.range.end;
    }
    if last < text.len() {
        pieces.push(TextNode::plain(&text[last..]));
    }

    Some(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> TextNode {
        TextNode::plain(text)
    }

    #[test]
    fn test_split_code_delimiter() {
        let node = plain("This is text with a `code block` word");
        let result = split_nodes_delimiter(vec![node], "`", TextType::Code);
        assert_eq!(
            result,
            vec![
                plain("This is text with a "),
                TextNode::new("code block", TextType::Code),
                plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_bold_delimiter() {
        let result =
            split_nodes_delimiter(vec![plain("Make this **bold** text")], "**", TextType::Bold);
        assert_eq!(
            result,
            vec![
                plain("Make this "),
                TextNode::new("bold", TextType::Bold),
                plain(" text"),
            ]
        );
    }

    #[test]
    fn test_split_italic_delimiter() {
        let result =
            split_nodes_delimiter(vec![plain("Some _italic_ word")], "_", TextType::Italic);
        assert_eq!(
            result,
            vec![
                plain("Some "),
                TextNode::new("italic", TextType::Italic),
                plain(" word"),
            ]
        );
    }

    #[test]
    fn test_no_delimiter_passes_through() {
        let node = TextNode {
            text: "No delimiters here".to_string(),
            text_type: TextType::Plain,
            url: None,
        };
        let result = split_nodes_delimiter(vec![node.clone()], "`", TextType::Code);
        assert_eq!(result, vec![node]);
    }

    #[test]
    fn test_delimiters_at_boundaries() {
        let result =
            split_nodes_delimiter(vec![plain("**bold** and **strong**")], "**", TextType::Bold);
        assert_eq!(
            result,
            vec![
                TextNode::new("bold", TextType::Bold),
                plain(" and "),
                TextNode::new("strong", TextType::Bold),
            ]
        );
    }

    #[test]
    fn test_consecutive_delimiters_dropped() {
        let result = split_nodes_delimiter(vec![plain("Empty `` code")], "`", TextType::Code);
        assert_eq!(result, vec![plain("Empty "), plain(" code")]);
    }

    #[test]
    fn test_non_plain_unchanged() {
        let node = TextNode::new("already **bold**", TextType::Bold);
        let result = split_nodes_delimiter(vec![node.clone()], "**", TextType::Bold);
        assert_eq!(result, vec![node]);
    }

    #[test]
    fn test_multiple_nodes_input() {
        let nodes = vec![plain("Here is **bold**"), plain("And `code` here")];
        let nodes = split_nodes_delimiter(nodes, "**", TextType::Bold);
        let nodes = split_nodes_delimiter(nodes, "`", TextType::Code);
        assert_eq!(
            nodes,
            vec![
                plain("Here is "),
                TextNode::new("bold", TextType::Bold),
                plain("And "),
                TextNode::new("code", TextType::Code),
                plain(" here"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_lenient() {
        let result = split_nodes_delimiter(vec![plain("a `b` c `d")], "`", TextType::Code);
        assert_eq!(
            result,
            vec![
                plain("a "),
                TextNode::new("b", TextType::Code),
                plain(" c "),
                TextNode::new("d", TextType::Code),
            ]
        );
    }

    #[test]
    fn test_unbalanced_strict() {
        let result = split_nodes_delimiter_strict(vec![plain("a `b` c `d")], "`", TextType::Code);
        assert_eq!(
            result,
            Err(Error::UnbalancedDelimiter {
                delimiter: "`".to_string(),
                text: "a `b` c `d".to_string(),
            })
        );
    }

    #[test]
    fn test_balanced_strict() {
        let result =
            split_nodes_delimiter_strict(vec![plain("a `b` c")], "`", TextType::Code).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_extract_markdown_images() {
        let matches =
            extract_markdown_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)");
        assert_eq!(matches, vec![("image", "https://i.imgur.com/zjjcJKZ.png")]);
    }

    #[test]
    fn test_extract_markdown_images_empty_alt() {
        let matches =
            extract_markdown_images("![](pic.png) and ![alt text!@#](https://example.com/img.png)");
        assert_eq!(
            matches,
            vec![("", "pic.png"), ("alt text!@#", "https://example.com/img.png")]
        );
    }

    #[test]
    fn test_extract_markdown_links() {
        let matches = extract_markdown_links(
            "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)",
        );
        assert_eq!(
            matches,
            vec![
                ("to boot dev", "https://www.boot.dev"),
                ("to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn test_extract_markdown_links_ignore_images() {
        let matches = extract_markdown_links("Image ![img](url1) and link [link](url2)");
        assert_eq!(matches, vec![("link", "url2")]);
    }

    #[test]
    fn test_extract_rejects_empty_text_or_url() {
        assert_eq!(
            extract_markdown_links("[](u) [a]() ![b]() !x[c](d)"),
            vec![("c", "d")]
        );
        assert_eq!(extract_markdown_images("![](u) ![b]()"), vec![("", "u")]);
    }

    #[test]
    fn test_extract_link_inside_rejected_image_bracket() {
        let matches = extract_markdown_links("![a[b](c)");
        assert_eq!(matches, vec![("b", "c")]);
    }

    #[test]
    fn test_split_images() {
        let node = plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        );
        assert_eq!(
            split_nodes_image(vec![node]),
            vec![
                plain("This is text with an "),
                TextNode::with_url("image", TextType::Image, "https://i.imgur.com/zjjcJKZ.png"),
                plain(" and another "),
                TextNode::with_url(
                    "second image",
                    TextType::Image,
                    "https://i.imgur.com/3elNhQu.png"
                ),
            ]
        );
    }

    #[test]
    fn test_split_images_adjacent() {
        assert_eq!(
            split_nodes_image(vec![plain("![a](url1)![b](url2)")]),
            vec![
                TextNode::with_url("a", TextType::Image, "url1"),
                TextNode::with_url("b", TextType::Image, "url2"),
            ]
        );
    }

    #[test]
    fn test_split_images_no_images() {
        let node = plain("No images here");
        assert_eq!(split_nodes_image(vec![node.clone()]), vec![node]);
    }

    #[test]
    fn test_split_images_with_non_text_nodes() {
        let nodes = vec![plain("Start ![img](url)"), TextNode::new("bold", TextType::Bold)];
        assert_eq!(
            split_nodes_image(nodes),
            vec![
                plain("Start "),
                TextNode::with_url("img", TextType::Image, "url"),
                TextNode::new("bold", TextType::Bold),
            ]
        );
    }

    #[test]
    fn test_split_links() {
        assert_eq!(
            split_nodes_link(vec![plain("Start [link](url) end")]),
            vec![
                plain("Start "),
                TextNode::with_url("link", TextType::Link, "url"),
                plain(" end"),
            ]
        );
    }

    #[test]
    fn test_split_links_leaves_image_syntax() {
        assert_eq!(
            split_nodes_link(vec![plain("![img](url) and [link](url2)")]),
            vec![
                plain("![img](url) and "),
                TextNode::with_url("link", TextType::Link, "url2"),
            ]
        );
    }

    #[test]
    fn test_split_links_only_image() {
        let node = plain("just ![img](url)");
        assert_eq!(split_nodes_link(vec![node.clone()]), vec![node]);
    }

    #[test]
    fn test_split_links_adjacent() {
        assert_eq!(
            split_nodes_link(vec![plain("[A](urlA)[B](urlB)")]),
            vec![
                TextNode::with_url("A", TextType::Link, "urlA"),
                TextNode::with_url("B", TextType::Link, "urlB"),
            ]
        );
    }

    #[test]
    fn test_text_to_inline_nodes() {
        let nodes = text_to_inline_nodes(
            "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        );
        assert_eq!(
            nodes,
            vec![
                plain("This is "),
                TextNode::new("text", TextType::Bold),
                plain(" with an "),
                TextNode::new("italic", TextType::Italic),
                plain(" word and a "),
                TextNode::new("code block", TextType::Code),
                plain(" and an "),
                TextNode::with_url(
                    "obi wan image",
                    TextType::Image,
                    "https://i.imgur.com/fJRm4Vk.jpeg"
                ),
                plain(" and a "),
                TextNode::with_url("link", TextType::Link, "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_text_to_inline_nodes_plain() {
        assert_eq!(text_to_inline_nodes("just text"), vec![plain("just text")]);
    }

    #[test]
    fn test_text_to_inline_nodes_strict() {
        let options = ConvertOptions::strict();
        assert!(text_to_inline_nodes_with("an **open bold", &options).is_err());
        assert_eq!(
            text_to_inline_nodes_with("a **closed** bold", &options).unwrap(),
            text_to_inline_nodes("a **closed** bold")
        );
    }
}
