//! Block segmentation and classification

/// Separator between blocks: one blank line
const BLOCK_SEPARATOR: &str = "\n\n";

/// Fence line opening and closing a code block
pub(crate) const CODE_FENCE: &str = "```";

/// The kind of a Markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// ATX heading with level 1-6
    Heading(u8),
    /// Fenced code block
    Code,
    Quote,
    UnorderedList,
    /// List numbered `1. `, `2. `, ... without gaps
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a trimmed block
pub fn block_to_block_type(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        BlockType::Heading(level)
    } else if is_code_block(block) {
        BlockType::Code
    } else if block.lines().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if block.lines().all(|line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Number of leading `#` when followed by a space, for 1 to 6 hashes
pub fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) || block.as_bytes().get(hashes) != Some(&b' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

fn is_code_block(block: &str) -> bool {
    let mut lines = block.lines();
    let first = lines.next();
    let last = lines.next_back();
    first == Some(CODE_FENCE) && last == Some(CODE_FENCE)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
