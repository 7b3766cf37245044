//! Configuration options for Markdown conversion

/// How unbalanced inline delimiters are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterMode {
    /// Alternate plain/formatted parts even when the delimiter count is odd;
    /// the last opened span runs to the end of the text
    #[default]
    Lenient,
    /// Reject text containing an odd number of a delimiter
    Strict,
}

/// Options for Markdown conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Handling of unbalanced `**`, `_` and `` ` `` delimiters
    pub delimiter_mode: DelimiterMode,
}

impl ConvertOptions {
    /// Options that reject unbalanced delimiters
    pub fn strict() -> Self {
        Self {
            delimiter_mode: DelimiterMode::Strict,
        }
    }
}
