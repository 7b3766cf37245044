//! Error types for node construction, inline conversion and serialization.

use crate::text::TextType;

/// Error type for mdpage-core operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A leaf node was built or rendered without a text value
    #[error("leaf node must have a value")]
    MissingValue,

    /// A parent node was built or rendered without a tag
    #[error("parent node must have a tag")]
    MissingTag,

    /// A parent node was built or rendered without a children sequence
    #[error("parent node must have children")]
    MissingChildren,

    /// A link or image text node has no usable URL
    #[error("{kind:?} text node must have a non-empty url")]
    MissingUrl { kind: TextType },

    /// Odd number of delimiters in strict mode
    #[error("unbalanced delimiter {delimiter:?} in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;
