//! Error types for the editor

use richtext_parser::CoherenceError;
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Offset {offset} is outside node {start}..{end}")]
    OffsetOutOfRange {
        offset: usize,
        start: usize,
        end: usize,
    },

    #[error("Range {start}..{end} does not fit the children of node {node_start}..{node_end}")]
    UnhandledLayout {
        start: usize,
        end: usize,
        node_start: usize,
        node_end: usize,
    },

    #[error("Text has {found} characters but the tree covers {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Incoherent tree: {0}")]
    Incoherent(#[from] CoherenceError),

    #[error("Invalid tag rules: {0}")]
    Config(#[from] serde_json::Error),
}

impl EditorError {
    pub fn out_of_range(offset: usize, start: usize, end: usize) -> Self {
        Self::OffsetOutOfRange { offset, start, end }
    }

    pub fn unhandled_layout(start: usize, end: usize, node_start: usize, node_end: usize) -> Self {
        Self::UnhandledLayout {
            start,
            end,
            node_start,
            node_end,
        }
    }
}
