use crate::ast::Node;
use crate::text::char_len;
use thiserror::Error;

/// Offset invariant violations found by [`validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoherenceError {
    #[error("Node {start}..{end} ends before it starts")]
    Inverted { start: usize, end: usize },

    #[error("Text {start}..{end} holds {found} characters")]
    TextLength {
        start: usize,
        end: usize,
        found: usize,
    },

    #[error("Element {start}..{end} has no children but a non-zero length")]
    EmptyElement { start: usize, end: usize },

    #[error("Children of {start}..{end} span {first}..{last}")]
    BoundsMismatch {
        start: usize,
        end: usize,
        first: usize,
        last: usize,
    },

    #[error("Child ending at {previous_end} is followed by a child starting at {next_start}")]
    ChildGap {
        previous_end: usize,
        next_start: usize,
    },
}

/// Check the offset invariant recursively, reporting the first violation
pub fn validate(node: &Node) -> Result<(), CoherenceError> {
    let (start, end) = (node.start(), node.end());
    if end < start {
        return Err(CoherenceError::Inverted { start, end });
    }

    match node {
        Node::Text { value, .. } => {
            let found = char_len(value);
            if found != end - start {
                return Err(CoherenceError::TextLength { start, end, found });
            }
            Ok(())
        }
        Node::Element { children, .. } => {
            let (Some(first), Some(last)) = (children.first(), children.last()) else {
                if start != end {
                    return Err(CoherenceError::EmptyElement { start, end });
                }
                return Ok(());
            };

            if first.start() != start || last.end() != end {
                return Err(CoherenceError::BoundsMismatch {
                    start,
                    end,
                    first: first.start(),
                    last: last.end(),
                });
            }

            for pair in children.windows(2) {
                if pair[0].end() != pair[1].start() {
                    return Err(CoherenceError::ChildGap {
                        previous_end: pair[0].end(),
                        next_start: pair[1].start(),
                    });
                }
            }

            children.iter().try_for_each(validate)
        }
    }
}

/// Whether every node's offsets agree with the raw text it represents
pub fn check_coherence(node: &Node) -> bool {
    validate(node).is_ok()
}
