//! # Splitting
//!
//! Cuts a subtree in two at an absolute offset. Both halves keep the kind of
//! the node they came from, so a tag wrapping the cut ends up wrapping each
//! half. Halves that would be empty are returned as `None`.

use crate::errors::{EditorError, EditorResult};
use richtext_parser::text::byte_index;
use richtext_parser::{simplify_option, Node};

/// Result of a two-way split: the part before and the part after the cut
pub type SplitPair = (Option<Node>, Option<Node>);

/// Result of a three-way split: before, inside and after a range
pub type SplitTriple = (Option<Node>, Option<Node>, Option<Node>);

/// Split `node` at absolute offset `at`
///
/// `at` must lie within `node.start()..=node.end()`.
pub fn split(node: Node, at: usize) -> EditorResult<SplitPair> {
    if at < node.start() || at > node.end() {
        return Err(EditorError::out_of_range(at, node.start(), node.end()));
    }

    match node {
        Node::Text { start, end, value } => {
            let (head, tail) = value.split_at(byte_index(&value, at - start));
            let before = (at != start).then(|| Node::Text {
                start,
                end: at,
                value: head.to_string(),
            });
            let after = (at != end).then(|| Node::Text {
                start: at,
                end,
                value: tail.to_string(),
            });
            Ok((before, after))
        }
        Node::Element {
            kind,
            start,
            end,
            children,
        } => {
            let (before, after) = split_children(children, at)?;
            Ok((
                (!before.is_empty()).then(|| Node::element(kind, start, at, before)),
                (!after.is_empty()).then(|| Node::element(kind, at, end, after)),
            ))
        }
    }
}

/// Route each child to the left or right list, splitting the one straddling `at`
pub fn split_children(children: Vec<Node>, at: usize) -> EditorResult<(Vec<Node>, Vec<Node>)> {
    let mut before = Vec::new();
    let mut after = Vec::new();

    for child in children {
        if child.end() <= at {
            before.push(child);
        } else if child.start() >= at {
            after.push(child);
        } else {
            let (head, tail) = split(child, at)?;
            before.extend(head);
            after.extend(tail);
        }
    }

    Ok((before, after))
}

/// Split `node` into the parts before `start`, inside `start..end`, and after `end`
///
/// Each part is simplified independently.
pub fn split_in_three(node: Node, start: usize, end: usize) -> EditorResult<SplitTriple> {
    let (before, rest) = split(node, start)?;
    let (inside, after) = match rest {
        Some(rest) => split(rest, end)?,
        None => (None, None),
    };

    Ok((
        simplify_option(before),
        simplify_option(inside),
        simplify_option(after),
    ))
}
