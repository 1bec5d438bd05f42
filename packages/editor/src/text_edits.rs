//! # Text Edits
//!
//! Insert, remove and replace raw characters while keeping the formatting
//! around them. Offsets of everything after the edit move by the number of
//! characters inserted or removed.
//!
//! ## Insertion at a boundary
//!
//! Text inserted exactly between two leaves joins the left one, so typing at
//! the end of a bold word continues in bold.

use crate::errors::{EditorError, EditorResult};
use crate::offsets::{clamp_offset, clamp_span, to_isize};
use crate::split::split_in_three;
use richtext_parser::text::{char_len, cut, splice};
use richtext_parser::{simplify, validate, Node};
use tracing::{trace, warn};

/// Insert `text` at `position`
///
/// The position is clamped to the tree. An empty tree becomes a single text
/// leaf.
pub fn insert_text(root: &Node, text: &str, position: isize) -> Node {
    if text.is_empty() {
        return root.clone();
    }

    let position = clamp_offset(root, position);
    let len = char_len(text);

    if root.is_empty() {
        if let Some(kind) = root.element_kind() {
            let start = root.start();
            return Node::element(kind, start, start + len, vec![Node::text(start, text)]);
        }
    }

    let mut node = root.clone();
    insert_at(&mut node, text, len, position, false);
    node
}

/// Returns whether the text has been placed in or before this subtree
fn insert_at(node: &mut Node, text: &str, len: usize, position: usize, inserted: bool) -> bool {
    if inserted {
        node.shift_right(len);
        return true;
    }
    if position < node.start() || position > node.end() {
        return false;
    }

    match node {
        Node::Text { start, end, value } => {
            *value = splice(value, position - *start, text);
            *end += len;
            true
        }
        Node::Element { end, children, .. } => {
            let mut done = false;
            for child in children.iter_mut() {
                done = insert_at(child, text, len, position, done);
            }
            if done {
                *end += len;
            }
            done
        }
    }
}

/// Remove `length` characters starting at `position`
///
/// A negative position eats into the length; the range is clamped to the
/// tree and an empty range leaves it unchanged.
pub fn remove_text(root: &Node, position: isize, length: isize) -> EditorResult<Node> {
    let Some((position, length)) = clamp_span(root, position, length) else {
        return Ok(root.clone());
    };

    trace!(position, length, "removing text");
    let removed = remove_range(root.clone(), position, length)?;
    Ok(simplify(removed))
}

/// Remove `position..position + length`, which must lie inside `node`
fn remove_range(node: Node, position: usize, length: usize) -> EditorResult<Node> {
    let range_end = position + length;

    match node {
        Node::Text { start, end, value } => Ok(Node::Text {
            start,
            end: end - length,
            value: cut(&value, position - start, range_end - start),
        }),
        Node::Element {
            kind,
            start,
            end,
            mut children,
        } => {
            if let Some(index) = children
                .iter()
                .position(|child| child.contains_range(position, range_end))
            {
                let child = children.remove(index);
                children.insert(index, remove_range(child, position, length)?);
                for sibling in &mut children[index + 1..] {
                    sibling.shift_left(length);
                }
                return Ok(Node::element(kind, start, end - length, children));
            }

            let node = Node::element(kind, start, end, children);
            let (before, _, after) = split_in_three(node, position, range_end)?;

            let mut parts: Vec<Node> = before.into_iter().collect();
            parts.extend(after.map(|mut after| {
                after.shift_left(length);
                after
            }));
            Ok(Node::element(kind, start, end - length, parts))
        }
    }
}

/// Replace `start..end` with `value`
///
/// Both bounds are clamped to the tree first.
pub fn update_text(root: &Node, start: isize, end: isize, value: &str) -> EditorResult<Node> {
    let from = clamp_offset(root, start);
    let to = clamp_offset(root, end).max(from);

    let removed = remove_text(root, to_isize(from), to_isize(to - from))?;
    let inserted = insert_text(&removed, value, to_isize(from));
    Ok(simplify(inserted))
}

/// Swap in a new raw text of the same length, keeping every node's range
///
/// On a length mismatch or an incoherent tree the tree is returned unchanged and a warning is
/// logged. Use [`try_force_update_text`] to get the error instead.
pub fn force_update_text(root: &Node, text: &str) -> Node {
    match try_force_update_text(root, text) {
        Ok(node) => node,
        Err(err) => {
            warn!(error = %err, "ignoring text update");
            root.clone()
        }
    }
}

/// Like [`force_update_text`], reporting why the text could not be applied
pub fn try_force_update_text(root: &Node, text: &str) -> EditorResult<Node> {
    let chars: Vec<char> = text.chars().collect();
    if root.start() != 0 || root.end() != chars.len() {
        return Err(EditorError::LengthMismatch {
            expected: root.end(),
            found: chars.len(),
        });
    }

    validate(root)?;

    let mut node = root.clone();
    relabel(&mut node, &chars);
    Ok(node)
}

fn relabel(node: &mut Node, chars: &[char]) {
    match node {
        Node::Text { start, end, value } => {
            *value = chars[*start..*end].iter().collect();
        }
        Node::Element { children, .. } => {
            for child in children {
                relabel(child, chars);
            }
        }
    }
}
