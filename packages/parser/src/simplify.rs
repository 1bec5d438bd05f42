//! # Tree normalization
//!
//! Rewrites a tree bottom-up into its canonical form:
//!
//! 1. **Flatten**: a child with the same kind as its parent, or a
//!    `fragment`, is replaced by its own children.
//! 2. **Coalesce**: empty text leaves and childless elements are dropped,
//!    and adjacent siblings of the same kind are merged.
//!
//! Offsets are never recomputed: both steps preserve the tiling of the
//! parent's range, so a coherent input yields a coherent output.

use crate::ast::{ElementKind, Node};

/// Normalize a tree
pub fn simplify(node: Node) -> Node {
    match node {
        Node::Text { .. } => node,
        Node::Element {
            kind,
            start,
            end,
            children,
        } => Node::Element {
            kind,
            start,
            end,
            children: simplify_children(kind, children),
        },
    }
}

/// Normalize an optional tree, passing absence through
pub fn simplify_option(node: Option<Node>) -> Option<Node> {
    node.map(simplify)
}

fn simplify_children(parent: ElementKind, children: Vec<Node>) -> Vec<Node> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        flatten_into(parent, simplify(child), &mut flat);
    }
    coalesce(flat)
}

fn flatten_into(parent: ElementKind, node: Node, out: &mut Vec<Node>) {
    match node {
        Node::Element { kind, children, .. } if kind == parent || kind == ElementKind::Fragment => {
            for child in children {
                flatten_into(parent, child, out);
            }
        }
        other => out.push(other),
    }
}

fn coalesce(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if is_void(&node) {
            continue;
        }
        let rest = match out.last_mut() {
            Some(last) => merge_into(last, node),
            None => Some(node),
        };
        if let Some(node) = rest {
            out.push(node);
        }
    }
    out
}

fn is_void(node: &Node) -> bool {
    match node {
        Node::Text { value, .. } => value.is_empty(),
        Node::Element { children, .. } => children.is_empty(),
    }
}

/// Merge `next` into `last` when both have the same kind; otherwise hand it back
fn merge_into(last: &mut Node, next: Node) -> Option<Node> {
    match (last, next) {
        (
            Node::Text { end, value, .. },
            Node::Text {
                end: next_end,
                value: next_value,
                ..
            },
        ) => {
            value.push_str(&next_value);
            *end = next_end;
            None
        }
        (
            Node::Element {
                kind,
                end,
                children,
                ..
            },
            Node::Element {
                kind: next_kind,
                end: next_end,
                children: next_children,
                ..
            },
        ) if *kind == next_kind => {
            children.extend(next_children);
            *end = next_end;
            // the seam between the two child lists may now hold mergeable siblings
            let merged = std::mem::take(children);
            *children = coalesce(merged);
            None
        }
        (_, next) => Some(next),
    }
}
