//! # Formatting
//!
//! Applies or removes a tag over a `start..end` range of raw text.
//!
//! Applying is a toggle: when the whole range already sits inside a node
//! carrying the tag, the tag is removed from that range; otherwise the range
//! is wrapped in a new tag node and any copies of the tag (or of tags
//! declared exclusive with it) inside the range are unwrapped first.
//!
//! ## Case analysis
//!
//! Starting from the root, each node is compared with the range:
//!
//! - **tag node carrying the tag**: split it around the range and unwrap the
//!   middle part
//! - **tag node carrying an exclusive tag**: unwrap the middle part, then keep
//!   formatting the result
//! - **text leaf**: split around the range and wrap the middle part
//! - **one child contains the range**: recurse into that child only
//! - **range spans several children**: cut the first and last overlapping
//!   children at the range bounds and wrap everything in between
//!
//! Intermediate results are `fragment` nodes; the final tree is simplified.

use crate::errors::{EditorError, EditorResult};
use crate::offsets::clamp_offset;
use crate::rules::TagRules;
use crate::split::{split, split_in_three};
use richtext_parser::{simplify, ElementKind, Node, Tag};
use tracing::trace;

/// Applies formatting according to a set of tag rules
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    rules: TagRules,
}

impl Formatter {
    /// Formatter using the default tag rules
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: TagRules) -> Self {
        Self { rules }
    }

    /// Toggle `tag` over `start..end`
    ///
    /// Offsets are clamped to the tree; an empty range returns the tree
    /// unchanged.
    pub fn apply(&self, root: &Node, start: isize, end: isize, tag: Tag) -> EditorResult<Node> {
        let start = clamp_offset(root, start);
        let end = clamp_offset(root, end);
        if start >= end {
            return Ok(root.clone());
        }

        let exclusive = self.rules.incompatible_with(tag);
        let mut stripped = Vec::with_capacity(exclusive.len() + 1);
        stripped.push(tag);
        stripped.extend(exclusive.iter().copied());

        let pass = FormatPass {
            start,
            end,
            tag,
            exclusive: &exclusive,
            stripped: &stripped,
        };
        let formatted = pass.format(root.clone())?;
        Ok(simplify(formatted))
    }
}

/// One formatting request threaded through the recursion
struct FormatPass<'a> {
    start: usize,
    end: usize,
    tag: Tag,
    exclusive: &'a [Tag],
    /// The applied tag plus its exclusive tags
    stripped: &'a [Tag],
}

impl FormatPass<'_> {
    fn format(&self, node: Node) -> EditorResult<Node> {
        match node.tag() {
            Some(tag) if tag == self.tag => {
                trace!(tag = %tag, start = self.start, end = self.end, "removing tag");
                return remove_tag(node, self.start, self.end, tag);
            }
            Some(tag) if self.exclusive.contains(&tag) => {
                trace!(tag = %tag, replaced_by = %self.tag, "removing exclusive tag");
                let unwrapped = simplify(remove_tag(node, self.start, self.end, tag)?);
                return self.format(unwrapped);
            }
            _ => {}
        }

        match node {
            Node::Text { .. } => self.wrap_text(node),
            Node::Element {
                kind,
                start: node_start,
                end: node_end,
                mut children,
            } => {
                if let Some(index) = children
                    .iter()
                    .position(|child| child.contains_range(self.start, self.end))
                {
                    let child = children.remove(index);
                    children.insert(index, self.format(child)?);
                    return Ok(Node::element(kind, node_start, node_end, children));
                }

                self.wrap_children(kind, node_start, node_end, children)
            }
        }
    }

    fn wrap_text(&self, node: Node) -> EditorResult<Node> {
        let (node_start, node_end) = (node.start(), node.end());
        let (before, inside, after) = split_in_three(node, self.start, self.end)?;

        let mut children = Vec::with_capacity(3);
        children.extend(before);
        children.extend(inside.map(|inside| {
            Node::element(ElementKind::Tag(self.tag), self.start, self.end, vec![inside])
        }));
        children.extend(after);

        Ok(Node::element(ElementKind::Fragment, node_start, node_end, children))
    }

    fn wrap_children(
        &self,
        kind: ElementKind,
        node_start: usize,
        node_end: usize,
        children: Vec<Node>,
    ) -> EditorResult<Node> {
        let first = children
            .iter()
            .position(|child| child.start() <= self.start && self.start < child.end());
        let last = children
            .iter()
            .rposition(|child| child.start() < self.end && self.end <= child.end());

        let (first, last) = match (first, last) {
            (Some(first), Some(last)) if first < last => (first, last),
            _ => {
                return Err(EditorError::unhandled_layout(
                    self.start, self.end, node_start, node_end,
                ))
            }
        };
        trace!(first, last, start = self.start, end = self.end, "wrapping children");

        let mut before = Vec::new();
        let mut middle = Vec::new();
        let mut after = Vec::new();

        for (index, child) in children.into_iter().enumerate() {
            if index < first {
                before.push(child);
            } else if index == first {
                let (head, rest) = split(child, self.start)?;
                before.extend(head);
                middle.extend(rest);
            } else if index < last {
                middle.push(child);
            } else if index == last {
                let (rest, tail) = split(child, self.end)?;
                middle.extend(rest);
                after.extend(tail);
            } else {
                after.push(child);
            }
        }

        let middle = middle
            .into_iter()
            .map(|child| strip_tags(child, self.stripped))
            .collect();

        let mut children = before;
        children.push(Node::element(
            ElementKind::Tag(self.tag),
            self.start,
            self.end,
            middle,
        ));
        children.extend(after);

        Ok(Node::element(kind, node_start, node_end, children))
    }
}

/// Remove `tag` from `start..end` of a node carrying it
///
/// The parts outside the range keep the tag. The result is a fragment.
fn remove_tag(node: Node, start: usize, end: usize, tag: Tag) -> EditorResult<Node> {
    let (node_start, node_end) = (node.start(), node.end());
    let (before, inside, after) = split_in_three(node, start, end)?;

    let mut children = Vec::with_capacity(3);
    children.extend(before);
    children.extend(inside.map(|inside| strip_tags(inside, &[tag])));
    children.extend(after);

    Ok(Node::element(ElementKind::Fragment, node_start, node_end, children))
}

/// Turn every node carrying one of `tags` into a fragment, recursively
pub fn strip_tags(node: Node, tags: &[Tag]) -> Node {
    match node {
        Node::Text { .. } => node,
        Node::Element {
            kind,
            start,
            end,
            children,
        } => {
            let kind = match kind.tag() {
                Some(tag) if tags.contains(&tag) => ElementKind::Fragment,
                _ => kind,
            };
            let children = children
                .into_iter()
                .map(|child| strip_tags(child, tags))
                .collect();
            Node::element(kind, start, end, children)
        }
    }
}

/// Tags of the nodes whose subtree contains `start..end`, outermost first
///
/// An inverted range selects nothing.
pub fn tags_in_selection(node: &Node, start: usize, end: usize) -> Vec<Tag> {
    let mut tags = Vec::new();
    if start > end || !node.contains_range(start, end) {
        return tags;
    }

    let mut current = node;
    loop {
        tags.extend(current.tag());
        match current
            .children()
            .iter()
            .find(|child| child.contains_range(start, end))
        {
            Some(child) => current = child,
            None => break,
        }
    }
    tags
}

/// Toggle `tag` over `start..end` using the default tag rules
pub fn apply_formatting(root: &Node, start: isize, end: isize, tag: Tag) -> EditorResult<Node> {
    Formatter::new().apply(root, start, end, tag)
}
