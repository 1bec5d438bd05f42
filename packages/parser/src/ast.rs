use serde::{Deserialize, Serialize};
use std::fmt;

/// Style markers a node may carry.
///
/// The alphabet is fixed: markup names are matched literally by the
/// tokenizer and nothing else is recognized as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "b")]
    Bold,
    #[serde(rename = "i")]
    Italic,
    #[serde(rename = "c")]
    Underline,
    #[serde(rename = "+3")]
    Larger,
    #[serde(rename = "-3")]
    Smaller,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Bold,
        Tag::Italic,
        Tag::Underline,
        Tag::Larger,
        Tag::Smaller,
    ];

    /// Markup name used between the angle brackets
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Underline => "c",
            Tag::Larger => "+3",
            Tag::Smaller => "-3",
        }
    }

    pub fn from_markup(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a node that owns children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElementKind {
    /// Outermost wrapper, exactly one per tree
    Root,
    /// Transient grouping produced mid-transformation; removed by `simplify`
    Fragment,
    Tag(Tag),
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Root => "root",
            ElementKind::Fragment => "fragment",
            ElementKind::Tag(tag) => tag.as_str(),
        }
    }

    pub fn tag(self) -> Option<Tag> {
        match self {
            ElementKind::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl TryFrom<String> for ElementKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "root" => Ok(ElementKind::Root),
            "fragment" => Ok(ElementKind::Fragment),
            other => Tag::from_markup(other)
                .map(ElementKind::Tag)
                .ok_or_else(|| format!("unknown element kind: {other}")),
        }
    }
}

/// Kind of any node, text leaves included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Element(ElementKind),
}

/// Rich text AST node
///
/// Every node covers the half-open range `start..end` of the raw (tag-free)
/// text, counted in characters. A text leaf's value has exactly
/// `end - start` characters, and an element's children tile its range
/// without gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text {
        start: usize,
        end: usize,
        value: String,
    },
    Element {
        kind: ElementKind,
        start: usize,
        end: usize,
        children: Vec<Node>,
    },
}

impl Node {
    /// Text leaf starting at `start`; `end` is derived from the value
    pub fn text(start: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        let end = start + crate::text::char_len(&value);
        Node::Text { start, end, value }
    }

    pub fn element(kind: ElementKind, start: usize, end: usize, children: Vec<Node>) -> Self {
        Node::Element {
            kind,
            start,
            end,
            children,
        }
    }

    /// Root spanning its children, starting at 0
    pub fn root(children: Vec<Node>) -> Self {
        let end = children.last().map_or(0, Node::end);
        Node::element(ElementKind::Root, 0, end, children)
    }

    pub fn empty_root() -> Self {
        Node::root(Vec::new())
    }

    pub fn start(&self) -> usize {
        match self {
            Node::Text { start, .. } | Node::Element { start, .. } => *start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Node::Text { end, .. } | Node::Element { end, .. } => *end,
        }
    }

    /// Number of raw characters covered by this node
    pub fn len(&self) -> usize {
        self.end().saturating_sub(self.start())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text { .. } => NodeKind::Text,
            Node::Element { kind, .. } => NodeKind::Element(*kind),
        }
    }

    pub fn element_kind(&self) -> Option<ElementKind> {
        match self.kind() {
            NodeKind::Text => None,
            NodeKind::Element(kind) => Some(kind),
        }
    }

    /// Tag carried by this node, if it is a tag element
    pub fn tag(&self) -> Option<Tag> {
        self.element_kind().and_then(ElementKind::tag)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { .. } => &[],
            Node::Element { children, .. } => children,
        }
    }

    /// Whether `start..end` lies entirely inside this node
    pub fn contains_range(&self, start: usize, end: usize) -> bool {
        self.start() <= start && end <= self.end()
    }

    /// Move this subtree `amount` characters to the right
    pub fn shift_right(&mut self, amount: usize) {
        match self {
            Node::Text { start, end, .. } => {
                *start += amount;
                *end += amount;
            }
            Node::Element {
                start,
                end,
                children,
                ..
            } => {
                *start += amount;
                *end += amount;
                for child in children {
                    child.shift_right(amount);
                }
            }
        }
    }

    /// Move this subtree `amount` characters to the left
    pub fn shift_left(&mut self, amount: usize) {
        match self {
            Node::Text { start, end, .. } => {
                *start = start.saturating_sub(amount);
                *end = end.saturating_sub(amount);
            }
            Node::Element {
                start,
                end,
                children,
                ..
            } => {
                *start = start.saturating_sub(amount);
                *end = end.saturating_sub(amount);
                for child in children {
                    child.shift_left(amount);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_markup_names() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_markup(tag.as_str()), Some(tag));
        }
        assert_eq!(Tag::from_markup("u"), None);
        assert_eq!(Tag::from_markup("+3"), Some(Tag::Larger));
    }

    #[test]
    fn test_text_end_counts_characters() {
        let node = Node::text(2, "héllo");
        assert_eq!(node.start(), 2);
        assert_eq!(node.end(), 7);
        assert_eq!(node.len(), 5);
    }

    #[test]
    fn test_node_kinds() {
        let bold = Node::element(ElementKind::Tag(Tag::Bold), 0, 1, vec![Node::text(0, "a")]);
        assert_eq!(bold.kind(), NodeKind::Element(ElementKind::Tag(Tag::Bold)));
        assert_eq!(bold.tag(), Some(Tag::Bold));

        let text = &bold.children()[0];
        assert_eq!(text.kind(), NodeKind::Text);
        assert_eq!(text.element_kind(), None);
        assert_eq!(text.tag(), None);

        assert_eq!(Node::empty_root().element_kind(), Some(ElementKind::Root));
        assert_eq!(Node::empty_root().tag(), None);
    }

    #[test]
    fn test_shift_moves_whole_subtree() {
        let mut node = Node::element(
            ElementKind::Tag(Tag::Bold),
            1,
            3,
            vec![Node::text(1, "ab")],
        );
        node.shift_right(4);
        assert_eq!((node.start(), node.end()), (5, 7));
        assert_eq!(node.children()[0].start(), 5);

        node.shift_left(5);
        assert_eq!((node.start(), node.end()), (0, 2));
        assert_eq!(node.children()[0].end(), 2);
    }

    #[test]
    fn test_json_shape() {
        let root = Node::root(vec![Node::element(
            ElementKind::Tag(Tag::Larger),
            0,
            1,
            vec![Node::text(0, "a")],
        )]);
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["kind"], "root");
        assert_eq!(json["children"][0]["kind"], "+3");
        assert_eq!(json["children"][0]["children"][0]["value"], "a");

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"type":"element","kind":"u","start":0,"end":0,"children":[]}"#;
        assert!(serde_json::from_str::<Node>(json).is_err());
    }
}
