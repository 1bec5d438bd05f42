use crate::ast::{ElementKind, Node};

/// Serializer converts an AST back to markup
///
/// Two projections are available: the tagged markup accepted by the parser,
/// and the raw text with every tag wrapper omitted.
pub struct Serializer {
    markup: bool,
}

impl Serializer {
    /// Serializer producing tagged markup
    pub fn new() -> Self {
        Self { markup: true }
    }

    /// Serializer producing the tag-free raw text
    pub fn raw() -> Self {
        Self { markup: false }
    }

    pub fn serialize(&self, node: &Node) -> String {
        let mut output = String::new();
        self.serialize_node(node, &mut output);
        output
    }

    fn serialize_node(&self, node: &Node, output: &mut String) {
        match node {
            Node::Text { value, .. } => output.push_str(value),
            Node::Element { kind, children, .. } => {
                let tag = match kind {
                    ElementKind::Tag(tag) if self.markup => Some(*tag),
                    _ => None,
                };
                if let Some(tag) = tag {
                    output.push('<');
                    output.push_str(tag.as_str());
                    output.push('>');
                }
                for child in children {
                    self.serialize_node(child, output);
                }
                if let Some(tag) = tag {
                    output.push_str("</");
                    output.push_str(tag.as_str());
                    output.push('>');
                }
            }
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a tree to markup
pub fn serialize(node: &Node) -> String {
    Serializer::new().serialize(node)
}

/// Raw text of a tree, tags stripped
pub fn raw_text(node: &Node) -> String {
    Serializer::raw().serialize(node)
}
