//! # Document Handle
//!
//! A Document owns one rich-text tree together with the tag rules used to
//! format it, and applies [`Edit`] requests to it.
//!
//! ## Lifecycle
//!
//! ```text
//! Parse → Edit → Edit → ... → Serialize
//!   ↓       ↓                    ↓
//! Tree   version+1            Markup
//! ```
//!
//! A failed edit leaves the tree and the version untouched.

use crate::errors::EditorResult;
use crate::formatting::{tags_in_selection, Formatter};
use crate::rules::TagRules;
use crate::Edit;
use richtext_parser::{check_coherence, parse, raw_text, serialize, validate, Node, Tag};
use tracing::{debug, instrument};

/// Editable rich-text document
#[derive(Debug, Clone)]
pub struct Document {
    /// Current version number (increments on each applied edit)
    pub version: u64,

    ast: Node,
    formatter: Formatter,
}

/// What an applied edit did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    pub version: u64,
    /// Whether the tree differs from the one before the edit
    pub changed: bool,
}

impl Document {
    /// Parse markup using the default tag rules
    pub fn parse(source: &str) -> Self {
        Self::with_rules(source, TagRules::default())
    }

    pub fn with_rules(source: &str, rules: TagRules) -> Self {
        Self {
            version: 0,
            ast: parse(source),
            formatter: Formatter::with_rules(rules),
        }
    }

    /// Wrap an existing tree, rejecting it if it is incoherent
    pub fn from_ast(ast: Node) -> EditorResult<Self> {
        validate(&ast)?;
        Ok(Self {
            version: 0,
            ast,
            formatter: Formatter::new(),
        })
    }

    pub fn ast(&self) -> &Node {
        &self.ast
    }

    /// Tagged markup of the current tree
    pub fn source(&self) -> String {
        serialize(&self.ast)
    }

    pub fn raw_text(&self) -> String {
        raw_text(&self.ast)
    }

    /// Length of the raw text in characters
    pub fn len(&self) -> usize {
        self.ast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ast.is_empty()
    }

    /// Tags active over a selection; a collapsed selection has none
    pub fn tags_in_selection(&self, start: usize, end: usize) -> Vec<Tag> {
        if start == end {
            return Vec::new();
        }
        tags_in_selection(&self.ast, start, end)
    }

    pub fn validate(&self) -> EditorResult<()> {
        validate(&self.ast)?;
        Ok(())
    }

    /// Apply an edit
    #[instrument(skip(self, edit), fields(edit = edit.name(), version = self.version))]
    pub fn apply(&mut self, edit: Edit) -> EditorResult<EditOutcome> {
        let next = edit.apply(&self.ast, &self.formatter)?;
        debug_assert!(check_coherence(&next), "edit produced an incoherent tree");

        let changed = next != self.ast;
        self.ast = next;
        self.version += 1;
        debug!(changed, len = self.ast.len(), "edit applied");

        Ok(EditOutcome {
            version: self.version,
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditorError;

    #[test]
    fn test_create_document() {
        let doc = Document::parse("a<b>bc</b>");
        assert_eq!(doc.version, 0);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.source(), "a<b>bc</b>");
        assert_eq!(doc.raw_text(), "abc");
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_document_version_increments() {
        let mut doc = Document::parse("hello");

        let outcome = doc
            .apply(Edit::InsertText {
                text: "!".to_string(),
                position: 5,
            })
            .unwrap();
        assert_eq!(outcome, EditOutcome { version: 1, changed: true });

        let outcome = doc
            .apply(Edit::RemoveText {
                position: 0,
                length: 0,
            })
            .unwrap();
        assert_eq!(outcome, EditOutcome { version: 2, changed: false });
        assert_eq!(doc.source(), "hello!");
    }

    #[test]
    fn test_incoherent_tree_and_length_mismatch() {
        let incoherent = Node::root(vec![Node::text(0, "a"), Node::text(2, "c")]);
        assert!(matches!(
            Document::from_ast(incoherent),
            Err(EditorError::Incoherent(_))
        ));

        let mut doc = Document::parse("abc");
        let result = doc.apply(Edit::ForceUpdateText {
            text: "toolong".to_string(),
        });
        assert!(result.is_ok());
        assert_eq!(doc.source(), "abc");
    }

    #[test]
    fn test_tags_in_collapsed_selection() {
        let doc = Document::parse("<b>bold</b>");
        assert!(doc.tags_in_selection(2, 2).is_empty());
        assert_eq!(doc.tags_in_selection(1, 3), vec![Tag::Bold]);
    }

    #[test]
    fn test_custom_rules() {
        let rules = TagRules::empty().with_exclusive(Tag::Bold, Tag::Italic);
        let mut doc = Document::with_rules("<i>text</i>", rules);
        doc.apply(Edit::ApplyFormatting {
            start: 0,
            end: 4,
            tag: Tag::Bold,
        })
        .unwrap();
        assert_eq!(doc.source(), "<b>text</b>");
    }
}
