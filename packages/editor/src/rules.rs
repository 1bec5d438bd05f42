//! # Tag Rules
//!
//! Declares which tags may not cover the same text. Applying one tag of an
//! exclusive pair over a range first strips the other from that range.
//!
//! The table can be loaded from JSON:
//!
//! ```json
//! { "exclusive": [["+3", "-3"]] }
//! ```

use crate::errors::EditorResult;
use richtext_parser::Tag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRules {
    /// Pairs of mutually exclusive tags
    #[serde(default)]
    exclusive: Vec<(Tag, Tag)>,
}

impl TagRules {
    /// Rules with no exclusive pairs
    pub fn empty() -> Self {
        Self {
            exclusive: Vec::new(),
        }
    }

    pub fn with_exclusive(mut self, a: Tag, b: Tag) -> Self {
        if a != b && !self.are_exclusive(a, b) {
            self.exclusive.push((a, b));
        }
        self
    }

    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn are_exclusive(&self, a: Tag, b: Tag) -> bool {
        self.exclusive
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// Tags that must be stripped from a range before `tag` is applied to it
    pub fn incompatible_with(&self, tag: Tag) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self
            .exclusive
            .iter()
            .filter_map(|&(a, b)| match (a == tag, b == tag) {
                (true, false) => Some(b),
                (false, true) => Some(a),
                _ => None,
            })
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::empty().with_exclusive(Tag::Larger, Tag::Smaller)
    }
}
