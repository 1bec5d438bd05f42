//! # Edit Requests
//!
//! Serializable description of one change to a tree. Hosts build these from
//! UI events (a keystroke, a toolbar button) and hand them to a
//! [`Document`](crate::Document).
//!
//! ```json
//! { "type": "ApplyFormatting", "start": 0, "end": 5, "tag": "b" }
//! ```

use crate::errors::EditorResult;
use crate::formatting::Formatter;
use crate::text_edits::{force_update_text, insert_text, remove_text, update_text};
use richtext_parser::{Node, Tag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Edit {
    /// Insert characters at a position
    InsertText { text: String, position: isize },

    /// Delete a run of characters
    RemoveText { position: isize, length: isize },

    /// Replace `start..end` with `value`
    UpdateText {
        start: isize,
        end: isize,
        value: String,
    },

    /// Swap the raw text for one of equal length
    ForceUpdateText { text: String },

    /// Toggle a tag over `start..end`
    ApplyFormatting { start: isize, end: isize, tag: Tag },
}

impl Edit {
    /// Produce the edited tree, leaving `root` untouched
    pub fn apply(&self, root: &Node, formatter: &Formatter) -> EditorResult<Node> {
        match self {
            Edit::InsertText { text, position } => Ok(insert_text(root, text, *position)),
            Edit::RemoveText { position, length } => remove_text(root, *position, *length),
            Edit::UpdateText { start, end, value } => update_text(root, *start, *end, value),
            Edit::ForceUpdateText { text } => Ok(force_update_text(root, text)),
            Edit::ApplyFormatting { start, end, tag } => formatter.apply(root, *start, *end, *tag),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Edit::InsertText { .. } => "insert_text",
            Edit::RemoveText { .. } => "remove_text",
            Edit::UpdateText { .. } => "update_text",
            Edit::ForceUpdateText { .. } => "force_update_text",
            Edit::ApplyFormatting { .. } => "apply_formatting",
        }
    }
}
