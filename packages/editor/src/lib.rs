//! # Richtext Editor
//!
//! Position-addressed editing of rich-text trees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: markup → tree, tree → markup        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: tree → tree                         │
//! │  - Split subtrees at an offset              │
//! │  - Toggle tags over a range                 │
//! │  - Insert / remove / replace characters     │
//! │  - Break text into word-balanced columns    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Document: version counter + Edit requests   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Raw offsets**: every position counts characters of the tag-free text
//! 2. **Functional edits**: operations return a new tree, the input is kept
//! 3. **Simplified output**: results never hold empty nodes or mergeable runs
//!
//! ## Usage
//!
//! ```rust
//! use richtext_editor::{Document, Edit};
//! use richtext_parser::Tag;
//!
//! let mut doc = Document::parse("hello world");
//! doc.apply(Edit::ApplyFormatting { start: 0, end: 5, tag: Tag::Bold })?;
//! doc.apply(Edit::InsertText { text: "!".to_string(), position: 11 })?;
//!
//! assert_eq!(doc.source(), "<b>hello</b> world!");
//! # Ok::<(), richtext_editor::EditorError>(())
//! ```

mod columns;
mod document;
mod edit;
mod errors;
mod formatting;
mod offsets;
mod rules;
mod split;
mod text_edits;

pub use columns::split_into_columns;
pub use document::{Document, EditOutcome};
pub use edit::Edit;
pub use errors::{EditorError, EditorResult};
pub use formatting::{apply_formatting, strip_tags, tags_in_selection, Formatter};
pub use rules::TagRules;
pub use split::{split, split_children, split_in_three, SplitPair, SplitTriple};
pub use text_edits::{
    force_update_text, insert_text, remove_text, try_force_update_text, update_text,
};

// Re-export common types for convenience
pub use richtext_parser::{Node, Tag};
