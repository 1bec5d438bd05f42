//! # Richtext Parser
//!
//! Data model and markup boundary for the rich-text engine.
//!
//! A run of formatted text is a tree of tagged spans over one flat
//! coordinate space: every node records the `start..end` character range
//! of the raw (tag-free) text it covers.
//!
//! ```text
//! "a<b>bc</b>"  →  root 0..3
//!                  ├─ text 0..1 "a"
//!                  └─ b 1..3
//!                     └─ text 1..3 "bc"
//! ```

pub mod ast;
pub mod coherence;
pub mod parser;
pub mod serializer;
pub mod simplify;
pub mod text;
pub mod tokenizer;

#[cfg(test)]
mod tests_roundtrip;

pub use ast::{ElementKind, Node, NodeKind, Tag};
pub use coherence::{check_coherence, validate, CoherenceError};
pub use parser::{parse, Parser};
pub use serializer::{raw_text, serialize, Serializer};
pub use simplify::{simplify, simplify_option};
pub use tokenizer::{tokenize, Token};
