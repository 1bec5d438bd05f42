//! # Column Splitting
//!
//! Breaks a marked-up text into a fixed number of columns holding roughly
//! the same number of words. Formatting that spans a cut is closed at the
//! end of one column and reopened at the start of the next.

use crate::errors::EditorResult;
use crate::offsets::to_isize;
use crate::split::split;
use crate::text_edits::remove_text;
use richtext_parser::text::char_len;
use richtext_parser::{parse, raw_text, serialize, Node};
use tracing::debug;

/// Split `text` into `column_count` marked-up columns
///
/// Words are separated by single spaces and spread `ceil(words / columns)`
/// per column, so trailing columns may come out empty. A column count of 0
/// is treated as 1.
pub fn split_into_columns(text: &str, column_count: usize) -> EditorResult<Vec<String>> {
    let column_count = column_count.max(1);
    if column_count == 1 {
        return Ok(vec![text.to_string()]);
    }

    let tree = parse(text);
    let raw = raw_text(&tree);
    let words: Vec<&str> = raw.split(' ').collect();
    let per_column = words.len().div_ceil(column_count);
    debug!(words = words.len(), per_column, column_count, "splitting into columns");

    let mut buckets = words.chunks(per_column).map(|chunk| chunk.join(" "));
    let mut remainder = Some(tree);
    let mut columns = Vec::with_capacity(column_count);

    for _ in 0..column_count {
        let bucket = buckets.next().unwrap_or_default();
        let Some(rest) = remainder.take() else {
            columns.push(String::new());
            continue;
        };

        let at = (rest.start() + char_len(&bucket)).min(rest.end());
        let (head, tail) = split(rest, at)?;
        remainder = tail.map(trim_leading_spaces).transpose()?;
        columns.push(head.as_ref().map(serialize).unwrap_or_default());
    }

    Ok(columns)
}

fn trim_leading_spaces(node: Node) -> EditorResult<Node> {
    let spaces = raw_text(&node).chars().take_while(|&c| c == ' ').count();
    if spaces == 0 {
        return Ok(node);
    }
    remove_text(&node, to_isize(node.start()), to_isize(spaces))
}
