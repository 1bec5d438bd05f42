//! Tests for longer sequences of edits
//!
//! This tests:
//! - Typing and deleting around formatted runs
//! - Formatting followed by text edits over the same range
//! - Column splitting of edited documents

use anyhow::Result;
use richtext_editor::{split_into_columns, Document, Edit, Tag};

fn insert(text: &str, position: isize) -> Edit {
    Edit::InsertText {
        text: text.to_string(),
        position,
    }
}

fn format(start: isize, end: isize, tag: Tag) -> Edit {
    Edit::ApplyFormatting { start, end, tag }
}

#[test]
fn test_typing_continues_formatting() -> Result<()> {
    let mut doc = Document::parse("");

    doc.apply(insert("Bold", 0))?;
    doc.apply(format(0, 4, Tag::Bold))?;
    doc.apply(insert("er", 4))?;
    doc.apply(insert(" text", 6))?;

    assert_eq!(doc.source(), "<b>Bolder text</b>");
    doc.apply(format(6, 11, Tag::Bold))?;
    assert_eq!(doc.source(), "<b>Bolder</b> text");
    Ok(())
}

#[test]
fn test_delete_across_formatting_merges_runs() -> Result<()> {
    let mut doc = Document::parse("<i>one</i> two <i>three</i>");

    doc.apply(Edit::RemoveText {
        position: 3,
        length: 5,
    })?;

    assert_eq!(doc.source(), "<i>onethree</i>");
    assert_eq!(doc.len(), 8);
    Ok(())
}

#[test]
fn test_replacing_a_whole_run_drops_its_formatting() -> Result<()> {
    let mut doc = Document::parse("the <b>quick</b> fox");

    doc.apply(Edit::UpdateText {
        start: 4,
        end: 9,
        value: "slow".to_string(),
    })?;

    assert_eq!(doc.source(), "the slow fox");
    Ok(())
}

#[test]
fn test_replace_then_reformat() -> Result<()> {
    let mut doc = Document::parse("the <b>quick</b> fox");

    doc.apply(Edit::UpdateText {
        start: 6,
        end: 9,
        value: "een".to_string(),
    })?;
    assert_eq!(doc.source(), "the <b>queen</b> fox");

    doc.apply(format(0, 13, Tag::Underline))?;
    assert_eq!(doc.source(), "<c>the <b>queen</b> fox</c>");

    doc.apply(format(4, 9, Tag::Underline))?;
    assert_eq!(doc.source(), "<c>the </c><b>queen</b><c> fox</c>");
    Ok(())
}

#[test]
fn test_size_tags_replace_each_other() -> Result<()> {
    let mut doc = Document::parse("small and large");

    doc.apply(format(0, 5, Tag::Smaller))?;
    doc.apply(format(10, 15, Tag::Larger))?;
    assert_eq!(doc.source(), "<-3>small</-3> and <+3>large</+3>");

    doc.apply(format(0, 15, Tag::Larger))?;
    assert_eq!(doc.source(), "<+3>small and large</+3>");
    Ok(())
}

#[test]
fn test_force_update_keeps_layout() -> Result<()> {
    let mut doc = Document::parse("ab<i>cd</i>ef");

    let outcome = doc.apply(Edit::ForceUpdateText {
        text: "ABCDEF".to_string(),
    })?;

    assert!(outcome.changed);
    assert_eq!(doc.source(), "AB<i>CD</i>EF");
    Ok(())
}

#[test]
fn test_columns_after_editing() -> Result<()> {
    let mut doc = Document::parse("one two three four");
    doc.apply(format(4, 13, Tag::Bold))?;

    let columns = split_into_columns(&doc.source(), 2)?;
    assert_eq!(columns, vec!["one <b>two</b>", "<b>three</b> four"]);
    Ok(())
}
