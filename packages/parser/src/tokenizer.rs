use crate::ast::Tag;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Token types for the inline markup
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[regex(r"<(b|i|c|\+3|-3)>", |lex| tag_name(lex.slice(), 1))]
    OpenTag(Tag),

    #[regex(r"</(b|i|c|\+3|-3)>", |lex| tag_name(lex.slice(), 2))]
    CloseTag(Tag),

    // Anything that cannot start markup
    #[regex(r"[^<]+")]
    Text,

    // A `<` that does not begin a recognized tag
    #[token("<")]
    LAngle,
}

fn tag_name(slice: &str, prefix: usize) -> Option<Tag> {
    Tag::from_markup(&slice[prefix..slice.len() - 1])
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenTag(tag) => write!(f, "<{}>", tag),
            Token::CloseTag(tag) => write!(f, "</{}>", tag),
            Token::Text => write!(f, "text"),
            Token::LAngle => write!(f, "<"),
        }
    }
}

/// Tokenize a markup string
///
/// Every byte of the source ends up in exactly one token, so the spans tile
/// the input. Input the lexer rejects is kept as text.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let lexer = Token::lexer(source);
    lexer
        .spanned()
        .map(|(result, span)| (result.unwrap_or(Token::Text), span))
        .collect()
}
