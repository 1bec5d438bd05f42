use crate::ast::{ElementKind, Node};
use crate::simplify::simplify;
use crate::text::char_len;
use crate::tokenizer::{tokenize, Token};
use std::ops::Range;
use tracing::debug;

/// Parser for tagged rich-text markup
///
/// Parsing never fails. A recognized opening tag is closed by the first
/// matching closing tag that follows it; the tokens in between are parsed
/// recursively. An opening tag without a closer turns the rest of the
/// enclosing input into literal text.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token, Range<usize>)>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
        }
    }

    /// Parse the whole source into a root node, without simplification
    pub fn parse_root(&self) -> Node {
        let children = self.parse_tokens(&self.tokens, 0);
        let end = children.last().map_or(0, Node::end);
        Node::element(ElementKind::Root, 0, end, children)
    }

    fn parse_tokens(&self, tokens: &[(Token, Range<usize>)], start: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut pending = PendingText::new(start);
        let mut index = 0;

        while index < tokens.len() {
            let (token, span) = &tokens[index];
            match token {
                Token::OpenTag(tag) => {
                    let closer = tokens[index + 1..]
                        .iter()
                        .position(|(t, _)| *t == Token::CloseTag(*tag));

                    let Some(offset) = closer else {
                        debug!(tag = %tag, at = span.start, "unclosed tag kept as text");
                        let rest_end = tokens.last().map_or(span.end, |(_, s)| s.end);
                        pending.push(&self.source[span.start..rest_end]);
                        break;
                    };

                    let close = index + 1 + offset;
                    let position = pending.flush_into(&mut nodes);
                    let children = self.parse_tokens(&tokens[index + 1..close], position);
                    let end = children.last().map_or(position, Node::end);
                    nodes.push(Node::element(ElementKind::Tag(*tag), position, end, children));
                    pending = PendingText::new(end);
                    index = close + 1;
                }
                _ => {
                    pending.push(&self.source[span.clone()]);
                    index += 1;
                }
            }
        }

        pending.flush_into(&mut nodes);
        nodes
    }
}

/// Characters accumulated since the last tag boundary
struct PendingText {
    start: usize,
    value: String,
}

impl PendingText {
    fn new(start: usize) -> Self {
        Self {
            start,
            value: String::new(),
        }
    }

    fn push(&mut self, s: &str) {
        self.value.push_str(s);
    }

    /// Emit the buffered text as a leaf and return the next free position
    fn flush_into(&mut self, nodes: &mut Vec<Node>) -> usize {
        if self.value.is_empty() {
            return self.start;
        }
        let value = std::mem::take(&mut self.value);
        let start = self.start;
        self.start += char_len(&value);
        nodes.push(Node::text(start, value));
        self.start
    }
}

/// Parse markup into a simplified tree
pub fn parse(source: &str) -> Node {
    simplify(Parser::new(source).parse_root())
}
