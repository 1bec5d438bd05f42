use richtext_parser::Node;

/// Clamp a caller-supplied offset into `node.start()..=node.end()`
pub(crate) fn clamp_offset(node: &Node, offset: isize) -> usize {
    match usize::try_from(offset) {
        Ok(offset) => offset.clamp(node.start(), node.end()),
        Err(_) => node.start(),
    }
}

pub(crate) fn to_isize(offset: usize) -> isize {
    isize::try_from(offset).unwrap_or(isize::MAX)
}

/// Clamp a `position`/`length` pair to the node's range
///
/// A position before the node shrinks the length by the overshoot. Returns
/// `None` when nothing is left to cover.
pub(crate) fn clamp_span(node: &Node, position: isize, length: isize) -> Option<(usize, usize)> {
    // i128 holds any isize sum or difference
    let start = node.start() as i128;
    let end = node.end() as i128;

    let (mut position, mut length) = (position as i128, length as i128);
    if position < start {
        length -= start - position;
        position = start;
    }
    if position + length > end {
        length = end - position;
    }

    match (usize::try_from(position), usize::try_from(length)) {
        (Ok(position), Ok(length)) if length > 0 => Some((position, length)),
        _ => None,
    }
}
