//! Block segmentation and classification.

/// The structural kind of a block, decided line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The fallback for anything that matches no stricter shape.
    Paragraph,
    /// A heading and its level, 1 through 6.
    Heading(u8),
    /// A fenced code block.
    CodeFence,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Line `i` starts with `i. `, counting from 1.
    OrderedList,
}

/// Split a document into blocks on blank lines.
///
/// Each block is trimmed of surrounding whitespace and blocks left empty by
/// the trim are dropped, so runs of blank lines never produce output.
#[must_use]
pub fn segment_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify one trimmed block.
///
/// Candidates are tried strictest first; a block that almost matches a shape
/// falls all the way back to [`BlockKind::Paragraph`] rather than to the
/// next candidate. A block whose first line starts with `#` can only be a
/// heading or a paragraph.
#[must_use]
pub fn classify_block(block: &str) -> BlockKind {
    let Some(first_line) = block.lines().next() else {
        return BlockKind::Paragraph;
    };

    if first_line.starts_with('#') {
        return match heading_level(first_line) {
            Some(level) => BlockKind::Heading(level),
            None => BlockKind::Paragraph,
        };
    }

    if block.starts_with("```") {
        return if is_code_fence(block) {
            BlockKind::CodeFence
        } else {
            BlockKind::Paragraph
        };
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if block.lines().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    if block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Heading level of a line known to start with `#`: the run of hashes must
/// be 1 to 6 long and followed by a space.
fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&byte| byte == b'#').count();
    if !(1..=6).contains(&hashes) || line.as_bytes().get(hashes) != Some(&b' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// A valid fence opens and closes the block with `` ``` ``, contains exactly
/// two fence markers, and in a multi-line block at least one marker sits
/// alone on its line.
fn is_code_fence(block: &str) -> bool {
    block.ends_with("```")
        && block.matches("```").count() == 2
        && (!block.contains('\n') || block.starts_with("```\n") || block.ends_with("\n```"))
}
