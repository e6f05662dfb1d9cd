//! Line-oriented reader for step instructions.
//!
//! This is deliberately not a markdown parser. Each line is trimmed and
//! classified on its own by prefix; the first matching rule wins:
//!
//! | prefix  | block            |
//! |---------|------------------|
//! | `# `    | level-1 heading  |
//! | `## `   | level-2 heading  |
//! | `- [ ]` | checklist item   |
//! | `- `    | bullet           |
//! | `> `    | quote            |
//! | (empty) | spacer           |
//!
//! Everything else is a paragraph, with any inline markup (`**bold**`,
//! `1.` numbering, backticks) left as literal text.

const HEADING_1: &str = "# ";
const HEADING_2: &str = "## ";
const CHECKLIST: &str = "- [ ]";
const BULLET: &str = "- ";
const QUOTE: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    ChecklistItem(String),
    Bullet(String),
    Quote(String),
    Spacer,
    Paragraph(String),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }
}

/// Split instruction text on `\n` and classify every line, one block per line
pub fn parse_instructions(text: &str) -> Vec<Block> {
    text.split('\n').map(parse_line).collect()
}

pub fn parse_line(line: &str) -> Block {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(HEADING_1) {
        Block::heading(1, rest)
    } else if let Some(rest) = trimmed.strip_prefix(HEADING_2) {
        Block::heading(2, rest)
    } else if let Some(rest) = trimmed.strip_prefix(CHECKLIST) {
        Block::ChecklistItem(rest.trim_start().to_string())
    } else if let Some(rest) = trimmed.strip_prefix(BULLET) {
        Block::Bullet(rest.to_string())
    } else if let Some(rest) = trimmed.strip_prefix(QUOTE) {
        Block::Quote(rest.to_string())
    } else if trimmed.is_empty() {
        Block::Spacer
    } else {
        Block::Paragraph(trimmed.to_string())
    }
}

/// Same as [`parse_instructions`] without the leading and trailing spacers
/// that indented or newline-wrapped instruction text tends to carry
pub fn parse_instructions_trimmed(text: &str) -> Vec<Block> {
    let blocks = parse_instructions(text);
    let start = blocks.iter().position(|b| *b != Block::Spacer);
    let end = blocks.iter().rposition(|b| *b != Block::Spacer);
    match (start, end) {
        (Some(start), Some(end)) => blocks[start..=end].to_vec(),
        _ => Vec::new(),
    }
}
