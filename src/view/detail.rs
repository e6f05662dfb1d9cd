use std::fmt::{self, Write};

use crate::instructions::{parse_instructions_trimmed, Block};
use crate::workflows::{StepStatus, WorkflowStateEntry, WorkflowStep};

const RULE_WIDTH: usize = 40;

/// Closing reminder under every step's instructions
pub const KEEPER_NOTE_TITLE: &str = "🧭 Zoo Keeper's Note";
pub const KEEPER_NOTE: &str =
    "Ensure all checklist items are marked off in your actual cloud console before proceeding to the next enclosure!";

pub fn render_blocks(blocks: &[Block]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level: 1, text } => {
                writeln!(out, "{text}")?;
                writeln!(out, "{}", "═".repeat(text.chars().count()))?;
            }
            Block::Heading { text, .. } => {
                writeln!(out, "{text}")?;
                writeln!(out, "{}", "─".repeat(text.chars().count()))?;
            }
            Block::ChecklistItem(label) => writeln!(out, "  ☐ {label}")?,
            Block::Bullet(text) => writeln!(out, "  • {text}")?,
            Block::Quote(text) => writeln!(out, "  ┃ {text}")?,
            Block::Spacer => writeln!(out)?,
            Block::Paragraph(text) => writeln!(out, "{text}")?,
        }
    }
    Ok(out)
}

/// Full view of one step: identity, status, instructions, the keeper's note,
/// then runtime notes
pub fn render_detail(
    step: &WorkflowStep,
    status: StepStatus,
    entry: Option<&WorkflowStateEntry>,
) -> Result<String, fmt::Error> {
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::new();
    writeln!(out, "{} {}", step.animal.glyph(), step.title)?;
    writeln!(out, "   Status: {} {}", status.badge(), status.label())?;
    if !step.description.is_empty() {
        writeln!(out, "   {}", step.description)?;
    }
    writeln!(out, "{rule}")?;

    out.push_str(&render_blocks(&parse_instructions_trimmed(&step.instructions))?);

    writeln!(out)?;
    writeln!(out, "{KEEPER_NOTE_TITLE}")?;
    writeln!(out, "   {KEEPER_NOTE}")?;

    if let Some(entry) = entry {
        if entry.notes.is_some() || entry.completed_at.is_some() {
            writeln!(out, "{rule}")?;
        }
        if let Some(notes) = &entry.notes {
            writeln!(out, "📝 Notes: {notes}")?;
        }
        if let Some(completed_at) = &entry.completed_at {
            writeln!(out, "📅 Completed: {completed_at}")?;
        }
    }

    Ok(out)
}
