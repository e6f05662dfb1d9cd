use std::fmt::{self, Write};

use crate::workflows::{resolve_status, FullWorkflow, ProgressSummary};

use super::{JOURNEY_SUBTITLE, JOURNEY_TITLE};

const PROGRESS_BAR_CELLS: usize = 20;
const RIGHT_LANE_INDENT: &str = "                    ";
const PATH_SEGMENT: &str = "              ┃";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    pub show_descriptions: bool,
    pub show_notes: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            show_notes: true,
        }
    }
}

/// Nodes zigzag down the path; odd positions sit in the left lane
pub fn is_left_lane(index: usize) -> bool {
    index % 2 == 1
}

pub fn render_progress_header(summary: &ProgressSummary) -> Result<String, fmt::Error> {
    let filled = summary.percentage as usize * PROGRESS_BAR_CELLS / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "·".repeat(PROGRESS_BAR_CELLS - filled)
    );
    let trophy = if summary.is_complete() { " 🏆" } else { "" };

    let mut out = String::new();
    writeln!(out, "🗺️  {JOURNEY_TITLE} · {JOURNEY_SUBTITLE}")?;
    writeln!(out, "   Progress: [{bar}] {}% Complete{trophy}", summary.percentage)?;
    Ok(out)
}

pub fn render_map(
    workflow: &FullWorkflow,
    summary: &ProgressSummary,
    options: MapOptions,
) -> Result<String, fmt::Error> {
    let mut out = render_progress_header(summary)?;
    out.push('\n');
    writeln!(out, "           🚪 ENTRANCE")?;

    if workflow.steps.is_empty() {
        writeln!(out, "{PATH_SEGMENT}")?;
        writeln!(out, "   (no steps defined)")?;
        return Ok(out);
    }

    for (index, step) in workflow.steps.iter().enumerate() {
        let status = resolve_status(workflow, &step.id);
        let lane = if is_left_lane(index) { "" } else { RIGHT_LANE_INDENT };
        let lock_marker = if status.is_locked() { "  (locked)" } else { "" };

        writeln!(out, "{PATH_SEGMENT}")?;
        writeln!(
            out,
            "{lane}( {} {} )  {}{lock_marker}",
            step.animal.glyph(),
            status.badge(),
            step.title
        )?;
        writeln!(out, "{lane}       [{}] {}", step.id, status.label())?;

        if options.show_descriptions && !step.description.is_empty() {
            writeln!(out, "{lane}       {}", step.description)?;
        }
        if options.show_notes {
            if let Some(notes) = workflow.entry(&step.id).and_then(|e| e.notes.as_deref()) {
                writeln!(out, "{lane}       📝 {notes}")?;
            }
        }
    }

    Ok(out)
}
