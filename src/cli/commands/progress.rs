use anyhow::Result;

use super::{Command, CommandContext};
use crate::view::render_progress_header;
use crate::workflows::{ProgressSummary, StepStatus};

pub struct ProgressCommand {
    pub json: bool,
}

impl Command for ProgressCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let summary = ProgressSummary::compute(ctx.store.current(), ctx.config.workflow.progress_policy);

        if self.json {
            writeln!(ctx.out, "{}", serde_json::to_string_pretty(&summary)?)?;
            return Ok(());
        }

        write!(ctx.out, "{}", render_progress_header(&summary)?)?;
        writeln!(ctx.out)?;
        writeln!(ctx.out, "📊 STEPS BY STATUS ({} total):", summary.total)?;
        for status in StepStatus::ALL {
            writeln!(ctx.out, "   {} {:<12} {}", status.badge(), status.label(), summary.count(status))?;
        }
        Ok(())
    }
}
