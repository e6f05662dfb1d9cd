use anyhow::Result;

use super::{Command, CommandContext};
use crate::view::render_map;
use crate::workflows::ProgressSummary;

pub struct MapCommand;

impl Command for MapCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let workflow = ctx.store.current();
        let summary = ProgressSummary::compute(workflow, ctx.config.workflow.progress_policy);
        let map = render_map(workflow, &summary, ctx.config.display.map_options())?;
        write!(ctx.out, "{map}")?;
        Ok(())
    }
}
