use anyhow::Result;

use super::{Command, CommandContext};

pub struct ExportCommand;

impl Command for ExportCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        writeln!(ctx.out, "{}", ctx.store.export_pretty()?)?;
        Ok(())
    }
}
