use anyhow::Result;

use super::map::MapCommand;
use super::{Command, CommandContext};
use crate::workflows::INVALID_DOCUMENT_MESSAGE;

/// Submit a document to the store; the previous workflow survives a rejection
pub struct ApplyCommand {
    pub document: String,
}

impl Command for ApplyCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        match ctx.store.load(&self.document) {
            Ok(_) => {
                writeln!(ctx.out, "✅ Workflow updated (revision {})", ctx.store.revision())?;
                writeln!(ctx.out)?;
                MapCommand.execute(ctx)
            }
            Err(e) => {
                writeln!(ctx.out, "❌ {INVALID_DOCUMENT_MESSAGE}")?;
                writeln!(ctx.out, "   {e}")?;
                writeln!(ctx.out, "   Previous workflow kept unchanged.")?;
                Err(e.into())
            }
        }
    }
}
