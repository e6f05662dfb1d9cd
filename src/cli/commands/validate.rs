use anyhow::Result;

use super::{Command, CommandContext};
use crate::workflows::{parse_workflow, INVALID_DOCUMENT_MESSAGE};

/// Check a document without touching the store
pub struct ValidateCommand {
    pub document: String,
}

impl Command for ValidateCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        match parse_workflow(&self.document) {
            Ok(workflow) => {
                writeln!(ctx.out, "✅ Workflow document is valid")?;
                writeln!(ctx.out, "   🎯 Steps: {}", workflow.steps.len())?;
                writeln!(ctx.out, "   📋 State entries: {}", workflow.current_state.len())?;

                let orphaned: Vec<&str> = workflow.orphaned_entries().map(|(id, _)| id.as_str()).collect();
                if !orphaned.is_empty() {
                    writeln!(ctx.out, "   ⚠️  State for undefined steps (ignored): {}", orphaned.join(", "))?;
                }
                let unknown_animals: Vec<&str> = workflow
                    .steps
                    .iter()
                    .filter(|s| !s.animal.is_known())
                    .map(|s| s.id.as_str())
                    .collect();
                if !unknown_animals.is_empty() {
                    writeln!(ctx.out, "   🐾 Unknown animal tags on: {}", unknown_animals.join(", "))?;
                }
                Ok(())
            }
            Err(e) => {
                writeln!(ctx.out, "❌ {INVALID_DOCUMENT_MESSAGE}")?;
                writeln!(ctx.out, "   {e}")?;
                Err(e.into())
            }
        }
    }
}
