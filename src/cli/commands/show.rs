use anyhow::Result;

use super::{Command, CommandContext};
use crate::view::render_detail;
use crate::workflows::resolve_status;

pub struct ShowCommand {
    pub step_id: String,
    pub force: bool,
}

impl ShowCommand {
    pub fn new(step_id: impl Into<String>) -> Self {
        Self {
            step_id: step_id.into(),
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl Command for ShowCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let workflow = ctx.store.current();
        let Some(step) = workflow.step(&self.step_id) else {
            let known: Vec<&str> = workflow.steps.iter().map(|s| s.id.as_str()).collect();
            anyhow::bail!(
                "No step with id '{}'. Known steps: {}",
                self.step_id,
                if known.is_empty() { "(none)".to_string() } else { known.join(", ") }
            );
        };

        let status = resolve_status(workflow, &step.id);
        if status.is_locked() && !self.force {
            writeln!(ctx.out, "🔒 {} is locked and cannot be opened yet.", step.title)?;
            writeln!(ctx.out, "   → Use --force to peek at its instructions anyway")?;
            return Ok(());
        }

        let detail = render_detail(step, status, workflow.entry(&step.id))?;
        write!(ctx.out, "{detail}")?;
        Ok(())
    }
}
