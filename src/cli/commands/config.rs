use anyhow::Result;
use std::path::PathBuf;

use super::{Command, CommandContext};

/// Print the effective configuration, or write it out as a starting config file
pub struct ConfigCommand {
    pub output: Option<PathBuf>,
}

impl Command for ConfigCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        match &self.output {
            Some(path) => {
                ctx.config.save_to_file(path)?;
                tracing::info!(path = %path.display(), "Wrote configuration file");
                writeln!(ctx.out, "💾 Configuration written to {}", path.display())?;
            }
            None => write!(ctx.out, "{}", ctx.config.to_toml()?)?,
        }
        Ok(())
    }
}
