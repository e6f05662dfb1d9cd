use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use zoo_journey::cli::commands::apply::ApplyCommand;
use zoo_journey::cli::commands::config::ConfigCommand;
use zoo_journey::cli::commands::export::ExportCommand;
use zoo_journey::cli::commands::map::MapCommand;
use zoo_journey::cli::commands::progress::ProgressCommand;
use zoo_journey::cli::commands::session::SessionCommand;
use zoo_journey::cli::commands::show::ShowCommand;
use zoo_journey::cli::commands::validate::ValidateCommand;
use zoo_journey::cli::commands::{read_document, Command, CommandContext};
use zoo_journey::cli::{Cli, Commands};
use zoo_journey::{init_telemetry, WorkflowStore, ZooJourneyConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file = ZooJourneyConfig::load_env_file();
    let config = ZooJourneyConfig::load(cli.config.as_deref())?;
    init_telemetry(&config.observability)?;

    match env_file {
        Ok(true) => tracing::info!("Loaded environment variables from .env file"),
        Ok(false) => {}
        Err(e) => {
            let reason = format!("{e:#}");
            tracing::warn!(error = %reason, "Ignoring .env file");
        }
    }

    let source = cli.workflow.as_deref().or(config.workflow.source.as_deref());
    let mut store = initial_store(source)?;

    let command: Box<dyn Command> = match cli.command {
        // Default behavior: no subcommand shows the map
        None | Some(Commands::Map) => Box::new(MapCommand),
        Some(Commands::Show { step_id, force }) => Box::new(ShowCommand::new(step_id).with_force(force)),
        Some(Commands::Progress { json }) => Box::new(ProgressCommand { json }),
        Some(Commands::Export) => Box::new(ExportCommand),
        Some(Commands::Validate { input }) => Box::new(ValidateCommand {
            document: read_document(&input)?,
        }),
        Some(Commands::Apply { input }) => Box::new(ApplyCommand {
            document: read_document(&input)?,
        }),
        Some(Commands::Session) => Box::new(SessionCommand),
        Some(Commands::Config { output }) => Box::new(ConfigCommand { output }),
    };

    let mut stdout = std::io::stdout();
    let mut ctx = CommandContext::new(&mut store, &config, &mut stdout);
    command.execute(&mut ctx)
}

/// The store starts from the given document, or the built-in journey
fn initial_store(source: Option<&Path>) -> Result<WorkflowStore> {
    match source {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read workflow document '{}'", path.display()))?;
            let store = WorkflowStore::from_text(&text)
                .with_context(|| format!("Workflow document '{}' is not valid", path.display()))?;
            tracing::info!(path = %path.display(), steps = store.current().steps.len(), "Loaded starting workflow");
            Ok(store)
        }
        None => Ok(WorkflowStore::default()),
    }
}
