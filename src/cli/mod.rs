use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "zoo-journey")]
#[command(about = "Walk the onboarding journey: a map of workflow steps, their status and instructions")]
#[command(long_about = "zoo-journey renders an onboarding workflow as a path of steps. Each step has a status, \
                       an animal guide and instructions. Start with 'zoo-journey map', open a step with \
                       'zoo-journey show <STEP_ID>', or edit the workflow JSON in 'zoo-journey session'.")]
pub struct Cli {
    /// JSON workflow document to start from instead of the built-in journey
    #[arg(long, global = true, value_name = "FILE")]
    pub workflow: Option<PathBuf>,

    /// Configuration file (TOML), applied after zoo-journey.toml and .zoo-journey-rc
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the journey map with progress (default command)
    Map,
    /// Open the detail view of one step
    Show {
        /// Step id, e.g. step-2
        step_id: String,
        /// Open the step even when it is locked
        #[arg(long, help = "Open the step even when it is locked")]
        force: bool,
    },
    /// Show the completion percentage and a per-status breakdown
    Progress {
        /// Print the summary as JSON
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },
    /// Print the current workflow document as indented JSON
    Export,
    /// Check a workflow document without applying it
    Validate {
        /// Document path, or '-' for stdin
        #[arg(value_name = "FILE")]
        input: String,
    },
    /// Submit a workflow document and render the resulting map
    Apply {
        /// Document path, or '-' for stdin
        #[arg(value_name = "FILE")]
        input: String,
    },
    /// Interactive session: browse steps and paste replacement JSON
    Session,
    /// Show the effective configuration as TOML
    Config {
        /// Write it to this file instead of printing it
        #[arg(long, value_name = "FILE", help = "Write the configuration to FILE instead of printing it")]
        output: Option<PathBuf>,
    },
}
