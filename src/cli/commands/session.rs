// Interactive editing session
//
// One session owns one store for its whole lifetime. Input is handled a line
// at a time and every action finishes before the next line is read.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::apply::ApplyCommand;
use super::export::ExportCommand;
use super::map::MapCommand;
use super::progress::ProgressCommand;
use super::show::ShowCommand;
use super::{Command, CommandContext};
use crate::telemetry::{create_session_span, generate_correlation_id};

pub const PROMPT: &str = "zoo> ";
/// A line holding only this ends a pasted document
pub const END_OF_DOCUMENT: &str = ".";
/// A line holding only this abandons a pasted document
pub const CANCEL_DOCUMENT: &str = ".cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Map,
    Show { step_id: String, force: bool },
    Progress,
    Export,
    Edit,
    Reset,
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

impl SessionAction {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return SessionAction::Nothing;
        };
        let args: Vec<&str> = words.collect();

        match (verb, args.as_slice()) {
            ("map", []) => SessionAction::Map,
            ("show", [step_id]) => SessionAction::Show {
                step_id: step_id.to_string(),
                force: false,
            },
            ("show", [step_id, "--force"]) | ("show", ["--force", step_id]) => SessionAction::Show {
                step_id: step_id.to_string(),
                force: true,
            },
            ("progress", []) => SessionAction::Progress,
            ("export", []) => SessionAction::Export,
            ("edit", []) => SessionAction::Edit,
            ("reset", []) => SessionAction::Reset,
            ("help", []) | ("?", []) => SessionAction::Help,
            ("quit", []) | ("exit", []) => SessionAction::Quit,
            _ => SessionAction::Unknown(line.trim().to_string()),
        }
    }
}

#[derive(Debug)]
enum SessionMode {
    Browsing,
    Editing { buffer: String },
}

/// Tally of document submissions made during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub accepted: u32,
    pub rejected: u32,
    pub cancelled: u32,
}

pub struct SessionCommand;

impl Command for SessionCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let stdin = std::io::stdin();
        run_session(stdin.lock(), ctx)?;
        Ok(())
    }
}

pub fn run_session<R: BufRead>(input: R, ctx: &mut CommandContext<'_>) -> Result<SessionReport> {
    let correlation_id = generate_correlation_id();
    let span = create_session_span("session", &correlation_id);
    let _guard = span.enter();
    info!("Editing session started");

    let mut report = SessionReport::default();
    let mut mode = SessionMode::Browsing;
    let mut lines = input.lines();

    writeln!(ctx.out, "🗺️  zoo-journey session. Type 'help' for commands.")?;

    loop {
        if matches!(mode, SessionMode::Browsing) {
            write!(ctx.out, "{PROMPT}")?;
            ctx.out.flush()?;
        }

        let Some(line) = lines.next() else {
            if let SessionMode::Editing { .. } = mode {
                writeln!(ctx.out, "⚠️  Input ended before '{END_OF_DOCUMENT}', pasted document discarded.")?;
                report.cancelled += 1;
            }
            break;
        };
        let line = line?;

        mode = match mode {
            SessionMode::Editing { mut buffer } => match line.trim() {
                END_OF_DOCUMENT => {
                    let outcome = ApplyCommand { document: buffer }.execute(ctx);
                    match outcome {
                        Ok(()) => report.accepted += 1,
                        // The apply command has already shown the reason
                        Err(e) => {
                            debug!(error = %e, "Session submission rejected");
                            report.rejected += 1;
                        }
                    }
                    SessionMode::Browsing
                }
                CANCEL_DOCUMENT => {
                    writeln!(ctx.out, "↩️  Edit cancelled, workflow unchanged.")?;
                    report.cancelled += 1;
                    SessionMode::Browsing
                }
                _ => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                    SessionMode::Editing { buffer }
                }
            },
            SessionMode::Browsing => match SessionAction::parse(&line) {
                SessionAction::Quit => break,
                SessionAction::Edit => {
                    writeln!(
                        ctx.out,
                        "✏️  Paste the workflow JSON (with `steps` and `currentState`). \
                         End with a line containing '{END_OF_DOCUMENT}', or '{CANCEL_DOCUMENT}' to abandon."
                    )?;
                    SessionMode::Editing { buffer: String::new() }
                }
                action => {
                    dispatch(action, ctx)?;
                    SessionMode::Browsing
                }
            },
        };
    }

    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        cancelled = report.cancelled,
        "Editing session finished"
    );
    writeln!(ctx.out, "👋 Bye!")?;
    Ok(report)
}

/// Run a browsing action. Command failures are shown and the session goes on;
/// only output errors end it.
fn dispatch(action: SessionAction, ctx: &mut CommandContext<'_>) -> Result<()> {
    let outcome = match action {
        SessionAction::Map => MapCommand.execute(ctx),
        SessionAction::Show { step_id, force } => ShowCommand::new(step_id).with_force(force).execute(ctx),
        SessionAction::Progress => ProgressCommand { json: false }.execute(ctx),
        SessionAction::Export => ExportCommand.execute(ctx),
        SessionAction::Reset => {
            ctx.store.reset();
            writeln!(ctx.out, "🔄 Workflow reset to the built-in journey.")?;
            Ok(())
        }
        SessionAction::Help => {
            print_help(ctx.out)?;
            Ok(())
        }
        SessionAction::Unknown(input) => {
            writeln!(ctx.out, "❓ Unknown command: {input} (try 'help')")?;
            Ok(())
        }
        SessionAction::Nothing | SessionAction::Edit | SessionAction::Quit => Ok(()),
    };

    if let Err(e) = outcome {
        writeln!(ctx.out, "❌ {e}")?;
    }
    Ok(())
}

fn print_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  map                  # Show the journey map")?;
    writeln!(out, "  show <step-id>       # Open a step (add --force for locked steps)")?;
    writeln!(out, "  progress             # Completion breakdown")?;
    writeln!(out, "  export               # Print the current workflow JSON")?;
    writeln!(out, "  edit                 # Paste a replacement workflow JSON")?;
    writeln!(out, "  reset                # Go back to the built-in journey")?;
    writeln!(out, "  quit                 # Leave the session")
}
