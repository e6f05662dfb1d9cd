use anyhow::{Context, Result};
use std::io::{Read, Write};

use crate::config::ZooJourneyConfig;
use crate::workflows::WorkflowStore;

pub mod apply;
pub mod config;
pub mod export;
pub mod map;
pub mod progress;
pub mod session;
pub mod show;
pub mod validate;

/// Everything a command may touch. The store is borrowed, never global.
pub struct CommandContext<'a> {
    pub store: &'a mut WorkflowStore,
    pub config: &'a ZooJourneyConfig,
    pub out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub fn new(store: &'a mut WorkflowStore, config: &'a ZooJourneyConfig, out: &'a mut dyn Write) -> Self {
        Self { store, config, out }
    }
}

pub trait Command {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()>;
}

/// Read a document from a path, or from stdin when the path is `-`
pub fn read_document(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read workflow document from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read workflow document '{input}'"))
    }
}
