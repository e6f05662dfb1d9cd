// Workflow store: one owner, wholesale replacement only
//
// A submission is either accepted in full or rejected with the previous
// workflow left untouched. There are no field-level writes.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::defaults::default_workflow;
use super::errors::ParseError;
use super::types::FullWorkflow;

/// Decode and validate a workflow document.
///
/// Rejects text that is not JSON, JSON of the wrong shape (unknown or missing
/// fields, unknown status values, arrays where objects belong) and documents
/// that repeat a step id or a state entry.
pub fn parse_workflow(raw_text: &str) -> Result<FullWorkflow, ParseError> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    // Scan first so a malformed text is never reported as a shape problem
    let value: Value = serde_json::from_str(raw_text).map_err(ParseError::syntax)?;
    check_objects(&value)?;

    // Decoded from the text, not the value: the value has already folded
    // repeated keys together
    let workflow: FullWorkflow = serde_json::from_str(raw_text).map_err(ParseError::schema)?;
    validate_workflow(&workflow)?;
    Ok(workflow)
}

/// serde accepts a JSON array in place of a struct, matching fields by
/// position. Documents must spell records out as objects.
fn check_objects(value: &Value) -> Result<(), ParseError> {
    let root = require_object(value, "document")?;

    if let Some(Value::Array(steps)) = root.get("steps") {
        for (index, step) in steps.iter().enumerate() {
            require_object(step, &format!("steps[{index}]"))?;
        }
    }

    if let Some(state) = root.get("currentState") {
        let state = require_object(state, "currentState")?;
        for (id, entry) in state {
            require_object(entry, &format!("currentState.{id}"))?;
        }
    }

    Ok(())
}

fn require_object<'v>(
    value: &'v Value,
    path: &str,
) -> Result<&'v serde_json::Map<String, Value>, ParseError> {
    let found = match value {
        Value::Object(map) => return Ok(map),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
    };
    Err(ParseError::NotAnObject {
        path: path.to_string(),
        found,
    })
}

/// Checks that decoding alone cannot express
pub fn validate_workflow(workflow: &FullWorkflow) -> Result<(), ParseError> {
    if let Some(id) = workflow.duplicate_step_id() {
        return Err(ParseError::DuplicateStepId { id: id.to_string() });
    }

    let orphaned = workflow.orphaned_entries().count();
    if orphaned > 0 {
        // Allowed: lookups ignore them
        debug!(orphaned, "Workflow state names steps that are not defined");
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct WorkflowStore {
    current: FullWorkflow,
    revision: u64,
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new(default_workflow())
    }
}

impl WorkflowStore {
    pub fn new(initial: FullWorkflow) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    /// Build a store whose starting workflow comes from a document
    pub fn from_text(raw_text: &str) -> Result<Self, ParseError> {
        parse_workflow(raw_text).map(Self::new)
    }

    pub fn current(&self) -> &FullWorkflow {
        &self.current
    }

    /// Number of replacements accepted since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Parse `raw_text` and make it the current workflow.
    ///
    /// On error the current workflow is unchanged.
    pub fn load(&mut self, raw_text: &str) -> Result<FullWorkflow, ParseError> {
        match parse_workflow(raw_text) {
            Ok(workflow) => {
                self.install(workflow.clone());
                Ok(workflow)
            }
            Err(e) => {
                warn!(
                    error.kind = e.kind(),
                    error = %e,
                    revision = self.revision,
                    "Rejected workflow document, keeping current workflow"
                );
                Err(e)
            }
        }
    }

    /// Go back to the built-in journey
    pub fn reset(&mut self) {
        self.install(default_workflow());
    }

    /// Current workflow as indented JSON, the starting text for an edit
    pub fn export_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.current)
    }

    fn install(&mut self, workflow: FullWorkflow) {
        self.current = workflow;
        self.revision += 1;
        info!(
            revision = self.revision,
            steps = self.current.steps.len(),
            state_entries = self.current.current_state.len(),
            "Workflow replaced"
        );
    }
}
