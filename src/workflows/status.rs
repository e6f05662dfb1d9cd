use super::types::{FullWorkflow, StepStatus};

/// Effective status of a step: the stored one, or `Locked` when the state has no entry.
///
/// Total: unknown ids are not an error.
pub fn resolve_status(workflow: &FullWorkflow, step_id: &str) -> StepStatus {
    workflow
        .current_state
        .get(step_id)
        .map(|entry| entry.status)
        .unwrap_or(StepStatus::Locked)
}
