// Progress accounting over a workflow

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::status::resolve_status;
use super::types::{FullWorkflow, StepStatus};

/// Which completed state entries count toward progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Only entries whose id names a defined step
    #[default]
    KnownStepsOnly,
    /// Every completed entry in the state map, defined step or not.
    /// Can exceed the step count, so the percentage is clamped to 100.
    AllEntries,
}

/// Percentage of defined steps that are completed, under the default policy
pub fn progress_percentage(workflow: &FullWorkflow) -> u8 {
    progress_with_policy(workflow, ProgressPolicy::default())
}

/// `round(100 * completed / steps)` with halves rounded up; 0 when there are no steps
pub fn progress_with_policy(workflow: &FullWorkflow, policy: ProgressPolicy) -> u8 {
    let total = workflow.steps.len();
    if total == 0 {
        return 0;
    }

    let completed = completed_entries(workflow, policy);
    let percentage = round_half_up(100 * completed, total);
    if percentage > 100 {
        warn!(
            completed,
            total,
            percentage,
            "Completed entries outnumber defined steps, clamping progress"
        );
        return 100;
    }
    percentage as u8
}

fn completed_entries(workflow: &FullWorkflow, policy: ProgressPolicy) -> usize {
    workflow
        .current_state
        .iter()
        .filter(|(_, entry)| entry.status == StepStatus::Completed)
        .filter(|(id, _)| match policy {
            ProgressPolicy::KnownStepsOnly => workflow.is_known_step(id),
            ProgressPolicy::AllEntries => true,
        })
        .count()
}

fn round_half_up(numerator: usize, denominator: usize) -> usize {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Per-status breakdown of the defined steps plus the headline percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub locked: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub blocked: usize,
    pub percentage: u8,
    pub policy: ProgressPolicy,
}

impl ProgressSummary {
    pub fn compute(workflow: &FullWorkflow, policy: ProgressPolicy) -> Self {
        let mut summary = Self {
            total: workflow.steps.len(),
            locked: 0,
            pending: 0,
            in_progress: 0,
            completed: 0,
            blocked: 0,
            percentage: progress_with_policy(workflow, policy),
            policy,
        };

        for step in &workflow.steps {
            match resolve_status(workflow, &step.id) {
                StepStatus::Locked => summary.locked += 1,
                StepStatus::Pending => summary.pending += 1,
                StepStatus::InProgress => summary.in_progress += 1,
                StepStatus::Completed => summary.completed += 1,
                StepStatus::Blocked => summary.blocked += 1,
            }
        }

        summary
    }

    pub fn count(&self, status: StepStatus) -> usize {
        match status {
            StepStatus::Locked => self.locked,
            StepStatus::Pending => self.pending,
            StepStatus::InProgress => self.in_progress,
            StepStatus::Completed => self.completed,
            StepStatus::Blocked => self.blocked,
        }
    }

    /// Journey finished: every step counted as done
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.percentage == 100
    }
}
