// Shared fixtures for workflow integration tests

#![allow(dead_code)]

use zoo_journey::{AnimalType, FullWorkflow, StepStatus, WorkflowStateEntry, WorkflowStep};

pub const FOUR_STEP_DOCUMENT: &str = r##"{
  "steps": [
    {"id": "A", "title": "Alpha", "description": "first", "animal": "lion", "instructions": "# Alpha\n- [ ] Do X\n> Note"},
    {"id": "B", "title": "Bravo", "description": "second", "animal": "hippo", "instructions": "plain"},
    {"id": "C", "title": "Charlie", "description": "third", "animal": "giraffe", "instructions": ""},
    {"id": "D", "title": "Delta", "description": "fourth", "animal": "monkey", "instructions": ""}
  ],
  "currentState": {
    "A": {"status": "completed", "completedAt": "2024-01-02"},
    "B": {"status": "completed"},
    "C": {"status": "in_progress", "notes": "halfway"},
    "D": {"status": "locked"}
  }
}"##;

pub const ORPHANED_COMPLETION_DOCUMENT: &str = r#"{
  "steps": [
    {"id": "A", "title": "Alpha", "description": "", "animal": "lion", "instructions": ""},
    {"id": "B", "title": "Bravo", "description": "", "animal": "kiwi", "instructions": ""}
  ],
  "currentState": {
    "A": {"status": "completed"},
    "ghost": {"status": "completed"}
  }
}"#;

pub fn step(id: &str) -> WorkflowStep {
    WorkflowStep {
        id: id.to_string(),
        title: format!("Step {id}"),
        description: String::new(),
        animal: AnimalType::Elephant,
        instructions: String::new(),
    }
}

pub fn workflow(ids: &[&str], states: &[(&str, StepStatus)]) -> FullWorkflow {
    FullWorkflow::new(
        ids.iter().map(|id| step(id)).collect(),
        states
            .iter()
            .map(|(id, status)| (id.to_string(), WorkflowStateEntry::new(*status)))
            .collect(),
    )
}
