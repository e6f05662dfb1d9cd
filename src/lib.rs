// zoo-journey library - onboarding journey workflow model and terminal views
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod instructions;
pub mod telemetry;
pub mod view;
pub mod workflows;

// Re-export key types for easy access
pub use crate::config::ZooJourneyConfig;
pub use instructions::{parse_instructions, Block};
pub use telemetry::{create_session_span, generate_correlation_id, init_telemetry};
pub use workflows::{
    default_workflow, parse_workflow, progress_percentage, progress_with_policy, resolve_status, AnimalType,
    FullWorkflow, ParseError, ProgressPolicy, ProgressSummary, StepStatus, WorkflowStateEntry, WorkflowStep,
    WorkflowStore,
};
