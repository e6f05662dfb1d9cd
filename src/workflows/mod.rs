// Workflow document model and the rules that read it
// Status and progress are always derived from the current document, never stored

pub mod defaults;
pub mod errors;
pub mod progress;
pub mod status;
pub mod store;
pub mod types;

pub use defaults::default_workflow;
pub use errors::{ParseError, INVALID_DOCUMENT_MESSAGE};
pub use progress::{progress_percentage, progress_with_policy, ProgressPolicy, ProgressSummary};
pub use status::resolve_status;
pub use store::{parse_workflow, validate_workflow, WorkflowStore};
pub use types::{AnimalType, FullWorkflow, StepStatus, WorkflowState, WorkflowStateEntry, WorkflowStep};
