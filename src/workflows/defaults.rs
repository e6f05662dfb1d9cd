// Built-in journey the store starts from

use super::types::{AnimalType, FullWorkflow, StepStatus, WorkflowState, WorkflowStateEntry, WorkflowStep};

const PREREQUISITES: &str = "
# Pre-requisites Phase
Before we start, we need to ensure the basics are in place.

## Checklist
- [ ] **Identify Stakeholders**: Define Project Owner, Tech Lead, and Billing Contact.
- [ ] **Classify Data**: Determine if workload is Public, Internal, or Confidential.
- [ ] **Initial Budget**: Estimate monthly spend and get finance approval.
- [ ] **Training**: Ensure team has completed Cloud Fundamentals training.

**Goal**: A clear definition of *what* needs to go to the cloud and *who* is responsible.
";

const DEMAND_VALIDATION: &str = "
# Demand Validation
The Owl reviews the wisdom of the proposed solution.

## Validation Tasks
1. **Architectural Review**: Submit design to the Cloud Center of Excellence (CCoE).
2. **Security Assessment**: Review compliance needs (GDPR, HIPAA, etc.).
3. **Platform Fit**: Confirm the workload fits within the standard Landing Zone patterns.
4. **Cost Benefit Analysis**: Finalize the business case.

> \"Measure twice, cut once.\"
";

const ONBOARDING: &str = "
# Onboarding & Provisioning
Time to build! The Tiger represents the power of automation.

## Implementation Steps
- [ ] **Account Creation**: Automated vending of the cloud account/subscription.
- [ ] **Network Setup**: VPC creation, subnet allocation, and TGW attachment.
- [ ] **Identity Federation**: Configure SSO groups and IAM roles.
- [ ] **CI/CD Pipeline**: Connect repositories to deployment pipelines.
- [ ] **Security Controls**: Apply standard Service Control Policies (SCPs).

**Outcome**: A \"landing zone\" ready for application deployment.
";

const OPERATIONS: &str = "
# Operational Excellence
Slide into a smooth operational state.

## BAU Activities
- **Observability**: Dashboards are green, logs are flowing to the central lake.
- **Alerting**: PagerDuty/OpsGenie rotations are active.
- **Cost Management**: Tagging compliance > 95%, monthly budget reviews.
- **Security Patching**: Automated patching schedules are active.
- **Disaster Recovery**: DR drills scheduled annually.

**Status**: The workload is live, healthy, and serving customers!
";

fn step(id: &str, title: &str, description: &str, animal: AnimalType, instructions: &str) -> WorkflowStep {
    WorkflowStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        animal,
        instructions: instructions.to_string(),
    }
}

/// The four-stage cloud onboarding journey shown when nothing else is loaded
pub fn default_workflow() -> FullWorkflow {
    let steps = vec![
        step(
            "step-1",
            "Pre-requisites",
            "Gathering requirements and identifying stakeholders.",
            AnimalType::Elephant,
            PREREQUISITES,
        ),
        step(
            "step-2",
            "Demand Validation",
            "Architectural review and business justification.",
            AnimalType::Owl,
            DEMAND_VALIDATION,
        ),
        step(
            "step-3",
            "Onboarding",
            "Provisioning accounts and configuring environments.",
            AnimalType::Tiger,
            ONBOARDING,
        ),
        step(
            "step-4",
            "Run & Operations",
            "Steady state, monitoring, and optimization.",
            AnimalType::Penguin,
            OPERATIONS,
        ),
    ];

    let mut current_state = WorkflowState::new();
    current_state.insert(
        "step-1".to_string(),
        WorkflowStateEntry::new(StepStatus::Completed).with_completed_at("2023-11-01"),
    );
    current_state.insert(
        "step-2".to_string(),
        WorkflowStateEntry::new(StepStatus::Completed).with_completed_at("2023-11-15"),
    );
    current_state.insert(
        "step-3".to_string(),
        WorkflowStateEntry::new(StepStatus::InProgress)
            .with_notes("Waiting on firewall rule approval"),
    );
    current_state.insert("step-4".to_string(), WorkflowStateEntry::new(StepStatus::Locked));

    FullWorkflow::new(steps, current_state)
}
