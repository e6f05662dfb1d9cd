// Core types for the onboarding journey workflow document

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle label for a single step. Supplied by the document, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Locked,
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl StepStatus {
    pub const ALL: [StepStatus; 5] = [
        StepStatus::Locked,
        StepStatus::Pending,
        StepStatus::InProgress,
        StepStatus::Completed,
        StepStatus::Blocked,
    ];

    /// Wire form, e.g. `in_progress`
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Locked => "locked",
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
            StepStatus::Blocked => "blocked",
        }
    }

    /// Human label with underscores spaced out, e.g. `in progress`
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Badge shown next to a node on the map
    pub fn badge(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✅",
            StepStatus::InProgress => "🚧",
            StepStatus::Blocked => "⚠️",
            StepStatus::Pending => "⏳",
            StepStatus::Locked => "🔒",
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, StepStatus::Locked)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decorative tag for a step. Tags outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimalType {
    Elephant,
    Lion,
    Monkey,
    Giraffe,
    Hippo,
    Penguin,
    Owl,
    Panda,
    Zebra,
    Tiger,
    Other(String),
}

impl AnimalType {
    pub const FALLBACK_GLYPH: &'static str = "🐾";

    pub fn as_str(&self) -> &str {
        match self {
            AnimalType::Elephant => "elephant",
            AnimalType::Lion => "lion",
            AnimalType::Monkey => "monkey",
            AnimalType::Giraffe => "giraffe",
            AnimalType::Hippo => "hippo",
            AnimalType::Penguin => "penguin",
            AnimalType::Owl => "owl",
            AnimalType::Panda => "panda",
            AnimalType::Zebra => "zebra",
            AnimalType::Tiger => "tiger",
            AnimalType::Other(tag) => tag,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AnimalType::Elephant => "🐘",
            AnimalType::Lion => "🦁",
            AnimalType::Monkey => "🐒",
            AnimalType::Giraffe => "🦒",
            AnimalType::Hippo => "🦛",
            AnimalType::Penguin => "🐧",
            AnimalType::Owl => "🦉",
            AnimalType::Panda => "🐼",
            AnimalType::Zebra => "🦓",
            AnimalType::Tiger => "🐅",
            AnimalType::Other(_) => Self::FALLBACK_GLYPH,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AnimalType::Other(_))
    }
}

impl From<String> for AnimalType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "elephant" => AnimalType::Elephant,
            "lion" => AnimalType::Lion,
            "monkey" => AnimalType::Monkey,
            "giraffe" => AnimalType::Giraffe,
            "hippo" => AnimalType::Hippo,
            "penguin" => AnimalType::Penguin,
            "owl" => AnimalType::Owl,
            "panda" => AnimalType::Panda,
            "zebra" => AnimalType::Zebra,
            "tiger" => AnimalType::Tiger,
            _ => AnimalType::Other(tag),
        }
    }
}

impl From<AnimalType> for String {
    fn from(animal: AnimalType) -> Self {
        match animal {
            AnimalType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable definition of one step on the journey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub animal: AnimalType,
    /// Line-oriented light markup, see [`crate::instructions`]
    pub instructions: String,
}

/// Runtime record for a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkflowStateEntry {
    pub status: StepStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Free-form date string, not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl WorkflowStateEntry {
    pub fn new(status: StepStatus) -> Self {
        Self {
            status,
            notes: None,
            completed_at: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_completed_at(mut self, completed_at: impl Into<String>) -> Self {
        self.completed_at = Some(completed_at.into());
        self
    }
}

/// Step id to runtime record. Need not cover every step, may name unknown ids.
pub type WorkflowState = BTreeMap<String, WorkflowStateEntry>;

/// Decode `currentState`, refusing an id that appears twice instead of
/// letting the later entry win.
fn deserialize_unique_state<'de, D>(deserializer: D) -> Result<WorkflowState, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueStateVisitor;

    impl<'de> Visitor<'de> for UniqueStateVisitor {
        type Value = WorkflowState;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from step id to state entry")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut state = WorkflowState::new();
            while let Some(id) = map.next_key::<String>()? {
                match state.entry(id) {
                    Entry::Occupied(slot) => {
                        return Err(de::Error::custom(format!(
                            "duplicate state entry for step '{}'",
                            slot.key()
                        )));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(map.next_value()?);
                    }
                }
            }
            Ok(state)
        }
    }

    deserializer.deserialize_map(UniqueStateVisitor)
}

/// Step definitions in display order plus their runtime state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FullWorkflow {
    pub steps: Vec<WorkflowStep>,
    #[serde(deserialize_with = "deserialize_unique_state")]
    pub current_state: WorkflowState,
}

impl FullWorkflow {
    pub fn new(steps: Vec<WorkflowStep>, current_state: WorkflowState) -> Self {
        Self {
            steps,
            current_state,
        }
    }

    pub fn step(&self, step_id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    pub fn entry(&self, step_id: &str) -> Option<&WorkflowStateEntry> {
        self.current_state.get(step_id)
    }

    pub fn is_known_step(&self, step_id: &str) -> bool {
        self.step(step_id).is_some()
    }

    /// First step id that appears more than once, if any
    pub fn duplicate_step_id(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.steps
            .iter()
            .map(|step| step.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    /// State entries whose id names no defined step
    pub fn orphaned_entries(&self) -> impl Iterator<Item = (&String, &WorkflowStateEntry)> {
        self.current_state
            .iter()
            .filter(move |(id, _)| !self.is_known_step(id))
    }
}
