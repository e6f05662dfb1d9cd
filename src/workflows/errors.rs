use thiserror::Error;

/// Headline shown on the editing surface whenever a submission is rejected
pub const INVALID_DOCUMENT_MESSAGE: &str = "Invalid JSON format. Please check your syntax.";

/// A submitted workflow document could not be accepted.
///
/// Every variant is the same failure from the caller's point of view (a
/// malformed document); the variant only carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("workflow document is empty")]
    Empty,

    #[error("not valid JSON (line {line}, column {column}): {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("unexpected document shape (line {line}, column {column}): {message}")]
    Schema {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{path} must be a JSON object, not {found}")]
    NotAnObject { path: String, found: &'static str },

    #[error("duplicate step id '{id}'")]
    DuplicateStepId { id: String },
}

impl ParseError {
    /// Short machine-friendly kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty",
            ParseError::Syntax { .. } => "syntax",
            ParseError::Schema { .. } => "schema",
            ParseError::NotAnObject { .. } => "not_an_object",
            ParseError::DuplicateStepId { .. } => "duplicate_step_id",
        }
    }
}

impl ParseError {
    /// The text did not scan as JSON at all
    pub fn syntax(err: serde_json::Error) -> Self {
        let (line, column, message) = position_and_message(&err);
        ParseError::Syntax {
            line,
            column,
            message,
        }
    }

    /// The text is JSON but does not decode into a workflow
    pub fn schema(err: serde_json::Error) -> Self {
        let (line, column, message) = position_and_message(&err);
        ParseError::Schema {
            line,
            column,
            message,
        }
    }
}

fn position_and_message(err: &serde_json::Error) -> (usize, usize, String) {
    let line = err.line();
    let column = err.column();
    // serde_json appends the position to its message; it is carried separately here
    let full = err.to_string();
    let message = full
        .strip_suffix(&format!(" at line {line} column {column}"))
        .unwrap_or(&full)
        .to_string();
    (line, column, message)
}
