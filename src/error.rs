//! Error types for roster mutation, load analysis, and configuration.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the invigilation core.
///
/// Understaffed rooms are not errors: they are represented in the
/// allocation table as rooms with fewer than two slots.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Caller-supplied input was rejected (e.g. a blank faculty name).
    ///
    /// Recoverable: the caller keeps its current input and state.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// An allocation table references a faculty id the roster does not hold.
    ///
    /// Signals a broken contract between the roster and the table it was
    /// derived from; the current computation must be abandoned.
    #[error("faculty '{faculty_id}' assigned to {room} is not on the roster")]
    ReferentialIntegrity { faculty_id: String, room: String },

    /// A roster supplied from outside failed structural checks.
    #[error("invalid roster: {}", join_messages(.0))]
    InvalidRoster(Vec<ValidationError>),

    /// The same faculty id appears twice in a roster handed to analysis.
    #[error("faculty id '{0}' appears more than once on the roster")]
    DuplicateFaculty(String),

    /// Configuration cannot describe a valid room set.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document failed to parse.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl BoardError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the caller can recover locally by discarding the action.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
