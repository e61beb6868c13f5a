use crate::model::Field;
use thiserror::Error;

/// Errors of the form surface. The arithmetic itself never fails.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("{} is calculated and cannot be edited", .0.label())]
    ReadOnlyField(Field),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing value for {}", .0.label())]
    MissingValue(Field),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Errors that end the session rather than being shown to the user.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CalcError::Io(_) | CalcError::Json(_))
    }
}
