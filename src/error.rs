//! Assignment error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by assignment operations.
///
/// There is no "unsatisfiable" variant: the forced fallback always places
/// everyone, and `min` shortfalls are reported through statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("invalid input: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type AssignResult<T> = Result<T, AssignError>;
