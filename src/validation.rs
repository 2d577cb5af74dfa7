//! Input validation for assignment problems.
//!
//! Checks structural integrity of the roster, capacity table, and
//! continuity list before assignment. Detects:
//! - Duplicate person names
//! - Blank names
//! - Sections without a capacity limit
//! - Limits with `max < 1` or `min > max`
//!
//! Pins that name nobody in the roster are not errors; assignment skips
//! them. Unknown section names never reach this point because sections
//! are a closed enum.

use crate::models::{ContinuityItem, Person, SectionLimits};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two people share the same name.
    DuplicateName,
    /// A person or pin has an empty name.
    EmptyName,
    /// A section has no capacity limit.
    MissingSectionLimit,
    /// A limit has `max < 1` or `min > max`.
    InvalidLimit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an assignment run.
///
/// Checks:
/// 1. No blank person names
/// 2. No duplicate person names
/// 3. No blank pin names
/// 4. Every section has a limit
/// 5. Every limit has `max >= 1` and `min <= max`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    people: &[Person],
    limits: &SectionLimits,
    continuity: &[ContinuityItem],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for person in people {
        if person.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Person with empty name",
            ));
            continue;
        }
        if !names.insert(person.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate person name: {}", person.name),
            ));
        }
    }

    for item in continuity {
        if item.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Continuity item for section {} has empty name", item.section),
            ));
        }
    }

    for section in limits.missing_sections() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingSectionLimit,
            format!("No limit configured for section {section}"),
        ));
    }

    for (section, limit) in limits.iter() {
        if limit.max < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLimit,
                format!("Section {section} has max {} (must be at least 1)", limit.max),
            ));
        }
        if limit.min > limit.max {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLimit,
                format!(
                    "Section {section} has min {} greater than max {}",
                    limit.min, limit.max
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
