//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set before the engine runs.
//! Detects:
//! - Negative arrival times
//! - Negative burst times
//! - Duplicate process ids
//!
//! The prompt layer accepts any integer; these checks are the stricter
//! contract applied before the set reaches the dispatcher, whose
//! behavior on negative times would otherwise be undefined. Negative
//! priorities are legal: lower value means higher precedence, with no
//! floor. A burst of zero is also legal and completes at dispatch time.

use std::collections::HashSet;

use crate::models::ProcessSet;

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
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires negative execution time.
    NegativeBurst,
    /// Two processes share the same id.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. No negative arrival times
/// 2. No negative burst times
/// 3. No duplicate process ids (cannot arise via the shell, which
///    assigns ids itself, but the library surface permits hand-built
///    sets)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(set: &ProcessSet) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in &set.processes {
        if process.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    process.id, process.arrival
                ),
            ));
        }

        if process.burst < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurst,
                format!(
                    "Process {} has negative burst time {}",
                    process.id, process.burst
                ),
            ));
        }

        if !ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
