//! Field and referential validation for catalog entities.
//!
//! # Responsibility
//! - Decide whether a mutation's payload is admissible before any
//!   repository is touched.
//! - Report the first violated rule in field order
//!   (id, then name/description, then numeric fields, then email/references).
//!
//! # Invariants
//! - Validators are fail-fast: the first violation wins, no aggregation.
//! - An absent required identifier is a contract violation, not a
//!   recoverable input error; `ValidationError::is_contract_violation`
//!   makes the split observable and the service maps it to a distinct
//!   error variant.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod assignment;
mod grade;
mod student;

pub use assignment::AssignmentValidator;
pub use grade::GradeValidator;
pub use student::StudentValidator;

/// Coarse classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// A required field was present but empty.
    EmptyField,
    /// A required field was absent entirely.
    NullField,
    /// A numeric field fell outside its allowed range.
    OutOfRange,
    /// A field was present but malformed, or a reference did not resolve.
    InvalidFormat,
}

/// First violated rule for one entity, in field order.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required identifier absent. Treated as a programming-contract
    /// violation by the service layer, unlike every other variant.
    MissingId { entity: &'static str },
    /// A required non-identifier field was absent.
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    /// A required field was present but empty.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// Student group below zero (zero itself is accepted).
    GroupOutOfRange { group: i32 },
    /// Email without a non-empty local part and domain around `@`.
    InvalidEmail { email: String },
    /// Assignment week outside the 1..=14 semester window.
    WeekOutOfRange { field: &'static str, week: i32 },
    /// Assignment window reversed.
    StartAfterDeadline {
        start_week: i32,
        deadline_week: i32,
    },
    /// Grade value outside 1..=10.
    ValueOutOfRange { value: f64 },
    /// Grade references a student id with no stored student.
    UnknownStudent { student_id: String },
    /// Grade references an assignment id with no stored assignment.
    UnknownAssignment { assignment_id: String },
}

impl ValidationError {
    /// Maps the concrete rule onto the coarse failure taxonomy.
    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::MissingId { .. } | Self::MissingField { .. } => ValidationKind::NullField,
            Self::EmptyField { .. } => ValidationKind::EmptyField,
            Self::GroupOutOfRange { .. }
            | Self::WeekOutOfRange { .. }
            | Self::StartAfterDeadline { .. }
            | Self::ValueOutOfRange { .. } => ValidationKind::OutOfRange,
            Self::InvalidEmail { .. }
            | Self::UnknownStudent { .. }
            | Self::UnknownAssignment { .. } => ValidationKind::InvalidFormat,
        }
    }

    /// True for failures callers must treat as programming errors rather
    /// than rejectable input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::MissingId { .. })
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId { entity } => write!(f, "{entity} id is missing"),
            Self::MissingField { entity, field } => write!(f, "{entity} {field} is missing"),
            Self::EmptyField { entity, field } => write!(f, "{entity} {field} is empty"),
            Self::GroupOutOfRange { group } => {
                write!(f, "student group must not be negative, got {group}")
            }
            Self::InvalidEmail { email } => write!(f, "invalid student email `{email}`"),
            Self::WeekOutOfRange { field, week } => {
                write!(f, "assignment {field} must be within weeks 1..=14, got {week}")
            }
            Self::StartAfterDeadline {
                start_week,
                deadline_week,
            } => write!(
                f,
                "assignment start week {start_week} is after deadline week {deadline_week}"
            ),
            Self::ValueOutOfRange { value } => {
                write!(f, "grade value must be within 1..=10, got {value}")
            }
            Self::UnknownStudent { student_id } => {
                write!(f, "grade references unknown student `{student_id}`")
            }
            Self::UnknownAssignment { assignment_id } => {
                write!(f, "grade references unknown assignment `{assignment_id}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Shared check for required text fields: absent and empty are distinct
/// failures, reported in that order.
fn require_text(
    entity: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        None => Err(ValidationError::MissingField { entity, field }),
        Some(text) if text.is_empty() => Err(ValidationError::EmptyField { entity, field }),
        Some(_) => Ok(()),
    }
}

/// Identifier variant of `require_text`: absence is a contract violation.
fn require_id(entity: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        None => Err(ValidationError::MissingId { entity }),
        Some(text) if text.is_empty() => Err(ValidationError::EmptyField { entity, field: "id" }),
        Some(_) => Ok(()),
    }
}
