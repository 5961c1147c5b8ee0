//! Student field validation.
//!
//! # Invariants
//! - Check order: id, name, group, email.
//! - Group zero is accepted; only negative groups fail.

use crate::model::student::Student;
use crate::model::Entity;
use crate::validation::{require_id, require_text, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

// Minimal address shape: non-empty local part and domain around one `@`,
// no whitespace. Full RFC parsing is out of scope.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email shape pattern is valid"));

/// Stateless field validator for `Student`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentValidator;

impl StudentValidator {
    /// Checks every student field, failing on the first violation.
    pub fn validate(&self, student: &Student) -> Result<(), ValidationError> {
        require_id(Student::KIND, student.id.as_deref())?;
        require_text(Student::KIND, "name", student.name.as_deref())?;

        if student.group < 0 {
            return Err(ValidationError::GroupOutOfRange {
                group: student.group,
            });
        }

        require_text(Student::KIND, "email", student.email.as_deref())?;
        let email = student.email.as_deref().unwrap_or_default();
        if !EMAIL_SHAPE.is_match(email) {
            return Err(ValidationError::InvalidEmail {
                email: email.to_string(),
            });
        }

        Ok(())
    }
}
