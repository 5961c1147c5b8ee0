//! Assignment field validation.
//!
//! # Invariants
//! - Check order: id, description, deadline week, start week, window order.
//! - Both weeks live in the 1..=14 semester window.

use crate::model::assignment::Assignment;
use crate::model::Entity;
use crate::validation::{require_id, require_text, ValidationError};

const FIRST_WEEK: i32 = 1;
const LAST_WEEK: i32 = 14;

/// Stateless field validator for `Assignment`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentValidator;

impl AssignmentValidator {
    /// Checks every assignment field, failing on the first violation.
    pub fn validate(&self, assignment: &Assignment) -> Result<(), ValidationError> {
        require_id(Assignment::KIND, assignment.id.as_deref())?;
        require_text(
            Assignment::KIND,
            "description",
            assignment.description.as_deref(),
        )?;
        check_week("deadline_week", assignment.deadline_week)?;
        check_week("start_week", assignment.start_week)?;

        if assignment.start_week > assignment.deadline_week {
            return Err(ValidationError::StartAfterDeadline {
                start_week: assignment.start_week,
                deadline_week: assignment.deadline_week,
            });
        }

        Ok(())
    }
}

fn check_week(field: &'static str, week: i32) -> Result<(), ValidationError> {
    if (FIRST_WEEK..=LAST_WEEK).contains(&week) {
        Ok(())
    } else {
        Err(ValidationError::WeekOutOfRange { field, week })
    }
}

#[cfg(test)]
mod tests {
    use super::AssignmentValidator;
    use crate::model::assignment::Assignment;
    use crate::validation::ValidationError;

    fn valid_assignment() -> Assignment {
        Assignment::new("1", "lab grading service", 5, 3)
    }

    #[test]
    fn accepts_valid_assignment() {
        assert_eq!(AssignmentValidator.validate(&valid_assignment()), Ok(()));
    }

    #[test]
    fn accepts_full_semester_window() {
        let assignment = Assignment::new("1", "semester project", 14, 1);
        assert_eq!(AssignmentValidator.validate(&assignment), Ok(()));
    }

    #[test]
    fn rejects_oversized_deadline() {
        let assignment = Assignment {
            deadline_week: 99999,
            ..valid_assignment()
        };
        assert_eq!(
            AssignmentValidator.validate(&assignment),
            Err(ValidationError::WeekOutOfRange {
                field: "deadline_week",
                week: 99999,
            })
        );
    }

    #[test]
    fn rejects_start_week_zero() {
        let assignment = Assignment {
            start_week: 0,
            ..valid_assignment()
        };
        assert_eq!(
            AssignmentValidator.validate(&assignment),
            Err(ValidationError::WeekOutOfRange {
                field: "start_week",
                week: 0,
            })
        );
    }

    #[test]
    fn rejects_reversed_window() {
        let assignment = Assignment {
            start_week: 6,
            deadline_week: 5,
            ..valid_assignment()
        };
        assert_eq!(
            AssignmentValidator.validate(&assignment),
            Err(ValidationError::StartAfterDeadline {
                start_week: 6,
                deadline_week: 5,
            })
        );
    }

    #[test]
    fn empty_description_fails_before_week_checks() {
        let assignment = Assignment {
            description: Some(String::new()),
            deadline_week: 99,
            ..valid_assignment()
        };
        assert_eq!(
            AssignmentValidator.validate(&assignment),
            Err(ValidationError::EmptyField {
                entity: "assignment",
                field: "description",
            })
        );
    }
}
