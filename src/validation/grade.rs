//! Grade field and referential validation.
//!
//! # Responsibility
//! - Check grade fields and resolve `student_id` / `assignment_id` against
//!   the live student and assignment collections.
//!
//! # Invariants
//! - The validator holds shared read handles onto both repositories,
//!   injected at construction; it performs no mutation through them.
//! - Check order: id, student reference, assignment reference, value.

use crate::model::assignment::Assignment;
use crate::model::grade::Grade;
use crate::model::student::Student;
use crate::model::Entity;
use crate::repo::Repository;
use crate::validation::{require_id, require_text, ValidationError};
use std::cell::RefCell;
use std::rc::Rc;

const MIN_VALUE: f64 = 1.0;
const MAX_VALUE: f64 = 10.0;

/// Validator for `Grade`, the one validator with external dependencies.
pub struct GradeValidator<SR, AR> {
    students: Rc<RefCell<SR>>,
    assignments: Rc<RefCell<AR>>,
}

impl<SR, AR> GradeValidator<SR, AR>
where
    SR: Repository<Student>,
    AR: Repository<Assignment>,
{
    /// Creates a validator over shared student/assignment repository handles.
    pub fn new(students: Rc<RefCell<SR>>, assignments: Rc<RefCell<AR>>) -> Self {
        Self {
            students,
            assignments,
        }
    }

    /// Checks grade fields and referential integrity, failing on the first
    /// violation.
    pub fn validate(&self, grade: &Grade) -> Result<(), ValidationError> {
        require_id(Grade::KIND, grade.id.as_deref())?;

        require_text(Grade::KIND, "student_id", grade.student_id.as_deref())?;
        let student_id = grade.student_id.as_deref().unwrap_or_default();
        if self.students.borrow().find(student_id).is_none() {
            return Err(ValidationError::UnknownStudent {
                student_id: student_id.to_string(),
            });
        }

        require_text(Grade::KIND, "assignment_id", grade.assignment_id.as_deref())?;
        let assignment_id = grade.assignment_id.as_deref().unwrap_or_default();
        if self.assignments.borrow().find(assignment_id).is_none() {
            return Err(ValidationError::UnknownAssignment {
                assignment_id: assignment_id.to_string(),
            });
        }

        if !(MIN_VALUE..=MAX_VALUE).contains(&grade.value) {
            return Err(ValidationError::ValueOutOfRange { value: grade.value });
        }

        Ok(())
    }
}
