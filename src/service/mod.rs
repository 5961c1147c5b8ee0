//! Catalog orchestration service.
//!
//! # Responsibility
//! - Run every mutation through its validator before the single
//!   repository call, so a rejected payload has zero side effects.
//! - Own the shared repository handles and the cross-entity referential
//!   checks the grade validator performs through them.
//!
//! # Invariants
//! - Validation always precedes the mutating repository call.
//! - Deletes are unconditional and do not cascade; a student or
//!   assignment can be removed while grades still reference it.

use crate::model::assignment::Assignment;
use crate::model::grade::Grade;
use crate::model::student::Student;
use crate::model::Entity;
use crate::repo::{AddOutcome, RepoError, Repository};
use crate::store::StoreError;
use crate::validation::{
    AssignmentValidator, GradeValidator, StudentValidator, ValidationError,
};
use log::{info, warn};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure surfaced by a catalog operation.
#[derive(Debug)]
pub enum CatalogError {
    /// Recoverable input error: the payload violated a field or
    /// referential rule and nothing was mutated.
    Validation(ValidationError),
    /// Programming-contract violation: a required identifier was absent.
    Contract { entity: &'static str },
    /// The durable store failed underneath an otherwise valid operation.
    Store(StoreError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Contract { entity } => {
                write!(f, "contract violation: {entity} id is required")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Contract { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::MissingId { entity } => Self::Contract { entity },
            other => Self::Validation(other),
        }
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::MissingId { entity } => Self::Contract { entity },
            RepoError::Store(err) => Self::Store(err),
        }
    }
}

/// Orchestrates validators and repositories for the three collections.
///
/// Holds shared single-threaded handles so the grade validator can resolve
/// references against the same live collections the service mutates.
pub struct CatalogService<SR, AR, GR> {
    students: Rc<RefCell<SR>>,
    assignments: Rc<RefCell<AR>>,
    grades: Rc<RefCell<GR>>,
    student_validator: StudentValidator,
    assignment_validator: AssignmentValidator,
    grade_validator: GradeValidator<SR, AR>,
}

impl<SR, AR, GR> CatalogService<SR, AR, GR>
where
    SR: Repository<Student>,
    AR: Repository<Assignment>,
    GR: Repository<Grade>,
{
    /// Creates a service over the three repository handles and wires the
    /// grade validator to the student/assignment collections.
    pub fn new(
        students: Rc<RefCell<SR>>,
        assignments: Rc<RefCell<AR>>,
        grades: Rc<RefCell<GR>>,
    ) -> Self {
        let grade_validator = GradeValidator::new(students.clone(), assignments.clone());
        Self {
            students,
            assignments,
            grades,
            student_validator: StudentValidator,
            assignment_validator: AssignmentValidator,
            grade_validator,
        }
    }

    /// Validates and stores a student.
    ///
    /// A duplicate id is not an error: the existing student comes back in
    /// `AddOutcome::AlreadyExists`, unchanged.
    pub fn add_student(&self, student: Student) -> CatalogResult<AddOutcome<Student>> {
        if let Err(err) = self.student_validator.validate(&student) {
            warn!(
                "event=add_rejected module=service kind={} reason={err}",
                Student::KIND
            );
            return Err(err.into());
        }
        let outcome = self.students.borrow_mut().add(student)?;
        log_add(Student::KIND, &outcome);
        Ok(outcome)
    }

    /// Validates and stores an assignment. Duplicate semantics match
    /// `add_student`.
    pub fn add_assignment(&self, assignment: Assignment) -> CatalogResult<AddOutcome<Assignment>> {
        if let Err(err) = self.assignment_validator.validate(&assignment) {
            warn!(
                "event=add_rejected module=service kind={} reason={err}",
                Assignment::KIND
            );
            return Err(err.into());
        }
        let outcome = self.assignments.borrow_mut().add(assignment)?;
        log_add(Assignment::KIND, &outcome);
        Ok(outcome)
    }

    /// Validates and stores a grade, resolving its student and assignment
    /// references against the live collections.
    ///
    /// `feedback` is an opaque annotation recorded with the add event; it
    /// is not validated and not persisted on the grade record.
    pub fn add_grade(&self, grade: Grade, feedback: &str) -> CatalogResult<AddOutcome<Grade>> {
        if let Err(err) = self.grade_validator.validate(&grade) {
            warn!(
                "event=add_rejected module=service kind={} reason={err}",
                Grade::KIND
            );
            return Err(err.into());
        }
        let outcome = self.grades.borrow_mut().add(grade)?;
        if outcome.is_inserted() {
            info!("event=grade_added module=service feedback={feedback}");
        }
        log_add(Grade::KIND, &outcome);
        Ok(outcome)
    }

    /// Removes a student by id; `None` when no such student is stored.
    ///
    /// Grades referencing the student are left in place.
    pub fn delete_student(&self, id: &str) -> CatalogResult<Option<Student>> {
        let removed = self.students.borrow_mut().delete(id)?;
        log_delete(Student::KIND, id, removed.is_some());
        Ok(removed)
    }

    /// Removes an assignment by id; `None` when no such assignment is
    /// stored. Grades referencing the assignment are left in place.
    pub fn delete_assignment(&self, id: &str) -> CatalogResult<Option<Assignment>> {
        let removed = self.assignments.borrow_mut().delete(id)?;
        log_delete(Assignment::KIND, id, removed.is_some());
        Ok(removed)
    }

    /// Removes a grade by id; `None` when no such grade is stored.
    pub fn delete_grade(&self, id: &str) -> CatalogResult<Option<Grade>> {
        let removed = self.grades.borrow_mut().delete(id)?;
        log_delete(Grade::KIND, id, removed.is_some());
        Ok(removed)
    }

    /// Looks up one grade by id.
    pub fn find_grade(&self, id: &str) -> Option<Grade> {
        self.grades.borrow().find(id)
    }

    /// Snapshot of all students in insertion order.
    pub fn get_all_students(&self) -> Vec<Student> {
        self.students.borrow().get_all()
    }

    /// Snapshot of all assignments in insertion order.
    pub fn get_all_assignments(&self) -> Vec<Assignment> {
        self.assignments.borrow().get_all()
    }

    /// Snapshot of all grades in insertion order.
    pub fn get_all_grades(&self) -> Vec<Grade> {
        self.grades.borrow().get_all()
    }
}

fn log_add<E>(kind: &'static str, outcome: &AddOutcome<E>) {
    match outcome {
        AddOutcome::Inserted => {
            info!("event=entity_added module=service kind={kind} status=ok");
        }
        AddOutcome::AlreadyExists(_) => {
            info!("event=entity_added module=service kind={kind} status=duplicate");
        }
    }
}

fn log_delete(kind: &'static str, id: &str, removed: bool) {
    info!(
        "event=entity_deleted module=service kind={kind} id={id} status={}",
        if removed { "ok" } else { "missing" }
    );
}
