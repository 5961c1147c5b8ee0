//! Grade record linking one student to one assignment.
//!
//! # Invariants
//! - `id` is unique within the grade collection.
//! - `student_id` and `assignment_id` must resolve in their collections at
//!   creation time; the grade validator enforces this with injected
//!   repository handles.

use crate::model::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scored submission for one assignment by one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Unique textual key.
    pub id: Option<String>,
    /// Key of the graded student; must resolve at creation time.
    pub student_id: Option<String>,
    /// Key of the graded assignment; must resolve at creation time.
    pub assignment_id: Option<String>,
    /// Awarded score, 1.0..=10.0.
    pub value: f64,
    /// Calendar date the submission was handed in.
    pub submission_date: NaiveDate,
}

impl Grade {
    /// Creates a grade with every required field present.
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        assignment_id: impl Into<String>,
        value: f64,
        submission_date: NaiveDate,
    ) -> Self {
        Self {
            id: Some(id.into()),
            student_id: Some(student_id.into()),
            assignment_id: Some(assignment_id.into()),
            value,
            submission_date,
        }
    }
}

impl Entity for Grade {
    const KIND: &'static str = "grade";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
