//! Student record.
//!
//! # Invariants
//! - `id` is unique within the student collection and immutable once the
//!   record is stored.
//! - `group` may be zero; only negative groups are invalid.

use crate::model::Entity;
use serde::{Deserialize, Serialize};

/// A student enrolled in the course.
///
/// Fields arrive unvalidated; `StudentValidator` decides admissibility
/// before the record ever reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique textual key.
    pub id: Option<String>,
    /// Display name, must be present and non-empty.
    pub name: Option<String>,
    /// Seminar group number, zero or greater.
    pub group: i32,
    /// Contact address, must look like `local@domain`.
    pub email: Option<String>,
}

impl Student {
    /// Creates a student with every required field present.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        group: i32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            group,
            email: Some(email.into()),
        }
    }
}

impl Entity for Student {
    const KIND: &'static str = "student";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
