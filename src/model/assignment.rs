//! Assignment record.
//!
//! # Invariants
//! - `id` is unique within the assignment collection and immutable once
//!   stored.
//! - Both week fields live in the 1..=14 semester window, with
//!   `start_week <= deadline_week`.

use crate::model::Entity;
use serde::{Deserialize, Serialize};

/// A homework unit with a submission window expressed in semester weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique textual key.
    pub id: Option<String>,
    /// Human-readable summary, must be present and non-empty.
    pub description: Option<String>,
    /// Last semester week a submission is accepted, 1..=14.
    pub deadline_week: i32,
    /// First semester week a submission is accepted, 1..=14 and not
    /// after `deadline_week`.
    pub start_week: i32,
}

impl Assignment {
    /// Creates an assignment with every required field present.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        deadline_week: i32,
        start_week: i32,
    ) -> Self {
        Self {
            id: Some(id.into()),
            description: Some(description.into()),
            deadline_week,
            start_week,
        }
    }
}

impl Entity for Assignment {
    const KIND: &'static str = "assignment";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
