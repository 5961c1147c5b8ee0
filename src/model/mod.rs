//! Domain model for the gradebook catalog.
//!
//! # Responsibility
//! - Define the canonical student/assignment/grade records.
//! - Expose the `Entity` contract consumed by the repository and store
//!   layers.
//!
//! # Invariants
//! - Every entity is identified by a caller-supplied textual id.
//! - Required text fields are `Option<String>` so an absent input is
//!   representable distinctly from an empty string; validators decide
//!   which of the two it is.

pub mod assignment;
pub mod grade;
pub mod student;

/// Contract every catalog entity satisfies for keyed storage.
///
/// `KIND` names the entity in errors and log events; `id()` exposes the
/// unique key, which may be absent on unvalidated input.
pub trait Entity: Clone {
    /// Stable lowercase entity name used in errors and log events.
    const KIND: &'static str;

    /// Unique key for this entity, `None` when the input never carried one.
    fn id(&self) -> Option<&str>;
}
