//! Core domain logic for the gradebook catalog.
//! This crate is the single source of truth for admissibility rules and
//! cross-entity referential integrity over students, assignments and
//! grades.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::Assignment;
pub use model::grade::Grade;
pub use model::student::Student;
pub use model::Entity;
pub use repo::{AddOutcome, FileRepository, MemoryRepository, RepoError, RepoResult, Repository};
pub use service::{CatalogError, CatalogResult, CatalogService};
pub use store::{EntityStore, JsonStore, StoreError, StoreResult};
pub use validation::{
    AssignmentValidator, GradeValidator, StudentValidator, ValidationError, ValidationKind,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
