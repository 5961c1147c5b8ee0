//! Repository contracts and keyed collection implementations.
//!
//! # Responsibility
//! - Define the per-entity CRUD contract the service orchestrates.
//! - Provide an in-memory implementation for tests/embedding and a
//!   write-through file-backed implementation for durable use.
//!
//! # Invariants
//! - A duplicate id on `add` is an expected outcome, signalled through
//!   `AddOutcome::AlreadyExists`, never through an error.
//! - `delete` of a missing id is a `None` no-op.
//! - `get_all` returns a fresh snapshot in insertion order.

use crate::model::Entity;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod file;
pub mod memory;

pub use file::FileRepository;
pub use memory::MemoryRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure raised by repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// The entity handed to `add` carried no identifier. Keyed storage has
    /// no key to insert under; callers treat this as a programming error.
    MissingId { entity: &'static str },
    /// The durable store rejected a load or write-through.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId { entity } => {
                write!(f, "cannot store {entity} without an identifier")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingId { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Outcome of an `add`: either the entity went in, or the id was taken.
///
/// `AlreadyExists` carries the stored entity unchanged; the attempted
/// insert had no effect.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome<E> {
    Inserted,
    AlreadyExists(E),
}

impl<E> AddOutcome<E> {
    /// True when the add actually inserted the entity.
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Per-entity CRUD store with unique-key semantics.
pub trait Repository<E: Entity> {
    /// Inserts `entity` unless its id is already present.
    ///
    /// # Errors
    /// - `RepoError::MissingId` when the entity carries no identifier.
    /// - `RepoError::Store` when the durable write-through fails; the
    ///   in-memory collection is left unchanged in that case.
    fn add(&mut self, entity: E) -> RepoResult<AddOutcome<E>>;

    /// Removes and returns the entity stored under `id`, if any.
    fn delete(&mut self, id: &str) -> RepoResult<Option<E>>;

    /// Returns a clone of the entity stored under `id`, if any.
    fn find(&self, id: &str) -> Option<E>;

    /// Returns a fresh snapshot of the collection in insertion order.
    fn get_all(&self) -> Vec<E>;
}

/// Position of `id` in an insertion-ordered collection.
fn position_of<E: Entity>(entities: &[E], id: &str) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == Some(id))
}
