//! Durable-store collaborator contract for file-backed repositories.
//!
//! # Responsibility
//! - Define the narrow persistence surface the repository layer consumes:
//!   load the full collection once, then record each mutation durably.
//! - Keep encoding details behind the contract; the core only needs
//!   durability and faithful reload.
//!
//! # Invariants
//! - `load` returns entities in stored order, which is insertion order.
//! - Mutations are write-through: each `persist`/`remove` leaves the store
//!   reflecting the full current set before the call returns.
//! - The last successfully written state is authoritative after a crash.

use crate::model::Entity;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json;

pub use json::JsonStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while reading or writing the durable store.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failure: {err}"),
            Self::Format(err) => write!(f, "store encoding failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

/// Persistence collaborator for one entity collection.
///
/// `persist` and `remove` receive the full current set alongside the
/// mutated element because whole-document encodings rewrite everything on
/// each call; incremental encodings are free to ignore it.
pub trait EntityStore<E: Entity> {
    /// Loads the full persisted collection in stored order.
    ///
    /// An absent backing file is an empty collection, not an error.
    fn load(&mut self) -> StoreResult<Vec<E>>;

    /// Durably records the addition of `entity`; `all` already contains it.
    fn persist(&mut self, entity: &E, all: &[E]) -> StoreResult<()>;

    /// Durably records the removal of `id`; `all` no longer contains it.
    fn remove(&mut self, id: &str, all: &[E]) -> StoreResult<()>;
}
