//! In-memory repository, the storage-free fake for unit tests and
//! ephemeral embeddings.
//!
//! # Invariants
//! - Insertion order is the iteration order.
//! - Behavior matches `FileRepository` for every contract case except
//!   durability.

use crate::model::Entity;
use crate::repo::{position_of, AddOutcome, RepoError, RepoResult, Repository};

/// Keyed, insertion-ordered collection with no durable backing.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository<E> {
    entities: Vec<E>,
}

impl<E> MemoryRepository<E> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<E: Entity> Repository<E> for MemoryRepository<E> {
    fn add(&mut self, entity: E) -> RepoResult<AddOutcome<E>> {
        let id = entity.id().ok_or(RepoError::MissingId { entity: E::KIND })?;
        if let Some(index) = position_of(&self.entities, id) {
            return Ok(AddOutcome::AlreadyExists(self.entities[index].clone()));
        }
        self.entities.push(entity);
        Ok(AddOutcome::Inserted)
    }

    fn delete(&mut self, id: &str) -> RepoResult<Option<E>> {
        Ok(position_of(&self.entities, id).map(|index| self.entities.remove(index)))
    }

    fn find(&self, id: &str) -> Option<E> {
        position_of(&self.entities, id).map(|index| self.entities[index].clone())
    }

    fn get_all(&self) -> Vec<E> {
        self.entities.clone()
    }
}
