//! File-backed repository: in-memory mirror plus write-through store sync.
//!
//! # Invariants
//! - The mirror is loaded once at construction and is the only read path.
//! - Every mutation syncs the durable store before it is considered
//!   committed; a failed write-through rolls the mirror back, so memory
//!   never runs ahead of the last successfully written state.

use crate::model::Entity;
use crate::repo::{position_of, AddOutcome, RepoError, RepoResult, Repository};
use crate::store::EntityStore;
use log::info;

/// Keyed, insertion-ordered collection mirrored onto a durable store.
pub struct FileRepository<E, S> {
    entities: Vec<E>,
    store: S,
}

impl<E, S> FileRepository<E, S>
where
    E: Entity,
    S: EntityStore<E>,
{
    /// Opens the repository, loading the mirror from `store`.
    ///
    /// # Errors
    /// Returns `RepoError::Store` when the persisted collection cannot be
    /// read or decoded.
    pub fn open(mut store: S) -> RepoResult<Self> {
        let entities = store.load()?;
        info!(
            "event=repo_open module=repo kind={} status=ok count={}",
            E::KIND,
            entities.len()
        );
        Ok(Self { entities, store })
    }
}

impl<E, S> Repository<E> for FileRepository<E, S>
where
    E: Entity,
    S: EntityStore<E>,
{
    fn add(&mut self, entity: E) -> RepoResult<AddOutcome<E>> {
        let id = entity.id().ok_or(RepoError::MissingId { entity: E::KIND })?;
        if let Some(index) = position_of(&self.entities, id) {
            return Ok(AddOutcome::AlreadyExists(self.entities[index].clone()));
        }

        self.entities.push(entity);
        let newest = self.entities.len() - 1;
        if let Err(err) = self.store.persist(&self.entities[newest], &self.entities) {
            self.entities.pop();
            return Err(err.into());
        }
        Ok(AddOutcome::Inserted)
    }

    fn delete(&mut self, id: &str) -> RepoResult<Option<E>> {
        let Some(index) = position_of(&self.entities, id) else {
            return Ok(None);
        };

        let removed = self.entities.remove(index);
        if let Err(err) = self.store.remove(id, &self.entities) {
            self.entities.insert(index, removed);
            return Err(err.into());
        }
        Ok(Some(removed))
    }

    fn find(&self, id: &str) -> Option<E> {
        position_of(&self.entities, id).map(|index| self.entities[index].clone())
    }

    fn get_all(&self) -> Vec<E> {
        self.entities.clone()
    }
}
