//! JSON file implementation of the store contract.
//!
//! # Invariants
//! - The document is one JSON array holding the full collection in
//!   insertion order.
//! - Every mutation rewrites the whole document synchronously; there is no
//!   batching and no partial append.

use crate::model::Entity;
use crate::store::{EntityStore, StoreResult};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// File-backed store encoding one entity collection as a JSON array.
pub struct JsonStore<E> {
    path: PathBuf,
    _entity: PhantomData<E>,
}

impl<E> JsonStore<E> {
    /// Creates a store over `path`. The file is not touched until the
    /// first load or mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<E> JsonStore<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    fn rewrite(&self, all: &[E]) -> StoreResult<()> {
        let document = serde_json::to_string_pretty(all)?;
        fs::write(&self.path, document)?;
        Ok(())
    }
}

impl<E> EntityStore<E> for JsonStore<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    fn load(&mut self) -> StoreResult<Vec<E>> {
        if !self.path.exists() {
            debug!(
                "event=store_load module=store kind={} status=empty path={}",
                E::KIND,
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let document = fs::read_to_string(&self.path)?;
        let entities: Vec<E> = serde_json::from_str(&document)?;
        debug!(
            "event=store_load module=store kind={} status=ok count={} path={}",
            E::KIND,
            entities.len(),
            self.path.display()
        );
        Ok(entities)
    }

    fn persist(&mut self, _entity: &E, all: &[E]) -> StoreResult<()> {
        self.rewrite(all)
    }

    fn remove(&mut self, _id: &str, all: &[E]) -> StoreResult<()> {
        self.rewrite(all)
    }
}
