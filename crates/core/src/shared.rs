use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entity::{Entity, Stocked};
use crate::error::{DomainError, DomainResult};
use crate::repository::Repository;

/// Thread-safe handle to one [`Repository`].
///
/// One lock guards the whole repository, so bulk reads (`get_all`, `read`)
/// always observe a consistent snapshot. Cloning the handle shares the same
/// underlying repository.
#[derive(Debug)]
pub struct SharedRepository<E: Entity> {
    inner: Arc<RwLock<Repository<E>>>,
}

impl<E: Entity> Clone for SharedRepository<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> SharedRepository<E> {
    pub fn new(repository: Repository<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repository)),
        }
    }

    fn read_guard(&self) -> DomainResult<RwLockReadGuard<'_, Repository<E>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::unavailable("repository lock poisoned"))
    }

    fn write_guard(&self) -> DomainResult<RwLockWriteGuard<'_, Repository<E>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::unavailable("repository lock poisoned"))
    }

    /// Run a read-only closure against a consistent view of the repository.
    pub fn read<R>(&self, f: impl FnOnce(&Repository<E>) -> R) -> DomainResult<R> {
        let guard = self.read_guard()?;
        Ok(f(&guard))
    }

    /// Run a closure with exclusive access; used for multi-step updates that
    /// must not interleave with other writers.
    pub fn write<R>(&self, f: impl FnOnce(&mut Repository<E>) -> R) -> DomainResult<R> {
        let mut guard = self.write_guard()?;
        Ok(f(&mut guard))
    }

    pub fn add(&self, entity: E) -> DomainResult<()> {
        self.write_guard()?.add(entity)
    }

    pub fn remove(&self, id: E::Id) -> DomainResult<E> {
        self.write_guard()?.remove(id)
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read_guard()?.len())
    }
}

impl<E: Entity + Clone> SharedRepository<E> {
    pub fn get_by_id(&self, id: E::Id) -> DomainResult<E> {
        self.read_guard()?.get_by_id(id).cloned()
    }

    pub fn get_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.read_guard()?.get_all())
    }
}

impl<E: Stocked> SharedRepository<E> {
    /// Read-modify-write of a quantity under a single write lock.
    pub fn adjust_quantity(&self, id: E::Id, delta: i64) -> DomainResult<i64> {
        let mut repo = self.write_guard()?;
        let current = repo.get_by_id(id)?.quantity();
        let next = current.saturating_add(delta);
        repo.update_quantity(id, next)?;
        Ok(next)
    }
}

impl<E: Entity> Default for SharedRepository<E> {
    fn default() -> Self {
        Self::new(Repository::new())
    }
}
