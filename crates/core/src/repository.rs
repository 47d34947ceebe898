//! Generic in-memory repository keyed by entity identifier.

use std::collections::HashMap;

use crate::entity::{Entity, Stocked};
use crate::error::{DomainError, DomainResult};

/// Exclusive in-memory owner of all entities of one type.
///
/// - Keys are unique: `add` never overwrites.
/// - Iteration and [`get_all`](Self::get_all) follow insertion order.
/// - Entities are only mutated through repository operations.
///
/// Not synchronized; wrap in [`SharedRepository`](crate::SharedRepository)
/// when more than one thread needs access.
#[derive(Debug, Clone)]
pub struct Repository<E: Entity> {
    items: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

impl<E: Entity> Repository<E> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Build a repository from a sequence, failing on the first repeated id.
    pub fn from_entities(entities: impl IntoIterator<Item = E>) -> DomainResult<Self> {
        let mut repo = Self::new();
        for entity in entities {
            repo.add(entity)?;
        }
        Ok(repo)
    }

    /// Insert an entity under its identifier.
    pub fn add(&mut self, entity: E) -> DomainResult<()> {
        let id = entity.id();
        if self.items.contains_key(&id) {
            return Err(DomainError::duplicate_key(E::KIND, id));
        }
        self.items.insert(id, entity);
        self.order.push(id);
        Ok(())
    }

    pub fn get_by_id(&self, id: E::Id) -> DomainResult<&E> {
        self.items
            .get(&id)
            .ok_or_else(|| DomainError::not_found(E::KIND, id))
    }

    /// Delete an entity, returning it. The repository is unchanged on failure.
    pub fn remove(&mut self, id: E::Id) -> DomainResult<E> {
        let entity = self
            .items
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(E::KIND, id))?;
        self.order.retain(|k| *k != id);
        Ok(entity)
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Read-only iteration in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }
}

impl<E: Entity + Clone> Repository<E> {
    /// Snapshot of every entity in insertion order.
    pub fn get_all(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }
}

impl<E: Stocked> Repository<E> {
    /// Overwrite an entity's quantity.
    ///
    /// A negative value is rejected before presence is checked, so
    /// `InvalidValue` wins when both conditions are violated.
    pub fn update_quantity(&mut self, id: E::Id, quantity: i64) -> DomainResult<()> {
        if quantity < 0 {
            return Err(DomainError::invalid_value(format!(
                "quantity cannot be negative (got {quantity})"
            )));
        }
        let entity = self
            .items
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(E::KIND, id))?;
        entity.set_quantity(quantity);
        Ok(())
    }
}

impl<E: Entity> Default for Repository<E> {
    fn default() -> Self {
        Self::new()
    }
}
