use crate::errors::{PersonnelError, Result};
use crate::model::{
    Department, Employee, EmployeeDepartment, EmploymentHistory, EntityId, EntityKind,
    UnionBenefit, UnionMembership,
};

/// A record that can live in an `EntityStore`
pub trait Entity: Clone {
    /// Kind reported in errors and logs
    const KIND: EntityKind;

    fn id(&self) -> EntityId;
}

impl Entity for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Department {
    const KIND: EntityKind = EntityKind::Department;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for EmployeeDepartment {
    const KIND: EntityKind = EntityKind::DepartmentLink;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for EmploymentHistory {
    const KIND: EntityKind = EntityKind::EmploymentHistory;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for UnionMembership {
    const KIND: EntityKind = EntityKind::UnionMembership;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for UnionBenefit {
    const KIND: EntityKind = EntityKind::UnionBenefit;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// In-memory keyed container for one entity kind
///
/// Entities are kept in insertion order; `update` removes the old record and
/// appends the replacement, so an updated entity moves to the end of
/// `get_all()`.
///
/// Identities come from a counter owned by the store. It starts at 1, is
/// never decremented, and jumps past any identity inserted explicitly, so a
/// deleted identity is never handed out again.
///
/// Not thread-safe - callers sharing a store across threads must serialize
/// access themselves.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
    next_id: EntityId,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next unused identity
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Identity the next call to `next_id` will return
    pub fn peek_next_id(&self) -> EntityId {
        self.next_id
    }

    /// Insert an entity under its own identity
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if an entity with the same identity is stored.
    pub fn add(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        if self.contains(id) {
            return Err(PersonnelError::AlreadyExists { kind: T::KIND, id });
        }
        if id >= self.next_id {
            self.next_id = id.saturating_add(1);
        }
        self.items.push(entity);
        Ok(())
    }

    /// Exact-match lookup by identity
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// Mutable lookup, used by relation operations to maintain owner collections
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.items.iter_mut().find(|e| e.id() == id)
    }

    /// All entities in insertion order
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Replace the entity carrying the same identity
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no entity has that identity; the store is unchanged.
    pub fn update(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        let index = self
            .position(id)
            .ok_or(PersonnelError::NotFound { kind: T::KIND, id })?;
        self.items.remove(index);
        self.items.push(entity);
        Ok(())
    }

    /// Remove an entity by identity, returning it
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no entity has that identity; the store is unchanged.
    pub fn delete(&mut self, id: EntityId) -> Result<T> {
        let index = self
            .position(id)
            .ok_or(PersonnelError::NotFound { kind: T::KIND, id })?;
        Ok(self.items.remove(index))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|e| e.id() == id)
    }
}
