//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for create/read/update
///
/// Generic over any Entity type. No delete:
/// checklist rows are never removed.
pub trait Repository<T: Entity> {
    /// Insert a new entity; the store assigns its ID
    fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Overwrite an existing entity
    fn update(&self, entity: &T) -> DomainResult<T>;
}

/// Extension for repositories that support filtered listing
pub trait FilterableRepository<T: Entity>: Repository<T> {
    type Filter;

    /// List entities matching `filter`
    fn list_filtered(&self, filter: &Self::Filter) -> DomainResult<Vec<T>>;
}
