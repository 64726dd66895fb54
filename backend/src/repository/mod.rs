//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod seed;
mod item_repo;
mod property_repo;


pub use traits::{Repository, FilterableRepository};
pub use db::{initialize, DbState};
pub use seed::{SeedItem, SEED_ITEMS};
pub use item_repo::ItemRepository;
pub use property_repo::PropertyRepository;
