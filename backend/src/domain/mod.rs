//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage dependencies (serde and chrono only).

mod entity;
mod category;
mod item;
mod property;
pub mod timestamp;

pub use entity::{Entity, DomainError, DomainResult};
pub use category::{Category, KNOWN_CATEGORIES, suggest_categories};
pub use item::{ChecklistItem, ItemStatus, NewItem, ItemUpdate, ItemFilter};
pub(crate) use item::normalize_text;
pub use property::{PropertyInfo, DEFAULT_PROPERTY_NAME, validate_property_name};
