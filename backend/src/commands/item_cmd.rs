//! Checklist item commands
//!
//! Accept presentation-level input (status names, date strings, "All"
//! filters), validate it, and call the item repository.

use serde::{Deserialize, Serialize};

use crate::domain::{
    suggest_categories, timestamp, ChecklistItem, DomainError, DomainResult, ItemFilter, ItemStatus, ItemUpdate,
    NewItem,
};
use crate::repository::{initialize as init_store, FilterableRepository, Repository};
use crate::AppState;

/// Filter value meaning "no filter" in list views
pub const ALL: &str = "All";

/// Fields submitted by an "add item" form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub category: String,
    pub item_name: String,
    pub status: Option<String>,
    pub responsible_party: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

/// Fields submitted by an "edit item" form
///
/// Absent fields are left alone. For optional fields an empty string clears
/// the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub category: Option<String>,
    pub item_name: Option<String>,
    pub status: Option<String>,
    pub responsible_party: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

fn parse_status(value: Option<&str>) -> DomainResult<Option<ItemStatus>> {
    value.map(str::parse).transpose()
}

fn filter_value(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != ALL)
}

impl AddItemRequest {
    fn into_new_item(self) -> DomainResult<NewItem> {
        Ok(NewItem {
            status: parse_status(self.status.as_deref())?.unwrap_or_default(),
            due_date: self
                .due_date
                .as_deref()
                .map(timestamp::parse_date)
                .transpose()?
                .flatten(),
            category: self.category,
            item_name: self.item_name,
            responsible_party: self.responsible_party,
            notes: self.notes,
        })
    }
}

impl UpdateItemRequest {
    fn into_update(self) -> DomainResult<ItemUpdate> {
        Ok(ItemUpdate {
            status: parse_status(self.status.as_deref())?,
            due_date: self.due_date.as_deref().map(timestamp::parse_date).transpose()?,
            category: self.category,
            item_name: self.item_name,
            responsible_party: self.responsible_party.map(Some),
            notes: self.notes.map(Some),
        })
    }
}

/// Create tables and seed the standard checklist if the store is empty
pub fn initialize(state: &AppState) -> DomainResult<usize> {
    let seeded = init_store(&state.db_state, timestamp::today())?;
    log::info!("Store ready at {}", state.db_path.display());
    Ok(seeded)
}

/// List items, optionally filtered by exact category and status
pub fn list_items(
    state: &AppState,
    category: Option<String>,
    status: Option<String>,
) -> DomainResult<Vec<ChecklistItem>> {
    let filter = ItemFilter {
        category: filter_value(category),
        status: parse_status(filter_value(status).as_deref())?,
    };
    state.items().list_filtered(&filter)
}

/// Get item by ID
pub fn get_item(state: &AppState, id: u32) -> DomainResult<ChecklistItem> {
    state
        .items()
        .find_by_id(id)?
        .ok_or_else(|| DomainError::item_not_found(id))
}

/// Add a new item
pub fn add_item(state: &AppState, request: AddItemRequest) -> DomainResult<ChecklistItem> {
    let new_item = request.into_new_item()?;
    state.items().add(new_item, timestamp::now())
}

/// Update the supplied fields of an item
pub fn update_item(state: &AppState, id: u32, request: UpdateItemRequest) -> DomainResult<ChecklistItem> {
    let update = request.into_update()?;
    state.items().apply_update(id, &update, timestamp::now())
}

/// Categories for suggestion lists: those in use plus the standard set
pub fn list_categories(state: &AppState) -> DomainResult<Vec<String>> {
    let in_use = state.items().categories()?;
    Ok(suggest_categories(&in_use))
}

pub fn list_statuses() -> Vec<&'static str> {
    ItemStatus::ALL.iter().map(|s| s.as_str()).collect()
}
