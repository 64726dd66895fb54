//! Checklist Item Repository
//!
//! SQLite-backed implementation of Repository<ChecklistItem> and
//! FilterableRepository<ChecklistItem>.

use chrono::NaiveDateTime;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::domain::{
    timestamp, Category, ChecklistItem, DomainError, DomainResult, ItemFilter, ItemStatus, ItemUpdate, NewItem,
};
use super::db::DbState;
use super::traits::{FilterableRepository, Repository};

const ITEM_COLUMNS: &str =
    "id, category, item_name, status, responsible_party, due_date, notes, CAST(last_updated AS TEXT)";

const ITEM_ORDER: &str = "ORDER BY category, item_name, id";

/// SQLite implementation of the checklist item store
pub struct ItemRepository {
    db: DbState,
}

impl ItemRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }

    /// Validate and insert a new item
    pub fn add(&self, new_item: NewItem, now: NaiveDateTime) -> DomainResult<ChecklistItem> {
        let item = new_item.into_item(now)?;
        let created = self.create(&item)?;
        log::info!("Added checklist item {} ({} / {})", created.id, created.category, created.item_name);
        Ok(created)
    }

    /// Apply a partial update. Nothing is written if the id is unknown or the
    /// update is invalid.
    pub fn apply_update(&self, id: u32, update: &ItemUpdate, now: NaiveDateTime) -> DomainResult<ChecklistItem> {
        let existing = self
            .find_by_id(id)?
            .ok_or_else(|| DomainError::item_not_found(id))?;
        let updated = update.apply_to(&existing, now)?;
        let saved = self.update(&updated)?;
        if existing.status != saved.status {
            log::info!("Item {} status {} -> {}", id, existing.status, saved.status);
        }
        Ok(saved)
    }

    /// Distinct categories currently in use, sorted
    pub fn categories(&self) -> DomainResult<Vec<String>> {
        let conn = self.db.lock()?;
        let mut stmt = conn.prepare("SELECT DISTINCT category FROM dd_items ORDER BY category")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let categories = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    pub fn count(&self) -> DomainResult<usize> {
        let conn = self.db.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM dd_items", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }

    fn query_items(conn: &Connection, sql: &str, args: Vec<String>) -> DomainResult<Vec<ChecklistItem>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(args), ItemRow::from_row)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row?.into_item()?);
        }
        Ok(items)
    }
}

impl Repository<ChecklistItem> for ItemRepository {
    fn create(&self, entity: &ChecklistItem) -> DomainResult<ChecklistItem> {
        let conn = self.db.lock()?;
        conn.execute(
            "INSERT INTO dd_items (category, item_name, status, responsible_party, due_date, notes, last_updated)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.category.as_str(),
                entity.item_name,
                entity.status.as_str(),
                entity.responsible_party,
                entity.due_date.map(timestamp::format_date),
                entity.notes,
                timestamp::format_timestamp(entity.last_updated),
            ],
        )?;

        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|_| DomainError::StorageUnavailable("item id out of range".to_string()))?;
        Ok(ChecklistItem {
            id,
            ..entity.clone()
        })
    }

    fn find_by_id(&self, id: u32) -> DomainResult<Option<ChecklistItem>> {
        let conn = self.db.lock()?;
        let sql = format!("SELECT {} FROM dd_items WHERE id = ?", ITEM_COLUMNS);
        let row = conn
            .query_row(&sql, params![id], ItemRow::from_row)
            .optional()?;
        row.map(ItemRow::into_item).transpose()
    }

    fn list(&self) -> DomainResult<Vec<ChecklistItem>> {
        self.list_filtered(&ItemFilter::default())
    }

    fn update(&self, entity: &ChecklistItem) -> DomainResult<ChecklistItem> {
        let conn = self.db.lock()?;
        let changed = conn.execute(
            "UPDATE dd_items
             SET category = ?, item_name = ?, status = ?, responsible_party = ?, due_date = ?, notes = ?, last_updated = ?
             WHERE id = ?",
            params![
                entity.category.as_str(),
                entity.item_name,
                entity.status.as_str(),
                entity.responsible_party,
                entity.due_date.map(timestamp::format_date),
                entity.notes,
                timestamp::format_timestamp(entity.last_updated),
                entity.id,
            ],
        )?;

        if changed == 0 {
            return Err(DomainError::item_not_found(entity.id));
        }
        Ok(entity.clone())
    }
}

impl FilterableRepository<ChecklistItem> for ItemRepository {
    type Filter = ItemFilter;

    fn list_filtered(&self, filter: &ItemFilter) -> DomainResult<Vec<ChecklistItem>> {
        let mut sql = format!("SELECT {} FROM dd_items WHERE 1=1", ITEM_COLUMNS);
        let mut args = Vec::new();

        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            args.push(category.clone());
        }
        if let Some(status) = filter.status {
            sql.push_str(" AND status = ?");
            args.push(status.as_str().to_string());
        }
        sql.push(' ');
        sql.push_str(ITEM_ORDER);

        let conn = self.db.lock()?;
        Self::query_items(&conn, &sql, args)
    }
}

/// Raw column values, before domain validation
struct ItemRow {
    id: u32,
    category: String,
    item_name: String,
    status: String,
    responsible_party: Option<String>,
    due_date: Option<String>,
    notes: Option<String>,
    last_updated: Option<String>,
}

impl ItemRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            category: row.get(1)?,
            item_name: row.get(2)?,
            status: row.get(3)?,
            responsible_party: row.get(4)?,
            due_date: row.get(5)?,
            notes: row.get(6)?,
            last_updated: row.get(7)?,
        })
    }

    fn into_item(self) -> DomainResult<ChecklistItem> {
        let status: ItemStatus = self.status.parse().map_err(|_| {
            DomainError::StorageUnavailable(format!("item {} has unrecognized stored status '{}'", self.id, self.status))
        })?;
        let category = Category::new(&self.category).map_err(|_| {
            DomainError::StorageUnavailable(format!("item {} has an empty category", self.id))
        })?;

        let due_date = match self.due_date.as_deref().map(timestamp::parse_date) {
            None => None,
            Some(Ok(date)) => date,
            Some(Err(_)) => {
                log::warn!("Ignoring malformed due date on item {}: {:?}", self.id, self.due_date);
                None
            }
        };
        let last_updated = self
            .last_updated
            .as_deref()
            .and_then(timestamp::parse_timestamp)
            .unwrap_or_default();

        Ok(ChecklistItem {
            id: self.id,
            category,
            item_name: self.item_name,
            status,
            responsible_party: crate::domain::normalize_text(self.responsible_party),
            due_date,
            notes: crate::domain::normalize_text(self.notes),
            last_updated,
        })
    }
}
