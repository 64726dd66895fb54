//! Checklist Item Entity
//!
//! One trackable due diligence task, grouped by category.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::entity::{DomainError, DomainResult, Entity};

/// Progress state of a checklist item
///
/// The display strings are the persisted values and the only accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Complete")]
    Complete,
    /// Needs special attention; listed separately in reports
    #[serde(rename = "Issue Flagged")]
    IssueFlagged,
}

impl ItemStatus {
    /// All statuses in canonical display order
    pub const ALL: [ItemStatus; 5] = [
        ItemStatus::NotStarted,
        ItemStatus::InProgress,
        ItemStatus::UnderReview,
        ItemStatus::Complete,
        ItemStatus::IssueFlagged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "Not Started",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::UnderReview => "Under Review",
            ItemStatus::Complete => "Complete",
            ItemStatus::IssueFlagged => "Issue Flagged",
        }
    }

    /// Position in [`ItemStatus::ALL`], used to index per-status counters
    pub fn index(&self) -> usize {
        match self {
            ItemStatus::NotStarted => 0,
            ItemStatus::InProgress => 1,
            ItemStatus::UnderReview => 2,
            ItemStatus::Complete => 3,
            ItemStatus::IssueFlagged => 4,
        }
    }

    pub fn is_complete(&self) -> bool {
        *self == ItemStatus::Complete
    }

    pub fn is_flagged(&self) -> bool {
        *self == ItemStatus::IssueFlagged
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unrecognized status '{}'", s)))
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A due diligence checklist item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Assigned by the store, never reused
    pub id: u32,
    pub category: Category,
    pub item_name: String,
    pub status: ItemStatus,
    pub responsible_party: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    /// Time of the most recent write to this row (UTC)
    pub last_updated: NaiveDateTime,
}

impl ChecklistItem {
    /// Open items are anything not yet Complete
    pub fn is_open(&self) -> bool {
        !self.status.is_complete()
    }

    /// Due on or before `until`, starting at `from`, and still open
    pub fn is_due_between(&self, from: NaiveDate, until: NaiveDate) -> bool {
        self.is_open() && self.due_date.is_some_and(|due| due >= from && due <= until)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date.is_some_and(|due| due < today)
    }
}

impl Entity for ChecklistItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Trim optional free text; blank means absent
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_name(item_name: &str) -> DomainResult<String> {
    let trimmed = item_name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("item_name must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Input for adding a checklist item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewItem {
    pub category: String,
    pub item_name: String,
    #[serde(default)]
    pub status: ItemStatus,
    pub responsible_party: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewItem {
    pub fn new(category: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item_name: item_name.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_responsible_party(mut self, party: impl Into<String>) -> Self {
        self.responsible_party = Some(party.into());
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validate and build an unsaved item (id 0, assigned by the store)
    pub fn into_item(self, now: NaiveDateTime) -> DomainResult<ChecklistItem> {
        let category = Category::new(&self.category)?;
        let item_name = require_name(&self.item_name)?;
        Ok(ChecklistItem {
            id: 0,
            category,
            item_name,
            status: self.status,
            responsible_party: normalize_text(self.responsible_party),
            due_date: self.due_date,
            notes: normalize_text(self.notes),
            last_updated: now,
        })
    }
}

/// Partial update: `None` leaves a field alone, `Some(None)` clears an optional field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub category: Option<String>,
    pub item_name: Option<String>,
    pub status: Option<ItemStatus>,
    pub responsible_party: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

impl ItemUpdate {
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ItemUpdate::default()
    }

    /// Produce the updated row without touching `item`. Fails before any
    /// field is changed if an input is invalid.
    pub fn apply_to(&self, item: &ChecklistItem, now: NaiveDateTime) -> DomainResult<ChecklistItem> {
        let category = match &self.category {
            Some(c) => Category::new(c)?,
            None => item.category.clone(),
        };
        let item_name = match &self.item_name {
            Some(n) => require_name(n)?,
            None => item.item_name.clone(),
        };

        Ok(ChecklistItem {
            id: item.id,
            category,
            item_name,
            status: self.status.unwrap_or(item.status),
            responsible_party: match &self.responsible_party {
                Some(v) => normalize_text(v.clone()),
                None => item.responsible_party.clone(),
            },
            due_date: self.due_date.unwrap_or(item.due_date),
            notes: match &self.notes {
                Some(v) => normalize_text(v.clone()),
                None => item.notes.clone(),
            },
            last_updated: now.max(item.last_updated),
        })
    }
}

/// Exact-match filter for listing items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
}

impl ItemFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            status: None,
        }
    }

    pub fn status(status: ItemStatus) -> Self {
        Self {
            category: None,
            status: Some(status),
        }
    }

    pub fn matches(&self, item: &ChecklistItem) -> bool {
        self.category.as_deref().map_or(true, |c| item.category.as_str() == c)
            && self.status.map_or(true, |s| item.status == s)
    }
}
