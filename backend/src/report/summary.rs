//! Aggregates over the checklist
//!
//! Everything here is a pure function of the item list and a reference date.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::{ChecklistItem, ItemStatus};

/// Default look-ahead for upcoming deadlines, inclusive of both ends
pub const DUE_SOON_DAYS: u64 = 7;

/// One counter per status, indexed by [`ItemStatus::index`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts([usize; 5]);

impl StatusCounts {
    pub fn record(&mut self, status: ItemStatus) {
        self.0[status.index()] += 1;
    }

    pub fn get(&self, status: ItemStatus) -> usize {
        self.0[status.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Pairs in canonical status order
    pub fn iter(&self) -> impl Iterator<Item = (ItemStatus, usize)> + '_ {
        ItemStatus::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

/// Complete / total as a percentage rounded to one decimal; 0.0 when empty
pub fn completion_percentage(complete: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (complete as f64 * 1000.0 / total as f64).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub counts: StatusCounts,
}

impl CategorySummary {
    pub fn total(&self) -> usize {
        self.counts.total()
    }

    pub fn complete(&self) -> usize {
        self.counts.get(ItemStatus::Complete)
    }

    /// Whole-number progress used in the category breakdown
    pub fn progress_percent(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.complete() as f64 * 100.0 / total as f64).round() as u32
    }
}

/// Everything the dashboard and the report show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub today: NaiveDate,
    pub window_days: u64,
    pub counts: StatusCounts,
    pub completion_percent: f64,
    /// Open items past their due date, oldest first
    pub overdue: Vec<ChecklistItem>,
    /// Alphabetical by category
    pub categories: Vec<CategorySummary>,
    pub flagged: Vec<ChecklistItem>,
    pub upcoming: Vec<ChecklistItem>,
}

impl ChecklistSummary {
    pub fn total(&self) -> usize {
        self.counts.total()
    }

    pub fn complete(&self) -> usize {
        self.counts.get(ItemStatus::Complete)
    }

    pub fn open(&self) -> usize {
        self.total() - self.complete()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn by_due_date(a: &ChecklistItem, b: &ChecklistItem) -> Ordering {
    (a.due_date, &a.category, &a.item_name, a.id).cmp(&(b.due_date, &b.category, &b.item_name, b.id))
}

/// Compute totals, the category breakdown, flagged, overdue and upcoming items
pub fn summarize(items: &[ChecklistItem], today: NaiveDate, window_days: u64) -> ChecklistSummary {
    let mut counts = StatusCounts::default();
    let mut by_category: BTreeMap<&str, StatusCounts> = BTreeMap::new();
    let mut flagged = Vec::new();
    let mut upcoming = Vec::new();
    let mut overdue = Vec::new();

    let until = today.checked_add_days(Days::new(window_days)).unwrap_or(NaiveDate::MAX);

    for item in items {
        counts.record(item.status);
        by_category
            .entry(item.category.as_str())
            .or_default()
            .record(item.status);

        if item.status.is_flagged() {
            flagged.push(item.clone());
        }
        if item.is_due_between(today, until) {
            upcoming.push(item.clone());
        }
        if item.is_overdue(today) {
            overdue.push(item.clone());
        }
    }

    flagged.sort_by(|a, b| (&a.category, &a.item_name, a.id).cmp(&(&b.category, &b.item_name, b.id)));
    upcoming.sort_by(by_due_date);
    overdue.sort_by(by_due_date);

    let categories = by_category
        .into_iter()
        .map(|(category, counts)| CategorySummary {
            category: category.to_string(),
            counts,
        })
        .collect();

    ChecklistSummary {
        today,
        window_days,
        completion_percent: completion_percentage(counts.get(ItemStatus::Complete), counts.total()),
        counts,
        overdue,
        categories,
        flagged,
        upcoming,
    }
}
