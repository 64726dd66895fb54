//! Plain-text views for the terminal

use std::fmt::Write;

use dd_tracker_lib::commands::Dashboard;
use dd_tracker_lib::domain::{timestamp, ChecklistItem, ItemStatus};

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn due(item: &ChecklistItem) -> String {
    item.due_date
        .map(timestamp::format_date)
        .unwrap_or_else(|| "-".to_string())
}

/// One row per item: id, category, name, status, owner, due date
pub fn item_table(items: &[ChecklistItem]) -> String {
    if items.is_empty() {
        return "No matching items\n".to_string();
    }

    let name_width = items.iter().map(|i| i.item_name.len()).max().unwrap_or(4).max(4);
    let cat_width = items.iter().map(|i| i.category.as_str().len()).max().unwrap_or(8).max(8);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<cat_width$}  {:<name_width$}  {:<13}  {:<16}  {}",
        "ID", "Category", "Item", "Status", "Responsible", "Due"
    );
    for item in items {
        let _ = writeln!(
            out,
            "{:>4}  {:<cat_width$}  {:<name_width$}  {:<13}  {:<16}  {}",
            item.id,
            item.category.as_str(),
            item.item_name,
            item.status.as_str(),
            or_dash(&item.responsible_party),
            due(item)
        );
    }
    out
}

pub fn item_detail(item: &ChecklistItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", item.id, item.item_name);
    let _ = writeln!(out, "  Category:     {}", item.category);
    let _ = writeln!(out, "  Status:       {}", item.status);
    let _ = writeln!(out, "  Responsible:  {}", or_dash(&item.responsible_party));
    let _ = writeln!(out, "  Due:          {}", due(item));
    let _ = writeln!(out, "  Notes:        {}", or_dash(&item.notes));
    let _ = writeln!(out, "  Last updated: {} UTC", timestamp::format_timestamp(item.last_updated));
    out
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) / 5) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

pub fn dashboard(dash: &Dashboard) -> String {
    let summary = &dash.summary;
    let mut out = String::new();
    let _ = writeln!(out, "{}", dash.property_name);
    let _ = writeln!(out, "{}", "=".repeat(dash.property_name.len().max(8)));

    if summary.is_empty() {
        let _ = writeln!(out, "No items in database");
        return out;
    }

    let _ = writeln!(
        out,
        "Total: {}   Complete: {} ({:.1}%)   Open: {}   Flagged: {}   Overdue: {}",
        summary.total(),
        summary.complete(),
        summary.completion_percent,
        summary.open(),
        summary.counts.get(ItemStatus::IssueFlagged),
        summary.overdue.len()
    );

    let _ = writeln!(out, "\nStatus by Category");
    let width = summary.categories.iter().map(|c| c.category.len()).max().unwrap_or(0);
    for cat in &summary.categories {
        let _ = writeln!(
            out,
            "  {:<width$}  {}  {}/{}",
            cat.category,
            progress_bar(cat.progress_percent()),
            cat.complete(),
            cat.total()
        );
    }

    let _ = writeln!(out, "\nFlagged Issues");
    if summary.flagged.is_empty() {
        let _ = writeln!(out, "  No issues flagged");
    }
    for item in &summary.flagged {
        let _ = writeln!(
            out,
            "  #{} {}: {} (responsible: {}, due: {})",
            item.id,
            item.category,
            item.item_name,
            item.responsible_party.as_deref().unwrap_or("Unassigned"),
            due(item)
        );
    }

    let _ = writeln!(out, "\nOverdue");
    if summary.overdue.is_empty() {
        let _ = writeln!(out, "  No overdue items");
    }
    for item in &summary.overdue {
        let _ = writeln!(out, "  {}  #{} {}: {} [{}]", due(item), item.id, item.category, item.item_name, item.status);
    }

    let _ = writeln!(out, "\nDue in Next {} Days", summary.window_days);
    if summary.upcoming.is_empty() {
        let _ = writeln!(out, "  No items due in the next {} days", summary.window_days);
    }
    for item in &summary.upcoming {
        let _ = writeln!(out, "  {}  #{} {}: {} [{}]", due(item), item.id, item.category, item.item_name, item.status);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_tracker_lib::domain::NewItem;
    use dd_tracker_lib::report::summarize;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]", ".".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(progress_bar(130), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn test_item_table_columns() {
        let mut item = NewItem::new("Legal", "Entity Formation")
            .with_responsible_party("Counsel")
            .into_item(timestamp::now())
            .unwrap();
        item.id = 7;
        let table = item_table(&[item]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.trim_start().starts_with("7"));
        assert!(row.contains("Entity Formation"));
        assert!(row.contains("Counsel"));
        assert!(row.ends_with('-'));
    }

    #[test]
    fn test_dashboard_lists_overdue_items() {
        let today = timestamp::parse_date("2024-06-03").unwrap().unwrap();
        let mut late = NewItem::new("Financial", "Rent Roll Verification")
            .with_status(ItemStatus::InProgress)
            .with_due_date(today.pred_opt().unwrap())
            .into_item(timestamp::now())
            .unwrap();
        late.id = 3;
        let dash = Dashboard {
            property_name: "Cedar Court".into(),
            summary: summarize(&[late], today, 7),
        };

        let text = dashboard(&dash);
        assert!(text.contains("Overdue: 1"));
        assert!(text.contains("  2024-06-02  #3 Financial: Rent Roll Verification [In Progress]"));
        assert!(!text.contains("No overdue items"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(item_table(&[]), "No matching items\n");
    }
}
