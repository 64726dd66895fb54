//! Turns a checklist summary into a report document

use chrono::NaiveDateTime;

use crate::domain::{timestamp, ChecklistItem};
use super::document::{Block, Entry, ReportDocument, Section, SectionKind};
use super::summary::ChecklistSummary;

pub const REPORT_TITLE: &str = "Due Diligence Status Report";

const UNASSIGNED: &str = "Unassigned";

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value.as_deref().unwrap_or(placeholder)
}

fn due_text(item: &ChecklistItem, placeholder: &str) -> String {
    item.due_date
        .map(timestamp::format_date)
        .unwrap_or_else(|| placeholder.to_string())
}

fn header(property_name: &str, generated_at: NaiveDateTime) -> Section {
    let mut section = Section::new(SectionKind::Header, property_name);
    section.push(Block::Field {
        label: "Generated".into(),
        value: timestamp::format_timestamp(generated_at),
    });
    section
}

fn executive_summary(summary: &ChecklistSummary) -> Section {
    let mut section = Section::new(SectionKind::ExecutiveSummary, "Executive Summary");
    if summary.is_empty() {
        section.push(Block::Empty {
            message: "No items are being tracked. Completion: 0.0%".into(),
        });
        return section;
    }

    let mut entries = vec![
        Entry::labeled("Total Items", summary.total().to_string()),
        Entry::labeled(
            "Completed",
            format!("{} ({:.1}%)", summary.complete(), summary.completion_percent),
        ),
        Entry::labeled("Open Items", summary.open().to_string()),
    ];
    entries.extend(
        summary
            .counts
            .iter()
            .map(|(status, n)| Entry::labeled(status.as_str(), n.to_string())),
    );
    entries.push(Entry::labeled("Overdue", summary.overdue.len().to_string()));
    section.push(Block::List { entries });
    section
}

fn category_breakdown(summary: &ChecklistSummary) -> Section {
    let mut section = Section::new(SectionKind::CategoryBreakdown, "Status by Category");
    if summary.categories.is_empty() {
        section.push(Block::Empty {
            message: "No categories".into(),
        });
        return section;
    }

    for category in &summary.categories {
        let mut entries = vec![Entry::labeled(
            "Progress",
            format!("{}/{} ({}%)", category.complete(), category.total(), category.progress_percent()),
        )];
        entries.extend(
            category
                .counts
                .iter()
                .map(|(status, n)| Entry::labeled(status.as_str(), n.to_string())),
        );
        section.push(Block::Group {
            title: category.category.clone(),
            entries,
        });
    }
    section
}

fn flagged_issues(summary: &ChecklistSummary) -> Section {
    let mut section = Section::new(SectionKind::FlaggedIssues, "Flagged Issues");
    if summary.flagged.is_empty() {
        section.push(Block::Empty {
            message: "No issues flagged".into(),
        });
        return section;
    }

    for item in &summary.flagged {
        section.push(Block::Group {
            title: format!("{}: {}", item.category, item.item_name),
            entries: vec![
                Entry::labeled("Responsible", or_placeholder(&item.responsible_party, UNASSIGNED)),
                Entry::labeled("Due Date", due_text(item, "Not set")),
                Entry::labeled("Notes", or_placeholder(&item.notes, "No notes")),
            ],
        });
    }
    section
}

fn overdue_items(summary: &ChecklistSummary) -> Section {
    let mut section = Section::new(SectionKind::OverdueItems, "Overdue Items");
    if summary.overdue.is_empty() {
        section.push(Block::Empty {
            message: "No overdue items".into(),
        });
        return section;
    }

    let entries = summary
        .overdue
        .iter()
        .map(|item| {
            Entry::labeled(item.category.as_str(), item.item_name.clone())
                .with_detail(format!("Status: {}", item.status))
                .with_detail(format!("Responsible: {}", or_placeholder(&item.responsible_party, UNASSIGNED)))
                .with_detail(format!("Was due: {}", due_text(item, "Not set")))
        })
        .collect();
    section.push(Block::List { entries });
    section
}

fn upcoming_deadlines(summary: &ChecklistSummary) -> Section {
    let heading = format!("Items Due in Next {} Days", summary.window_days);
    let mut section = Section::new(SectionKind::UpcomingDeadlines, heading);
    if summary.upcoming.is_empty() {
        section.push(Block::Empty {
            message: format!("No items due in the next {} days", summary.window_days),
        });
        return section;
    }

    let entries = summary
        .upcoming
        .iter()
        .map(|item| {
            Entry::labeled(item.category.as_str(), item.item_name.clone())
                .with_detail(format!("Status: {}", item.status))
                .with_detail(format!("Responsible: {}", or_placeholder(&item.responsible_party, UNASSIGNED)))
                .with_detail(format!("Due: {}", due_text(item, "Not set")))
        })
        .collect();
    section.push(Block::List { entries });
    section
}

/// Assemble the full report. Pure: same inputs give the same document.
pub fn build_report(property_name: &str, summary: &ChecklistSummary, generated_at: NaiveDateTime) -> ReportDocument {
    ReportDocument {
        title: REPORT_TITLE.to_string(),
        sections: vec![
            header(property_name, generated_at),
            executive_summary(summary),
            category_breakdown(summary),
            flagged_issues(summary),
            overdue_items(summary),
            upcoming_deadlines(summary),
        ],
    }
}

