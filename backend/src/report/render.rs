//! Markdown serialization of a report document

use std::fmt::Write;

use super::document::{Block, Entry, ReportDocument, SectionKind};

const RULE: &str = "---";
const FOOTER: &str = "*End of Report*";

fn write_entry(out: &mut String, entry: &Entry) {
    let _ = writeln!(out, "- **{}:** {}", entry.label, entry.text);
    for detail in &entry.details {
        let _ = writeln!(out, "  - {}", detail);
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Field { label, value } => {
            let _ = writeln!(out, "**{}:** {}\n", label, value);
        }
        Block::Group { title, entries } => {
            let _ = writeln!(out, "### {}\n", title);
            entries.iter().for_each(|e| write_entry(out, e));
            out.push('\n');
        }
        Block::List { entries } => {
            entries.iter().for_each(|e| write_entry(out, e));
            out.push('\n');
        }
        Block::Empty { message } => {
            let _ = writeln!(out, "{}\n", message);
        }
    }
}

/// Render the document as Markdown
///
/// The header section becomes the title block; every other section is an
/// `##` heading separated by horizontal rules.
pub fn render_markdown(doc: &ReportDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", doc.title);

    for section in &doc.sections {
        if section.kind == SectionKind::Header {
            let _ = writeln!(out, "## {}\n", section.heading);
        } else {
            let _ = writeln!(out, "{}\n", RULE);
            let _ = writeln!(out, "## {}\n", section.heading);
        }
        section.blocks.iter().for_each(|b| write_block(&mut out, b));
    }

    let _ = writeln!(out, "{}\n", RULE);
    out.push_str(FOOTER);
    out.push('\n');
    out
}
