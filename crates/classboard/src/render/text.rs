//! Fixed-width terminal rendering of the timetable.

use crate::timetable::TimetableGrid;
use crate::types::Weekday;
use std::fmt::Write;

const LABEL_WIDTH: usize = 6;
const CELL_WIDTH: usize = 18;

/// Renders the grid as a plain-text table, one line per hour.
///
/// Occupied cells show "name @ room", cut to the column width.
pub fn timetable(grid: &TimetableGrid) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<w$}", "", w = LABEL_WIDTH);
    for day in Weekday::ALL {
        let _ = write!(out, "|{:<w$}", day.as_str(), w = CELL_WIDTH);
    }
    out.push('\n');
    out.push_str(&"-".repeat(LABEL_WIDTH + (CELL_WIDTH + 1) * Weekday::ALL.len()));
    out.push('\n');

    for row in &grid.rows {
        let _ = write!(out, "{:<w$}", row.label, w = LABEL_WIDTH);
        for cell in &row.cells {
            let text = cell
                .class
                .as_ref()
                .map(|c| format!("{} @ {}", c.name, c.room_name))
                .unwrap_or_default();
            let _ = write!(out, "|{:<w$}", truncate(&text, CELL_WIDTH), w = CELL_WIDTH);
        }
        out.push('\n');
    }

    if !grid.hidden.is_empty() {
        let ids: Vec<String> = grid.hidden.iter().map(|id| id.to_string()).collect();
        let _ = writeln!(out, "hidden by earlier classes in the same slot: {}", ids.join(", "));
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
