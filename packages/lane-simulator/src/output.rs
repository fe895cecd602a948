//! Scoreboard rendering.

use std::fmt::Write;

use backend::domain::scoreboard::{FrameCell, PlayerRow};
use backend::domain::Scoreboard;

const NAME_WIDTH: usize = 12;

pub fn render_json(board: &Scoreboard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}

/// Two lines per player: roll marks, then running totals.
pub fn render_text(board: &Scoreboard) -> String {
    let status = serde_json::to_value(board.status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "Match {} ({status})", board.match_id);
    let _ = write!(out, "{:<width$}", "", width = NAME_WIDTH);
    for frame_no in 1..=10 {
        let _ = write!(out, "|{:^width$}", frame_no, width = cell_width(frame_no));
    }
    let _ = writeln!(out, "| Total");

    for row in &board.players {
        render_row(&mut out, row);
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_row(out: &mut String, row: &PlayerRow) {
    let marker = if row.is_current { "*" } else { " " };
    let name: String = row.name.chars().take(NAME_WIDTH - 2).collect();
    let _ = write!(out, "{marker}{name:<width$}", width = NAME_WIDTH - 1);
    for cell in &row.frames {
        let _ = write!(out, "|{:^width$}", cell.marks.join(" "), width = cell_width(cell.frame_no));
    }
    let _ = writeln!(out, "| {}", row.total);

    let _ = write!(out, "{:<width$}", "", width = NAME_WIDTH);
    for cell in &row.frames {
        let _ = write!(out, "|{:>width$}", total_text(cell), width = cell_width(cell.frame_no));
    }
    let _ = writeln!(out, "|");
}

fn cell_width(frame_no: i8) -> usize {
    if frame_no == 10 {
        7
    } else {
        5
    }
}

fn total_text(cell: &FrameCell) -> String {
    cell.total.map(|t| format!("{t} ")).unwrap_or_default()
}
