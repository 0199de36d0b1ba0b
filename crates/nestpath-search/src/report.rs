use std::fmt::Write;

use nestpath_core::traits::SearchSpace;
use nestpath_core::VertexId;

use crate::{SearchOutcome, TraceEntry};

/// Renders the trace of `outcome` as a Markdown table followed by the resulting path.
///
/// Each entry is written as `name(g+h)`; the vertex selected in a row is underlined. The row
/// that selected the goal has empty closed-set and `f_m` cells.
pub fn render_markdown<S: SearchSpace>(space: &S, outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    out.push_str("|Nest|Open set \\ Nest|Closed set|f_m|\n");
    out.push_str("|-|-|-|-|\n");
    for row in outcome.trace.rows() {
        out.push('|');
        write_entries(&mut out, space, &row.nest, Some(row.selected));
        out.push('|');
        write_entries(&mut out, space, &row.open, Some(row.selected));
        out.push('|');
        match &row.closed {
            Some(closed) => {
                write_entries(&mut out, space, closed, None);
                let _ = writeln!(out, "|{}|", row.threshold);
            }
            None => out.push_str("||\n"),
        }
    }
    out.push('\n');
    out.push_str(&render_summary(space, outcome));
    out.push('\n');
    out
}

/// `Shortest path from X to Y: [...]`, or `not found`.
pub fn render_summary<S: SearchSpace>(space: &S, outcome: &SearchOutcome) -> String {
    let start = space.name(outcome.start);
    let goal = space.name(outcome.goal);
    match outcome.path_names(space) {
        Some(names) => format!("Shortest path from {start} to {goal}: [{}]", names.join(", ")),
        None => format!("Shortest path from {start} to {goal}: not found"),
    }
}

fn write_entries<S: SearchSpace>(
    out: &mut String,
    space: &S,
    entries: &[TraceEntry],
    selected: Option<VertexId>,
) {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let name = space.name(entry.vertex);
        if Some(entry.vertex) == selected {
            let _ = write!(out, "<u>{name}({}+{})</u>", entry.g, entry.h);
        } else {
            let _ = write!(out, "{name}({}+{})", entry.g, entry.h);
        }
    }
}
