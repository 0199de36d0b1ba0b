use std::collections::BTreeMap;

use nestpath_core::{VertexId, VertexMap};

use crate::{SearchRecord, SelectionRule};

/// A vertex with its `g` and `h` at the moment a trace row was taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceEntry {
    pub vertex: VertexId,
    pub g: f64,
    pub h: f64,
}

impl TraceEntry {
    pub(crate) fn snapshot(vertex: VertexId, records: &VertexMap<SearchRecord>) -> Self {
        let record = &records[vertex];
        TraceEntry {
            vertex,
            g: record.g,
            h: record.h,
        }
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// The state of the frontier during one iteration of the search.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRow {
    /// Nest members ordered by `g`.
    pub nest: Vec<TraceEntry>,
    /// Open vertices outside the nest ordered by `f`.
    pub open: Vec<TraceEntry>,
    pub selected: VertexId,
    pub rule: SelectionRule,
    /// The closed set after the selected vertex was closed; `None` when the goal was selected.
    pub closed: Option<Vec<TraceEntry>>,
    /// `f_m` after the selection.
    pub threshold: f64,
}

impl TraceRow {
    pub fn is_goal(&self) -> bool {
        self.closed.is_none()
    }
}

/// Iteration-by-iteration log of a search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTrace {
    rows: Vec<TraceRow>,
}

impl SearchTrace {
    pub(crate) fn push(&mut self, row: TraceRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected vertices, in selection order.
    pub fn selections(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.rows.iter().map(|row| row.selected)
    }

    pub fn selection_count(&self, vertex: VertexId) -> usize {
        self.selections().filter(|&v| v == vertex).count()
    }

    /// Vertices that were selected more than once because they were reopened, ascending.
    pub fn reexpanded(&self) -> Vec<VertexId> {
        let mut counts = BTreeMap::new();
        for vertex in self.selections() {
            *counts.entry(vertex).or_insert(0usize) += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(vertex, _)| vertex)
            .collect()
    }
}
