use std::cmp::Ordering;

use nestpath_core::{VertexId, VertexMap};

use crate::{SearchRecord, Status};

/// Which rule picked a vertex for expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionRule {
    /// Cheapest-`g` member of the nest; the threshold is unchanged.
    Nest,
    /// Cheapest-`f` member of the open set; the threshold is raised to its `f`.
    Frontier,
}

/// Outcome of one call to [`Frontier::select`].
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub vertex: VertexId,
    pub rule: SelectionRule,
    /// Open vertices with `f` below the threshold, ordered by `g`.
    pub nest: Vec<VertexId>,
    /// The remaining open vertices, ordered by `f`.
    pub rest: Vec<VertexId>,
}

/// Open and closed sets together with the threshold `f_m`.
///
/// Ties on `g` (within the nest) or `f` (outside it) are broken by ascending [`VertexId`].
#[derive(Clone, Debug)]
pub struct Frontier {
    open: Vec<VertexId>,
    closed: Vec<VertexId>,
    threshold: f64,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    pub fn new() -> Self {
        Frontier {
            open: vec![],
            closed: vec![],
            threshold: 0.0,
        }
    }

    /// The current `f_m`. Never decreases.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Open vertices in the order they were (re)opened.
    pub fn open_vertices(&self) -> &[VertexId] {
        &self.open
    }

    /// Closed vertices in the order they were closed.
    pub fn closed_vertices(&self) -> &[VertexId] {
        &self.closed
    }

    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    /// Ensures `vertex` is in the open set, moving it out of the closed set if it was there.
    ///
    /// Returns `true` if the vertex was reopened.
    pub fn open(&mut self, vertex: VertexId, records: &mut VertexMap<SearchRecord>) -> bool {
        let record = &mut records[vertex];
        match record.status {
            Status::Open => false,
            Status::Unseen => {
                record.status = Status::Open;
                self.open.push(vertex);
                false
            }
            Status::Closed => {
                record.status = Status::Open;
                self.closed.retain(|&v| v != vertex);
                self.open.push(vertex);
                true
            }
        }
    }

    /// Moves an open `vertex` to the closed set.
    #[track_caller]
    pub fn close(&mut self, vertex: VertexId, records: &mut VertexMap<SearchRecord>) {
        let index = self
            .open
            .iter()
            .position(|&v| v == vertex)
            .expect("closed vertex must be open");
        self.open.remove(index);
        self.closed.push(vertex);
        records[vertex].status = Status::Closed;
    }

    /// Partitions the open set around the threshold and picks the next vertex to expand.
    ///
    /// Returns `None` once the open set is exhausted. The selected vertex stays open.
    pub fn select(&mut self, records: &VertexMap<SearchRecord>) -> Option<Selection> {
        if self.open.is_empty() {
            return None;
        }

        let threshold = self.threshold;
        let (mut nest, mut rest): (Vec<_>, Vec<_>) = self
            .open
            .iter()
            .copied()
            .partition(|&v| records[v].f < threshold);
        nest.sort_by(|&a, &b| by_key(records[a].g, a, records[b].g, b));
        rest.sort_by(|&a, &b| by_key(records[a].f, a, records[b].f, b));

        let (vertex, rule) = match nest.first() {
            Some(&vertex) => (vertex, SelectionRule::Nest),
            None => {
                let vertex = rest[0];
                debug_assert!(records[vertex].f >= threshold);
                self.threshold = records[vertex].f;
                (vertex, SelectionRule::Frontier)
            }
        };

        Some(Selection {
            vertex,
            rule,
            nest,
            rest,
        })
    }
}

fn by_key(lhs: f64, lhs_id: VertexId, rhs: f64, rhs_id: VertexId) -> Ordering {
    lhs.total_cmp(&rhs).then(lhs_id.cmp(&rhs_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    fn records(gh: &[(f64, f64)]) -> VertexMap<SearchRecord> {
        let mut map = VertexMap::new(gh.len(), |_| SearchRecord::default());
        for (i, &(g, h)) in gh.iter().enumerate() {
            map[v(i)].improve(g, None, || h);
        }
        map
    }

    #[test]
    fn empty_frontier_selects_nothing() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_exhausted());
        assert_eq!(frontier.select(&records(&[])), None);
    }

    #[test]
    fn frontier_rule_raises_threshold() {
        let mut recs = records(&[(0.0, 7.0), (3.0, 1.0)]);
        let mut frontier = Frontier::new();
        frontier.open(v(0), &mut recs);
        frontier.open(v(1), &mut recs);

        let selection = frontier.select(&recs).unwrap();
        assert_eq!(selection.rule, SelectionRule::Frontier);
        assert_eq!(selection.vertex, v(1));
        assert!(selection.nest.is_empty());
        assert_eq!(selection.rest, [v(1), v(0)]);
        assert_eq!(frontier.threshold(), 4.0);
    }

    #[test]
    fn nest_prefers_lowest_g_over_lowest_f() {
        // f: 10, 6, 8
        let mut recs = records(&[(0.0, 10.0), (5.0, 1.0), (1.0, 7.0)]);
        let mut frontier = Frontier::new();
        frontier.open(v(0), &mut recs);
        assert_eq!(frontier.select(&recs).unwrap().vertex, v(0));
        frontier.close(v(0), &mut recs);
        frontier.open(v(1), &mut recs);
        frontier.open(v(2), &mut recs);

        let selection = frontier.select(&recs).unwrap();
        assert_eq!(selection.rule, SelectionRule::Nest);
        assert_eq!(selection.vertex, v(2));
        assert_eq!(selection.nest, [v(2), v(1)]);
        assert!(selection.rest.is_empty());
        assert_eq!(frontier.threshold(), 10.0);
    }

    #[test]
    fn ties_break_by_vertex_id() {
        let mut recs = records(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        let mut frontier = Frontier::new();
        for i in [2, 0, 1] {
            frontier.open(v(i), &mut recs);
        }
        let selection = frontier.select(&recs).unwrap();
        assert_eq!(selection.vertex, v(0));
        assert_eq!(selection.rest, [v(0), v(1), v(2)]);
    }

    #[test]
    fn reopening_moves_vertex_out_of_closed_set() {
        let mut recs = records(&[(0.0, 0.0), (1.0, 0.0)]);
        let mut frontier = Frontier::new();
        assert!(!frontier.open(v(0), &mut recs));
        assert!(!frontier.open(v(1), &mut recs));
        frontier.close(v(1), &mut recs);
        assert_eq!(frontier.closed_vertices(), [v(1)]);
        assert!(recs[v(1)].is_closed());

        assert!(frontier.open(v(1), &mut recs));
        assert!(recs[v(1)].is_open());
        assert!(frontier.closed_vertices().is_empty());
        assert_eq!(frontier.open_vertices(), [v(0), v(1)]);
        // Already open: no duplicate entry.
        assert!(!frontier.open(v(1), &mut recs));
        assert_eq!(frontier.open_vertices().len(), 2);
    }
}
