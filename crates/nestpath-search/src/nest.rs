use nestpath_core::traits::{Cost, Expander, SearchSpace, Successor};
use nestpath_core::{LookupError, VertexId, VertexMap};
use tracing::{debug, trace};

use crate::{Frontier, SearchRecord, SearchTrace, Selection, TraceEntry, TraceRow};

/// Result of a search, including the bookkeeping it finished with.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub start: VertexId,
    pub goal: VertexId,
    /// Vertices from start to goal, or `None` if the goal is unreachable.
    pub path: Option<Vec<VertexId>>,
    pub trace: SearchTrace,
    /// Final per-vertex state; `parent` links form a tree rooted at `start`.
    pub records: VertexMap<SearchRecord>,
    /// Final open set, in the order vertices were (re)opened.
    pub open: Vec<VertexId>,
    /// Final closed set, in the order vertices were closed.
    pub closed: Vec<VertexId>,
    /// Final value of `f_m`.
    pub threshold: f64,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Total cost of the returned path.
    pub fn cost(&self) -> Option<f64> {
        self.path.as_ref().map(|_| self.records[self.goal].g)
    }

    pub fn path_names<'s, S: SearchSpace>(&self, space: &'s S) -> Option<Vec<&'s str>> {
        self.path
            .as_ref()
            .map(|path| path.iter().map(|&v| space.name(v)).collect())
    }
}

/// Searches `space` for a path from the vertex named `start` to the vertex named `goal`.
///
/// See [`search_between`] for the algorithm and its preconditions.
pub fn search<S>(space: &S, start: &str, goal: &str) -> Result<SearchOutcome, LookupError>
where
    S: SearchSpace,
    for<'a> <S::Expander<'a> as Expander>::Edge: Successor + Cost,
{
    let start = space.lookup(start)?;
    let goal = space.lookup(goal)?;
    Ok(search_between(space, start, goal))
}

/// Searches `space` for a path from `start` to `goal`.
///
/// Each iteration the open set is split by the threshold `f_m`. If any open vertex has
/// `f < f_m`, the one with the smallest `g` is expanded; otherwise the one with the smallest `f`
/// is expanded and `f_m` is raised to its `f`. Relaxing an edge into a closed vertex reopens it,
/// so a vertex may be expanded more than once.
///
/// The space must be acyclic with non-negative edge costs and heuristics. This is not checked;
/// a zero-cost cycle can make the search run forever.
pub fn search_between<S>(space: &S, start: VertexId, goal: VertexId) -> SearchOutcome
where
    S: SearchSpace,
    for<'a> <S::Expander<'a> as Expander>::Edge: Successor + Cost,
{
    let mut records = space.new_auxiliary(|_| SearchRecord::default());
    let mut frontier = Frontier::new();
    let mut trace = SearchTrace::default();
    let mut expander = space.new_expander();
    let mut edges = vec![];

    records[start].improve(0.0, None, || space.heuristic(start));
    frontier.open(start, &mut records);

    while let Some(selection) = frontier.select(&records) {
        let Selection {
            vertex,
            rule,
            nest,
            rest,
        } = selection;
        debug!(
            vertex = space.name(vertex),
            ?rule,
            g = records[vertex].g,
            f = records[vertex].f,
            threshold = frontier.threshold(),
            "select"
        );

        let nest = snapshot(&nest, &records);
        let open = snapshot(&rest, &records);

        if vertex == goal {
            trace.push(TraceRow {
                nest,
                open,
                selected: vertex,
                rule,
                closed: None,
                threshold: frontier.threshold(),
            });
            let path = reconstruct(&records, goal);
            return finish(start, goal, Some(path), trace, records, frontier);
        }

        frontier.close(vertex, &mut records);
        trace.push(TraceRow {
            nest,
            open,
            selected: vertex,
            rule,
            closed: Some(snapshot(frontier.closed_vertices(), &records)),
            threshold: frontier.threshold(),
        });

        edges.clear();
        expander.expand(vertex, &mut edges);

        let vertex_g = records[vertex].g;
        for edge in &edges {
            let successor = edge.successor();
            let new_g = vertex_g + edge.cost();
            if new_g < records[successor].g {
                records[successor].improve(new_g, Some(vertex), || space.heuristic(successor));
                let reopened = frontier.open(successor, &mut records);
                trace!(
                    from = space.name(vertex),
                    to = space.name(successor),
                    g = new_g,
                    reopened,
                    "relax"
                );
            }
        }
    }

    debug!(
        start = space.name(start),
        goal = space.name(goal),
        "open set exhausted"
    );
    finish(start, goal, None, trace, records, frontier)
}

fn snapshot(vertices: &[VertexId], records: &VertexMap<SearchRecord>) -> Vec<TraceEntry> {
    vertices
        .iter()
        .map(|&v| TraceEntry::snapshot(v, records))
        .collect()
}

fn reconstruct(records: &VertexMap<SearchRecord>, goal: VertexId) -> Vec<VertexId> {
    let mut path = vec![goal];
    while let Some(parent) = records[path[path.len() - 1]].parent {
        debug_assert!(path.len() <= records.len(), "parent links form a cycle");
        path.push(parent);
    }
    path.reverse();
    path
}

fn finish(
    start: VertexId,
    goal: VertexId,
    path: Option<Vec<VertexId>>,
    trace: SearchTrace,
    records: VertexMap<SearchRecord>,
    frontier: Frontier,
) -> SearchOutcome {
    SearchOutcome {
        start,
        goal,
        path,
        trace,
        records,
        open: frontier.open_vertices().to_vec(),
        closed: frontier.closed_vertices().to_vec(),
        threshold: frontier.threshold(),
    }
}

#[cfg(test)]
mod tests {
    use nestpath_dag::Dag;

    use super::*;
    use crate::SelectionRule;

    fn build(vertices: &[(&str, f64)], edges: &[(&str, &str, u32)]) -> Dag {
        let mut dag = Dag::new();
        for &(name, h) in vertices {
            dag.add_vertex(name, h);
        }
        for &(from, to, w) in edges {
            let from = dag.lookup(from).unwrap();
            let to = dag.lookup(to).unwrap();
            dag.add_edge(from, to, w).unwrap();
        }
        dag
    }

    fn names(dag: &Dag, outcome: &SearchOutcome) -> Vec<String> {
        outcome
            .path_names(dag)
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn chain_with_heuristic() {
        let dag = build(
            &[("S", 5.0), ("A", 1.0), ("T", 0.0)],
            &[("S", "A", 4), ("A", "T", 1)],
        );
        let outcome = search(&dag, "S", "T").unwrap();
        assert_eq!(names(&dag, &outcome), ["S", "A", "T"]);
        assert_eq!(outcome.cost(), Some(5.0));
        assert_eq!(outcome.records[dag.lookup("T").unwrap()].g, 5.0);
    }

    #[test]
    fn picks_cheaper_branch_with_zero_heuristic() {
        let dag = build(
            &[("S", 0.0), ("A", 0.0), ("B", 0.0), ("T", 0.0)],
            &[("S", "A", 1), ("S", "B", 1), ("A", "T", 10), ("B", "T", 1)],
        );
        let outcome = search(&dag, "S", "T").unwrap();
        assert_eq!(names(&dag, &outcome), ["S", "B", "T"]);
        assert_eq!(outcome.cost(), Some(2.0));
    }

    #[test]
    fn start_equal_to_goal() {
        let dag = build(&[("S", 3.0), ("T", 0.0)], &[("S", "T", 2)]);
        let outcome = search(&dag, "S", "S").unwrap();
        assert_eq!(names(&dag, &outcome), ["S"]);
        assert_eq!(outcome.cost(), Some(0.0));
        assert_eq!(outcome.trace.len(), 1);
        assert!(outcome.trace.rows()[0].is_goal());
    }

    #[test]
    fn unreachable_goal_closes_everything_reachable() {
        let dag = build(
            &[("S", 0.0), ("A", 0.0), ("B", 0.0), ("X", 0.0), ("T", 0.0)],
            &[("S", "A", 1), ("A", "B", 2), ("S", "B", 5), ("X", "T", 1)],
        );
        let outcome = search(&dag, "S", "T").unwrap();
        assert!(!outcome.is_found());
        assert_eq!(outcome.cost(), None);
        assert!(outcome.open.is_empty());

        let mut closed = outcome.closed.clone();
        closed.sort();
        let reachable = dag.reachable_from(dag.lookup("S").unwrap());
        let expected: Vec<_> = reachable
            .iter()
            .filter(|&(_, &r)| r)
            .map(|(v, _)| v)
            .collect();
        assert_eq!(closed, expected);
    }

    #[test]
    fn lookup_failures_are_reported() {
        let mut dag = build(&[("S", 0.0), ("T", 0.0)], &[("S", "T", 1)]);
        assert_eq!(
            search(&dag, "S", "Q").unwrap_err(),
            LookupError::Missing("Q".into())
        );
        dag.add_vertex("S", 0.0);
        assert_eq!(
            search(&dag, "S", "T").unwrap_err(),
            LookupError::Ambiguous {
                name: "S".into(),
                count: 2
            }
        );
    }

    #[test]
    fn nest_drains_by_path_cost() {
        // After S is expanded f_m = 10 and both P (g 5, f 6) and Q (g 1, f 8) sit in the nest.
        // Plain A* would take P first; the nest takes Q.
        let dag = build(
            &[("S", 10.0), ("P", 1.0), ("Q", 7.0), ("T", 0.0)],
            &[("S", "P", 5), ("S", "Q", 1), ("P", "T", 1), ("Q", "T", 100)],
        );
        let outcome = search(&dag, "S", "T").unwrap();
        assert_eq!(names(&dag, &outcome), ["S", "P", "T"]);
        assert_eq!(outcome.cost(), Some(6.0));

        let [s, p, q, t] = ["S", "P", "Q", "T"].map(|n| dag.lookup(n).unwrap());
        let rows = outcome.trace.rows();
        assert_eq!(outcome.trace.selections().collect::<Vec<_>>(), [s, q, p, t]);
        assert_eq!(rows[0].rule, SelectionRule::Frontier);
        assert_eq!(rows[0].threshold, 10.0);

        let nest: Vec<_> = rows[1].nest.iter().map(|e| e.vertex).collect();
        assert_eq!(nest, [q, p]);
        assert_eq!(rows[1].rule, SelectionRule::Nest);
        assert!(rows[1].open.is_empty());
        assert_eq!(rows[1].threshold, 10.0);

        assert_eq!(rows[3].rule, SelectionRule::Nest);
        assert!(rows[3].is_goal());
        assert_eq!(outcome.threshold, 10.0);
    }

    #[test]
    fn reopened_vertex_is_expanded_twice() {
        // C is first closed through B at g 6, then reopened when A offers g 2.
        let dag = build(
            &[("S", 0.0), ("A", 10.0), ("B", 0.0), ("C", 0.0), ("T", 0.0)],
            &[
                ("S", "A", 1),
                ("S", "B", 1),
                ("A", "C", 1),
                ("B", "C", 5),
                ("C", "T", 20),
            ],
        );
        let outcome = search(&dag, "S", "T").unwrap();
        assert_eq!(names(&dag, &outcome), ["S", "A", "C", "T"]);
        assert_eq!(outcome.cost(), Some(22.0));

        let [s, a, b, c, t] = ["S", "A", "B", "C", "T"].map(|n| dag.lookup(n).unwrap());
        assert_eq!(
            outcome.trace.selections().collect::<Vec<_>>(),
            [s, b, c, a, c, t]
        );
        assert_eq!(outcome.trace.selection_count(c), 2);
        assert_eq!(outcome.trace.reexpanded(), [c]);

        let rows = outcome.trace.rows();
        let closed_after_a: Vec<_> = rows[3]
            .closed
            .as_ref()
            .unwrap()
            .iter()
            .map(|e| e.vertex)
            .collect();
        assert_eq!(closed_after_a, [s, b, c, a]);
        // The reopened C is drained from the nest at its new cost.
        assert_eq!(rows[4].rule, SelectionRule::Nest);
        assert_eq!(rows[4].nest[0].g, 2.0);
        assert_eq!(outcome.closed, [s, b, a, c]);
    }

    #[test]
    fn threshold_never_decreases() {
        let dag = build(
            &[("S", 0.0), ("A", 10.0), ("B", 0.0), ("C", 0.0), ("T", 0.0)],
            &[
                ("S", "A", 1),
                ("S", "B", 1),
                ("A", "C", 1),
                ("B", "C", 5),
                ("C", "T", 20),
            ],
        );
        let outcome = search(&dag, "S", "T").unwrap();
        let thresholds: Vec<_> = outcome.trace.rows().iter().map(|r| r.threshold).collect();
        assert!(thresholds.windows(2).all(|w| w[0] <= w[1]), "{thresholds:?}");
    }

    #[test]
    fn repeated_searches_agree() {
        let dag = build(
            &[("S", 2.0), ("A", 0.0), ("B", 0.0), ("T", 0.0)],
            &[("S", "A", 1), ("S", "B", 1), ("A", "T", 1), ("B", "T", 1)],
        );
        let first = search(&dag, "S", "T").unwrap();
        let second = search(&dag, "S", "T").unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(first.trace, second.trace);
        // Equal f: A precedes B by insertion order.
        assert_eq!(names(&dag, &first), ["S", "A", "T"]);
    }
}
