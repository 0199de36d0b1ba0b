//! Plain Dijkstra, used to check the costs the nest search reports.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use nestpath_core::traits::{Cost, Expander, SearchSpace, Successor};
use nestpath_core::{VertexId, VertexMap};

struct QueueEntry {
    g: f64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.g
            .total_cmp(&other.g)
            .then(self.vertex.cmp(&other.vertex))
    }
}

/// Shortest distance from `start` to every vertex; unreachable vertices get infinity.
pub fn dijkstra<S>(space: &S, start: VertexId) -> VertexMap<f64>
where
    S: SearchSpace,
    for<'a> <S::Expander<'a> as Expander>::Edge: Successor + Cost,
{
    let mut g = space.new_auxiliary(|_| f64::INFINITY);
    let mut queue = BinaryHeap::new();
    let mut expander = space.new_expander();
    let mut edges = vec![];

    g[start] = 0.0;
    queue.push(Reverse(QueueEntry {
        g: 0.0,
        vertex: start,
    }));

    while let Some(Reverse(QueueEntry { g: node_g, vertex })) = queue.pop() {
        if node_g > g[vertex] {
            continue;
        }

        edges.clear();
        expander.expand(vertex, &mut edges);

        for edge in &edges {
            let successor = edge.successor();
            let new_g = node_g + edge.cost();
            if new_g < g[successor] {
                g[successor] = new_g;
                queue.push(Reverse(QueueEntry {
                    g: new_g,
                    vertex: successor,
                }));
            }
        }
    }

    g
}

/// Whether `h(v)` never exceeds the true remaining cost from `v` to `goal`.
pub fn heuristic_is_admissible<S>(space: &S, goal: VertexId) -> bool
where
    S: SearchSpace,
    for<'a> <S::Expander<'a> as Expander>::Edge: Successor + Cost,
{
    (0..space.vertex_count()).map(VertexId::new).all(|v| {
        let remaining = dijkstra(space, v)[goal];
        space.heuristic(v) <= remaining
    })
}

#[cfg(test)]
mod tests {
    use nestpath_dag::Dag;

    use super::*;

    #[test]
    fn distances_follow_cheapest_edges() {
        let mut dag = Dag::new();
        let s = dag.add_vertex("S", 0.0);
        let a = dag.add_vertex("A", 0.0);
        let b = dag.add_vertex("B", 0.0);
        let t = dag.add_vertex("T", 0.0);
        let x = dag.add_vertex("X", 0.0);
        dag.add_edge(s, a, 1).unwrap();
        dag.add_edge(s, b, 1).unwrap();
        dag.add_edge(a, t, 10).unwrap();
        dag.add_edge(b, t, 1).unwrap();

        let g = dijkstra(&dag, s);
        assert_eq!(g.storage(), &[0.0, 1.0, 1.0, 2.0, f64::INFINITY]);
        assert_eq!(g[x], f64::INFINITY);
    }

    #[test]
    fn admissibility_compares_against_true_cost() {
        let mut dag = Dag::new();
        let s = dag.add_vertex("S", 3.0);
        let t = dag.add_vertex("T", 0.0);
        dag.add_edge(s, t, 3).unwrap();
        assert!(heuristic_is_admissible(&dag, t));
        dag.set_heuristic(s, 4.0);
        assert!(!heuristic_is_admissible(&dag, t));
    }
}
