use nestpath_core::traits::{Expander, SearchSpace, WeightedEdge};
use nestpath_core::{LookupError, VertexId};

use crate::Dag;

pub struct DagExpander<'a> {
    dag: &'a Dag,
}

impl<'a> DagExpander<'a> {
    pub fn new(dag: &'a Dag) -> Self {
        DagExpander { dag }
    }
}

impl Expander for DagExpander<'_> {
    type Edge = WeightedEdge;

    fn expand(&mut self, vertex: VertexId, edges: &mut Vec<WeightedEdge>) {
        edges.extend(self.dag.successors(vertex).map(|e| WeightedEdge {
            successor: e.target,
            cost: e.weight.into(),
        }));
    }
}

impl SearchSpace for Dag {
    type Expander<'a> = DagExpander<'a>;

    fn vertex_count(&self) -> usize {
        Dag::vertex_count(self)
    }

    fn new_expander(&self) -> DagExpander<'_> {
        DagExpander::new(self)
    }

    fn heuristic(&self, vertex: VertexId) -> f64 {
        self.vertex(vertex).h
    }

    fn name(&self, vertex: VertexId) -> &str {
        &self.vertex(vertex).name
    }

    fn lookup(&self, name: &str) -> Result<VertexId, LookupError> {
        Dag::lookup(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_outgoing_edges_in_insertion_order() {
        let mut dag = Dag::new();
        let s = dag.add_vertex("S", 3.0);
        let a = dag.add_vertex("A", 0.0);
        let b = dag.add_vertex("B", 0.0);
        dag.add_edge(s, b, 2).unwrap();
        dag.add_edge(s, a, 7).unwrap();

        let mut edges = vec![];
        dag.new_expander().expand(s, &mut edges);
        assert_eq!(
            edges,
            [
                WeightedEdge {
                    successor: b,
                    cost: 2.0
                },
                WeightedEdge {
                    successor: a,
                    cost: 7.0
                },
            ]
        );
        assert_eq!(SearchSpace::heuristic(&dag, s), 3.0);
        assert_eq!(SearchSpace::name(&dag, a), "A");
        assert_eq!(dag.new_auxiliary(|v| v.index()).len(), 3);
    }
}
