use std::collections::VecDeque;

use ahash::AHashMap;
use nestpath_core::{LookupError, VertexId, VertexMap};
use thiserror::Error;

/// A named vertex with its heuristic estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub name: String,
    pub h: f64,
}

/// A directed, weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: u32,
}

/// Index of an edge in [`Dag::edges`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Rejected edge insertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeError {
    #[error("self loop on {0}")]
    SelfLoop(VertexId),
    #[error("edge {0} -> {1} already exists")]
    Duplicate(VertexId, VertexId),
    #[error("edge {1} -> {0} already exists, adding {0} -> {1} would form a 2-cycle")]
    Opposing(VertexId, VertexId),
}

/// The designated start and end of a generated DAG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminals {
    pub source: VertexId,
    pub sink: VertexId,
}

/// Directed graph with named vertices, per-vertex heuristics and per-edge weights.
///
/// The graph rejects self loops, parallel edges and 2-cycles on insertion. Acyclicity in
/// general is not enforced here; [`generate`](crate::generate) only produces acyclic graphs and
/// [`Dag::topological_order`] can be used to check hand-built ones.
#[derive(Clone, Debug, Default)]
pub struct Dag {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    edge_index: AHashMap<(VertexId, VertexId), EdgeId>,
    names: AHashMap<String, Vec<VertexId>>,
    terminals: Option<Terminals>,
}

impl Dag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. Names are labels and need not be unique, but only uniquely named vertices
    /// can be resolved by [`Dag::lookup`].
    pub fn add_vertex(&mut self, name: impl Into<String>, h: f64) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        let name = name.into();
        self.names.entry(name.clone()).or_default().push(id);
        self.vertices.push(Vertex { name, h });
        self.outgoing.push(vec![]);
        self.incoming.push(vec![]);
        id
    }

    #[track_caller]
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: u32,
    ) -> Result<EdgeId, EdgeError> {
        self.bounds_check(source);
        self.bounds_check(target);
        if source == target {
            return Err(EdgeError::SelfLoop(source));
        }
        if self.edge_index.contains_key(&(source, target)) {
            return Err(EdgeError::Duplicate(source, target));
        }
        if self.edge_index.contains_key(&(target, source)) {
            return Err(EdgeError::Opposing(source, target));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        self.edge_index.insert((source, target), id);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[track_caller]
    pub fn vertex(&self, vertex: VertexId) -> &Vertex {
        &self.vertices[vertex.index()]
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, &e)| (EdgeId(i), e))
    }

    pub fn edge(&self, source: VertexId, target: VertexId) -> Option<&Edge> {
        self.edge_index
            .get(&(source, target))
            .map(|id| &self.edges[id.0])
    }

    /// Whether an edge exists between the two vertices in either direction.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.edge_index.contains_key(&(a, b)) || self.edge_index.contains_key(&(b, a))
    }

    /// Outgoing edges of `vertex`, in insertion order.
    #[track_caller]
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing[vertex.index()]
            .iter()
            .map(|id| &self.edges[id.0])
    }

    /// Incoming edges of `vertex`, in insertion order.
    #[track_caller]
    pub fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.incoming[vertex.index()]
            .iter()
            .map(|id| &self.edges[id.0])
    }

    #[track_caller]
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.incoming[vertex.index()].len()
    }

    #[track_caller]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.outgoing[vertex.index()].len()
    }

    #[track_caller]
    pub fn set_heuristic(&mut self, vertex: VertexId, h: f64) {
        self.vertices[vertex.index()].h = h;
    }

    #[track_caller]
    pub fn set_weight(&mut self, edge: EdgeId, weight: u32) {
        self.edges[edge.0].weight = weight;
    }

    pub fn terminals(&self) -> Option<Terminals> {
        self.terminals
    }

    #[track_caller]
    pub fn set_terminals(&mut self, source: VertexId, sink: VertexId) {
        self.bounds_check(source);
        self.bounds_check(sink);
        self.terminals = Some(Terminals { source, sink });
    }

    /// Resolves `name` to the single vertex carrying it.
    pub fn lookup(&self, name: &str) -> Result<VertexId, LookupError> {
        match self.names.get(name).map(Vec::as_slice) {
            None | Some([]) => Err(LookupError::Missing(name.to_owned())),
            Some(&[id]) => Ok(id),
            Some(ids) => Err(LookupError::Ambiguous {
                name: name.to_owned(),
                count: ids.len(),
            }),
        }
    }

    /// Kahn's algorithm. Returns `None` if the graph contains a cycle.
    pub fn topological_order(&self) -> Option<Vec<VertexId>> {
        let mut remaining: Vec<usize> = self.incoming.iter().map(Vec::len).collect();
        let mut queue: VecDeque<VertexId> = self
            .vertices()
            .map(|(id, _)| id)
            .filter(|id| remaining[id.index()] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.vertices.len());

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for edge in self.successors(vertex) {
                let count = &mut remaining[edge.target.index()];
                *count -= 1;
                if *count == 0 {
                    queue.push_back(edge.target);
                }
            }
        }

        (order.len() == self.vertices.len()).then_some(order)
    }

    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_some()
    }

    /// Marks every vertex reachable from `start`, including `start` itself.
    #[track_caller]
    pub fn reachable_from(&self, start: VertexId) -> VertexMap<bool> {
        let mut seen = VertexMap::new(self.vertex_count(), |_| false);
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(vertex) = stack.pop() {
            for edge in self.successors(vertex) {
                if !seen[edge.target] {
                    seen[edge.target] = true;
                    stack.push(edge.target);
                }
            }
        }
        seen
    }

    #[track_caller]
    fn bounds_check(&self, vertex: VertexId) {
        assert!(vertex.index() < self.vertices.len(), "vertex out of bounds");
    }
}
