//! Traits implemented by searchable graphs.

use crate::{LookupError, VertexId, VertexMap};

/// Produces the outgoing edges of a vertex.
pub trait Expander {
    /// Edge type emitted by this expander.
    type Edge;

    /// Appends the outgoing edges of `vertex` to `edges`.
    fn expand(&mut self, vertex: VertexId, edges: &mut Vec<Self::Edge>);
}

/// An edge that leads somewhere.
pub trait Successor {
    /// The vertex at the head of the edge.
    fn successor(&self) -> VertexId;
}

/// An edge with a traversal cost.
pub trait Cost {
    /// Non-negative cost of traversing the edge.
    fn cost(&self) -> f64;
}

/// Plain edge carrying its head vertex and cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    /// Head of the edge.
    pub successor: VertexId,
    /// Cost of traversing the edge.
    pub cost: f64,
}

impl Successor for WeightedEdge {
    fn successor(&self) -> VertexId {
        self.successor
    }
}

impl Cost for WeightedEdge {
    fn cost(&self) -> f64 {
        self.cost
    }
}

/// A finite graph with named vertices and a per-vertex heuristic.
///
/// Vertices are identified by dense [`VertexId`]s in `0..vertex_count()`.
pub trait SearchSpace {
    /// Expander borrowing the space.
    type Expander<'a>: Expander
    where
        Self: 'a;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Creates an expander over this space.
    fn new_expander(&self) -> Self::Expander<'_>;

    /// Heuristic estimate of the remaining cost from `vertex` to the goal.
    fn heuristic(&self, vertex: VertexId) -> f64;

    /// Display name of `vertex`.
    fn name(&self, vertex: VertexId) -> &str;

    /// Resolves `name` to exactly one vertex.
    fn lookup(&self, name: &str) -> Result<VertexId, LookupError>;

    /// Allocates an auxiliary table covering every vertex of this space.
    fn new_auxiliary<T>(&self, init: impl FnMut(VertexId) -> T) -> VertexMap<T> {
        VertexMap::new(self.vertex_count(), init)
    }
}
