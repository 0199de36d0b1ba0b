use std::ops::{Index, IndexMut};

use crate::VertexId;

/// Dense table holding one value per vertex of a graph.
///
/// Search algorithms allocate one of these per invocation to hold their bookkeeping, so the
/// graph itself is never written to during a search.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexMap<T> {
    cells: Box<[T]>,
}

impl<T> VertexMap<T> {
    /// Creates a table for `len` vertices, initializing each cell with `f`.
    pub fn new(len: usize, mut f: impl FnMut(VertexId) -> T) -> Self {
        let cells = (0..len).map(|i| f(VertexId::new(i))).collect();
        VertexMap { cells }
    }

    /// Number of vertices covered by the table.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell for `vertex`, or `None` if it is out of range.
    pub fn get(&self, vertex: VertexId) -> Option<&T> {
        self.cells.get(vertex.index())
    }

    /// Iterates over every vertex together with its cell.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (VertexId::new(i), cell))
    }

    /// The underlying storage, indexed by [`VertexId::index`].
    pub fn storage(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<VertexId> for VertexMap<T> {
    type Output = T;

    #[track_caller]
    #[inline(always)]
    fn index(&self, vertex: VertexId) -> &T {
        &self.cells[vertex.index()]
    }
}

impl<T> IndexMut<VertexId> for VertexMap<T> {
    #[track_caller]
    #[inline(always)]
    fn index_mut(&mut self, vertex: VertexId) -> &mut T {
        &mut self.cells[vertex.index()]
    }
}
