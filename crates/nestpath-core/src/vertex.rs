use std::fmt;

/// Dense identifier of a vertex, assigned in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates the identifier for the vertex at `index`.
    ///
    /// # Panics
    /// Panics if `index` does not fit in a `u32`.
    #[track_caller]
    pub fn new(index: usize) -> Self {
        VertexId(index.try_into().expect("vertex index overflows u32"))
    }

    /// The index this identifier refers to.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
