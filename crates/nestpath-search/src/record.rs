use nestpath_core::VertexId;

/// Where a vertex currently sits in the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Unseen,
    Open,
    Closed,
}

/// Per-vertex search state.
///
/// `h` starts out as NaN and is filled in the first time the vertex is reached. `f` is only
/// ever written through [`SearchRecord::improve`], which keeps it equal to `g + h`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRecord {
    pub g: f64,
    pub h: f64,
    pub f: f64,
    pub parent: Option<VertexId>,
    pub status: Status,
}

impl Default for SearchRecord {
    fn default() -> Self {
        SearchRecord {
            g: f64::INFINITY,
            h: f64::NAN,
            f: f64::INFINITY,
            parent: None,
            status: Status::Unseen,
        }
    }
}

impl SearchRecord {
    /// Records a cheaper path reaching this vertex via `parent` at cost `g`.
    pub fn improve(&mut self, g: f64, parent: Option<VertexId>, heuristic: impl FnOnce() -> f64) {
        if self.h.is_nan() {
            self.h = heuristic();
        }
        self.g = g;
        self.f = g + self.h;
        self.parent = parent;
    }

    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improve_keeps_f_in_sync() {
        let mut record = SearchRecord::default();
        assert!(record.g.is_infinite() && record.f.is_infinite());

        record.improve(4.0, Some(VertexId::new(0)), || 1.0);
        assert_eq!((record.g, record.h, record.f), (4.0, 1.0, 5.0));

        // The heuristic is only read once.
        record.improve(2.0, Some(VertexId::new(3)), || panic!("heuristic re-read"));
        assert_eq!((record.g, record.f), (2.0, 3.0));
        assert_eq!(record.parent, Some(VertexId::new(3)));
    }
}
