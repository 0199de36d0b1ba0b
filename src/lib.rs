//! Random weighted DAGs and a nest-frontier A* search over them.
//!
//! The search lives in [`search`], graph construction in [`dag`], and the shared vocabulary
//! (vertex ids, auxiliary maps, search-space traits) is re-exported at the top level.

pub use nestpath_core::*;
pub use nestpath_dag as dag;
pub use nestpath_search as search;
