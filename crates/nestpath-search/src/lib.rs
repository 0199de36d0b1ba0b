//! A* with a nest frontier.
//!
//! The open set is split every iteration by a ratcheting threshold `f_m`: open vertices with
//! `f < f_m` form the *nest* and are drained cheapest-`g` first, and only when the nest is empty
//! is the vertex with the smallest `f` admitted, raising `f_m` to its `f`. Closed vertices are
//! reopened when a cheaper path to them turns up, so the search still returns optimal paths
//! when the heuristic is admissible but not consistent.
//!
//! All search bookkeeping lives in a per-call [`VertexMap`](nestpath_core::VertexMap), so the
//! searched graph is only ever borrowed immutably.

mod frontier;
mod nest;
mod record;
pub mod reference;
mod report;
mod trace;

pub use self::frontier::*;
pub use self::nest::*;
pub use self::record::*;
pub use self::report::*;
pub use self::trace::*;
