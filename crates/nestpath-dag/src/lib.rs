//! Weighted DAGs with designated source and sink vertices.
//!
//! [`generate`] builds a random DAG satisfying the structural invariants the search relies on,
//! [`assign_weights`] fills in heuristics and edge weights, and [`Dag`] implements
//! [`SearchSpace`](nestpath_core::traits::SearchSpace) so it can be searched directly.

mod dot;
mod generate;
mod graph;
mod space;
mod weights;

pub use self::dot::*;
pub use self::generate::*;
pub use self::graph::*;
pub use self::space::*;
pub use self::weights::*;

use rand::SeedableRng;
use rand_pcg::Pcg64;

fn rng_for(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    }
}
