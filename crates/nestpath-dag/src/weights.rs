use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::{rng_for, Dag};

/// Parameters for [`assign_weights`].
#[derive(Clone, Debug, PartialEq)]
pub struct WeightConfig {
    /// Choose edge weights so that the heuristic is consistent on every edge.
    pub monotonic: bool,
    /// Heuristic of the source vertex. The sink always gets 0.
    pub source_h: u32,
    /// Range the heuristic of every other vertex is drawn from.
    pub interior_h: RangeInclusive<u32>,
    /// Range edge weights are drawn from when `monotonic` is off.
    pub weights: RangeInclusive<u32>,
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightConfig {
            monotonic: false,
            source_h: 10,
            interior_h: 1..=10,
            weights: 1..=10,
        }
    }
}

impl WeightConfig {
    pub fn monotonic() -> Self {
        WeightConfig {
            monotonic: true,
            ..Self::default()
        }
    }
}

/// Fills in vertex heuristics and edge weights.
///
/// In monotonic mode, an edge `u -> v` with `d = h(u) - h(v)` gets a weight drawn uniformly from
/// `max(1, d)..=max(2, d + 1)`, so `h(u) <= w + h(v)` holds on every edge.
///
/// Graphs without [`Terminals`](crate::Terminals) treat every vertex as interior.
///
/// # Panics
/// Panics if `interior_h` or `weights` is empty.
pub fn assign_weights(dag: &mut Dag, config: &WeightConfig, seed: Option<u64>) {
    assert!(!config.interior_h.is_empty(), "empty heuristic range");
    assert!(!config.weights.is_empty(), "empty weight range");
    let mut rng = rng_for(seed);
    let terminals = dag.terminals();

    let ids: Vec<_> = dag.vertices().map(|(id, _)| id).collect();
    for id in ids {
        let h = match terminals {
            Some(t) if t.source == id => config.source_h,
            Some(t) if t.sink == id => 0,
            _ => rng.gen_range(config.interior_h.clone()),
        };
        dag.set_heuristic(id, h.into());
    }

    let edges: Vec<_> = dag.edge_ids().collect();
    for (id, edge) in edges {
        let weight = if config.monotonic {
            let d = dag.vertex(edge.source).h - dag.vertex(edge.target).h;
            let low = d.max(1.0) as u32;
            let high = (d + 1.0).max(2.0) as u32;
            rng.gen_range(low..=high)
        } else {
            rng.gen_range(config.weights.clone())
        };
        debug!(
            from = %dag.vertex(edge.source).name,
            to = %dag.vertex(edge.target).name,
            weight,
            "assign weight"
        );
        dag.set_weight(id, weight);
    }
}

/// Whether `h(u) <= weight(u, v) + h(v)` holds for every edge `u -> v`.
pub fn heuristic_is_consistent(dag: &Dag) -> bool {
    dag.edges()
        .iter()
        .all(|e| dag.vertex(e.source).h <= f64::from(e.weight) + dag.vertex(e.target).h)
}
