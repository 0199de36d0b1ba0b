use ahash::AHashSet;
use nestpath_core::VertexId;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::{rng_for, Dag};

/// Parameters for [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct DagConfig {
    /// Vertex names, in the order the vertices are created.
    pub names: Vec<String>,
    /// Name of the vertex with no incoming edges.
    pub source: String,
    /// Name of the vertex with no outgoing edges.
    pub sink: String,
    /// Probability of adding each optional forward edge.
    pub edge_probability: f64,
}

impl Default for DagConfig {
    fn default() -> Self {
        DagConfig {
            names: ["S", "A", "B", "C", "D", "E", "T"].map(String::from).to_vec(),
            source: "S".to_owned(),
            sink: "T".to_owned(),
            edge_probability: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("vertex name {0:?} appears more than once")]
    DuplicateName(String),
    #[error("terminal vertex {0:?} is not among the vertex names")]
    MissingTerminal(String),
    #[error("source and sink are both {0:?}")]
    SameTerminals(String),
    #[error("at least one vertex besides the source and sink is required")]
    NoInterior,
    #[error("edge probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
}

/// Generates a random DAG over `config.names`.
///
/// The result satisfies:
/// - the source has no incoming edges and the sink has no outgoing edges,
/// - there is no edge directly from the source to the sink,
/// - every other vertex has at least one incoming and one outgoing edge,
/// - no two vertices are connected in both directions, and the graph is acyclic.
///
/// All heuristics and weights are left at placeholder values; see
/// [`assign_weights`](crate::assign_weights).
pub fn generate(config: &DagConfig, seed: Option<u64>) -> Result<Dag, GenerateError> {
    validate(config)?;
    let mut rng = rng_for(seed);

    let mut dag = Dag::new();
    let mut source = None;
    let mut sink = None;
    let mut interior = vec![];
    for name in &config.names {
        let id = dag.add_vertex(name.as_str(), 0.0);
        if *name == config.source {
            source = Some(id);
        } else if *name == config.sink {
            sink = Some(id);
        } else {
            interior.push(id);
        }
    }
    let (Some(source), Some(sink)) = (source, sink) else {
        unreachable!("terminals were validated");
    };
    dag.set_terminals(source, sink);

    // Every edge points forward in this order, which keeps the graph acyclic.
    interior.shuffle(&mut rng);
    let mut order = Vec::with_capacity(interior.len() + 2);
    order.push(source);
    order.extend_from_slice(&interior);
    order.push(sink);

    for pos in 1..order.len() - 1 {
        let vertex = order[pos];
        if dag.in_degree(vertex) == 0 {
            let &from = order[..pos]
                .choose(&mut rng)
                .expect("the source precedes every interior vertex");
            connect(&mut dag, from, vertex);
        }
    }

    for pos in (1..order.len() - 1).rev() {
        let vertex = order[pos];
        if dag.out_degree(vertex) == 0 {
            let &to = order[pos + 1..]
                .choose(&mut rng)
                .expect("the sink follows every interior vertex");
            connect(&mut dag, vertex, to);
        }
    }

    for i in 0..order.len() {
        for j in i + 1..order.len() {
            let (from, to) = (order[i], order[j]);
            if from == source && to == sink {
                continue;
            }
            if rng.gen_bool(config.edge_probability) && !dag.are_adjacent(from, to) {
                connect(&mut dag, from, to);
            }
        }
    }

    debug_assert!(dag.is_acyclic());
    Ok(dag)
}

fn connect(dag: &mut Dag, from: VertexId, to: VertexId) {
    debug!(
        from = %dag.vertex(from).name,
        to = %dag.vertex(to).name,
        "add edge"
    );
    if let Err(e) = dag.add_edge(from, to, 1) {
        unreachable!("generator produced an invalid edge: {e}");
    }
}

fn validate(config: &DagConfig) -> Result<(), GenerateError> {
    let mut seen = AHashSet::new();
    for name in &config.names {
        if !seen.insert(name.as_str()) {
            return Err(GenerateError::DuplicateName(name.clone()));
        }
    }
    for terminal in [&config.source, &config.sink] {
        if !seen.contains(terminal.as_str()) {
            return Err(GenerateError::MissingTerminal(terminal.clone()));
        }
    }
    if config.source == config.sink {
        return Err(GenerateError::SameTerminals(config.source.clone()));
    }
    if config.names.len() < 3 {
        return Err(GenerateError::NoInterior);
    }
    if !(0.0..=1.0).contains(&config.edge_probability) {
        return Err(GenerateError::InvalidProbability(config.edge_probability));
    }
    Ok(())
}
