use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use nestpath::dag::{assign_weights, generate, to_dot, DagConfig, WeightConfig};
use nestpath::search::{render_markdown, search};
use tracing_subscriber::EnvFilter;

/// Generates a random DAG, searches it from source to sink and writes the graph and trace.
#[derive(Parser)]
struct Options {
    /// Seed for graph generation; defaults to the current UNIX time.
    #[arg(long)]
    seed: Option<u64>,
    /// Draw edge weights so the heuristic is consistent.
    #[arg(long)]
    monotonic: bool,
    #[arg(long, default_value = "img")]
    out_dir: PathBuf,
    /// Vertex names; the first is the source and the last the sink.
    #[arg(long, value_delimiter = ',', default_value = "S,A,B,C,D,E,T")]
    nodes: Vec<String>,
    #[arg(long, default_value_t = 0.3)]
    edge_probability: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Options::parse();
    let seed = match opt.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the UNIX epoch")?
            .as_secs(),
    };
    println!("seed: {seed}");

    let (source, sink) = match (opt.nodes.first(), opt.nodes.last()) {
        (Some(source), Some(sink)) => (source.clone(), sink.clone()),
        _ => anyhow::bail!("--nodes must name at least a source and a sink"),
    };
    let config = DagConfig {
        names: opt.nodes,
        source,
        sink,
        edge_probability: opt.edge_probability,
    };
    let weights = WeightConfig {
        monotonic: opt.monotonic,
        ..WeightConfig::default()
    };

    let mut dag = generate(&config, Some(seed))?;
    assign_weights(&mut dag, &weights, Some(seed));

    for (_, vertex) in dag.vertices() {
        println!("h({}) = {}", vertex.name, vertex.h);
    }
    for edge in dag.edges() {
        println!(
            "{} -> {}: {}",
            dag.vertex(edge.source).name,
            dag.vertex(edge.target).name,
            edge.weight
        );
    }

    let outcome = search(&dag, &config.source, &config.sink)?;
    match outcome.path_names(&dag) {
        Some(path) => println!("path: {path:?} cost {}", outcome.records[outcome.goal].g),
        None => println!("failed to find path"),
    }

    fs::create_dir_all(&opt.out_dir)
        .with_context(|| format!("creating {}", opt.out_dir.display()))?;

    let dot_file = opt.out_dir.join(format!("a_star_{seed}.dot"));
    fs::write(&dot_file, to_dot(&dag, outcome.path.as_deref()))
        .with_context(|| format!("writing {}", dot_file.display()))?;

    let md_file = opt.out_dir.join(format!("a_star_{seed}_sol.md"));
    fs::write(&md_file, render_markdown(&dag, &outcome))
        .with_context(|| format!("writing {}", md_file.display()))?;

    eprintln!("wrote {} and {}", dot_file.display(), md_file.display());
    Ok(())
}
