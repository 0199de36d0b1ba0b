use clap::Parser;
use nestpath::dag::{assign_weights, generate, DagConfig, WeightConfig};
use nestpath::search::reference::{dijkstra, heuristic_is_admissible};
use nestpath::search::search;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

/// Searches many random DAGs in parallel and compares the results with Dijkstra.
#[derive(Parser)]
struct Options {
    /// First seed of the sweep.
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// Number of seeds to try.
    #[arg(long, default_value_t = 10_000)]
    count: u64,
    #[arg(long)]
    monotonic: bool,
    /// Vertex names; the first is the source and the last the sink.
    #[arg(long, value_delimiter = ',', default_value = "S,A,B,C,D,E,T")]
    nodes: Vec<String>,
    #[arg(long, default_value_t = 0.3)]
    edge_probability: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Optimal,
    Suboptimal,
    NotFound,
}

struct Run {
    verdict: Verdict,
    reexpanded: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Options::parse();
    let (source, sink) = match (opt.nodes.first(), opt.nodes.last()) {
        (Some(source), Some(sink)) => (source.clone(), sink.clone()),
        _ => anyhow::bail!("--nodes must name at least a source and a sink"),
    };
    let config = DagConfig {
        names: opt.nodes.clone(),
        source,
        sink,
        edge_probability: opt.edge_probability,
    };
    let weights = WeightConfig {
        monotonic: opt.monotonic,
        ..WeightConfig::default()
    };

    let t1 = std::time::Instant::now();

    let runs = (opt.start..opt.start + opt.count)
        .into_par_iter()
        .map(|seed| run(&config, &weights, seed))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let t2 = std::time::Instant::now();

    let count = |verdict: Verdict| runs.iter().filter(|r| r.verdict == verdict).count();
    println!("optimal:     {}", count(Verdict::Optimal));
    println!("suboptimal:  {}", count(Verdict::Suboptimal));
    println!("not found:   {}", count(Verdict::NotFound));
    println!("re-expanded: {}", runs.iter().filter(|r| r.reexpanded).count());
    eprintln!("{} runs in {:.2?}", runs.len(), t2 - t1);
    Ok(())
}

fn run(config: &DagConfig, weights: &WeightConfig, seed: u64) -> anyhow::Result<Run> {
    let mut dag = generate(config, Some(seed))?;
    assign_weights(&mut dag, weights, Some(seed));

    let outcome = search(&dag, &config.source, &config.sink)?;
    let optimum = dijkstra(&dag, outcome.start)[outcome.goal];

    let verdict = match outcome.cost() {
        None if optimum.is_finite() => {
            anyhow::bail!("seed {seed}: no path found but the optimum is {optimum}")
        }
        None => Verdict::NotFound,
        Some(cost) if cost == optimum => Verdict::Optimal,
        Some(cost) => {
            if heuristic_is_admissible(&dag, outcome.goal) {
                anyhow::bail!("seed {seed}: admissible heuristic gave cost {cost}, optimum {optimum}");
            }
            Verdict::Suboptimal
        }
    };

    Ok(Run {
        verdict,
        reexpanded: !outcome.trace.reexpanded().is_empty(),
    })
}
