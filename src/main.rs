use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};

mod config;
mod network;
mod storage;
mod sweep;

use config::GeneratorParams;

#[derive(Parser, Debug)]
#[clap(
    name = "smallworld-network-analyzer",
    about = "Watts-Strogatz small-world network generation and analysis"
)]
struct Cli {
    /// Number of nodes on the ring
    #[clap(long, default_value = "30")]
    nodes: usize,

    /// Lattice degree: connections to nearest neighbors (must be even)
    #[clap(long, default_value = "4")]
    k: usize,

    /// Rewiring probability in [0, 1]
    #[clap(long, default_value = "0.0")]
    p: f64,

    /// Seed for the random source (random when omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Output directory for results
    #[clap(long, default_value = "network_results")]
    output_dir: String,

    /// Sweep p over [0, 1] instead of a single generation run
    #[clap(long)]
    sweep: bool,

    /// Number of probability steps in a sweep
    #[clap(long, default_value = "20")]
    sweep_steps: usize,

    /// Generation runs averaged per sweep step
    #[clap(long, default_value = "10")]
    runs_per_step: usize,

    /// Also report the exact BFS-based path length alongside the approximation
    #[clap(long)]
    exact_paths: bool,

    /// Skip writing result files
    #[clap(long)]
    skip_export: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Random seed: {}", seed);

    if args.sweep {
        run_sweep_mode(&args, seed)
    } else {
        run_single_generation(&args, seed)
    }
}

/// Generate one network at the requested p and report its metrics
fn run_single_generation(args: &Cli, seed: u64) -> Result<()> {
    let params = GeneratorParams::new(args.nodes, args.k, args.p);

    log::info!(
        "Generating network: N = {}, k = {}, p = {}",
        params.node_count,
        params.k,
        params.rewire_probability
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    let net = network::generator::generate(&params, &mut rng)?;

    log::info!(
        "Generated {} nodes and {} edges ({} rewired, {} retries exhausted)",
        net.nodes.len(),
        net.edges.len(),
        net.rewired_count(),
        net.rewires_exhausted
    );

    let metrics = network::metrics::compute_metrics(&net, &params);

    log::info!("Avg path length (approx): {:.3}", metrics.avg_path_length);
    log::info!("Avg clustering coef: {:.3}", metrics.avg_clustering_coef);
    log::info!("Small-world index: {:.3}", metrics.small_world_index);

    if args.exact_paths {
        let exact = network::metrics::exact_avg_path_length(&net);
        log::info!("Avg path length (exact BFS): {:.3}", exact);
    }

    if !args.skip_export {
        storage::save_results(&net, &metrics, &params, &args.output_dir)?;
        log::info!("Results saved to {}", args.output_dir);
    }

    Ok(())
}

/// Sweep p across [0, 1] and report the metric curves
fn run_sweep_mode(args: &Cli, seed: u64) -> Result<()> {
    let points = sweep::run_sweep(
        args.nodes,
        args.k,
        args.sweep_steps,
        args.runs_per_step,
        seed,
    )?;

    for point in &points {
        log::info!(
            "p = {:.3}: path = {:.3}, clustering = {:.3}, index = {:.3}",
            point.p,
            point.avg_path_length,
            point.avg_clustering_coef,
            point.small_world_index
        );
    }

    if !args.skip_export {
        storage::save_sweep(&points, &args.output_dir)?;
        log::info!("Sweep saved to {}", args.output_dir);
    }

    Ok(())
}
