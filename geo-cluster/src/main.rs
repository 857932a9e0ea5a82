//! Batch k-means clusterization of latitude/longitude points
//! Reads one `"<lat>,<lon>"` per line, clusters the points and writes
//! `"<index> <cluster>"` per point to the output file

use anyhow::bail;
use clap::Parser;
use kmeans::KMeans;
use tracing::Level;

use context::{ClusterizationContext, InitMethod};
use loading::load_data;
use writer::{format_report, write_assigned};

// Module declarations
mod context;
mod loading;
mod writer;

/// Command-line arguments for the clusterization program
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the input points file
    #[arg(long, default_value = "location.txt")]
    pub input: String,
    /// Number of clusters
    #[arg(long, default_value_t = 3)]
    pub k: usize,
    /// Path of the assignment file (overwritten)
    #[arg(long, default_value = "clusters.txt")]
    pub output: String,
    /// Initial centroid strategy (default: fixed, first k points)
    #[arg(long, value_enum, default_value_t = InitMethod::Fixed)]
    pub init: InitMethod,
    /// Comma-separated point indices for fixed seeding, e.g. 0,4,6
    #[arg(long, value_delimiter = ',')]
    pub seed_indices: Option<Vec<usize>>,
    /// Random seed for random and plus-plus seeding
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Maximum number of iterations, 0 for no limit
    #[arg(long, default_value_t = kmeans::engine::DEFAULT_MAX_ITERATION)]
    pub max_iter: usize,
    /// Do not print clusters to stdout
    #[arg(long)]
    pub no_report: bool,
    /// Debug logging
    #[arg(long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let context = ClusterizationContext::from_args(&args)?;

    // Load points; a bad line aborts before any clustering
    let points = load_data(&context.input).await?;

    let mut model = KMeans::new(points).with_max_iteration(context.max_iteration);
    model.initialize_centroids(context.k, &context.seeding)?;
    let report = model.fit()?;
    tracing::info!(
        iterations = report.outcome.iterations(),
        inertia = model.inertia(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "clusterization finished"
    );

    if context.report {
        print!("{}", format_report(&model));
    }
    write_assigned(model.points(), &context.output).await?;

    // Labels of an unfinished run are still written, but the run fails
    if !report.outcome.is_converged() {
        bail!(
            "k-means did not converge within {} iterations",
            report.outcome.iterations()
        );
    }
    Ok(())
}

// Example command line usage:
//cargo run --release -p geo-cluster -- --input location.txt --k 3 --seed-indices 0,4,6
