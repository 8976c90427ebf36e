use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use kmeans2d::{ClusterReport, ClusteringRun, OutputFormat, RunConfig, load_centroids, load_dataset};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Cluster 2-D points around externally supplied centroids
#[derive(Parser, Debug)]
#[command(name = "kmeans2d", version, about)]
struct Cli {
    /// Number of rows to read from the dataset file
    no_of_data_points: Option<usize>,

    /// Number of centroids (k) to read from the centroid file
    value_of_k: Option<usize>,

    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Centroid CSV (`name,x,y` rows)
    #[arg(long)]
    centroids: Option<PathBuf>,

    /// Dataset CSV (`x,y` rows)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Stop after this many assignment steps even without convergence
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(n) = self.no_of_data_points {
            config.data_points = n;
        }
        if let Some(k) = self.value_of_k {
            config.clusters = k;
        }
        if let Some(path) = self.centroids {
            config.centroids_path = path;
        }
        if let Some(path) = self.dataset {
            config.dataset_path = path;
        }
        if let Some(path) = self.output {
            config.output = Some(path);
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(max) = self.max_iterations {
            config.max_iterations = Some(max);
        }

        config
            .validate()
            .context("Expected: kmeans2d <no_of_data_points> <value_of_k>")?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config()?;
    let start = Instant::now();

    let centroids = load_centroids(&config.centroids_path, config.clusters)
        .context("Failed to load centroids")?;
    let points =
        load_dataset(&config.dataset_path, config.data_points).context("Failed to load dataset")?;

    let mut run = ClusteringRun::new(centroids, points)?;
    if let Some(max) = config.max_iterations {
        run = run.with_max_iterations(max);
    }
    let result = run.run();

    info!(
        iterations = result.iterations,
        error_metric = result.error_metric,
        elapsed_secs = start.elapsed().as_secs_f64(),
        "clustering complete"
    );

    let report = ClusterReport::from(&result);
    report
        .persist(config.output.as_deref(), config.format)
        .with_context(|| {
            format!(
                "Clustering finished (error metric {:.3}) but the report could not be written",
                result.error_metric
            )
        })?;

    Ok(())
}
