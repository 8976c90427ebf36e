// Public API exports
pub mod clusterer;
pub mod config;
pub mod loader;
pub mod report;

// Re-export main types for convenience
pub use clusterer::{
    Centroid, ClusterError, ClusterResult, ClusteringRun, DataPoint, Distance, Euclidean, Point,
    Termination, euclidean_distance, kmeans,
};

pub use config::{ConfigError, OutputFormat, RunConfig};

pub use loader::{LoadError, load_centroids, load_dataset};

pub use report::{CentroidSummary, ClusterReport, ReportError};
