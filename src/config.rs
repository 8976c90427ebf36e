use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Centroid file read when no path is configured
pub const DEFAULT_CENTROIDS_PATH: &str = "./centroid_clusters.csv";

/// Dataset file read when no path is configured
pub const DEFAULT_DATASET_PATH: &str = "./input.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Number of data points must be at least 1")]
    NoDataPoints,

    #[error("Number of clusters must be at least 1")]
    NoClusters,

    #[error("Maximum iterations must be at least 1")]
    ZeroIterationCap,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Error metric on the first line, then one centroid name per data point
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Everything needed to load, cluster and report one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub centroids_path: PathBuf,
    pub dataset_path: PathBuf,
    /// Rows to read from the dataset file
    pub data_points: usize,
    /// Rows to read from the centroid file (k)
    pub clusters: usize,
    /// Optional bound on assignment steps; `None` runs until convergence
    pub max_iterations: Option<usize>,
    /// Destination for the report; stdout when unset
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            centroids_path: PathBuf::from(DEFAULT_CENTROIDS_PATH),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            data_points: 0,
            clusters: 0,
            max_iterations: None,
            output: None,
            format: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_points == 0 {
            return Err(ConfigError::NoDataPoints);
        }
        if self.clusters == 0 {
            return Err(ConfigError::NoClusters);
        }
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationCap);
        }
        Ok(())
    }
}
