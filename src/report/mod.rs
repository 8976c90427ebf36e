
use crate::clusterer::ClusterResult;
use crate::config::OutputFormat;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read-only view of a finished run, in the shape the result sink persists
#[derive(Debug, Clone, Serialize)]
pub struct ClusterReport {
    pub error_metric: f64,
    pub iterations: usize,
    pub converged: bool,
    pub centroids: Vec<CentroidSummary>,
    /// Assigned centroid name per data point, in load order
    pub assignments: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CentroidSummary {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub members: usize,
}

impl From<&ClusterResult> for ClusterReport {
    fn from(result: &ClusterResult) -> Self {
        Self {
            error_metric: result.error_metric,
            iterations: result.iterations,
            converged: result.converged(),
            centroids: result
                .centroids
                .iter()
                .map(|c| CentroidSummary {
                    name: c.name.clone(),
                    x: c.position.x,
                    y: c.position.y,
                    members: c.count,
                })
                .collect(),
            assignments: result
                .assigned_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl ClusterReport {
    /// Error metric to three decimals, then one assigned centroid name per line
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        writeln!(out, "{:.3}", self.error_metric)?;
        for name in &self.assignments {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, out: W, format: OutputFormat) -> Result<(), ReportError> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    /// Write to `path`, or to stdout when no path is given
    pub fn persist(&self, path: Option<&Path>, format: OutputFormat) -> Result<(), ReportError> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| ReportError::Create {
                    path: path.display().to_string(),
                    source,
                })?;
                self.write(BufWriter::new(file), format)?;
                info!(path = %path.display(), "wrote clustering report");
            }
            None => {
                let stdout = io::stdout();
                self.write(stdout.lock(), format)?;
            }
        }
        Ok(())
    }
}
