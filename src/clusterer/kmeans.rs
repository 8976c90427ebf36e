use crate::clusterer::{
    assignment::assign_points,
    centroid::update_centroids,
    distance::{Distance, Euclidean},
    error::ClusterError,
    types::{Centroid, ClusterResult, DataPoint, Termination},
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Assigning,
    Updating,
    Done(Termination),
}

/// Owns the centroid and data point collections for a single clustering run
#[derive(Debug, Clone)]
pub struct ClusteringRun<D: Distance = Euclidean> {
    centroids: Vec<Centroid>,
    points: Vec<DataPoint>,
    metric: D,
    max_iterations: Option<usize>,
}

impl ClusteringRun<Euclidean> {
    /// Create a run over non-empty collections using Euclidean distance
    pub fn new(centroids: Vec<Centroid>, points: Vec<DataPoint>) -> Result<Self, ClusterError> {
        Self::with_metric(centroids, points, Euclidean)
    }
}

impl<D: Distance> ClusteringRun<D> {
    pub fn with_metric(
        centroids: Vec<Centroid>,
        points: Vec<DataPoint>,
        metric: D,
    ) -> Result<Self, ClusterError> {
        if centroids.is_empty() {
            return Err(ClusterError::NoCentroids);
        }
        if points.is_empty() {
            return Err(ClusterError::NoDataPoints);
        }

        Ok(Self {
            centroids,
            points,
            metric,
            max_iterations: None,
        })
    }

    /// Stop after `max` assignment steps even if the error total never repeats
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max.max(1));
        self
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Alternate assignment and update steps until the error total repeats exactly.
    ///
    /// Without an iteration cap this only returns once two successive
    /// assignment steps produce bit-identical totals.
    pub fn run(mut self) -> ClusterResult {
        let mut phase = Phase::Assigning;
        let mut previous_error = 0.0;
        let mut iterations = 0;

        let termination = loop {
            phase = match phase {
                Phase::Assigning => {
                    let outcome = assign_points(
                        &mut self.points,
                        &mut self.centroids,
                        &self.metric,
                        previous_error,
                    );
                    iterations += 1;
                    debug!(
                        iteration = iterations,
                        total_error = outcome.total_error,
                        "assignment step complete"
                    );

                    if outcome.converged {
                        Phase::Done(Termination::Converged)
                    } else {
                        previous_error = outcome.total_error;
                        match self.max_iterations {
                            Some(max) if iterations >= max => {
                                Phase::Done(Termination::IterationCap)
                            }
                            _ => Phase::Updating,
                        }
                    }
                }
                Phase::Updating => {
                    update_centroids(&mut self.centroids);
                    Phase::Assigning
                }
                Phase::Done(termination) => break termination,
            };
        };

        match termination {
            Termination::Converged => {
                info!(iterations, error_metric = previous_error, "k-means converged")
            }
            Termination::IterationCap => warn!(
                iterations,
                error_metric = previous_error,
                "k-means stopped at iteration cap before converging"
            ),
        }

        for centroid in self.centroids.iter().filter(|c| c.count == 0) {
            warn!(centroid = %centroid.name, "centroid has no assigned points");
        }

        ClusterResult {
            centroids: self.centroids,
            points: self.points,
            error_metric: previous_error,
            iterations,
            termination,
        }
    }
}

/// Cluster `points` around the supplied initial `centroids` until convergence
pub fn kmeans(
    centroids: Vec<Centroid>,
    points: Vec<DataPoint>,
) -> Result<ClusterResult, ClusterError> {
    Ok(ClusteringRun::new(centroids, points)?.run())
}
