mod assignment;
mod centroid;
mod distance;
mod error;
mod kmeans;
mod types;

#[cfg(test)]
mod tests;

pub use assignment::{AssignmentOutcome, assign_points};
pub use centroid::{compute_centroid, update_centroids};
pub use distance::{Distance, Euclidean, euclidean_distance};
pub use error::ClusterError;
pub use kmeans::{ClusteringRun, kmeans};
pub use types::{Centroid, ClusterResult, DataPoint, Point, Termination};
