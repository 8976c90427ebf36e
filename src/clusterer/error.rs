use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("At least one centroid is required")]
    NoCentroids,

    #[error("At least one data point is required")]
    NoDataPoints,
}
