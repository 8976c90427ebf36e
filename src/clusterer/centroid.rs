use crate::clusterer::types::{Centroid, Point};

/// Move every centroid to the mean of the points accumulated in the last assignment step.
///
/// A centroid that received no points keeps its current position.
pub fn update_centroids(centroids: &mut [Centroid]) {
    for centroid in centroids.iter_mut() {
        if let Some(mean) = compute_centroid(centroid) {
            centroid.position = mean;
        }
    }
}

pub fn compute_centroid(centroid: &Centroid) -> Option<Point> {
    if centroid.count == 0 {
        return None;
    }

    let n = centroid.count as f64;
    Some(Point::new(centroid.sum_x / n, centroid.sum_y / n))
}
