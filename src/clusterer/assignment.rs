use crate::clusterer::{
    distance::Distance,
    types::{Centroid, DataPoint},
};

/// Outcome of one expectation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentOutcome {
    /// Sum of every point's distance to its nearest centroid
    pub total_error: f64,
    /// `total_error` is bit-identical to the previous step's total
    pub converged: bool,
}

/// Assign every data point to its nearest centroid and fill the centroid accumulators.
///
/// Ties go to the lowest centroid index. Convergence is bit-exact equality of
/// the new total with `previous_error`; no tolerance is applied.
pub fn assign_points<D: Distance>(
    points: &mut [DataPoint],
    centroids: &mut [Centroid],
    metric: &D,
    previous_error: f64,
) -> AssignmentOutcome {
    for centroid in centroids.iter_mut() {
        centroid.reset_accumulators();
    }

    let mut total_error = 0.0;

    for data_point in points.iter_mut() {
        let (nearest, dist) = nearest_centroid(data_point, centroids, metric);

        data_point.assigned = nearest;
        centroids[nearest].accumulate(data_point.point());
        total_error += dist;
    }

    AssignmentOutcome {
        total_error,
        converged: total_error.to_bits() == previous_error.to_bits(),
    }
}

/// Index and distance of the closest centroid; `centroids` must be non-empty
fn nearest_centroid<D: Distance>(
    data_point: &DataPoint,
    centroids: &[Centroid],
    metric: &D,
) -> (usize, f64) {
    let point = data_point.point();
    let mut nearest = 0;
    let mut min_dist = metric.distance(point, centroids[0].position);

    for (i, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = metric.distance(point, centroid.position);
        // strict: an equal distance never displaces an earlier centroid
        if dist < min_dist {
            min_dist = dist;
            nearest = i;
        }
    }

    (nearest, min_dist)
}
