use crate::clusterer::types::Point;

/// Metric used to measure how far a data point lies from a centroid
pub trait Distance {
    fn distance(&self, a: Point, b: Point) -> f64;
}

/// Straight-line distance in the plane
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Distance for Euclidean {
    fn distance(&self, a: Point, b: Point) -> f64 {
        euclidean_distance(a, b)
    }
}

pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;

    (dx * dx + dy * dy).sqrt()
}
