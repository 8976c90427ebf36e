/// Immutable 2-D coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named cluster representative plus the accumulators of one assignment step
#[derive(Debug, Clone)]
pub struct Centroid {
    pub name: String,
    pub position: Point,
    /// Points assigned during the last assignment step
    pub count: usize,
    pub sum_x: f64,
    pub sum_y: f64,
}

impl Centroid {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
            count: 0,
            sum_x: 0.0,
            sum_y: 0.0,
        }
    }

    pub(crate) fn reset_accumulators(&mut self) {
        self.count = 0;
        self.sum_x = 0.0;
        self.sum_y = 0.0;
    }

    pub(crate) fn accumulate(&mut self, point: Point) {
        self.count += 1;
        self.sum_x += point.x;
        self.sum_y += point.y;
    }
}

/// A loaded coordinate and the index of the centroid it currently belongs to
#[derive(Debug, Clone)]
pub struct DataPoint {
    point: Point,
    /// Index into the centroid collection; meaningless before the first assignment step
    pub assigned: usize,
}

impl DataPoint {
    pub fn new(point: Point) -> Self {
        Self { point, assigned: 0 }
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

/// Why the convergence loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Two successive assignment steps produced a bit-identical error total
    Converged,
    /// The configured maximum number of assignment steps was reached
    IterationCap,
}

/// Final state of a clustering run
#[derive(Debug, Clone)]
pub struct ClusterResult {
    pub centroids: Vec<Centroid>,
    pub points: Vec<DataPoint>,
    /// Sum of each point's distance to its assigned centroid in the last assignment step
    pub error_metric: f64,
    /// Number of assignment steps performed
    pub iterations: usize,
    pub termination: Termination,
}

impl ClusterResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Assigned centroid index per data point, in load order
    pub fn labels(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.assigned).collect()
    }

    /// Assigned centroid name per data point, in load order
    pub fn assigned_names(&self) -> Vec<&str> {
        self.points
            .iter()
            .map(|p| self.centroids[p.assigned].name.as_str())
            .collect()
    }

    /// Indices of the data points assigned to `cluster`
    pub fn cluster_members(&self, cluster: usize) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.assigned == cluster)
            .map(|(i, _)| i)
            .collect()
    }
}
