use super::*;
use approx::assert_relative_eq;

fn centroids(rows: &[(&str, f64, f64)]) -> Vec<Centroid> {
    rows.iter()
        .map(|&(name, x, y)| Centroid::new(name, Point::new(x, y)))
        .collect()
}

fn points(coords: &[(f64, f64)]) -> Vec<DataPoint> {
    coords
        .iter()
        .map(|&(x, y)| DataPoint::new(Point::new(x, y)))
        .collect()
}

fn scenario() -> (Vec<Centroid>, Vec<DataPoint>) {
    (
        centroids(&[("A", 0.0, 0.0), ("B", 10.0, 10.0)]),
        points(&[(1.0, 1.0), (9.0, 9.0), (0.0, 2.0)]),
    )
}

// ==================== distance ====================

#[test]
fn test_euclidean_distance_pythagorean() {
    let d = euclidean_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(d, 5.0);
}

#[test]
fn test_euclidean_distance_symmetric_and_zero() {
    let a = Point::new(-1.5, 2.0);
    let b = Point::new(4.0, -3.25);

    assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
    assert_eq!(euclidean_distance(a, a), 0.0);
    assert_eq!(Euclidean.distance(a, b), euclidean_distance(a, b));
}

// ==================== assignment step ====================

#[test]
fn test_assignment_first_iteration_scenario() {
    let (mut cs, mut ps) = scenario();

    let outcome = assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    assert_eq!(ps.iter().map(|p| p.assigned).collect::<Vec<_>>(), vec![0, 1, 0]);
    assert_eq!(cs[0].count, 2);
    assert_eq!(cs[0].sum_x, 1.0);
    assert_eq!(cs[0].sum_y, 3.0);
    assert_eq!(cs[1].count, 1);
    assert_eq!(cs[1].sum_x, 9.0);
    assert_eq!(cs[1].sum_y, 9.0);

    assert_relative_eq!(outcome.total_error, 2.0 * 2f64.sqrt() + 2.0, epsilon = 1e-12);
    assert!(!outcome.converged);
}

#[test]
fn test_assignment_tie_goes_to_lowest_index() {
    let mut cs = centroids(&[("left", 0.0, 0.0), ("right", 2.0, 0.0)]);
    let mut ps = points(&[(1.0, 0.0)]);

    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    assert_eq!(ps[0].assigned, 0);
    assert_eq!(cs[0].count, 1);
    assert_eq!(cs[1].count, 0);
}

#[test]
fn test_assignment_tie_ignores_later_duplicates() {
    let mut cs = centroids(&[("far", 50.0, 50.0), ("a", 1.0, 1.0), ("b", 1.0, 1.0)]);
    let mut ps = points(&[(0.0, 0.0)]);

    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    assert_eq!(ps[0].assigned, 1);
}

#[test]
fn test_assignment_resets_accumulators() {
    let (mut cs, mut ps) = scenario();

    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);
    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    assert_eq!(cs[0].count, 2);
    assert_eq!(cs[1].count, 1);
    assert_eq!(cs[0].sum_x, 1.0);
}

#[test]
fn test_assignment_convergence_is_exact_equality() {
    let (mut cs, mut ps) = scenario();
    let first = assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    let same = assign_points(&mut ps, &mut cs, &Euclidean, first.total_error);
    assert!(same.converged);

    let nudged = f64::from_bits(first.total_error.to_bits() + 1);
    let off_by_one_ulp = assign_points(&mut ps, &mut cs, &Euclidean, nudged);
    assert!(!off_by_one_ulp.converged);
}

#[test]
fn test_assignment_zero_total_against_initial_zero_converges() {
    let mut cs = centroids(&[("A", 1.0, 1.0)]);
    let mut ps = points(&[(1.0, 1.0), (1.0, 1.0)]);

    let outcome = assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    assert_eq!(outcome.total_error, 0.0);
    assert!(outcome.converged);
}

// ==================== update step ====================

#[test]
fn test_update_moves_centroid_to_member_mean() {
    let (mut cs, mut ps) = scenario();
    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    update_centroids(&mut cs);

    assert_eq!(cs[0].position, Point::new(0.5, 1.5));
    assert_eq!(cs[1].position, Point::new(9.0, 9.0));
}

#[test]
fn test_update_mean_matches_assigned_members() {
    let mut cs = centroids(&[("A", 0.0, 0.0), ("B", 20.0, 0.0), ("C", 0.0, 20.0)]);
    let mut ps = points(&[
        (1.0, 2.0),
        (2.0, -1.0),
        (19.0, 1.0),
        (22.0, 3.0),
        (21.0, -4.0),
        (-1.0, 18.0),
    ]);
    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);
    let snapshot = ps.clone();

    update_centroids(&mut cs);

    for (index, centroid) in cs.iter().enumerate() {
        let members: Vec<Point> = snapshot
            .iter()
            .filter(|p| p.assigned == index)
            .map(|p| p.point())
            .collect();
        let n = members.len() as f64;
        let mean_x = members.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = members.iter().map(|p| p.y).sum::<f64>() / n;

        assert_relative_eq!(centroid.position.x, mean_x, epsilon = 1e-12);
        assert_relative_eq!(centroid.position.y, mean_y, epsilon = 1e-12);
    }
}

#[test]
fn test_update_leaves_empty_centroid_in_place() {
    let mut cs = centroids(&[("near", 0.0, 0.0), ("far", 100.0, 100.0)]);
    let mut ps = points(&[(1.0, 0.0), (0.0, 1.0)]);
    assign_points(&mut ps, &mut cs, &Euclidean, 0.0);

    update_centroids(&mut cs);

    assert_eq!(cs[1].count, 0);
    assert_eq!(cs[1].position, Point::new(100.0, 100.0));
    assert!(compute_centroid(&cs[1]).is_none());
}

// ==================== convergence loop ====================

#[test]
fn test_run_scenario_converges() {
    let (cs, ps) = scenario();

    let result = kmeans(cs, ps).unwrap();

    assert!(result.converged());
    assert_eq!(result.iterations, 3);
    assert_eq!(result.assigned_names(), vec!["A", "B", "A"]);
    assert_relative_eq!(result.error_metric, 2f64.sqrt(), epsilon = 1e-12);
    assert_eq!(format!("{:.3}", result.error_metric), "1.414");
    assert_eq!(result.centroids[0].position, Point::new(0.5, 1.5));
    assert_eq!(result.centroids[1].position, Point::new(9.0, 9.0));
}

#[test]
fn test_run_is_deterministic() {
    let build = || {
        let cs = centroids(&[("A", 0.0, 0.0), ("B", 5.0, 5.0), ("C", 10.0, 0.0)]);
        let ps = points(&[
            (0.5, 0.2),
            (4.8, 5.1),
            (9.7, 0.3),
            (1.1, 0.9),
            (5.5, 4.2),
            (10.4, -0.6),
            (2.5, 2.5),
        ]);
        kmeans(cs, ps).unwrap()
    };

    let first = build();
    let second = build();

    assert_eq!(first.labels(), second.labels());
    assert_eq!(first.error_metric.to_bits(), second.error_metric.to_bits());
    assert_eq!(first.iterations, second.iterations);
}

#[test]
fn test_run_error_never_increases_on_scenario() {
    let (mut cs, mut ps) = scenario();
    let mut previous = 0.0;
    let mut totals = Vec::new();

    loop {
        let outcome = assign_points(&mut ps, &mut cs, &Euclidean, previous);
        totals.push(outcome.total_error);
        if outcome.converged {
            break;
        }
        previous = outcome.total_error;
        update_centroids(&mut cs);
    }

    assert_eq!(totals.len(), 3);
    for pair in totals.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn test_run_centroids_already_at_means_converge_on_second_step() {
    let cs = centroids(&[("A", 1.0, 1.0), ("B", 5.0, 5.0)]);
    let ps = points(&[(0.0, 1.0), (2.0, 1.0), (5.0, 4.0), (5.0, 6.0)]);

    let result = kmeans(cs, ps).unwrap();

    assert!(result.converged());
    assert_eq!(result.iterations, 2);
    assert_eq!(result.error_metric, 4.0);
    assert_eq!(result.labels(), vec![0, 0, 1, 1]);
}

#[test]
fn test_run_points_on_centroids_converge_immediately() {
    let cs = centroids(&[("A", 1.0, 1.0), ("B", 5.0, 5.0)]);
    let ps = points(&[(1.0, 1.0), (5.0, 5.0)]);

    let result = kmeans(cs, ps).unwrap();

    assert_eq!(result.iterations, 1);
    assert_eq!(result.error_metric, 0.0);
}

#[test]
fn test_run_keeps_empty_centroid() {
    let cs = centroids(&[("near", 0.0, 0.0), ("far", 100.0, 100.0)]);
    let ps = points(&[(1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);

    let result = kmeans(cs, ps).unwrap();

    assert!(result.converged());
    assert_eq!(result.centroids[1].position, Point::new(100.0, 100.0));
    assert!(result.cluster_members(1).is_empty());
    assert_eq!(result.cluster_members(0), vec![0, 1, 2]);
}

#[test]
fn test_run_stops_at_iteration_cap() {
    let (cs, ps) = scenario();

    let result = ClusteringRun::new(cs, ps)
        .unwrap()
        .with_max_iterations(1)
        .run();

    assert_eq!(result.termination, Termination::IterationCap);
    assert!(!result.converged());
    assert_eq!(result.iterations, 1);
    assert_relative_eq!(result.error_metric, 2.0 * 2f64.sqrt() + 2.0, epsilon = 1e-12);
    // no update step runs after the final assignment
    assert_eq!(result.centroids[0].position, Point::new(0.0, 0.0));
}

#[test]
fn test_run_cap_above_convergence_point_is_not_reached() {
    let (cs, ps) = scenario();

    let result = ClusteringRun::new(cs, ps)
        .unwrap()
        .with_max_iterations(10)
        .run();

    assert_eq!(result.termination, Termination::Converged);
    assert_eq!(result.iterations, 3);
}

#[test]
fn test_run_zero_cap_is_clamped_to_one() {
    let (cs, ps) = scenario();

    let result = ClusteringRun::new(cs, ps)
        .unwrap()
        .with_max_iterations(0)
        .run();

    assert_eq!(result.iterations, 1);
}

#[test]
fn test_new_rejects_empty_collections() {
    let (cs, ps) = scenario();

    assert_eq!(
        ClusteringRun::new(Vec::new(), ps).unwrap_err(),
        ClusterError::NoCentroids
    );
    assert_eq!(
        ClusteringRun::new(cs, Vec::new()).unwrap_err(),
        ClusterError::NoDataPoints
    );
}

#[test]
fn test_custom_metric_is_used() {
    struct Manhattan;
    impl Distance for Manhattan {
        fn distance(&self, a: Point, b: Point) -> f64 {
            (a.x - b.x).abs() + (a.y - b.y).abs()
        }
    }

    let cs = centroids(&[("A", 0.0, 0.0)]);
    let ps = points(&[(3.0, 4.0)]);

    let run = ClusteringRun::with_metric(cs, ps, Manhattan).unwrap();
    assert_eq!(run.points().len(), 1);
    let result = run.run();

    // the lone centroid moves onto the point, so the second total is 0
    assert_eq!(result.iterations, 3);
    assert_eq!(result.error_metric, 0.0);
}
