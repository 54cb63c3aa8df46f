use itertools::Itertools;
use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Signed area of the polygon described by the vertices, using the shoelace formula. The
/// polygon is implicitly closed between the last and the first vertex. The result is positive for
/// counter-clockwise traversal and negative for clockwise traversal.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let twice: f64 = points
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(a, b)| a.x * b.y - a.y * b.x)
        .sum();

    twice * 0.5
}

/// Absolute area enclosed by the polygon described by the vertices
pub fn polygon_area(points: &[Point2<f64>]) -> f64 {
    signed_area(points).abs()
}
