use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct PointEntry(#[serde(with = "Point2f64")] Point2<f64>);

/// Serializes a slice of points as a sequence of `{"x": .., "y": ..}` objects
pub fn serialize_points<S: Serializer>(points: &[Point2<f64>], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(points.iter().map(|p| PointEntry(*p)))
}
