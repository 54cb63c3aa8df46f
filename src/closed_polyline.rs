use crate::geometry::distances2::{dist, polygon_area, signed_area};
use crate::serialize::serialize_points;
use ncollide2d::na::Point2;
use ncollide2d::shape::Polyline;
use serde::Serialize;

/// A single closed boundary loop around an airfoil section. The upper surface is traversed from
/// the trailing edge to the leading edge and is immediately followed by the lower surface from
/// the leading edge back to the trailing edge. The leading edge point appears exactly once.
///
/// The loop is closed implicitly: the first and last vertices are not joined by a duplicate
/// point, and the distance between them is the (canonical, non-zero) trailing edge gap.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClosedContour {
    #[serde(serialize_with = "serialize_points")]
    points: Vec<Point2<f64>>,
}

impl ClosedContour {
    pub fn new(points: Vec<Point2<f64>>) -> ClosedContour {
        ClosedContour { points }
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area with sign; positive for the ordering produced by the surface assembler
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    /// The same loop traversed in the opposite direction
    pub fn reversed(&self) -> ClosedContour {
        let mut points = self.points.clone();
        points.reverse();
        ClosedContour { points }
    }

    /// Distance between the first and last vertices of the loop
    pub fn trailing_edge_gap(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => dist(a, b),
            _ => 0.0,
        }
    }

    /// Builds a polyline with an explicit closing edge from the last vertex back to the first,
    /// suitable for rendering or for distance queries
    pub fn to_polyline(&self) -> Polyline<f64> {
        let mut vertices = self.points.clone();
        if let Some(first) = self.points.first() {
            vertices.push(*first);
        }
        Polyline::new(vertices, Option::None)
    }
}
