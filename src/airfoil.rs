use crate::closed_polyline::ClosedContour;
use ncollide2d::na::Point2;

pub mod camber;
pub mod codes;
pub mod families;
pub mod metrics;
pub mod sampling;
pub mod surface;
pub mod thickness;

/// The camber point and the matching upper and lower surface points at one chordwise station
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// Upper surface, lower surface and camber line of a section, each ordered from the leading edge
/// to the trailing edge
#[derive(Clone, Debug, PartialEq)]
pub struct Airfoil {
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// Joins the surfaces into one loop: the upper surface from the trailing edge to the leading
    /// edge followed by the lower surface after the leading edge. Both surfaces share the leading
    /// edge point, which is kept once.
    pub fn to_outer_contour(&self) -> ClosedContour {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().cloned().collect();
        result.extend(self.lower.iter().skip(1));
        ClosedContour::new(result)
    }
}
