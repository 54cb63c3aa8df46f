use crate::airfoil::camber::CamberLine;
use crate::airfoil::codes::Family;
use crate::airfoil::thickness::ThicknessProfile;
use crate::closed_polyline::ClosedContour;
use serde::Serialize;

/// Empirical leading edge radius coefficient of the NACA sections, r_le = 1.1019 t^2 c
pub const LEADING_EDGE_RADIUS_COEFF: f64 = 1.1019;

/// The family specific shape parameters reported alongside the derived metrics
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapeParameters {
    FourDigit {
        m: f64,
        p: f64,
        t: f64,
    },
    FiveDigit {
        #[serde(rename = "L")]
        l: u8,
        #[serde(rename = "P")]
        p: u8,
        #[serde(rename = "Q")]
        q: u8,
        t: f64,
    },
    SixSeries {
        pos_min_pressure: u8,
        design_cl: f64,
        thickness: f64,
    },
}

impl ShapeParameters {
    /// The thickness fraction of the section, which sets the leading edge radius
    pub fn thickness(&self) -> f64 {
        match self {
            ShapeParameters::FourDigit { t, .. } => *t,
            ShapeParameters::FiveDigit { t, .. } => *t,
            ShapeParameters::SixSeries { thickness, .. } => *thickness,
        }
    }
}

/// Scalar descriptors of a generated section. Serialized as a flat map of named values, keyed by
/// the family's own parameter names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub family: Family,
    pub code: String,
    #[serde(flatten)]
    pub shape: ShapeParameters,
    pub chord: f64,
    /// Peak total thickness (not half thickness)
    pub max_thickness: f64,
    pub max_camber: f64,
    pub area: f64,
    pub leading_edge_radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn leading_edge_radius(t: f64, chord: f64) -> f64 {
    LEADING_EDGE_RADIUS_COEFF * t.powi(2) * chord
}

/// Computes the metrics of a section from its contour and the raw camber and thickness arrays
pub fn compute_metrics(
    family: Family,
    code: &str,
    shape: ShapeParameters,
    chord: f64,
    contour: &ClosedContour,
    camber: &CamberLine,
    thickness: &ThicknessProfile,
) -> MetricsRecord {
    let t = shape.thickness();

    MetricsRecord {
        family,
        code: code.to_string(),
        shape,
        chord,
        max_thickness: thickness.max_total() * chord,
        max_camber: camber.max_abs() * chord,
        area: contour.area(),
        leading_edge_radius: leading_edge_radius(t, chord),
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::Value;

    fn record(shape: ShapeParameters, note: Option<String>) -> MetricsRecord {
        MetricsRecord {
            family: Family::Naca4,
            code: "2412".to_string(),
            shape,
            chord: 1.0,
            max_thickness: 0.12,
            max_camber: 0.02,
            area: 0.08,
            leading_edge_radius: 0.0159,
            note,
        }
    }

    #[test]
    fn test_leading_edge_radius() {
        assert_relative_eq!(0.01586736, leading_edge_radius(0.12, 1.0), epsilon = 1e-12);
        assert_relative_eq!(0.03173472, leading_edge_radius(0.12, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_four_digit_keys() {
        let r = record(ShapeParameters::FourDigit { m: 0.02, p: 0.4, t: 0.12 }, None);
        let v: Value = serde_json::to_value(&r).unwrap();
        let map = v.as_object().unwrap();
        for key in ["code", "m", "p", "t", "chord", "max_thickness", "max_camber", "area"] {
            assert!(map.contains_key(key), "missing {}", key);
        }
        assert!(map.contains_key("leading_edge_radius"));
        assert!(!map.contains_key("note"));
        assert_eq!("2412", map["code"]);
    }

    #[test]
    fn test_five_digit_keys() {
        let r = record(ShapeParameters::FiveDigit { l: 2, p: 3, q: 0, t: 0.12 }, None);
        let v: Value = serde_json::to_value(&r).unwrap();
        assert_eq!(2, v["L"]);
        assert_eq!(3, v["P"]);
        assert_eq!(0, v["Q"]);
    }

    #[test]
    fn test_note_is_reported() {
        let r = record(
            ShapeParameters::SixSeries { pos_min_pressure: 3, design_cl: 0.0, thickness: 0.18 },
            Some("substituted".to_string()),
        );
        let v: Value = serde_json::to_value(&r).unwrap();
        assert_eq!("substituted", v["note"]);
        assert_eq!(3, v["pos_min_pressure"]);
        assert_relative_eq!(0.18, r.shape.thickness());
    }
}
