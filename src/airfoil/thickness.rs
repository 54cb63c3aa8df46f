use crate::airfoil::sampling::SampleSequence;

/// Half thickness of the standard NACA four digit envelope at chord fraction `x`, for a section
/// with maximum thickness `t` (as a fraction of chord). The envelope is shared by every family.
/// At x = 1 the result is the small, non-zero trailing edge half thickness of the open form.
pub fn half_thickness(t: f64, x: f64) -> f64 {
    5.0 * t
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4))
}

/// Half thickness values, indexed identically to the sample sequence they were computed on
#[derive(Clone, Debug, PartialEq)]
pub struct ThicknessProfile {
    pub t: f64,
    pub half: Vec<f64>,
}

impl ThicknessProfile {
    pub fn new(t: f64, samples: &SampleSequence) -> ThicknessProfile {
        ThicknessProfile {
            t,
            half: samples.values().iter().map(|x| half_thickness(t, *x)).collect(),
        }
    }

    /// Peak total (upper to lower) thickness in chord fractions
    pub fn max_total(&self) -> f64 {
        self.half.iter().fold(0.0, |acc, h| acc.max(2.0 * h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_4_thickness(x: f64, e: f64) {
        assert_relative_eq!(e, half_thickness(0.12, x), epsilon = 1e-3);
    }

    #[test]
    fn test_leading_edge_is_zero() {
        assert_eq!(0.0, half_thickness(0.12, 0.0));
    }

    #[test]
    fn test_trailing_edge_gap_is_kept() {
        assert_relative_eq!(0.00126, half_thickness(0.12, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn test_profile_peak() {
        let profile = ThicknessProfile::new(0.12, &SampleSequence::cosine(200));
        assert_eq!(200, profile.half.len());
        assert_relative_eq!(0.12, profile.max_total(), epsilon = 1e-3);
    }

    #[test]
    fn test_profile_scales_with_thickness() {
        let s = SampleSequence::cosine(200);
        let a = ThicknessProfile::new(0.12, &s);
        let b = ThicknessProfile::new(0.24, &s);
        assert_relative_eq!(2.0 * a.max_total(), b.max_total(), epsilon = 1e-12);
    }
}
