use crate::airfoil::camber::CamberLine;
use crate::airfoil::sampling::SampleSequence;
use crate::airfoil::thickness::ThicknessProfile;
use crate::airfoil::{Airfoil, CamberStation};
use itertools::izip;
use ncollide2d::na::Point2;

/// Places the upper and lower surface points of one station by offsetting the camber point by the
/// half thickness along the camber line normal. Only x is scaled by the chord; y stays in chord
/// fractions.
pub fn station_at(x: f64, yc: f64, slope: f64, yt: f64, chord: f64) -> CamberStation {
    let theta = slope.atan();
    let (sin, cos) = theta.sin_cos();

    CamberStation::new(
        Point2::new(x * chord, yc),
        Point2::new((x - yt * sin) * chord, yc + yt * cos),
        Point2::new((x + yt * sin) * chord, yc - yt * cos),
    )
}

/// Combines a camber line and a thickness profile evaluated on the same samples into the upper
/// and lower surfaces of a section
pub fn assemble(
    samples: &SampleSequence,
    camber: &CamberLine,
    thickness: &ThicknessProfile,
    chord: f64,
) -> Airfoil {
    let stations: Vec<CamberStation> = izip!(
        samples.values(),
        &camber.ordinate,
        &camber.slope,
        &thickness.half
    )
    .map(|(x, yc, slope, yt)| station_at(*x, *yc, *slope, *yt, chord))
    .collect();

    Airfoil::from_stations(&stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::camber::{CamberModel, Naca4Camber};
    use approx::assert_relative_eq;
    use ncollide2d::na::Vector2;

    fn naca_2412_linear5() -> Airfoil {
        let samples = SampleSequence::linear(5);
        let camber = Naca4Camber::new(0.02, 0.4).camber_line(&samples);
        let thickness = ThicknessProfile::new(0.12, &samples);
        assemble(&samples, &camber, &thickness, 1.0)
    }

    #[test]
    fn test_symmetric_station() {
        let s = station_at(0.3, 0.0, 0.0, 0.06, 2.0);
        assert_relative_eq!(0.6, s.upper.x, epsilon = 1e-12);
        assert_relative_eq!(0.06, s.upper.y, epsilon = 1e-12);
        assert_relative_eq!(0.6, s.lower.x, epsilon = 1e-12);
        assert_relative_eq!(-0.06, s.lower.y, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_is_normal_to_camber() {
        let s = station_at(0.2, 0.015, 0.05, 0.05, 1.0);
        let tangent = Vector2::new(1.0, 0.05);
        let offset = s.upper - s.camber;
        assert_relative_eq!(0.0, tangent.dot(&offset), epsilon = 1e-12);
        assert_relative_eq!(0.05, offset.norm(), epsilon = 1e-12);
        let mid = (s.upper - s.camber) + (s.lower - s.camber);
        assert_relative_eq!(0.0, mid.norm(), epsilon = 1e-12);
    }

    // Reference values of the 2412 section on five linearly spaced stations
    #[test]
    fn test_naca_2412_surfaces() {
        let airfoil = naca_2412_linear5();
        let upper = [
            (0.0, 0.0),
            (0.24777359906788016, 0.07655819152319546),
            (0.5005881887154037, 0.07238142883077964),
            (0.7512280796888696, 0.04477363644394951),
            (1.00008381395326, 0.001257209298899305),
        ];
        let lower = [
            (0.0, 0.0),
            (0.25222640093211984, -0.04218319152319547),
            (0.4994118112845963, -0.03349253994189074),
            (0.7487719203111304, -0.018384747555060615),
            (0.99991618604674, -0.001257209298899305),
        ];

        for (p, e) in airfoil.upper.iter().zip(upper.iter()) {
            assert_relative_eq!(e.0, p.x, epsilon = 1e-12);
            assert_relative_eq!(e.1, p.y, epsilon = 1e-12);
        }
        for (p, e) in airfoil.lower.iter().zip(lower.iter()) {
            assert_relative_eq!(e.0, p.x, epsilon = 1e-12);
            assert_relative_eq!(e.1, p.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_chord_scales_x_only() {
        let samples = SampleSequence::cosine(40);
        let camber = Naca4Camber::new(0.02, 0.4).camber_line(&samples);
        let thickness = ThicknessProfile::new(0.12, &samples);
        let a = assemble(&samples, &camber, &thickness, 1.0);
        let b = assemble(&samples, &camber, &thickness, 3.0);

        for (pa, pb) in a.upper.iter().zip(b.upper.iter()) {
            assert_relative_eq!(3.0 * pa.x, pb.x, epsilon = 1e-12);
            assert_relative_eq!(pa.y, pb.y, epsilon = 1e-15);
        }
    }
}
