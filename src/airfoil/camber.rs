use crate::airfoil::codes::{Family, Naca4Params, Naca5Params};
use crate::airfoil::sampling::SampleSequence;
use crate::algorithms::fixed_point;
use crate::errors::{AirfoilError, AirfoilResult};
use std::f64::consts::FRAC_PI_2;
use tracing::warn;

const INFLECTION_START: f64 = 0.1;
const INFLECTION_TOL: f64 = 1e-6;
const INFLECTION_MAX_ITER: usize = 1000;

/// A mean camber line model gives the camber ordinate and its analytic slope at a fraction of the
/// chord from 0.0 to 1.0. Ordinates are in chord fractions.
pub trait CamberModel {
    fn ordinate(&self, x: f64) -> f64;

    fn slope(&self, x: f64) -> f64;

    /// Evaluates the model at every station of the sample sequence
    fn camber_line(&self, samples: &SampleSequence) -> CamberLine {
        CamberLine {
            ordinate: samples.values().iter().map(|x| self.ordinate(*x)).collect(),
            slope: samples.values().iter().map(|x| self.slope(*x)).collect(),
        }
    }
}

/// Camber ordinates and slopes, indexed identically to the sample sequence
#[derive(Clone, Debug, PartialEq)]
pub struct CamberLine {
    pub ordinate: Vec<f64>,
    pub slope: Vec<f64>,
}

impl CamberLine {
    pub fn max_abs(&self) -> f64 {
        self.ordinate.iter().fold(0.0, |acc, y| acc.max(y.abs()))
    }
}

/// The two piece parabolic camber line of the NACA 4-digit sections. The forward piece applies
/// for x < p and the aft piece for x >= p.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Naca4Camber {
    m: f64,
    p: f64,
}

impl Naca4Camber {
    pub fn new(max_camber: f64, max_camber_chord: f64) -> Naca4Camber {
        Naca4Camber {
            m: max_camber,
            p: max_camber_chord,
        }
    }

    pub fn from_params(params: &Naca4Params) -> Naca4Camber {
        Naca4Camber::new(params.m, params.p)
    }

    fn is_symmetric(&self) -> bool {
        self.p == 0.0
    }
}

impl CamberModel for Naca4Camber {
    fn ordinate(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2)) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        }
    }

    fn slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powi(2)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }
}

/// The standard (non-reflexed) NACA 5-digit camber line: a cubic up to the inflection point `r`
/// and a straight line from there to the trailing edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Naca5Camber {
    r: f64,
    k1: f64,
    iterations: usize,
    converged: bool,
}

impl Naca5Camber {
    /// Builds the camber line for a parsed 5-digit code. Reflexed sections (Q = 1) are not
    /// supported. Codes whose P digit places the maximum camber where the inflection equation
    /// has no solution in (0, 1) fail with a numeric domain error. The non-convergence warning
    /// is unreachable from digit codes: P = 1..8 converge and P = 9 diverges out of (0, 1).
    pub fn standard(params: &Naca5Params) -> AirfoilResult<Naca5Camber> {
        if params.q == 1 {
            return Err(AirfoilError::NotSupported {
                family: Family::Naca5,
                code: params.code.clone(),
                feature: "reflexed camber line (Q = 1)".to_string(),
            });
        }

        let xmc = 0.05 * f64::from(params.p);
        if xmc <= 0.0 {
            return Err(AirfoilError::domain(
                Family::Naca5,
                &params.code,
                "x_mc",
                xmc,
                "the position of maximum camber must be aft of the leading edge",
            ));
        }

        let solution = fixed_point(
            |r| xmc + r * (r / 3.0).sqrt(),
            INFLECTION_START,
            INFLECTION_TOL,
            INFLECTION_MAX_ITER,
        );
        let r = solution.value;

        if !r.is_finite() || r <= 0.0 || r >= 1.0 {
            return Err(AirfoilError::domain(
                Family::Naca5,
                &params.code,
                "r",
                r,
                "camber inflection point must lie in (0, 1)",
            ));
        }

        if !solution.converged {
            warn!(
                code = %params.code,
                r,
                iterations = solution.iterations,
                "camber inflection point did not converge, using last iterate"
            );
        }

        let n = inflection_factor(r);
        if !n.is_finite() || n == 0.0 {
            return Err(AirfoilError::domain(
                Family::Naca5,
                &params.code,
                "N(r)",
                n,
                "scale factor of the camber line is undefined",
            ));
        }

        let cli = 0.15 * f64::from(params.l);
        Ok(Naca5Camber {
            r,
            k1: 6.0 * cli / n,
            iterations: solution.iterations,
            converged: solution.converged,
        })
    }

    /// Chord fraction of the junction between the cubic and the linear piece
    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// False when the inflection point iteration hit its cap and the last iterate was used
    pub fn converged(&self) -> bool {
        self.converged
    }
}

// N(r) from the lift coefficient integral of the standard 5-digit mean line, defined for r in (0, 1)
fn inflection_factor(r: f64) -> f64 {
    (3.0 * r - 7.0 * r.powi(2) + 8.0 * r.powi(3) - 4.0 * r.powi(4)) / (r - r.powi(2)).sqrt()
        - 1.5 * (1.0 - 2.0 * r) * (FRAC_PI_2 - (1.0 - 2.0 * r).asin())
}

impl CamberModel for Naca5Camber {
    fn ordinate(&self, x: f64) -> f64 {
        let (r, k1) = (self.r, self.k1);
        if x < r {
            (k1 / 6.0) * (x.powi(3) - 3.0 * r * x.powi(2) + r.powi(2) * (3.0 - r) * x)
        } else {
            (k1 * r.powi(3) / 6.0) * (1.0 - x)
        }
    }

    fn slope(&self, x: f64) -> f64 {
        let (r, k1) = (self.r, self.k1);
        if x < r {
            (k1 / 6.0) * (3.0 * x.powi(2) - 6.0 * r * x + r.powi(2) * (3.0 - r))
        } else {
            -(k1 * r.powi(3) / 6.0)
        }
    }
}

/// A straight camber line on the chord. This is the simplified 6-series section: its design lift
/// coefficient and position of minimum pressure are not modelled, and the resulting section is
/// the symmetric one of the same thickness.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlatCamber;

impl CamberModel for FlatCamber {
    fn ordinate(&self, _x: f64) -> f64 {
        0.0
    }

    fn slope(&self, _x: f64) -> f64 {
        0.0
    }
}
