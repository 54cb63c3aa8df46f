use crate::airfoil::codes::Family;
use crate::errors::{AirfoilError, AirfoilResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The distribution of chordwise stations between the leading and trailing edges
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// x = (1 - cos(beta)) / 2 with beta uniform on [0, pi], clustering stations at both edges
    #[default]
    Cosine,
    Linear,
}

impl Display for Spacing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Spacing::Cosine => write!(f, "cosine"),
            Spacing::Linear => write!(f, "linear"),
        }
    }
}

impl FromStr for Spacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(Spacing::Cosine),
            "linear" => Ok(Spacing::Linear),
            _ => Err(format!("spacing must be 'cosine' or 'linear', got '{}'", s)),
        }
    }
}

/// An ordered sequence of chordwise fractions, with index 0 at the leading edge (0.0) and the
/// last index at the trailing edge (1.0)
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSequence {
    x: Vec<f64>,
}

impl SampleSequence {
    pub(crate) fn cosine(n: usize) -> SampleSequence {
        let last = (n.max(2) - 1) as f64;
        let x = (0..n)
            .map(|i| {
                let beta = PI * (i as f64) / last;
                (1.0 - beta.cos()) / 2.0
            })
            .collect();
        SampleSequence::pinned(x)
    }

    pub(crate) fn linear(n: usize) -> SampleSequence {
        let last = (n.max(2) - 1) as f64;
        let x = (0..n).map(|i| (i as f64) / last).collect();
        SampleSequence::pinned(x)
    }

    /// Creates a sequence of `n` stations, failing when fewer than two are requested since a
    /// section needs at least a leading and a trailing edge
    pub fn new(spacing: Spacing, n: usize, family: Family, code: &str) -> AirfoilResult<Self> {
        if n < 2 {
            return Err(AirfoilError::parameter(
                family,
                code,
                "n_points",
                n,
                "at least 2 chordwise stations are required",
            ));
        }

        Ok(match spacing {
            Spacing::Cosine => SampleSequence::cosine(n),
            Spacing::Linear => SampleSequence::linear(n),
        })
    }

    // Both ends are exact so the stations span [0, 1]
    fn pinned(mut x: Vec<f64>) -> SampleSequence {
        if let Some(first) = x.first_mut() {
            *first = 0.0;
        }
        if x.len() > 1 {
            if let Some(last) = x.last_mut() {
                *last = 1.0;
            }
        }
        SampleSequence { x }
    }

    pub fn values(&self) -> &[f64] {
        &self.x
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
