//! Entry points which turn an airfoil code into a closed contour, a camber line and a metrics
//! record. Every call builds all of its data from scratch and shares nothing with other calls.

use crate::airfoil::camber::{CamberModel, FlatCamber, Naca4Camber, Naca5Camber};
use crate::airfoil::codes::{
    parse, parse_naca4, parse_naca5, parse_naca6, parse_naca7, parse_naca8, Family, Naca4Params,
    Naca5Params, Naca6Params, ParsedParameters, PlaceholderParams,
};
use crate::airfoil::metrics::{compute_metrics, MetricsRecord, ShapeParameters};
use crate::airfoil::sampling::{SampleSequence, Spacing};
use crate::airfoil::surface::assemble;
use crate::airfoil::thickness::ThicknessProfile;
use crate::closed_polyline::ClosedContour;
use crate::errors::AirfoilResult;
use crate::serialize::serialize_points;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

fn default_chord() -> f64 {
    1.0
}

fn default_n_points() -> usize {
    200
}

/// Chord length, number of chordwise stations and their spacing. Every field has a default, so a
/// partial JSON document is a complete set of options. The chord is handed to the parser by the
/// `generate_*` entry points.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default = "default_chord")]
    pub chord: f64,

    #[serde(default = "default_n_points")]
    pub n_points: usize,

    #[serde(default)]
    pub spacing: Spacing,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions::new(default_chord(), default_n_points(), Spacing::Cosine)
    }
}

impl GenerationOptions {
    pub fn new(chord: f64, n_points: usize, spacing: Spacing) -> Self {
        GenerationOptions {
            chord,
            n_points,
            spacing,
        }
    }

    pub fn with_chord(chord: f64) -> Self {
        GenerationOptions {
            chord,
            ..Default::default()
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// The complete result of a generation call
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedAirfoil {
    pub contour: ClosedContour,

    /// Camber line points with x in chord units, one per chordwise station
    #[serde(serialize_with = "serialize_points")]
    pub camber_line: Vec<Point2<f64>>,
    pub metrics: MetricsRecord,
}

fn build(
    family: Family,
    code: &str,
    shape: ShapeParameters,
    camber: &impl CamberModel,
    chord: f64,
    options: &GenerationOptions,
) -> AirfoilResult<GeneratedAirfoil> {
    if options.chord != chord {
        warn!(
            %family,
            code,
            chord,
            options_chord = options.chord,
            "chord in options differs from the parsed chord, using the parsed chord"
        );
    }

    let samples = SampleSequence::new(options.spacing, options.n_points, family, code)?;
    let camber_line = camber.camber_line(&samples);
    let thickness = ThicknessProfile::new(shape.thickness(), &samples);

    let airfoil = assemble(&samples, &camber_line, &thickness, chord);
    let contour = airfoil.to_outer_contour();
    let metrics = compute_metrics(
        family,
        code,
        shape,
        chord,
        &contour,
        &camber_line,
        &thickness,
    );

    debug!(
        %family,
        code,
        points = contour.len(),
        area = metrics.area,
        "generated airfoil"
    );

    Ok(GeneratedAirfoil {
        contour,
        camber_line: airfoil.camber,
        metrics,
    })
}

impl Naca4Params {
    pub fn generate(&self, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
        let shape = ShapeParameters::FourDigit {
            m: self.m,
            p: self.p,
            t: self.t,
        };
        build(
            Family::Naca4,
            &self.code,
            shape,
            &Naca4Camber::from_params(self),
            self.chord,
            options,
        )
    }
}

impl Naca5Params {
    pub fn generate(&self, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
        let camber = Naca5Camber::standard(self)?;
        let shape = ShapeParameters::FiveDigit {
            l: self.l,
            p: self.p,
            q: self.q,
            t: self.t,
        };
        build(Family::Naca5, &self.code, shape, &camber, self.chord, options)
    }
}

impl Naca6Params {
    /// Symmetric approximation of the 6-series section; see [`FlatCamber`]
    pub fn generate(&self, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
        let shape = ShapeParameters::SixSeries {
            pos_min_pressure: self.pos_min_pressure,
            design_cl: self.design_cl,
            thickness: self.thickness,
        };
        build(
            Family::Naca6,
            &self.code,
            shape,
            &FlatCamber,
            self.chord,
            options,
        )
    }
}

impl PlaceholderParams {
    /// There is no analytic 7- or 8-series geometry. The section is generated from the 4-digit
    /// sub-code, and the metrics keep the original code together with a note saying so.
    pub fn generate(&self, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
        let base = parse_naca4(&self.base4, self.chord)?;
        let mut result = base.generate(options)?;

        let series = match self.family {
            Family::Naca8 => "8-series",
            _ => "7-series",
        };
        result.metrics.family = self.family;
        result.metrics.code = self.code.clone();
        result.metrics.note = Some(format!(
            "Geometry generated using NACA 4-digit equivalent of {} code.",
            series
        ));

        Ok(result)
    }
}

impl ParsedParameters {
    /// Generates the geometry described by the parameters. The chord is the one given when the
    /// code was parsed; only the sampling is taken from `options`, and a differing
    /// `options.chord` is reported as a warning.
    pub fn generate(&self, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
        match self {
            ParsedParameters::Naca4(p) => p.generate(options),
            ParsedParameters::Naca5(p) => p.generate(options),
            ParsedParameters::Naca6(p) => p.generate(options),
            ParsedParameters::Naca7(p) | ParsedParameters::Naca8(p) => p.generate(options),
        }
    }
}

/// Parses and generates a code of any family
#[instrument(level = "debug", skip(options))]
pub fn generate(
    family: Family,
    code: &str,
    options: &GenerationOptions,
) -> AirfoilResult<GeneratedAirfoil> {
    parse(family, code, options.chord)?.generate(options)
}

#[instrument(level = "debug", skip(options))]
pub fn generate_naca4_full(code: &str, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
    parse_naca4(code, options.chord)?.generate(options)
}

#[instrument(level = "debug", skip(options))]
pub fn generate_naca5_full(code: &str, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
    parse_naca5(code, options.chord)?.generate(options)
}

#[instrument(level = "debug", skip(options))]
pub fn generate_naca6_full(code: &str, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
    parse_naca6(code, options.chord)?.generate(options)
}

#[instrument(level = "debug", skip(options))]
pub fn generate_naca7_full(code: &str, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
    parse_naca7(code, options.chord)?.generate(options)
}

#[instrument(level = "debug", skip(options))]
pub fn generate_naca8_full(code: &str, options: &GenerationOptions) -> AirfoilResult<GeneratedAirfoil> {
    parse_naca8(code, options.chord)?.generate(options)
}
