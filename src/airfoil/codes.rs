//! Parsers turning textual NACA designations into immutable parameter records.

use crate::errors::{AirfoilError, AirfoilResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The airfoil families understood by the generator
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Naca4,
    Naca5,
    Naca6,
    Naca7,
    Naca8,
}

impl Family {
    pub fn all() -> [Family; 5] {
        [
            Family::Naca4,
            Family::Naca5,
            Family::Naca6,
            Family::Naca7,
            Family::Naca8,
        ]
    }

    /// An example code for the family, useful as a placeholder for user input
    pub fn example_code(&self) -> &'static str {
        match self {
            Family::Naca4 => "2412",
            Family::Naca5 => "23012",
            Family::Naca6 => "63-018",
            Family::Naca7 => "72412",
            Family::Naca8 => "82412",
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Family::Naca4 => "NACA 4-digit",
            Family::Naca5 => "NACA 5-digit",
            Family::Naca6 => "NACA 6-series",
            Family::Naca7 => "NACA 7-series",
            Family::Naca8 => "NACA 8-series",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        let digit = cleaned.trim_start_matches("naca");

        match digit {
            "4" | "4digit" => Ok(Family::Naca4),
            "5" | "5digit" => Ok(Family::Naca5),
            "6" | "6series" => Ok(Family::Naca6),
            "7" | "7series" => Ok(Family::Naca7),
            "8" | "8series" => Ok(Family::Naca8),
            _ => Err(format!("unknown airfoil family '{}'", s)),
        }
    }
}

/// Parameters of a NACA 4-digit section of the form MPTT
#[derive(Clone, Debug, PartialEq)]
pub struct Naca4Params {
    pub code: String,
    /// Maximum camber as a fraction of chord, 0.00 to 0.09
    pub m: f64,
    /// Position of maximum camber as a fraction of chord, 0.0 to 0.9
    pub p: f64,
    /// Maximum thickness as a fraction of chord
    pub t: f64,
    pub chord: f64,
}

/// Parameters of a NACA 5-digit section of the form LPQTT
#[derive(Clone, Debug, PartialEq)]
pub struct Naca5Params {
    pub code: String,
    /// Design lift coefficient scale, C_li = 0.15 * L
    pub l: u8,
    /// Position of maximum camber scale, x_mc = 0.05 * P
    pub p: u8,
    /// Camber line variant, 0 for standard and 1 for reflex
    pub q: u8,
    pub t: f64,
    pub chord: f64,
}

/// Parameters of a simplified 6-series section "6x-abb". Only the thickness takes part in the
/// geometry; the position of minimum pressure and the design lift coefficient are descriptive.
#[derive(Clone, Debug, PartialEq)]
pub struct Naca6Params {
    pub code: String,
    pub pos_min_pressure: u8,
    pub design_cl: f64,
    pub thickness: f64,
    pub chord: f64,
}

/// Parameters of a 7- or 8-series placeholder. The code is the family digit followed by a
/// 4-digit sub-code, and the geometry is the 4-digit section described by that sub-code.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderParams {
    pub family: Family,
    pub code: String,
    pub base4: String,
    pub chord: f64,
}

/// A parsed airfoil designation, one variant per family
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedParameters {
    Naca4(Naca4Params),
    Naca5(Naca5Params),
    Naca6(Naca6Params),
    Naca7(PlaceholderParams),
    Naca8(PlaceholderParams),
}

impl ParsedParameters {
    pub fn family(&self) -> Family {
        match self {
            ParsedParameters::Naca4(_) => Family::Naca4,
            ParsedParameters::Naca5(_) => Family::Naca5,
            ParsedParameters::Naca6(_) => Family::Naca6,
            ParsedParameters::Naca7(_) => Family::Naca7,
            ParsedParameters::Naca8(_) => Family::Naca8,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ParsedParameters::Naca4(p) => &p.code,
            ParsedParameters::Naca5(p) => &p.code,
            ParsedParameters::Naca6(p) => &p.code,
            ParsedParameters::Naca7(p) | ParsedParameters::Naca8(p) => &p.code,
        }
    }

    pub fn chord(&self) -> f64 {
        match self {
            ParsedParameters::Naca4(p) => p.chord,
            ParsedParameters::Naca5(p) => p.chord,
            ParsedParameters::Naca6(p) => p.chord,
            ParsedParameters::Naca7(p) | ParsedParameters::Naca8(p) => p.chord,
        }
    }
}

/// Parses a code of the given family
pub fn parse(family: Family, code: &str, chord: f64) -> AirfoilResult<ParsedParameters> {
    match family {
        Family::Naca4 => parse_naca4(code, chord).map(ParsedParameters::Naca4),
        Family::Naca5 => parse_naca5(code, chord).map(ParsedParameters::Naca5),
        Family::Naca6 => parse_naca6(code, chord).map(ParsedParameters::Naca6),
        Family::Naca7 => parse_naca7(code, chord).map(ParsedParameters::Naca7),
        Family::Naca8 => parse_naca8(code, chord).map(ParsedParameters::Naca8),
    }
}

fn check_chord(family: Family, code: &str, chord: f64) -> AirfoilResult<()> {
    if chord.is_finite() && chord > 0.0 {
        Ok(())
    } else {
        Err(AirfoilError::parameter(
            family,
            code,
            "chord",
            chord,
            "chord length must be a finite positive number",
        ))
    }
}

fn check_thickness(family: Family, code: &str, t: f64) -> AirfoilResult<()> {
    if t > 0.0 {
        Ok(())
    } else {
        Err(AirfoilError::parameter(
            family,
            code,
            "t",
            t,
            "thickness must be greater than zero",
        ))
    }
}

fn digit_at(s: &str, i: usize) -> u8 {
    s.as_bytes()[i] - b'0'
}

fn digits_value(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a NACA 4-digit code such as "2412" into m = 0.02, p = 0.4 and t = 0.12
pub fn parse_naca4(code: &str, chord: f64) -> AirfoilResult<Naca4Params> {
    let code = code.trim();
    if code.len() != 4 || !is_digits(code) {
        return Err(AirfoilError::format(
            Family::Naca4,
            code,
            "expected exactly 4 digits, e.g. '2412'",
        ));
    }
    let t = f64::from(digits_value(&code[2..])) / 100.0;
    check_thickness(Family::Naca4, code, t)?;
    check_chord(Family::Naca4, code, chord)?;

    Ok(Naca4Params {
        code: code.to_string(),
        m: f64::from(digit_at(code, 0)) / 100.0,
        p: f64::from(digit_at(code, 1)) / 10.0,
        t,
        chord,
    })
}

/// Parses a NACA 5-digit code such as "23012" into L = 2, P = 3, Q = 0 and t = 0.12
pub fn parse_naca5(code: &str, chord: f64) -> AirfoilResult<Naca5Params> {
    let code = code.trim();
    if code.len() != 5 || !is_digits(code) {
        return Err(AirfoilError::format(
            Family::Naca5,
            code,
            "expected exactly 5 digits, e.g. '23012'",
        ));
    }

    let q = digit_at(code, 2);
    if q > 1 {
        return Err(AirfoilError::parameter(
            Family::Naca5,
            code,
            "Q",
            q,
            "third digit must be 0 (standard) or 1 (reflex)",
        ));
    }
    let t = f64::from(digits_value(&code[3..])) / 100.0;
    check_thickness(Family::Naca5, code, t)?;
    check_chord(Family::Naca5, code, chord)?;

    Ok(Naca5Params {
        code: code.to_string(),
        l: digit_at(code, 0),
        p: digit_at(code, 1),
        q,
        t,
        chord,
    })
}

/// Parses a simplified NACA 6-series code of the form "6x-abb", e.g. "63-018" or "65-415"
pub fn parse_naca6(code: &str, chord: f64) -> AirfoilResult<Naca6Params> {
    let code = code.trim();
    let bytes = code.as_bytes();
    let well_formed = bytes.len() == 6
        && bytes[0] == b'6'
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
        && is_digits(&code[3..]);

    if !well_formed {
        return Err(AirfoilError::format(
            Family::Naca6,
            code,
            "expected the form '6x-abb', e.g. '63-018' or '65-415'",
        ));
    }
    let thickness = f64::from(digits_value(&code[4..])) / 100.0;
    check_thickness(Family::Naca6, code, thickness)?;
    check_chord(Family::Naca6, code, chord)?;

    Ok(Naca6Params {
        code: code.to_string(),
        pos_min_pressure: digit_at(code, 1),
        design_cl: f64::from(digit_at(code, 3)) / 10.0,
        thickness,
        chord,
    })
}

fn parse_placeholder(
    family: Family,
    lead: u8,
    code: &str,
    chord: f64,
) -> AirfoilResult<PlaceholderParams> {
    let code = code.trim();
    if code.len() < 4 || !is_digits(code) {
        return Err(AirfoilError::format(
            family,
            code,
            "expected a numeric code of at least 4 digits",
        ));
    }

    if code.as_bytes()[0] != lead {
        return Err(AirfoilError::format(
            family,
            code,
            format!("code must start with '{}'", char::from(lead)),
        ));
    }

    let base4 = &code[1..];
    if base4.len() != 4 {
        return Err(AirfoilError::format(
            family,
            code,
            format!(
                "expected '{}' followed by a 4-digit code, e.g. '{}2412'",
                char::from(lead),
                char::from(lead)
            ),
        ));
    }
    check_thickness(family, code, f64::from(digits_value(&base4[2..])) / 100.0)?;
    check_chord(family, code, chord)?;

    Ok(PlaceholderParams {
        family,
        code: code.to_string(),
        base4: base4.to_string(),
        chord,
    })
}

/// Parses a 7-series placeholder code: '7' followed by a 4-digit code
pub fn parse_naca7(code: &str, chord: f64) -> AirfoilResult<PlaceholderParams> {
    parse_placeholder(Family::Naca7, b'7', code, chord)
}

/// Parses an 8-series placeholder code: '8' followed by a 4-digit code
pub fn parse_naca8(code: &str, chord: f64) -> AirfoilResult<PlaceholderParams> {
    parse_placeholder(Family::Naca8, b'8', code, chord)
}
