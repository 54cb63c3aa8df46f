//! Two dimensional NACA airfoil section geometry.
//!
//! A textual code (4-digit, 5-digit, simplified 6-series, or the 7-/8-series placeholders) is
//! parsed into a parameter record, its camber line and thickness envelope are evaluated on a
//! set of chordwise stations, and the surfaces are assembled into a single closed contour from
//! which the section metrics are computed.
//!
//! ```no_run
//! use naca_rs::airfoil::families::{generate_naca4_full, GenerationOptions};
//!
//! let section = generate_naca4_full("2412", &GenerationOptions::default()).unwrap();
//! println!("{}", section.metrics.max_thickness);
//! ```

pub mod airfoil;
pub mod algorithms;
pub mod closed_polyline;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod serialize;

pub use airfoil::codes::Family;
pub use airfoil::families::{
    generate, generate_naca4_full, generate_naca5_full, generate_naca6_full, generate_naca7_full,
    generate_naca8_full, GeneratedAirfoil, GenerationOptions,
};
pub use errors::{AirfoilError, AirfoilResult};
