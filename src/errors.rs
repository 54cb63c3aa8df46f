use crate::airfoil::codes::Family;
use thiserror::Error;

pub type AirfoilResult<T> = Result<T, AirfoilError>;

/// Failures raised while parsing an airfoil code or generating its geometry. Every variant
/// carries the family and the offending code so that a caller can report the problem without
/// having to re-derive any state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirfoilError {
    /// The code does not have the structure required by its family (length, digits, separators)
    #[error("{family} code '{code}' is malformed: {reason}")]
    InvalidCodeFormat {
        family: Family,
        code: String,
        reason: String,
    },

    /// A decoded or supplied value lies outside the range the family allows
    #[error("{family} code '{code}': invalid {parameter} = {value} ({reason})")]
    InvalidParameter {
        family: Family,
        code: String,
        parameter: String,
        value: String,
        reason: String,
    },

    /// A camber variant which exists in the NACA system but is not implemented here
    #[error("{family} code '{code}': {feature} is not supported")]
    NotSupported {
        family: Family,
        code: String,
        feature: String,
    },

    /// A derived quantity fell outside the domain of sqrt/arcsin in the camber solver
    #[error("{family} code '{code}': {quantity} = {value} is outside the numeric domain ({reason})")]
    NumericDomainError {
        family: Family,
        code: String,
        quantity: String,
        value: f64,
        reason: String,
    },
}

impl AirfoilError {
    pub fn format(family: Family, code: &str, reason: impl Into<String>) -> Self {
        AirfoilError::InvalidCodeFormat {
            family,
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parameter(
        family: Family,
        code: &str,
        parameter: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        AirfoilError::InvalidParameter {
            family,
            code: code.to_string(),
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn domain(
        family: Family,
        code: &str,
        quantity: &str,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        AirfoilError::NumericDomainError {
            family,
            code: code.to_string(),
            quantity: quantity.to_string(),
            value,
            reason: reason.into(),
        }
    }

    /// The family whose code triggered the error
    pub fn family(&self) -> Family {
        match self {
            AirfoilError::InvalidCodeFormat { family, .. }
            | AirfoilError::InvalidParameter { family, .. }
            | AirfoilError::NotSupported { family, .. }
            | AirfoilError::NumericDomainError { family, .. } => *family,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            AirfoilError::InvalidCodeFormat { code, .. }
            | AirfoilError::InvalidParameter { code, .. }
            | AirfoilError::NotSupported { code, .. }
            | AirfoilError::NumericDomainError { code, .. } => code,
        }
    }
}
