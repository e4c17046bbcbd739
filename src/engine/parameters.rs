use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::view_state::ViewState;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    NonPositive {
        field: &'static str,
        value: String,
    },
    InvalidBounds(ComplexRectError),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { field, value } => {
                write!(f, "parameter {} is not a number: {:?}", field, value)
            }
            Self::NonPositive { field, value } => {
                write!(f, "parameter {} must be positive: {:?}", field, value)
            }
            Self::InvalidBounds(err) => write!(f, "restored bounds are invalid: {}", err),
        }
    }
}

impl Error for ParameterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBounds(err) => Some(err),
            _ => None,
        }
    }
}

/// The six numeric view parameters in textual form.
///
/// The formatting is locale independent and round-trips exactly: `f64`
/// values use Rust's shortest round-trippable representation. This is the
/// surface the persistence layer embeds in saved images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParameters {
    pub max_iterations: String,
    pub ratio: String,
    pub min_real: String,
    pub max_real: String,
    pub min_imaginary: String,
    pub max_imaginary: String,
}

/// A fully validated set of restored parameters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedParameters {
    pub max_iterations: u32,
    pub ratio: f64,
    pub bounds: ComplexRect,
}

fn parse_f64(field: &'static str, value: &str) -> Result<f64, ParameterError> {
    let parsed: f64 = value.parse().map_err(|_| ParameterError::InvalidNumber {
        field,
        value: value.to_string(),
    })?;

    if parsed.is_nan() {
        return Err(ParameterError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }

    Ok(parsed)
}

impl ViewParameters {
    #[must_use]
    pub(crate) fn from_state(state: &ViewState) -> Self {
        let bounds = state.bounds();
        Self {
            max_iterations: state.max_iterations().to_string(),
            ratio: state.ratio().to_string(),
            min_real: bounds.min_real().to_string(),
            max_real: bounds.max_real().to_string(),
            min_imaginary: bounds.min_imaginary().to_string(),
            max_imaginary: bounds.max_imaginary().to_string(),
        }
    }

    /// Parses and validates all six parameters. Nothing is applied unless
    /// every field is acceptable.
    pub(crate) fn parse(&self) -> Result<ParsedParameters, ParameterError> {
        let max_iterations: u32 =
            self.max_iterations
                .parse()
                .map_err(|_| ParameterError::InvalidNumber {
                    field: "max_iterations",
                    value: self.max_iterations.clone(),
                })?;
        if max_iterations == 0 {
            return Err(ParameterError::NonPositive {
                field: "max_iterations",
                value: self.max_iterations.clone(),
            });
        }

        let ratio = parse_f64("ratio", &self.ratio)?;
        if !(ratio > 0.0) {
            return Err(ParameterError::NonPositive {
                field: "ratio",
                value: self.ratio.clone(),
            });
        }

        let min_real = parse_f64("min_real", &self.min_real)?;
        let max_real = parse_f64("max_real", &self.max_real)?;
        let min_imaginary = parse_f64("min_imaginary", &self.min_imaginary)?;
        let max_imaginary = parse_f64("max_imaginary", &self.max_imaginary)?;

        let bounds = ComplexRect::new(min_real, max_real, min_imaginary, max_imaginary)
            .map_err(ParameterError::InvalidBounds)?;

        Ok(ParsedParameters {
            max_iterations,
            ratio,
            bounds,
        })
    }
}
