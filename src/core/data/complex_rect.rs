use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { real_span: f64, imaginary_span: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                real_span,
                imaginary_span,
            } => {
                write!(
                    f,
                    "plane bounds spans must be positive: {}x{}",
                    real_span, imaginary_span
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The rectangle of the complex plane currently mapped onto the pixel canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min_real: f64,
    max_real: f64,
    min_imaginary: f64,
    max_imaginary: f64,
}

impl ComplexRect {
    pub fn new(
        min_real: f64,
        max_real: f64,
        min_imaginary: f64,
        max_imaginary: f64,
    ) -> Result<Self, ComplexRectError> {
        let real_span = max_real - min_real;
        let imaginary_span = max_imaginary - min_imaginary;

        if !(real_span > 0.0) || !(imaginary_span > 0.0) {
            return Err(ComplexRectError::InvalidSize {
                real_span,
                imaginary_span,
            });
        }

        Ok(Self {
            min_real,
            max_real,
            min_imaginary,
            max_imaginary,
        })
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.min_real
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.max_real
    }

    #[must_use]
    pub fn min_imaginary(&self) -> f64 {
        self.min_imaginary
    }

    #[must_use]
    pub fn max_imaginary(&self) -> f64 {
        self.max_imaginary
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.max_real - self.min_real
    }

    #[must_use]
    pub fn imaginary_span(&self) -> f64 {
        self.max_imaginary - self.min_imaginary
    }
}
