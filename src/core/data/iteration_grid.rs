use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    ZeroDimension {
        width: u32,
        height: u32,
    },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "grid dimensions require {} counts but {} were supplied",
                    expected, actual
                )
            }
            Self::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for IterationGridError {}

/// Row-major grid of escape-time iteration counts, one per pixel.
///
/// Row index follows the imaginary axis, column index the real axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    width: u32,
    height: u32,
    counts: Vec<u32>,
}

impl IterationGrid {
    pub fn from_counts(
        width: u32,
        height: u32,
        counts: Vec<u32>,
    ) -> Result<Self, IterationGridError> {
        if width == 0 || height == 0 {
            return Err(IterationGridError::ZeroDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if counts.len() != expected {
            return Err(IterationGridError::SizeMismatch {
                expected,
                actual: counts.len(),
            });
        }

        Ok(Self {
            width,
            height,
            counts,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn count_at(&self, x: u32, y: u32) -> u32 {
        self.counts[(y as usize) * (self.width as usize) + (x as usize)]
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}
