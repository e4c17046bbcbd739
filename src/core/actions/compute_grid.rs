use rayon::prelude::*;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeGridError {
    ZeroDimension { width: u32, height: u32 },
    ZeroMaxIterations,
    NonPositiveRadius { radius_squared: f64 },
    Grid(IterationGridError),
}

impl fmt::Display for ComputeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveRadius { radius_squared } => {
                write!(
                    f,
                    "escape radius squared must be positive: {}",
                    radius_squared
                )
            }
            Self::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl Error for ComputeGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IterationGridError> for ComputeGridError {
    fn from(err: IterationGridError) -> Self {
        Self::Grid(err)
    }
}

/// Maps pixel `(x, y)` on a `width`x`height` canvas to the complex constant
/// at the matching position within `bounds`.
#[must_use]
pub fn pixel_to_complex(x: u32, y: u32, width: u32, height: u32, bounds: ComplexRect) -> Complex {
    Complex {
        real: bounds.min_real() + (f64::from(x) / f64::from(width)) * bounds.real_span(),
        imag: bounds.min_imaginary()
            + (f64::from(y) / f64::from(height)) * bounds.imaginary_span(),
    }
}

/// Iterates `z = z² + c` from zero and returns the step at which `|z|²`
/// first exceeds `radius_squared`, or `max_iterations` if it never does
/// within the budget. A result equal to `max_iterations` classifies the
/// point as inside the set.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32, radius_squared: f64) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > radius_squared {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

fn validate(
    width: u32,
    height: u32,
    max_iterations: u32,
    radius_squared: f64,
) -> Result<(), ComputeGridError> {
    if width == 0 || height == 0 {
        return Err(ComputeGridError::ZeroDimension { width, height });
    }
    if max_iterations == 0 {
        return Err(ComputeGridError::ZeroMaxIterations);
    }
    if !(radius_squared > 0.0) {
        return Err(ComputeGridError::NonPositiveRadius { radius_squared });
    }

    Ok(())
}

/// Computes the escape-time grid for `bounds` at `width`x`height` pixels,
/// one count per pixel, in parallel.
///
/// Pixels are fully independent, so the work-stealing split cannot change
/// the result: the output is identical to [`compute_grid_sequential`].
pub fn compute_grid(
    width: u32,
    height: u32,
    bounds: ComplexRect,
    max_iterations: u32,
    radius_squared: f64,
) -> Result<IterationGrid, ComputeGridError> {
    validate(width, height, max_iterations, radius_squared)?;

    let counts: Vec<u32> = (0..(width as usize) * (height as usize))
        .into_par_iter()
        .map(|index| {
            let x = (index % width as usize) as u32;
            let y = (index / width as usize) as u32;
            escape_time(
                pixel_to_complex(x, y, width, height, bounds),
                max_iterations,
                radius_squared,
            )
        })
        .collect();

    Ok(IterationGrid::from_counts(width, height, counts)?)
}

/// Single-threaded reference implementation of [`compute_grid`].
pub fn compute_grid_sequential(
    width: u32,
    height: u32,
    bounds: ComplexRect,
    max_iterations: u32,
    radius_squared: f64,
) -> Result<IterationGrid, ComputeGridError> {
    validate(width, height, max_iterations, radius_squared)?;

    let mut counts = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            counts.push(escape_time(
                pixel_to_complex(x, y, width, height, bounds),
                max_iterations,
                radius_squared,
            ));
        }
    }

    Ok(IterationGrid::from_counts(width, height, counts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bounds() -> ComplexRect {
        ComplexRect::new(-2.1, 2.1, -2.0, 2.0).unwrap()
    }

    #[test]
    fn test_escape_time_origin_never_escapes() {
        let c = Complex::ZERO;

        assert_eq!(escape_time(c, 100, 4.0), 100);
    }

    #[test]
    fn test_escape_time_far_point_escapes_quickly() {
        let c = Complex {
            real: 2.0,
            imag: 2.0,
        };

        // z_1 = c, |c|² = 8 > 4, so the loop stops at step 1
        assert_eq!(escape_time(c, 100, 4.0), 1);
    }

    #[test]
    fn test_escape_time_boundary_point_is_inside() {
        // c = -2: the orbit is 0, -2, 2, 2, ... and |2|² == 4 never exceeds
        // the strict threshold.
        let c = Complex {
            real: -2.0,
            imag: 0.0,
        };

        assert_eq!(escape_time(c, 50, 4.0), 50);
    }

    #[test]
    fn test_escape_time_respects_budget() {
        let c = Complex {
            real: -0.75,
            imag: 0.1,
        };

        for max_iterations in [1, 5, 50, 500] {
            let count = escape_time(c, max_iterations, 4.0);
            assert!(count <= max_iterations);
        }
    }

    #[test]
    fn test_compute_grid_counts_stay_within_budget() {
        let max_iterations = 30;
        let grid = compute_grid(32, 24, test_bounds(), max_iterations, 4.0).unwrap();

        assert_eq!(grid.width(), 32);
        assert_eq!(grid.height(), 24);
        assert!(grid.counts().iter().all(|&c| c <= max_iterations));
    }

    #[test]
    fn test_compute_grid_contains_inside_and_outside_points() {
        // The default view straddles the set: some pixels must escape and
        // some must exhaust the budget.
        let max_iterations = 30;
        let grid = compute_grid(32, 24, test_bounds(), max_iterations, 4.0).unwrap();

        assert!(grid.counts().iter().any(|&c| c == max_iterations));
        assert!(grid.counts().iter().any(|&c| c < max_iterations));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel = compute_grid(40, 30, test_bounds(), 60, 4.0).unwrap();
        let sequential = compute_grid_sequential(40, 30, test_bounds(), 60, 4.0).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_compute_grid_is_deterministic() {
        let first = compute_grid(25, 25, test_bounds(), 40, 4.0).unwrap();
        let second = compute_grid(25, 25, test_bounds(), 40, 4.0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pixel_to_complex_corners() {
        let bounds = test_bounds();
        let top_left = pixel_to_complex(0, 0, 800, 600, bounds);
        let past_bottom_right = pixel_to_complex(800, 600, 800, 600, bounds);

        assert_eq!(top_left.real, -2.1);
        assert_eq!(top_left.imag, -2.0);
        assert!((past_bottom_right.real - 2.1).abs() < 1e-12);
        assert!((past_bottom_right.imag - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_grid_rejects_invalid_inputs() {
        let bounds = test_bounds();

        assert_eq!(
            compute_grid(0, 10, bounds, 50, 4.0),
            Err(ComputeGridError::ZeroDimension {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            compute_grid(10, 10, bounds, 0, 4.0),
            Err(ComputeGridError::ZeroMaxIterations)
        );
        assert_eq!(
            compute_grid(10, 10, bounds, 50, 0.0),
            Err(ComputeGridError::NonPositiveRadius {
                radius_squared: 0.0
            })
        );
    }
}
