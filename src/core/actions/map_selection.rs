use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MapSelectionError {
    SelectionOutsideCanvas {
        selection: PixelRect,
        canvas_width: u32,
        canvas_height: u32,
    },
    /// The selection is so small relative to the current bounds that the
    /// interpolated bounds collapse in 64-bit floating point.
    DegenerateBounds(ComplexRectError),
}

impl fmt::Display for MapSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionOutsideCanvas {
                selection,
                canvas_width,
                canvas_height,
            } => {
                write!(
                    f,
                    "selection (left {} right {} top {} bottom {}) exceeds the {}x{} canvas",
                    selection.left(),
                    selection.right(),
                    selection.top(),
                    selection.bottom(),
                    canvas_width,
                    canvas_height
                )
            }
            Self::DegenerateBounds(err) => {
                write!(f, "selection maps to degenerate bounds: {}", err)
            }
        }
    }
}

impl Error for MapSelectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DegenerateBounds(err) => Some(err),
            Self::SelectionOutsideCanvas { .. } => None,
        }
    }
}

fn interpolate(min: f64, max: f64, pixel: u32, extent: u32) -> f64 {
    // The end pixels return the bound values themselves so that mapping the
    // full canvas reproduces the input bounds exactly.
    if pixel == 0 {
        min
    } else if pixel == extent {
        max
    } else {
        min + (f64::from(pixel) / f64::from(extent)) * (max - min)
    }
}

/// Maps a selected pixel sub-rectangle of the canvas to the plane bounds it
/// covers, by independent linear interpolation along each axis.
pub fn map_selection(
    bounds: ComplexRect,
    canvas_width: u32,
    canvas_height: u32,
    selection: PixelRect,
) -> Result<ComplexRect, MapSelectionError> {
    if !selection.fits_within(canvas_width, canvas_height) {
        return Err(MapSelectionError::SelectionOutsideCanvas {
            selection,
            canvas_width,
            canvas_height,
        });
    }

    let min_real = interpolate(
        bounds.min_real(),
        bounds.max_real(),
        selection.left(),
        canvas_width,
    );
    let max_real = interpolate(
        bounds.min_real(),
        bounds.max_real(),
        selection.right(),
        canvas_width,
    );
    let min_imaginary = interpolate(
        bounds.min_imaginary(),
        bounds.max_imaginary(),
        selection.top(),
        canvas_height,
    );
    let max_imaginary = interpolate(
        bounds.min_imaginary(),
        bounds.max_imaginary(),
        selection.bottom(),
        canvas_height,
    );

    ComplexRect::new(min_real, max_real, min_imaginary, max_imaginary)
        .map_err(MapSelectionError::DegenerateBounds)
}
