use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    ZeroDimension {
        width: u32,
        height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "raster dimensions require {} bytes but {} were supplied",
                    expected, actual
                )
            }
            Self::ZeroDimension { width, height } => {
                write!(
                    f,
                    "raster dimensions must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for RasterError {}

pub type RasterData = Vec<u8>;

/// An RGB image, three bytes per pixel, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: RasterData,
}

impl Raster {
    pub fn from_data(width: u32, height: u32, data: RasterData) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension { width, height });
        }

        let expected = dimensions_to_buffer_size(width, height);
        if data.len() != expected {
            return Err(RasterError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
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
    pub fn data(&self) -> &RasterData {
        &self.data
    }

    #[must_use]
    pub fn pixel_at(&self, x: u32, y: u32) -> Colour {
        let index = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        }
    }

    /// Copies `overlay` onto this raster with its top-left corner at
    /// `(offset_x, offset_y)`. Overlay pixels falling outside this raster
    /// are clipped; pixels outside the overlay footprint are untouched.
    pub fn composite_onto(&mut self, overlay: &Raster, offset_x: u32, offset_y: u32) {
        if offset_x >= self.width || offset_y >= self.height {
            return;
        }

        let visible_width = overlay.width.min(self.width - offset_x) as usize;
        let visible_height = overlay.height.min(self.height - offset_y) as usize;

        for row in 0..visible_height {
            let src_start = row * (overlay.width as usize) * 3;
            let dst_start =
                ((offset_y as usize + row) * (self.width as usize) + offset_x as usize) * 3;
            let length = visible_width * 3;

            self.data[dst_start..dst_start + length]
                .copy_from_slice(&overlay.data[src_start..src_start + length]);
        }
    }
}
