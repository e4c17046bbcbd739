use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    EmptySelection {
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection {
                left,
                right,
                top,
                bottom,
            } => {
                write!(
                    f,
                    "pixel selection must have positive extent: left {} right {} top {} bottom {}",
                    left, right, top, bottom
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// A half-open pixel rectangle: columns `[left, right)`, rows `[top, bottom)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
}

impl PixelRect {
    pub fn new(left: u32, right: u32, top: u32, bottom: u32) -> Result<Self, PixelRectError> {
        if left >= right || top >= bottom {
            return Err(PixelRectError::EmptySelection {
                left,
                right,
                top,
                bottom,
            });
        }

        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[must_use]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn fits_within(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.right <= canvas_width && self.bottom <= canvas_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(100, 500, 100, 400).unwrap();

        assert_eq!(rect.left(), 100);
        assert_eq!(rect.right(), 500);
        assert_eq!(rect.top(), 100);
        assert_eq!(rect.bottom(), 400);
    }

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(10, 110, 20, 100).unwrap();

        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 80);
    }

    #[test]
    fn test_pixel_rect_extent_must_be_positive() {
        let zero_width = PixelRect::new(10, 10, 0, 100);
        let inverted_width = PixelRect::new(50, 10, 0, 100);
        let zero_height = PixelRect::new(0, 100, 30, 30);

        assert_eq!(
            zero_width,
            Err(PixelRectError::EmptySelection {
                left: 10,
                right: 10,
                top: 0,
                bottom: 100
            })
        );
        assert_eq!(
            inverted_width,
            Err(PixelRectError::EmptySelection {
                left: 50,
                right: 10,
                top: 0,
                bottom: 100
            })
        );
        assert_eq!(
            zero_height,
            Err(PixelRectError::EmptySelection {
                left: 0,
                right: 100,
                top: 30,
                bottom: 30
            })
        );
    }

    #[test]
    fn test_pixel_rect_fits_within_canvas() {
        let rect = PixelRect::new(100, 500, 100, 400).unwrap();

        assert!(rect.fits_within(800, 600));
        assert!(rect.fits_within(500, 400));
        assert!(!rect.fits_within(499, 600));
        assert!(!rect.fits_within(800, 399));
    }

    #[test]
    fn test_full_canvas_is_a_valid_selection() {
        let rect = PixelRect::new(0, 800, 0, 600).unwrap();

        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert!(rect.fits_within(800, 600));
    }
}
