use crate::core::actions::compute_grid::{ComputeGridError, compute_grid};
use crate::core::actions::paint_raster::paint_raster;
use crate::core::colour_maps::factory::colour_map_for_mode;
use crate::core::colour_maps::mode::ColourMode;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::raster::Raster;
use std::error::Error;
use std::fmt;

/// The intermediate frames of an animated zoom, in display order. Drained
/// once by the caller; never stored in history.
pub type AnimationSequence = Vec<Raster>;

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomFramesError {
    SelectionOutsideCanvas {
        selection: PixelRect,
        canvas_width: u32,
        canvas_height: u32,
    },
    BaseRasterMismatch {
        canvas_width: u32,
        canvas_height: u32,
        raster_width: u32,
        raster_height: u32,
    },
    Compute(ComputeGridError),
}

impl fmt::Display for ZoomFramesError {
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
            Self::BaseRasterMismatch {
                canvas_width,
                canvas_height,
                raster_width,
                raster_height,
            } => {
                write!(
                    f,
                    "base raster is {}x{} but the canvas is {}x{}",
                    raster_width, raster_height, canvas_width, canvas_height
                )
            }
            Self::Compute(err) => write!(f, "zoom frame computation failed: {}", err),
        }
    }
}

impl Error for ZoomFramesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComputeGridError> for ZoomFramesError {
    fn from(err: ComputeGridError) -> Self {
        Self::Compute(err)
    }
}

/// Builds the intermediate frames of an animated zoom into `selection`.
///
/// Each step renders the zoom target (`target_bounds`) into a sub-image that
/// grows by a tenth of the canvas per step, then composites it onto a copy
/// of the pre-zoom raster, drifting its corner toward the pixel origin so
/// the growth stays anchored to the selection. The final full-canvas frame
/// is not produced here; the caller renders it at full resolution as the
/// new current view.
///
/// A selection as wide as the canvas, or a canvas narrower than ten pixels,
/// produces an empty sequence.
pub fn zoom_frames(
    selection: PixelRect,
    canvas_width: u32,
    canvas_height: u32,
    target_bounds: ComplexRect,
    base_raster: &Raster,
    max_iterations: u32,
    radius_squared: f64,
    colour_mode: ColourMode,
) -> Result<AnimationSequence, ZoomFramesError> {
    if !selection.fits_within(canvas_width, canvas_height) {
        return Err(ZoomFramesError::SelectionOutsideCanvas {
            selection,
            canvas_width,
            canvas_height,
        });
    }
    if base_raster.width() != canvas_width || base_raster.height() != canvas_height {
        return Err(ZoomFramesError::BaseRasterMismatch {
            canvas_width,
            canvas_height,
            raster_width: base_raster.width(),
            raster_height: base_raster.height(),
        });
    }

    let step_width = canvas_width / 10;
    let step_height = canvas_height / 10;
    if step_width == 0 {
        return Ok(Vec::new());
    }

    // A small selection leaves more distance to grow, so it gets more steps.
    let repetitions = (canvas_width - selection.width()) / step_width;
    if repetitions <= 1 {
        return Ok(Vec::new());
    }

    // Per-step drift of the sub-image corner toward the pixel origin.
    let drift_x = selection.left() / repetitions;
    let drift_y = selection.top() / repetitions;

    let colour_map = colour_map_for_mode(colour_mode, max_iterations);
    let mut frames = Vec::with_capacity((repetitions - 1) as usize);
    let mut grown_width = selection.width();
    let mut grown_height = selection.height();

    for step in 1..repetitions {
        grown_width += step_width;
        grown_height += step_height;

        let grid = compute_grid(
            grown_width,
            grown_height,
            target_bounds,
            max_iterations,
            radius_squared,
        )?;
        let overlay = paint_raster(&grid, colour_map.as_ref());

        // Integer drift can leave the last footprints a few pixels past the
        // canvas edge; composite_onto clips them.
        let offset_x = selection.left() - step * drift_x;
        let offset_y = selection.top() - step * drift_y;

        let mut frame = base_raster.clone();
        frame.composite_onto(&overlay, offset_x, offset_y);
        frames.push(frame);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS_WIDTH: u32 = 100;
    const CANVAS_HEIGHT: u32 = 80;

    fn target_bounds() -> ComplexRect {
        ComplexRect::new(-1.0, 0.0, -0.5, 0.5).unwrap()
    }

    fn base_raster() -> Raster {
        Raster::from_data(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            vec![7; (CANVAS_WIDTH * CANVAS_HEIGHT * 3) as usize],
        )
        .unwrap()
    }

    fn frames_for_selection(selection: PixelRect) -> AnimationSequence {
        zoom_frames(
            selection,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            target_bounds(),
            &base_raster(),
            10,
            4.0,
            ColourMode::Default,
        )
        .unwrap()
    }

    #[test]
    fn test_sequence_length_matches_growth_steps() {
        // (100 - 20) / (100 / 10) = 8 repetitions, so 7 intermediate frames.
        let selection = PixelRect::new(20, 40, 10, 30).unwrap();

        let frames = frames_for_selection(selection);

        assert_eq!(frames.len(), 7);
    }

    #[test]
    fn test_full_width_selection_yields_empty_sequence() {
        let selection = PixelRect::new(0, CANVAS_WIDTH, 0, 40).unwrap();

        let frames = frames_for_selection(selection);

        assert!(frames.is_empty());
    }

    #[test]
    fn test_narrow_canvas_yields_empty_sequence() {
        let selection = PixelRect::new(0, 4, 0, 4).unwrap();
        let base = Raster::from_data(8, 8, vec![7; 8 * 8 * 3]).unwrap();

        let frames = zoom_frames(
            selection,
            8,
            8,
            target_bounds(),
            &base,
            10,
            4.0,
            ColourMode::Default,
        )
        .unwrap();

        assert!(frames.is_empty());
    }

    #[test]
    fn test_frames_have_canvas_dimensions() {
        let selection = PixelRect::new(20, 40, 10, 30).unwrap();

        for frame in frames_for_selection(selection) {
            assert_eq!(frame.width(), CANVAS_WIDTH);
            assert_eq!(frame.height(), CANVAS_HEIGHT);
        }
    }

    #[test]
    fn test_pixels_outside_footprint_keep_base_colour() {
        let selection = PixelRect::new(20, 40, 10, 30).unwrap();
        let base = base_raster();

        let frames = frames_for_selection(selection);

        // The sub-image only ever grows down-right from the drifting corner,
        // so the canvas origin is untouched until the footprint reaches it.
        assert_eq!(frames[0].pixel_at(0, 0), base.pixel_at(0, 0));
        assert_eq!(
            frames[0].pixel_at(CANVAS_WIDTH - 1, 0),
            base.pixel_at(CANVAS_WIDTH - 1, 0)
        );
    }

    #[test]
    fn test_footprint_pixels_are_overwritten() {
        let selection = PixelRect::new(20, 40, 10, 30).unwrap();

        let frames = frames_for_selection(selection);

        // First frame: drift (20/8, 10/8) = (2, 1), so the grown sub-image
        // sits at (18, 9). The banded gradient never produces the base grey.
        let overwritten = frames[0].pixel_at(18, 9);
        assert_ne!(overwritten, base_raster().pixel_at(18, 9));
    }

    #[test]
    fn test_edge_selection_footprint_is_clipped_not_fatal() {
        // Selection hugging the right edge: integer drift pushes the late
        // footprints past the canvas, which must clip rather than fail.
        let selection = PixelRect::new(70, 78, 60, 70).unwrap();

        let frames = frames_for_selection(selection);

        assert_eq!(frames.len(), 8); // (100 - 8) / 10 = 9 repetitions
        for frame in frames {
            assert_eq!(frame.width(), CANVAS_WIDTH);
            assert_eq!(frame.height(), CANVAS_HEIGHT);
        }
    }

    #[test]
    fn test_sequence_is_deterministic() {
        let selection = PixelRect::new(20, 40, 10, 30).unwrap();

        let first = frames_for_selection(selection);
        let second = frames_for_selection(selection);

        assert_eq!(first, second);
    }

    #[test]
    fn test_oversized_selection_is_rejected() {
        let selection = PixelRect::new(0, CANVAS_WIDTH + 10, 0, 40).unwrap();

        let result = zoom_frames(
            selection,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            target_bounds(),
            &base_raster(),
            10,
            4.0,
            ColourMode::Default,
        );

        assert!(matches!(
            result,
            Err(ZoomFramesError::SelectionOutsideCanvas { .. })
        ));
    }

    #[test]
    fn test_mismatched_base_raster_is_rejected() {
        let selection = PixelRect::new(20, 40, 10, 30).unwrap();
        let wrong_base = Raster::from_data(10, 10, vec![0; 300]).unwrap();

        let result = zoom_frames(
            selection,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            target_bounds(),
            &wrong_base,
            10,
            4.0,
            ColourMode::Default,
        );

        assert!(matches!(
            result,
            Err(ZoomFramesError::BaseRasterMismatch { .. })
        ));
    }
}
