use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::actions::compute_grid::compute_grid;
use crate::core::actions::map_selection::{MapSelectionError, map_selection};
use crate::core::actions::paint_raster::paint_raster;
use crate::core::actions::zoom_frames::{AnimationSequence, ZoomFramesError, zoom_frames};
use crate::core::colour_maps::factory::colour_map_for_mode;
use crate::core::colour_maps::mode::ColourMode;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::view_state::ViewState;
use crate::core::history::History;
use crate::engine::parameters::{ParameterError, ViewParameters};
use std::error::Error;
use std::fmt;

pub const INITIAL_MIN_REAL: f64 = -2.1;
pub const INITIAL_MAX_REAL: f64 = 2.1;
pub const INITIAL_MIN_IMAGINARY: f64 = -2.0;
pub const INITIAL_MAX_IMAGINARY: f64 = 2.0;
pub const INITIAL_MAX_ITERATIONS: u32 = 50;
pub const INITIAL_RATIO: f64 = 1.0;
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
pub const DEFAULT_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    ZeroCanvasDimension { width: u32, height: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCanvasDimension { width, height } => {
                write!(
                    f,
                    "canvas dimensions must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for EngineError {}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    ZeroMaxIterations,
    NonPositiveRatio { ratio: f64 },
    Selection(MapSelectionError),
    Animation(ZoomFramesError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveRatio { ratio } => {
                write!(f, "magnification ratio must be positive: {}", ratio)
            }
            Self::Selection(err) => write!(f, "invalid selection: {}", err),
            Self::Animation(err) => write!(f, "zoom animation failed: {}", err),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Selection(err) => Some(err),
            Self::Animation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MapSelectionError> for GenerateError {
    fn from(err: MapSelectionError) -> Self {
        Self::Selection(err)
    }
}

impl From<ZoomFramesError> for GenerateError {
    fn from(err: ZoomFramesError) -> Self {
        Self::Animation(err)
    }
}

/// The fractal view-state engine: owns the current [`ViewState`], the
/// undo/redo history, the canvas dimensions and the active colour mode,
/// and sequences the grid/colour/animation computations on every request.
///
/// Single threaded and synchronous: each operation runs to completion and
/// leaves the current state consistent before the next one is accepted.
/// The per-pixel grid computation parallelises internally via rayon but is
/// bit-identical to the sequential reference.
#[derive(Debug)]
pub struct Engine {
    canvas_width: u32,
    canvas_height: u32,
    current: ViewState,
    history: History,
    colour_mode: ColourMode,
    rng: StdRng,
}

impl Engine {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Result<Self, EngineError> {
        Self::with_rng(canvas_width, canvas_height, StdRng::from_entropy())
    }

    /// Like [`Engine::new`] but with a caller-supplied RNG, so colour seeds
    /// can be made deterministic in tests.
    pub fn with_rng(
        canvas_width: u32,
        canvas_height: u32,
        rng: StdRng,
    ) -> Result<Self, EngineError> {
        if canvas_width == 0 || canvas_height == 0 {
            return Err(EngineError::ZeroCanvasDimension {
                width: canvas_width,
                height: canvas_height,
            });
        }

        let current = render_view(
            canvas_width,
            canvas_height,
            initial_bounds(),
            INITIAL_MAX_ITERATIONS,
            INITIAL_RATIO,
            ColourMode::Default,
        );

        Ok(Self {
            canvas_width,
            canvas_height,
            current,
            history: History::new(),
            colour_mode: ColourMode::Default,
            rng,
        })
    }

    #[must_use]
    pub fn current(&self) -> &ViewState {
        &self.current
    }

    #[must_use]
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    #[must_use]
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    /// Restores the fixed initial view and the default colour mode,
    /// recomputing at the configured canvas size. The history stacks are
    /// left untouched.
    pub fn reset(&mut self) -> &ViewState {
        self.colour_mode = ColourMode::Default;
        self.current = render_view(
            self.canvas_width,
            self.canvas_height,
            initial_bounds(),
            INITIAL_MAX_ITERATIONS,
            INITIAL_RATIO,
            ColourMode::Default,
        );

        &self.current
    }

    /// Steps back to the previous view state, or returns `None` (a no-op)
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&ViewState> {
        let previous = self.history.pop_past()?;
        let replaced = std::mem::replace(&mut self.current, previous);
        self.history.push_future(replaced);

        Some(&self.current)
    }

    /// Steps forward to an undone view state, or returns `None` (a no-op)
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&ViewState> {
        let next = self.history.pop_future()?;
        let replaced = std::mem::replace(&mut self.current, next);
        self.history.push_past(replaced);

        Some(&self.current)
    }

    /// Draws a fresh colour seed from `[0, 256)`, repaints the current grid
    /// with it, and makes the seeded mode the one used by all subsequent
    /// repaints. The iteration counts are not recomputed.
    pub fn change_colour_mapping(&mut self) -> &ViewState {
        let seed: u8 = self.rng.r#gen();
        self.colour_mode = ColourMode::Seeded(seed);

        let colour_map = colour_map_for_mode(self.colour_mode, self.current.max_iterations());
        let raster = paint_raster(self.current.grid(), colour_map.as_ref());
        let recoloured = ViewState::new(
            self.current.bounds(),
            self.current.max_iterations(),
            self.current.ratio(),
            self.current.grid().clone(),
            raster,
            self.colour_mode,
        );

        let replaced = std::mem::replace(&mut self.current, recoloured);
        self.history.record(replaced);

        &self.current
    }

    /// Regenerates the view.
    ///
    /// With `changed_scale` false the plane bounds stay put and only the
    /// iteration budget and ratio change; the selection is ignored and the
    /// animation sequence is empty. With `changed_scale` true the selection
    /// is mapped to new bounds, the intermediate zoom frames are produced,
    /// and the final state is rendered at the new bounds.
    pub fn generate(
        &mut self,
        selection: PixelRect,
        max_iterations: u32,
        changed_scale: bool,
        ratio: f64,
    ) -> Result<(&ViewState, AnimationSequence), GenerateError> {
        if max_iterations == 0 {
            return Err(GenerateError::ZeroMaxIterations);
        }
        if !(ratio > 0.0) {
            return Err(GenerateError::NonPositiveRatio { ratio });
        }

        let (bounds, frames) = if changed_scale {
            let new_bounds = map_selection(
                self.current.bounds(),
                self.canvas_width,
                self.canvas_height,
                selection,
            )?;

            // After a canvas resize the previous raster no longer matches
            // the canvas; there is nothing meaningful to animate over.
            let base = self.current.raster();
            let frames = if base.width() == self.canvas_width
                && base.height() == self.canvas_height
            {
                zoom_frames(
                    selection,
                    self.canvas_width,
                    self.canvas_height,
                    new_bounds,
                    base,
                    max_iterations,
                    DEFAULT_RADIUS_SQUARED,
                    self.colour_mode,
                )?
            } else {
                Vec::new()
            };

            (new_bounds, frames)
        } else {
            (self.current.bounds(), Vec::new())
        };

        let next = render_view(
            self.canvas_width,
            self.canvas_height,
            bounds,
            max_iterations,
            ratio,
            self.colour_mode,
        );
        let replaced = std::mem::replace(&mut self.current, next);
        self.history.record(replaced);

        Ok((&self.current, frames))
    }

    /// Reconfigures the pixel dimensions used by future computations. The
    /// current state is not recomputed.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::ZeroCanvasDimension { width, height });
        }

        self.canvas_width = width;
        self.canvas_height = height;
        Ok(())
    }

    /// The six numeric view parameters in textual, round-trippable form.
    #[must_use]
    pub fn parameters(&self) -> ViewParameters {
        ViewParameters::from_state(&self.current)
    }

    /// Applies all six textual parameters at once and regenerates the view
    /// at the restored bounds. Either every parameter is accepted or the
    /// current state is left untouched.
    pub fn restore_parameters(
        &mut self,
        parameters: &ViewParameters,
    ) -> Result<&ViewState, ParameterError> {
        let parsed = parameters.parse()?;

        let next = render_view(
            self.canvas_width,
            self.canvas_height,
            parsed.bounds,
            parsed.max_iterations,
            parsed.ratio,
            self.colour_mode,
        );
        let replaced = std::mem::replace(&mut self.current, next);
        self.history.record(replaced);

        Ok(&self.current)
    }
}

fn initial_bounds() -> ComplexRect {
    ComplexRect::new(
        INITIAL_MIN_REAL,
        INITIAL_MAX_REAL,
        INITIAL_MIN_IMAGINARY,
        INITIAL_MAX_IMAGINARY,
    )
    // the initial constants are a valid rectangle
    .unwrap_or_else(|err| unreachable!("initial bounds are fixed and valid: {}", err))
}

fn render_view(
    canvas_width: u32,
    canvas_height: u32,
    bounds: ComplexRect,
    max_iterations: u32,
    ratio: f64,
    colour_mode: ColourMode,
) -> ViewState {
    let grid = compute_grid(
        canvas_width,
        canvas_height,
        bounds,
        max_iterations,
        DEFAULT_RADIUS_SQUARED,
    )
    // dimensions and budget are validated at every engine boundary
    .unwrap_or_else(|err| unreachable!("grid inputs are pre-validated: {}", err));

    let colour_map = colour_map_for_mode(colour_mode, max_iterations);
    let raster = paint_raster(&grid, colour_map.as_ref());

    ViewState::new(bounds, max_iterations, ratio, grid, raster, colour_mode)
}
