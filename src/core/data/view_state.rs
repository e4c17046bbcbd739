use crate::core::colour_maps::mode::ColourMode;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::raster::Raster;

/// A complete snapshot of what is on screen: plane bounds, iteration budget,
/// cumulative magnification, the computed grid and its painted raster.
///
/// Immutable once created; regeneration always produces a new one. This is
/// the unit pushed onto the history stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    bounds: ComplexRect,
    max_iterations: u32,
    ratio: f64,
    grid: IterationGrid,
    raster: Raster,
    colour_mode: ColourMode,
}

impl ViewState {
    #[must_use]
    pub fn new(
        bounds: ComplexRect,
        max_iterations: u32,
        ratio: f64,
        grid: IterationGrid,
        raster: Raster,
        colour_mode: ColourMode,
    ) -> Self {
        Self {
            bounds,
            max_iterations,
            ratio,
            grid,
            raster,
            colour_mode,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> ComplexRect {
        self.bounds
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn grid(&self) -> &IterationGrid {
        &self.grid
    }

    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// The colour mode this state's raster was painted with.
    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }
}
