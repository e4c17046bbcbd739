use crate::core::colour_maps::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::raster::{Raster, RasterData};

/// Paints an iteration-count grid into an RGB raster of the same
/// dimensions. Purely a function of the grid and the colour map.
#[must_use]
pub fn paint_raster(grid: &IterationGrid, colour_map: &dyn ColourMap) -> Raster {
    let mut data: RasterData = Vec::with_capacity(grid.counts().len() * 3);

    for &count in grid.counts() {
        let Colour { r, g, b } = colour_map.map(count);
        data.push(r);
        data.push(g);
        data.push(b);
    }

    Raster::from_data(grid.width(), grid.height(), data)
        // three bytes were pushed per grid cell, so the size always matches
        .unwrap_or_else(|err| unreachable!("painted raster size mismatch: {}", err))
}
