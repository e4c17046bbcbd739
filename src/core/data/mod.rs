pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod iteration_grid;
pub mod pixel_rect;
pub mod raster;
pub mod view_state;
