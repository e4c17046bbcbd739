pub mod compute_grid;
pub mod map_selection;
pub mod paint_raster;
pub mod zoom_frames;
