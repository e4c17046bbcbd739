use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        write_ppm(raster, filepath)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
