mod controllers;
mod core;
mod engine;
mod presenters;
mod storage;

pub use controllers::explorer::ExplorerController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use engine::parameters::{ParameterError, ViewParameters};
pub use engine::{Engine, EngineError, GenerateError};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::write_ppm;

pub use crate::core::actions::zoom_frames::AnimationSequence;
pub use crate::core::colour_maps::mode::ColourMode;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::raster::Raster;
pub use crate::core::data::view_state::ViewState;
