use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::zoom_frames::AnimationSequence;
use crate::core::data::pixel_rect::PixelRect;
use crate::engine::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, Engine};

pub struct ExplorerController<P: FilePresenterPort> {
    engine: Engine,
    presenter: P,
    frames: AnimationSequence,
}

impl<P: FilePresenterPort> ExplorerController<P> {
    pub fn new(presenter: P) -> Result<Self, Box<dyn std::error::Error>> {
        let engine = Engine::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)?;

        Ok(Self {
            engine,
            presenter,
            frames: Vec::new(),
        })
    }

    /// Zooms into the upper part of the set and keeps the animation frames
    /// around for writing.
    pub fn explore(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let selection = PixelRect::new(200, 500, 150, 375)?;
        let max_iterations: u32 = 256;

        println!("Rendering Mandelbrot set...");
        println!(
            "Image size: {}x{}",
            self.engine.canvas_width(),
            self.engine.canvas_height()
        );
        println!("Max iterations: {}", max_iterations);

        let start = Instant::now();
        let (state, frames) = self.engine.generate(selection, max_iterations, true, 2.0)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        println!("Frames:     {}", frames.len());
        println!(
            "View:       re [{}, {}] im [{}, {}]",
            state.bounds().min_real(),
            state.bounds().max_real(),
            state.bounds().min_imaginary(),
            state.bounds().max_imaginary()
        );

        self.frames = frames;

        Ok(())
    }

    /// Writes the animation frames and the final view into `directory`.
    pub fn write(&self, directory: impl AsRef<Path>) -> std::io::Result<()> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;

        for (index, frame) in self.frames.iter().enumerate() {
            let filepath = directory.join(format!("frame_{:03}.ppm", index));
            self.presenter.present(frame, filepath)?;
        }

        self.presenter
            .present(self.engine.current().raster(), directory.join("mandelbrot.ppm"))?;

        Ok(())
    }
}
