//! The view-state engine and its textual parameter surface.
//!
//! The engine owns the current view, the undo/redo history and the active
//! colour mode, and is the single entry point callers use to drive the
//! explorer. The core computations it sequences live under `core/`.

mod engine;
pub mod parameters;

pub use engine::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_RADIUS_SQUARED, Engine, EngineError,
    GenerateError, INITIAL_MAX_IMAGINARY, INITIAL_MAX_ITERATIONS, INITIAL_MAX_REAL,
    INITIAL_MIN_IMAGINARY, INITIAL_MIN_REAL, INITIAL_RATIO,
};
