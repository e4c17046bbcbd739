pub mod banded_gradient;
pub mod colour_map;
pub mod factory;
pub mod mode;
pub mod seeded_gradient;
