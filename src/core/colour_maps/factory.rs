use crate::core::colour_maps::banded_gradient::BandedGradient;
use crate::core::colour_maps::colour_map::ColourMap;
use crate::core::colour_maps::mode::ColourMode;
use crate::core::colour_maps::seeded_gradient::SeededGradient;

#[must_use]
pub fn colour_map_for_mode(mode: ColourMode, max_iterations: u32) -> Box<dyn ColourMap> {
    match mode {
        ColourMode::Default => Box::new(BandedGradient::new(max_iterations)),
        ColourMode::Seeded(seed) => Box::new(SeededGradient::new(max_iterations, seed)),
    }
}
