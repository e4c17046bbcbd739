use crate::core::colour_maps::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// A banded mapping whose per-channel period is perturbed by a seed drawn
/// from `[0, 256)`, giving each seed its own smooth banding pattern.
///
/// The three channels cycle with periods `1 + s`, `1 + s² mod 255` and
/// `1 + s³ mod 255`, so small seed changes produce visibly different but
/// still continuous gradients.
#[derive(Debug)]
pub struct SeededGradient {
    max_iterations: u32,
    red_period: u64,
    green_period: u64,
    blue_period: u64,
}

impl SeededGradient {
    #[must_use]
    pub fn new(max_iterations: u32, seed: u8) -> Self {
        let s = u64::from(seed);

        Self {
            max_iterations,
            red_period: 1 + s,
            green_period: 1 + (s * s) % 255,
            blue_period: 1 + (s * s * s) % 255,
        }
    }
}

impl ColourMap for SeededGradient {
    fn map(&self, count: u32) -> Colour {
        if count == self.max_iterations {
            return Colour::INSIDE;
        }

        let v = 5 * u64::from(count);
        Colour {
            r: (255 - v % self.red_period) as u8,
            g: (255 - v % self.green_period) as u8,
            b: (v % self.blue_period) as u8,
        }
    }

    fn display_name(&self) -> &str {
        "Seeded banded gradient"
    }
}
