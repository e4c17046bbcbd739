use crate::core::colour_maps::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// The default mapping: a cyan-tinted grayscale banding where adjacent
/// iteration counts land on adjacent colours.
///
/// The red channel cycles every 5 counts while green and blue fall off over
/// a much longer period, so thin escape bands read as a cyan sheen over a
/// white-to-dark gradient.
#[derive(Debug)]
pub struct BandedGradient {
    max_iterations: u32,
}

impl BandedGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for BandedGradient {
    fn map(&self, count: u32) -> Colour {
        if count == self.max_iterations {
            return Colour::INSIDE;
        }

        let v = 5 * u64::from(count);
        Colour {
            r: (255 - v % 25) as u8,
            g: (255 - v % 256) as u8,
            b: (255 - v % 256) as u8,
        }
    }

    fn display_name(&self) -> &str {
        "Banded gradient"
    }
}
