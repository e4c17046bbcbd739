#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Colour used for points classified as inside the set.
    pub const INSIDE: Colour = Colour { r: 0, g: 0, b: 0 };
}
