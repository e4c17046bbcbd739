use crate::core::data::colour::Colour;

/// Maps an escape-time iteration count to a pixel colour.
///
/// Implementations must be pure: the same count always yields the same
/// colour, and a count equal to the iteration budget (the inside-the-set
/// classification) always yields [`Colour::INSIDE`].
pub trait ColourMap {
    fn map(&self, count: u32) -> Colour;

    fn display_name(&self) -> &str;
}
