/// Which of the two banded colour mappings is active.
///
/// The seed perturbs the banding period of each channel independently and is
/// drawn uniformly from `[0, 256)` when the user asks for a new mapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMode {
    Default,
    Seeded(u8),
}

impl Default for ColourMode {
    fn default() -> Self {
        Self::Default
    }
}
