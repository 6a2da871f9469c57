use crate::units::Px;

/// Distance of the first line from the top edge, before the font's own height
pub const DEFAULT_TOP_MARGIN: Px = Px(10.0);
/// Left edge of every body line
pub const DEFAULT_LEFT_MARGIN: Px = Px(10.0);

/// Margins are used when laying out text on a canvas. There is no control
/// preventing text from overflowing the canvas; the margins only decide where
/// the first baseline and the left edge of each line go. Titles are centred and
/// ignore the left margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins where both values are equal
    pub fn all(value: Px) -> Margins {
        Margins {
            top: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: DEFAULT_TOP_MARGIN,
            left: DEFAULT_LEFT_MARGIN,
        }
    }
}
