use derive_more::{Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// Typographic points, 1/72 of an inch. Font sizes are given in points and
/// converted to pixels with a DPI when a face is scaled.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    Div,
    MulAssign,
    DivAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f64);

/// Device pixels on the canvas. Values may be fractional; glyphs are
/// positioned with sub-pixel precision unless hinting snaps them.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    Div,
    MulAssign,
    DivAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

impl Pt {
    /// Convert to pixels at the given resolution
    pub fn to_px(self, dpi: f64) -> Px {
        Px((self.0 * dpi / POINTS_PER_INCH) as f32)
    }
}

impl Px {
    pub fn round(self) -> Px {
        Px(self.0.round())
    }

    pub fn floor(self) -> Px {
        Px(self.0.floor())
    }

    /// The fractional part of the value, always in `[0, 1)`
    pub fn fract(self) -> f32 {
        self.0 - self.0.floor()
    }
}

impl From<u32> for Px {
    fn from(v: u32) -> Self {
        Px(v as f32)
    }
}
