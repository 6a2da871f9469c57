use image::Rgba;

/// A colour, expressed as 8-bit RGBA components
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 0xff }
    }

    /// Create a new opaque grey, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour { r, g, b, a }
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        p.0.into()
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0x00);
    pub const WHITE: Colour = Colour::new_grey_bytes(0xff);
    /// Ruler guide drawn on light backgrounds
    pub const RULER_LIGHT: Colour = Colour::new_grey_bytes(0xdd);
    /// Ruler guide drawn on dark backgrounds
    pub const RULER_DARK: Colour = Colour::new_grey_bytes(0x22);
}

/// The colours used for a single render: text, canvas fill, and the ruler
/// guide on synthesized canvases
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ColourScheme {
    pub foreground: Colour,
    pub background: Colour,
    pub ruler: Colour,
}

impl ColourScheme {
    /// Pick the colour scheme for a render.
    ///
    /// `white_on_black` selects white text on a black canvas, otherwise the text
    /// is black on white. The named colour `hint` is accepted but does not change
    /// the foreground: the text colour is decided by `white_on_black` alone.
    pub fn select(hint: Option<&str>, white_on_black: bool) -> ColourScheme {
        if let Some(hint) = hint.filter(|h| !h.is_empty()) {
            log::warn!("font colour {hint:?} is not supported, the text colour follows white_on_black");
        }

        if white_on_black {
            ColourScheme {
                foreground: colours::WHITE,
                background: colours::BLACK,
                ruler: colours::RULER_DARK,
            }
        } else {
            ColourScheme {
                foreground: colours::BLACK,
                background: colours::WHITE,
                ruler: colours::RULER_LIGHT,
            }
        }
    }
}

impl Default for ColourScheme {
    fn default() -> Self {
        ColourScheme::select(None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_by_default() {
        let scheme = ColourScheme::select(None, false);
        assert_eq!(scheme.foreground, colours::BLACK);
        assert_eq!(scheme.background, colours::WHITE);
        assert_eq!(scheme.ruler, colours::RULER_LIGHT);
    }

    #[test]
    fn white_on_black_swaps_colours_and_darkens_ruler() {
        let scheme = ColourScheme::select(None, true);
        assert_eq!(scheme.foreground, colours::WHITE);
        assert_eq!(scheme.background, colours::BLACK);
        assert_eq!(scheme.ruler, colours::RULER_DARK);
    }

    #[test]
    fn colour_hint_never_changes_foreground() {
        assert_eq!(
            ColourScheme::select(Some("yellow"), false).foreground,
            colours::BLACK
        );
        assert_eq!(
            ColourScheme::select(Some("red"), true).foreground,
            colours::WHITE
        );
    }

    #[test]
    fn converts_to_pixels() {
        let px: Rgba<u8> = Colour::new_rgb_bytes(1, 2, 3).into();
        assert_eq!(px, Rgba([1, 2, 3, 255]));
        assert_eq!(Colour::from(px), Colour::from((1, 2, 3)));
    }
}
