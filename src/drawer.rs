use crate::{canvas::Canvas, colour::Colour, font::ScaledFace, units::Px};
use owned_ttf_parser::GlyphId;

/// Something that can measure and draw single lines of text. Layout only
/// needs [Drawer::measure]; rendering calls [Drawer::draw].
pub trait Drawer {
    /// Width of `text` in pixels
    fn measure(&self, text: &str) -> Px;

    /// Draw `text` with its baseline starting at `origin`
    fn draw(&mut self, origin: (Px, Px), text: &str);
}

/// Draws text with a scaled font face onto a canvas in a single colour
pub struct FontDrawer<'a> {
    face: ScaledFace<'a>,
    canvas: &'a mut Canvas,
    colour: Colour,
}

impl<'a> FontDrawer<'a> {
    pub fn new(face: ScaledFace<'a>, canvas: &'a mut Canvas, colour: Colour) -> FontDrawer<'a> {
        FontDrawer {
            face,
            canvas,
            colour,
        }
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas.width()
    }
}

impl Drawer for FontDrawer<'_> {
    fn measure(&self, text: &str) -> Px {
        self.face.measure(text)
    }

    fn draw(&mut self, origin: (Px, Px), text: &str) {
        let (mut x, y) = origin;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph = self.face.font().glyph_id(ch);
            if let Some(prev) = prev {
                x += self.face.kerning(prev, glyph);
            }
            if let Some(mask) = self.face.rasterize(glyph, (x, y)) {
                self.canvas.blend_mask(&mask, self.colour);
            }
            x += self.face.advance(glyph);
            prev = Some(glyph);
        }
    }
}
