use crate::{
    error::FontError,
    raster::{GlyphMask, OutlineCommands},
    request::Hinting,
    units::{Pt, Px},
};
use owned_ttf_parser::{AsFaceRef, Face, FaceParsingError, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts; only the first face of
/// a collection is used.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FaceParsingError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_owned(),
            source,
        })?;
        Font::load(bytes).map_err(|source| FontError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Find the glyph used to draw `ch`. Characters the font does not cover fall back
    /// to the replacement character, then to a question mark, then to `.notdef`
    pub fn glyph_id(&self, ch: char) -> GlyphId {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    /// Bind the font to a size, resolution and hinting mode
    pub fn scaled(&self, size: Pt, dpi: f64, hinting: Hinting) -> ScaledFace<'_> {
        ScaledFace {
            font: self,
            px_per_em: size.to_px(dpi),
            hinting,
        }
    }
}

/// A [Font] bound to a pixel size and hinting mode. All metrics come out in
/// canvas pixels.
#[derive(Clone, Copy)]
pub struct ScaledFace<'f> {
    font: &'f Font,
    px_per_em: Px,
    hinting: Hinting,
}

impl<'f> ScaledFace<'f> {
    pub fn font(&self) -> &'f Font {
        self.font
    }

    /// Pixels per font unit
    fn scaling(&self) -> f32 {
        self.px_per_em.0 / self.font.face().units_per_em() as f32
    }

    fn hint(&self, v: Px) -> Px {
        match self.hinting {
            Hinting::None => v,
            Hinting::Full => v.round(),
        }
    }

    pub fn advance(&self, glyph: GlyphId) -> Px {
        let advance = self.font.face().glyph_hor_advance(glyph).unwrap_or_default();
        self.hint(Px(self.scaling() * advance as f32))
    }

    /// Horizontal kerning adjustment between two consecutive glyphs, from the
    /// legacy `kern` table
    pub fn kerning(&self, left: GlyphId, right: GlyphId) -> Px {
        let Some(kern) = self.font.face().tables().kern else {
            return Px(0.0);
        };
        let units = kern
            .subtables
            .into_iter()
            .filter(|st| st.horizontal && !st.variable)
            .find_map(|st| st.glyphs_kerning(left, right))
            .unwrap_or_default();
        self.hint(Px(self.scaling() * units as f32))
    }

    /// Width of `text` when drawn with this face, including kerning
    pub fn measure(&self, text: &str) -> Px {
        let mut width = Px(0.0);
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph = self.font.glyph_id(ch);
            if let Some(prev) = prev {
                width += self.kerning(prev, glyph);
            }
            width += self.advance(glyph);
            prev = Some(glyph);
        }
        width
    }

    /// Rasterize a glyph with its origin (pen position on the baseline) at `origin`.
    /// Returns [None] for glyphs without an outline, such as spaces.
    pub fn rasterize(&self, glyph: GlyphId, origin: (Px, Px)) -> Option<GlyphMask> {
        let (x, y) = (self.hint(origin.0), self.hint(origin.1));
        let mut outline = OutlineCommands::new(self.scaling(), (x.fract(), y.fract()));
        self.font.face().outline_glyph(glyph, &mut outline)?;
        outline.rasterize((x.floor().0 as i32, y.floor().0 as i32))
    }
}
