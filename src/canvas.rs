use crate::{
    colour::{Colour, ColourScheme},
    error::RenderError,
    raster::GlyphMask,
};
use image::{codecs::png::PngEncoder, DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Width of a synthesized canvas
pub const DEFAULT_WIDTH: u32 = 640;
/// Height of a synthesized canvas
pub const DEFAULT_HEIGHT: u32 = 480;
/// Where the ruler guide starts, from the top-left corner in both directions
pub const RULER_OFFSET: u32 = 10;
/// Length of each ruler guide line
pub const RULER_LENGTH: u32 = 200;

/// The pixel buffer a render draws onto
#[derive(Clone, Debug)]
pub struct Canvas {
    pub image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with the scheme's background colour, with the
    /// ruler guide drawn along the top and left edges
    pub fn blank(width: u32, height: u32, colours: &ColourScheme) -> Canvas {
        let mut canvas = Canvas {
            image: RgbaImage::from_pixel(width, height, colours.background.into()),
        };
        canvas.draw_ruler(colours.ruler);
        canvas
    }

    /// A blank canvas of the default size
    pub fn default_blank(colours: &ColourScheme) -> Canvas {
        Canvas::blank(DEFAULT_WIDTH, DEFAULT_HEIGHT, colours)
    }

    /// Decode an existing image to draw onto. The file is only read
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Canvas, RenderError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| RenderError::Decode {
            path: path.to_owned(),
            source,
        })?;

        let image = match decoded {
            DynamicImage::ImageRgba8(image) => image,
            // widening RGB to RGBA is lossless
            rgb @ DynamicImage::ImageRgb8(_) => rgb.to_rgba8(),
            other => {
                return Err(RenderError::Format {
                    path: path.to_owned(),
                    colour: other.color(),
                })
            }
        };

        Ok(Canvas { image })
    }

    /// Open the background if there is one, otherwise synthesize a blank canvas
    pub fn obtain(background: Option<&Path>, colours: &ColourScheme) -> Result<Canvas, RenderError> {
        match background {
            Some(path) => {
                log::debug!("loading background {path:?}");
                Canvas::open(path)
            }
            None => {
                log::debug!("creating blank {DEFAULT_WIDTH}x{DEFAULT_HEIGHT} canvas");
                Ok(Canvas::default_blank(colours))
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The colour at `(x, y)`, or [None] outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    fn draw_ruler(&mut self, colour: Colour) {
        for i in 0..RULER_LENGTH {
            self.set_pixel(RULER_OFFSET, RULER_OFFSET + i, colour);
            self.set_pixel(RULER_OFFSET + i, RULER_OFFSET, colour);
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(p) = self.image.get_pixel_mut_checked(x, y) {
            *p = colour.into();
        }
    }

    /// Composite `colour` over the canvas through a glyph's coverage mask.
    /// Parts of the mask outside the canvas are clipped.
    pub fn blend_mask(&mut self, mask: &GlyphMask, colour: Colour) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        for row in 0..mask.height as i64 {
            let y = mask.top as i64 + row;
            if y < 0 || y >= height {
                continue;
            }
            for col in 0..mask.width as i64 {
                let x = mask.left as i64 + col;
                if x < 0 || x >= width {
                    continue;
                }
                let coverage = mask.coverage[(row * mask.width as i64 + col) as usize];
                if coverage == 0 {
                    continue;
                }
                let dst = self.image.get_pixel_mut(x as u32, y as u32);
                *dst = blend_over(colour, Colour::from(*dst), coverage).into();
            }
        }
    }

    /// Write the canvas to `path` as a PNG, replacing any existing file. The file is
    /// closed on every path out of this function.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| RenderError::Write {
            path: path.to_owned(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        PngEncoder::new(&mut writer)
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| RenderError::Encode {
                path: path.to_owned(),
                source,
            })?;

        writer.flush().map_err(|source| RenderError::Flush {
            path: path.to_owned(),
            source,
        })
    }
}

/// `src` over `dst` with the source alpha scaled by `coverage`
fn blend_over(src: Colour, dst: Colour, coverage: u8) -> Colour {
    let a = src.a as u32 * coverage as u32 / 255;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Colour {
        r: mix(src.r, dst.r),
        g: mix(src.g, dst.g),
        b: mix(src.b, dst.b),
        a: mix(0xff, dst.a),
    }
}
