//! Render word-wrapped text onto PNG images.
//!
//! A [RenderRequest] describes the font, sizes and colours; everything left
//! unset takes a default. Rendering loads (or synthesizes) a background canvas,
//! wraps the text by character count, draws an optional centred title and the
//! wrapped lines, and writes the result as a PNG.
//!
//! ```no_run
//! use img_text::RenderRequest;
//!
//! let request = RenderRequest {
//!     font_size: 18.0,
//!     title: Some("Hello".into()),
//!     ..Default::default()
//! };
//! request.render("Text rendered onto a blank canvas", "out.png")?;
//! # Ok::<(), img_text::RenderError>(())
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod drawer;
pub use drawer::*;

mod font;
pub use font::*;

/// Utility functions and structures to wrap and position text on a canvas
pub mod layout;

pub(crate) mod raster;
pub use raster::GlyphMask;

mod render;
pub use render::*;

mod request;
pub use request::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export of the font parser, for glyph ids and face access
pub use owned_ttf_parser;
