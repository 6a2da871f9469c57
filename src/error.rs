use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a font file
#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font file {path:?}")]
    /// The font file is missing or unreadable
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {path:?}")]
    /// [owned_ttf_parser] failed to parse the font
    Parse {
        path: PathBuf,
        #[source]
        source: owned_ttf_parser::FaceParsingError,
    },
}

/// All errors that a render can generate. Every stage of the pipeline
/// returns its error as soon as it happens; nothing is retried.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// The font could not be loaded
    FontLoad(#[from] FontError),

    #[error("failed to decode background image {path:?}")]
    /// [image] could not read or decode the background image
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("background image {path:?} has pixel layout {colour:?}, expected 8-bit RGB or RGBA")]
    /// The background image decoded, but not into a layout that maps directly to RGBA
    Format {
        path: PathBuf,
        colour: image::ColorType,
    },

    #[error("failed to create output file {path:?}")]
    /// The output file could not be created
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path:?} as PNG")]
    /// [image] failed to encode the canvas
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to flush output file {path:?}")]
    /// Buffered output could not be flushed to the file
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
