//! img-text - render word-wrapped text onto a PNG from the command line

use anyhow::{Context, Result};
use clap::Parser;
use img_text::{Hinting, RenderRequest};
use std::io::Read;
use std::path::PathBuf;

/// Render text onto a PNG image
#[derive(Parser, Debug)]
#[command(name = "img-text")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to render (reads from stdin if omitted)
    text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    text_file: Option<PathBuf>,

    /// Output PNG file
    #[arg(short = 'o', long = "output", default_value = "out.png")]
    output: PathBuf,

    /// JSON render request; flags given on the command line override it
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// PNG to draw on instead of a blank 640x480 canvas
    #[arg(short = 'b', long = "background")]
    background: Option<PathBuf>,

    /// Resolution used to scale the font size
    #[arg(long = "dpi")]
    dpi: Option<f64>,

    /// TrueType or OpenType font file
    #[arg(short = 'f', long = "font")]
    font: Option<PathBuf>,

    /// Glyph hinting
    #[arg(long = "hinting", value_enum)]
    hinting: Option<Hinting>,

    /// Font size in points
    #[arg(short = 's', long = "size")]
    size: Option<f64>,

    /// Line spacing multiplier, e.g. 2 for double spacing
    #[arg(short = 'L', long = "spacing")]
    spacing: Option<f64>,

    /// Named text colour (accepted, but the text colour follows --white-on-black)
    #[arg(long = "colour", alias = "color")]
    colour: Option<String>,

    /// White text on a black canvas
    #[arg(short = 'w', long = "white-on-black")]
    white_on_black: bool,

    /// Character budget per line
    #[arg(short = 'm', long = "max-chars")]
    max_chars: Option<usize>,

    /// Centred title line
    #[arg(short = 't', long = "title")]
    title: Option<String>,
}

impl Cli {
    fn request(&self) -> Result<RenderRequest> {
        let mut request = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read request file {path:?}"))?;
                RenderRequest::from_json(&json)
                    .with_context(|| format!("failed to parse request file {path:?}"))?
            }
            None => RenderRequest::default(),
        };

        if let Some(background) = &self.background {
            request.background = Some(background.clone());
        }
        if let Some(dpi) = self.dpi {
            request.dpi = dpi;
        }
        if let Some(font) = &self.font {
            request.font_path = font.clone();
        }
        if let Some(hinting) = self.hinting {
            request.hinting = hinting;
        }
        if let Some(size) = self.size {
            request.font_size = size;
        }
        if let Some(spacing) = self.spacing {
            request.font_spacing = spacing;
        }
        if let Some(colour) = &self.colour {
            request.font_colour_name = Some(colour.clone());
        }
        if self.white_on_black {
            request.white_on_black = true;
        }
        if let Some(max_chars) = self.max_chars {
            request.max_chars_per_line = max_chars;
        }
        if let Some(title) = &self.title {
            request.title = Some(title.clone());
        }

        Ok(request)
    }

    fn text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.text_file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read text file {path:?}"));
        }
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read text from stdin")?;
        Ok(text)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let request = cli.request()?;
    let text = cli.text()?;

    let written = request.render(&text, &cli.output)?;
    println!("Wrote OK: {}", written.display());
    Ok(())
}
