use crate::colour::ColourScheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_DPI: f64 = 72.0;
pub const DEFAULT_FONT_FILE: &str = "assets/DejaVuSans.ttf";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
/// e.g. 2 means double spaced
pub const DEFAULT_FONT_SPACING: f64 = 1.25;
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 16;

/// Rasterizer hinting mode. An empty string in a request means the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Hinting {
    /// Glyphs are positioned with sub-pixel precision
    #[default]
    None,
    /// Advances and origins snap to whole pixels
    Full,
}

impl FromStr for Hinting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Hinting::None),
            "full" => Ok(Hinting::Full),
            other => Err(format!("unknown hinting mode {other:?}, expected none or full")),
        }
    }
}

impl TryFrom<String> for Hinting {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Everything needed to render one block of text onto one image.
///
/// Every field may be left at its zero value (`0`, empty, `None`), which means
/// "use the default". Call [RenderRequest::resolve] to fill the defaults in;
/// [RenderRequest::render] does so itself. Requests deserialize from JSON with
/// any subset of fields present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Existing PNG to draw on. When absent, a blank canvas is synthesized
    #[serde(rename = "src_img_path", skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
    pub dpi: f64,
    /// TrueType or OpenType font file
    pub font_path: PathBuf,
    pub hinting: Hinting,
    /// Font size in points
    pub font_size: f64,
    /// Line spacing multiplier
    pub font_spacing: f64,
    /// Named text colour. Accepted for compatibility; it does not change the
    /// rendered colour, see [ColourScheme::select]
    #[serde(rename = "font_color_name", skip_serializing_if = "Option::is_none")]
    pub font_colour_name: Option<String>,
    pub max_chars_per_line: usize,
    pub white_on_black: bool,
    /// Centred first line
    #[serde(rename = "text_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn unset(v: f64) -> bool {
    !v.is_finite() || v <= 0.0
}

impl RenderRequest {
    /// Return the same request with every unset field replaced by its default
    pub fn resolve(mut self) -> RenderRequest {
        if unset(self.dpi) {
            self.dpi = DEFAULT_DPI;
        }
        if self.font_path.as_os_str().is_empty() {
            self.font_path = PathBuf::from(DEFAULT_FONT_FILE);
        }
        if unset(self.font_size) {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        if unset(self.font_spacing) {
            self.font_spacing = DEFAULT_FONT_SPACING;
        }
        if self.max_chars_per_line == 0 {
            self.max_chars_per_line = DEFAULT_MAX_CHARS_PER_LINE;
        }
        self
    }

    /// Parse a request from JSON
    pub fn from_json(json: &str) -> Result<RenderRequest, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn background(&self) -> Option<&Path> {
        self.background
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// The title, if there is one to draw
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn colour_scheme(&self) -> ColourScheme {
        ColourScheme::select(self.font_colour_name.as_deref(), self.white_on_black)
    }
}
