use crate::{
    canvas::Canvas,
    drawer::{Drawer, FontDrawer},
    error::RenderError,
    font::Font,
    layout::{layout_text, LineLayout, LineMetrics, Margins},
    request::RenderRequest,
    units::Pt,
};
use std::path::{Path, PathBuf};

/// Draw each laid out line at its coordinates
pub fn render_lines<D: Drawer + ?Sized>(drawer: &mut D, lines: &[LineLayout]) {
    for line in lines {
        drawer.draw(line.coords, &line.text);
    }
}

/// Render `text` according to `request` and write the image to `save_as`.
///
/// Unset fields of the request take their defaults. The background is either
/// the request's image or a blank canvas; the text is wrapped and drawn below
/// the optional title, and the result is written as a PNG. Returns the path
/// written on success. Any failure stops the render immediately; a failure
/// while encoding may leave a truncated file behind.
pub fn render_text(
    request: &RenderRequest,
    text: &str,
    save_as: &Path,
) -> Result<PathBuf, RenderError> {
    let request = request.clone().resolve();
    let colours = request.colour_scheme();

    let mut canvas = Canvas::obtain(request.background(), &colours)?;

    let font = Font::load_from_disk(&request.font_path)?;
    log::debug!(
        "loaded font {:?} from {:?}",
        font.name().unwrap_or_default(),
        request.font_path
    );

    let size = Pt(request.font_size);
    let metrics = LineMetrics::new(size, request.font_spacing, request.dpi, &Margins::default());
    let face = font.scaled(size, request.dpi, request.hinting);

    let mut drawer = FontDrawer::new(face, &mut canvas, colours.foreground);
    let lines = layout_text(
        &drawer,
        text,
        request.title(),
        request.max_chars_per_line,
        &metrics,
        drawer.canvas_width(),
    );
    log::debug!("laid out {} lines", lines.len());
    for line in &lines {
        log::trace!("{:?} at {:?}", line.text, line.coords);
    }

    render_lines(&mut drawer, &lines);

    canvas.save(save_as)?;
    log::info!("wrote {save_as:?}");
    Ok(save_as.to_owned())
}

impl RenderRequest {
    /// Render `text` to `save_as`, see [render_text]
    pub fn render<P: AsRef<Path>>(&self, text: &str, save_as: P) -> Result<PathBuf, RenderError> {
        render_text(self, text, save_as.as_ref())
    }
}
