use crate::drawer::Drawer;
use crate::layout::Margins;
use crate::request::DEFAULT_MAX_CHARS_PER_LINE;
use crate::units::{Pt, Px, POINTS_PER_INCH};

/// A single line of text and where to draw it
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub text: String,
    /// x of the line's left edge and y of its baseline
    pub coords: (Px, Px),
}

/// Vertical rhythm of a block of text, in whole pixels
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LineMetrics {
    /// Baseline of the first line
    pub first_baseline: Px,
    /// Distance between consecutive baselines
    pub line_height: Px,
    /// Left edge of body lines
    pub left: Px,
}

impl LineMetrics {
    /// `spacing` multiplies the font size to get the line height, e.g. 2 means
    /// double spaced. The first baseline sits one (unspaced) font size below the
    /// top margin.
    pub fn new(font_size: Pt, spacing: f64, dpi: f64, margins: &Margins) -> LineMetrics {
        let line_height = (font_size.0 * spacing * dpi / POINTS_PER_INCH).ceil();
        let ascent = (font_size.0 * dpi / POINTS_PER_INCH).ceil();
        // narrow to pixels only after rounding up
        LineMetrics {
            first_baseline: Px(ascent as f32) + margins.top,
            line_height: Px(line_height as f32),
            left: margins.left,
        }
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Join the accumulated words into a line and clear the accumulator. Lines that
/// are empty once trimmed are dropped.
fn flush(lines: &mut Vec<String>, current: &mut Vec<&str>) {
    let line = current.join(" ");
    let line = line.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}

/// Greedily wrap `text` into lines, counting characters rather than measuring
/// pixels.
///
/// Words are separated by single spaces. A word joins the current line while the
/// summed length of the line's words (spaces not counted) stays below
/// `max_chars`; the word that reaches the budget starts the next line instead.
/// Words are never split, so a word that alone reaches the budget occupies a
/// line of its own. A `max_chars` of zero uses the default budget.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = if max_chars == 0 {
        DEFAULT_MAX_CHARS_PER_LINE
    } else {
        max_chars
    };

    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len() - 1;

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut count = 0usize;

    for (idx, &word) in words.iter().enumerate() {
        let word = word.trim();
        count += char_len(word);

        let mut held: Option<&str> = None;
        if count < max_chars {
            current.push(word);
            if idx < last {
                continue;
            }
        } else if idx == last {
            flush(&mut lines, &mut current);
            current.push(word);
        } else {
            held = Some(word);
        }

        // a lone word over the budget is a line by itself
        if current.is_empty() {
            if let Some(word) = held.take() {
                current.push(word);
            }
        }

        flush(&mut lines, &mut current);
        count = 0;
        if let Some(word) = held {
            count = char_len(word);
            current.push(word);
        }
    }

    lines
}

/// Wrap `text` and place each line on a canvas `canvas_width` pixels wide.
///
/// If there is a `title` it comes first, horizontally centred using its measured
/// width, on the first baseline. Body lines follow at the left margin, each one
/// [LineMetrics::line_height] below the previous line.
pub fn layout_text<D: Drawer + ?Sized>(
    drawer: &D,
    text: &str,
    title: Option<&str>,
    max_chars: usize,
    metrics: &LineMetrics,
    canvas_width: u32,
) -> Vec<LineLayout> {
    let mut layouts: Vec<LineLayout> = Vec::new();
    let mut y = metrics.first_baseline;

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        let x = (Px::from(canvas_width) - drawer.measure(title)) / 2.0;
        layouts.push(LineLayout {
            text: title.to_string(),
            coords: (x, y),
        });
        y += metrics.line_height;
    }

    for line in wrap_words(text, max_chars) {
        layouts.push(LineLayout {
            text: line,
            coords: (metrics.left, y),
        });
        y += metrics.line_height;
    }

    layouts
}
