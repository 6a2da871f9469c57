use img_text::{
    colours, Canvas, Colour, ColourScheme, FontError, Hinting, RenderError, RenderRequest,
};
use std::path::Path;
use tempfile::TempDir;

const FONT: &str = "assets/DejaVuSans.ttf";

fn request() -> RenderRequest {
    RenderRequest {
        font_path: FONT.into(),
        ..Default::default()
    }
}

/// Pixels that differ from `background`, ignoring the ruler
fn inked(canvas: &Canvas, background: Colour) -> Vec<(u32, u32)> {
    let mut ink = Vec::new();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let on_ruler = (x == 10 && (10..210).contains(&y)) || (y == 10 && (10..210).contains(&x));
            if !on_ruler && canvas.pixel(x, y) != Some(background) {
                ink.push((x, y));
            }
        }
    }
    ink
}

#[test]
fn renders_text_onto_a_blank_canvas() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out.png");

    let written = request()
        .render("The quick brown fox jumps over the lazy dog", &out)
        .expect("can render");
    assert_eq!(written, out);

    let canvas = Canvas::open(&out).expect("can reopen");
    assert_eq!((canvas.width(), canvas.height()), (640, 480));
    assert_eq!(canvas.pixel(10, 100), Some(colours::RULER_LIGHT));
    assert_eq!(canvas.pixel(100, 10), Some(colours::RULER_LIGHT));

    let ink = inked(&canvas, colours::WHITE);
    assert!(!ink.is_empty());
    // 12pt at 72 DPI with 16 characters per line: the first baseline is at 22
    // and lines are 15px apart
    assert!(ink.iter().all(|&(x, _)| x >= 8));
    let lowest = ink.iter().map(|&(_, y)| y).max().expect("ink");
    let highest = ink.iter().map(|&(_, y)| y).min().expect("ink");
    assert!(highest >= 10, "text starts below the top margin");
    assert!(lowest < 22 + 15 * 3 + 5, "four short lines");
}

#[test]
fn white_on_black() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out.png");

    RenderRequest {
        white_on_black: true,
        font_colour_name: Some("yellow".into()),
        font_size: 36.0,
        ..request()
    }
    .render("white text", &out)
    .expect("can render");

    let canvas = Canvas::open(&out).expect("can reopen");
    assert_eq!(canvas.pixel(600, 400), Some(colours::BLACK));
    assert_eq!(canvas.pixel(10, 100), Some(colours::RULER_DARK));
    // fully covered pixels take the foreground colour, which the hint leaves white
    let ink = inked(&canvas, colours::BLACK);
    assert!(ink.iter().any(|&(x, y)| canvas.pixel(x, y) == Some(colours::WHITE)));
    assert!(ink
        .iter()
        .filter_map(|&(x, y)| canvas.pixel(x, y))
        .all(|c| c.r == c.g && c.g == c.b));
}

#[test]
fn title_is_centred() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out.png");

    RenderRequest {
        title: Some("Hi".into()),
        font_size: 24.0,
        hinting: Hinting::Full,
        ..request()
    }
    .render("", &out)
    .expect("can render");

    let canvas = Canvas::open(&out).expect("can reopen");
    let ink = inked(&canvas, colours::WHITE);
    let left = ink.iter().map(|&(x, _)| x).min().expect("ink");
    let right = ink.iter().map(|&(x, _)| x).max().expect("ink");
    let centre = (left + right) as f32 / 2.0;
    assert!((centre - 320.0).abs() < 6.0, "title centred at {centre}");
    // one line only, sitting on the first baseline (24 + 10)
    assert!(ink.iter().all(|&(_, y)| y < 34));
}

#[test]
fn draws_onto_an_existing_background() {
    let dir = TempDir::new().expect("temp dir");
    let background = dir.path().join("background.png");
    let out = dir.path().join("out.png");

    let scheme = ColourScheme::select(None, false);
    Canvas::blank(300, 120, &scheme)
        .save(&background)
        .expect("can save background");

    RenderRequest {
        background: Some(background.clone()),
        ..request()
    }
    .render("on top", &out)
    .expect("can render");

    let canvas = Canvas::open(&out).expect("can reopen");
    assert_eq!((canvas.width(), canvas.height()), (300, 120));
    assert!(!inked(&canvas, colours::WHITE).is_empty());

    // the background itself is untouched
    let original = Canvas::open(&background).expect("can reopen background");
    assert!(inked(&original, colours::WHITE).is_empty());
}

#[test]
fn save_and_reopen_keeps_dimensions() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("canvas.png");

    let canvas = Canvas::blank(123, 45, &ColourScheme::default());
    canvas.save(&path).expect("can save");
    let reopened = Canvas::open(&path).expect("can reopen");
    assert_eq!((reopened.width(), reopened.height()), (123, 45));
    assert_eq!(reopened.image, canvas.image);
}

#[test]
fn missing_font() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out.png");

    let err = RenderRequest {
        font_path: "no/such/font.ttf".into(),
        ..Default::default()
    }
    .render("text", &out)
    .expect_err("font is missing");
    assert!(matches!(err, RenderError::FontLoad(FontError::Read { .. })));
    assert!(!out.exists());
}

#[test]
fn malformed_font() {
    let dir = TempDir::new().expect("temp dir");
    let font = dir.path().join("broken.ttf");
    std::fs::write(&font, b"not a font at all").expect("can write");

    let err = RenderRequest {
        font_path: font,
        ..Default::default()
    }
    .render("text", dir.path().join("out.png"))
    .expect_err("font is malformed");
    assert!(matches!(err, RenderError::FontLoad(FontError::Parse { .. })));
}

#[test]
fn unreadable_background() {
    let dir = TempDir::new().expect("temp dir");
    let background = dir.path().join("background.png");
    std::fs::write(&background, b"this is not a png").expect("can write");

    let err = RenderRequest {
        background: Some(background),
        ..request()
    }
    .render("text", dir.path().join("out.png"))
    .expect_err("background is garbage");
    assert!(matches!(err, RenderError::Decode { .. }));

    let err = Canvas::open(dir.path().join("missing.png")).expect_err("no such file");
    assert!(matches!(err, RenderError::Decode { .. }));
}

#[test]
fn background_with_unsupported_pixel_layout() {
    let dir = TempDir::new().expect("temp dir");
    let background = dir.path().join("grey.png");
    image::GrayImage::new(8, 8)
        .save(&background)
        .expect("can save grey png");

    let err = Canvas::open(&background).expect_err("grey is not rgba");
    assert!(matches!(err, RenderError::Format { .. }));
}

#[test]
fn rgb_backgrounds_are_widened() {
    let dir = TempDir::new().expect("temp dir");
    let background = dir.path().join("rgb.png");
    image::RgbImage::from_pixel(8, 4, image::Rgb([1, 2, 3]))
        .save(&background)
        .expect("can save rgb png");

    let canvas = Canvas::open(&background).expect("rgb is fine");
    assert_eq!((canvas.width(), canvas.height()), (8, 4));
    assert_eq!(canvas.pixel(0, 0), Some(Colour::new_rgb_bytes(1, 2, 3)));
}

#[test]
fn uncreatable_output() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("no-such-dir").join("out.png");

    let err = request().render("text", &out).expect_err("parent is missing");
    assert!(matches!(err, RenderError::Write { .. }));
    assert!(!Path::new(&out).exists());
}
