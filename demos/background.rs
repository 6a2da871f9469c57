use img_text::{Canvas, ColourScheme, RenderRequest};

fn main() {
    env_logger::init();

    // make a dark background to draw on
    let scheme = ColourScheme::select(None, true);
    Canvas::blank(800, 200, &scheme)
        .save("background.png")
        .expect("can save background");

    // and render white text onto it
    let request = RenderRequest {
        background: Some("background.png".into()),
        white_on_black: true,
        font_size: 24.0,
        max_chars_per_line: 40,
        ..Default::default()
    };
    request
        .render(&lipsum::lipsum(20), "background-text.png")
        .expect("can render");
}
