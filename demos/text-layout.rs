use img_text::{Hinting, RenderRequest};

fn main() {
    env_logger::init();

    let request = RenderRequest {
        font_size: 16.0,
        hinting: Hinting::Full,
        max_chars_per_line: 60,
        title: Some("Lorem Ipsum".to_string()),
        ..Default::default()
    };
    let written = request
        .render(&lipsum::lipsum(120), "text-layout.png")
        .expect("can render");
    println!("Wrote OK: {}", written.display());
}
