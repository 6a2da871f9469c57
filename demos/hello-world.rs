use img_text::colours;
use img_text::layout::{LineLayout, LineMetrics, Margins};
use img_text::{render_lines, Canvas, ColourScheme, Font, FontDrawer, Hinting, Pt};

fn main() {
    // load a font to draw with
    let dejavu = include_bytes!("../assets/DejaVuSans.ttf");
    let dejavu = Font::load(dejavu.to_vec()).expect("can load font");

    // a blank 640x480 canvas, black text on white with the ruler guide
    let mut canvas = Canvas::default_blank(&ColourScheme::default());

    // calculate where the first line goes for 16pt text at 72 DPI
    let metrics = LineMetrics::new(Pt(16.0), 1.25, 72.0, &Margins::default());

    // bind the font to the canvas
    let face = dejavu.scaled(Pt(16.0), 72.0, Hinting::None);
    let mut drawer = FontDrawer::new(face, &mut canvas, colours::BLACK);

    // and draw "Hello world!" at the top-left, within the margins
    render_lines(
        &mut drawer,
        &[LineLayout {
            text: "Hello world!".to_string(),
            coords: (metrics.left, metrics.first_baseline),
        }],
    );

    canvas.save("hello-world.png").unwrap();
}
