use owned_ttf_parser::OutlineBuilder;
use zeno::{Command, Mask, Vector};

/// An 8-bit coverage mask for one glyph, positioned on the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMask {
    /// Canvas x of the mask's left column
    pub left: i32,
    /// Canvas y of the mask's top row
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, `width * height` bytes, 0 = empty, 255 = covered
    pub coverage: Vec<u8>,
}

/// Collects a glyph outline as zeno path commands, converting font units
/// (y-up) into pixels (y-down) relative to the whole-pixel pen position
pub(crate) struct OutlineCommands {
    scaling: f32,
    offset: (f32, f32),
    commands: Vec<Command>,
}

impl OutlineCommands {
    /// `offset` is the sub-pixel part of the pen position
    pub fn new(scaling: f32, offset: (f32, f32)) -> OutlineCommands {
        OutlineCommands {
            scaling,
            offset,
            commands: Vec::new(),
        }
    }

    fn point(&self, x: f32, y: f32) -> Vector {
        Vector::new(
            self.offset.0 + x * self.scaling,
            self.offset.1 - y * self.scaling,
        )
    }

    /// Rasterize the collected outline. `pen` is the whole-pixel pen position on
    /// the canvas
    pub fn rasterize(self, pen: (i32, i32)) -> Option<GlyphMask> {
        if self.commands.is_empty() {
            return None;
        }

        let (coverage, placement) = Mask::new(self.commands.as_slice()).render();
        if placement.width == 0 || placement.height == 0 {
            return None;
        }

        Some(GlyphMask {
            left: pen.0 + placement.left,
            top: pen.1 + placement.top,
            width: placement.width,
            height: placement.height,
            coverage,
        })
    }
}

impl OutlineBuilder for OutlineCommands {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.push(Command::LineTo(p));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.point(x1, y1);
        let p = self.point(x, y);
        self.commands.push(Command::QuadTo(c, p));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.point(x1, y1);
        let c2 = self.point(x2, y2);
        let p = self.point(x, y);
        self.commands.push(Command::CurveTo(c1, c2, p));
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outline_has_no_mask() {
        assert!(OutlineCommands::new(1.0, (0.0, 0.0)).rasterize((0, 0)).is_none());
    }

    #[test]
    fn square_covers_its_area() {
        // a 4x4 unit square sitting on the baseline
        let mut outline = OutlineCommands::new(1.0, (0.0, 0.0));
        outline.move_to(0.0, 0.0);
        outline.line_to(4.0, 0.0);
        outline.line_to(4.0, 4.0);
        outline.line_to(0.0, 4.0);
        outline.close();

        let mask = outline.rasterize((10, 20)).expect("square has area");
        assert!(mask.left <= 10 && mask.top <= 16);
        assert!(mask.width >= 4 && mask.height >= 4);
        assert_eq!(mask.coverage.len(), (mask.width * mask.height) as usize);
        assert_eq!(mask.coverage.iter().filter(|&&c| c == 255).count(), 16);
    }
}
