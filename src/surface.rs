use crate::layout::{Align, Instruction, Layout, Point, Rect};
use crate::palette::Color;

pub trait Surface {
    fn measure_text(&self, text: &str) -> (f32, f32);

    /// Draws `text` with its bounding box's top-left corner at `origin`.
    /// `align` applies to the individual lines within that box.
    fn draw_text(&mut self, origin: Point, text: &str, align: Align, color: Color);

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);
}

pub fn render(layout: &Layout, surface: &mut impl Surface) {
    for instruction in &layout.instructions {
        match instruction {
            Instruction::Text(text) => {
                let origin = text_origin(&*surface, text.anchor, &text.text, text.align);
                surface.draw_text(origin, &text.text, text.align, text.color);
            }
            Instruction::Line(line) => {
                surface.draw_line(line.from, line.to, line.color, line.width);
            }
            Instruction::Shape(shape) => {
                surface.fill_rounded_rect(shape.rect, shape.radius, shape.color);
            }
        }
    }
}

fn text_origin(surface: &impl Surface, anchor: Point, text: &str, align: Align) -> Point {
    let (width, height) = surface.measure_text(text);
    let x = match align {
        Align::Start => anchor.x,
        Align::Center => anchor.x - width / 2.0,
        Align::End => anchor.x - width,
    };
    Point::new(x, anchor.y - height / 2.0)
}
