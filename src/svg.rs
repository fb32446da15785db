use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::layout::{Align, Layout, Point, Rect};
use crate::palette::Color;
use crate::surface::{Surface, render};

// Approximate glyph metrics in fifths of the font size: 0.6 em advance, 1.2 em lines.
const ADVANCE_FIFTHS: f32 = 3.0;
const LINE_HEIGHT_FIFTHS: f32 = 6.0;

pub struct SvgSurface {
    width: f32,
    height: f32,
    font_size: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32, background: Color, font_size: f32) -> Self {
        let body = format!(r#"<rect width="100%" height="100%" fill="{background}"/>"#) + "\n";
        Self {
            width,
            height,
            font_size,
            body,
        }
    }

    pub fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" "#,
                r#"font-family="sans-serif" font-size="{fs}">"#,
                "\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            fs = self.font_size,
            body = self.body,
        )
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT_FIFTHS / 5.0
    }
}

pub fn render_svg(layout: &Layout) -> String {
    let mut surface = SvgSurface::new(
        layout.width,
        layout.height,
        layout.background,
        layout.font_size,
    );
    render(layout, &mut surface);
    surface.finish()
}

pub fn write_svg(layout: &Layout, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_svg(layout).as_bytes())?;
    writer.flush()
}

impl Surface for SvgSurface {
    fn measure_text(&self, text: &str) -> (f32, f32) {
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        (
            widest as f32 * self.font_size * ADVANCE_FIFTHS / 5.0,
            lines as f32 * self.line_height(),
        )
    }

    fn draw_text(&mut self, origin: Point, text: &str, align: Align, color: Color) {
        let (width, _) = self.measure_text(text);
        let (x, anchor) = match align {
            Align::Start => (origin.x, "start"),
            Align::Center => (origin.x + width / 2.0, "middle"),
            Align::End => (origin.x + width, "end"),
        };
        self.body.push_str(&format!(
            r#"<text fill="{color}" text-anchor="{anchor}">"#
        ));
        for (i, line) in text.lines().enumerate() {
            let baseline = origin.y + i as f32 * self.line_height() + self.font_size;
            self.body.push_str(&format!(
                r#"<tspan x="{x}" y="{baseline}">{}</tspan>"#,
                escape(line)
            ));
        }
        self.body.push_str("</text>\n");
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{width}"/>"#,
            from.x, from.y, to.x, to.y
        ));
        self.body.push('\n');
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{color}"/>"#,
            rect.left,
            rect.top,
            rect.width(),
            rect.height()
        ));
        self.body.push('\n');
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
