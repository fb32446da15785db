use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::day_axis::DayAxis;
use crate::error::Result;
use crate::event::Event;
use crate::palette::Color;
use crate::schedule::Schedule;
use crate::time_axis::TimeAxis;
use crate::weekday::weekday_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub column_width: f32,
    pub header_height: f32,
    pub row_height: f32,
    pub gutter_width: f32,
    pub bottom_padding: f32,
    pub corner_radius: f32,
    pub line_width: f32,
    pub label_margin: f32,
    pub font_size: f32,
    pub background: Color,
    pub header_color: Color,
    pub line_color: Color,
    pub text_color: Color,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            column_width: 140.0,
            header_height: 30.0,
            row_height: 40.0,
            gutter_width: 60.0,
            bottom_padding: 20.0,
            corner_radius: 6.0,
            line_width: 2.0,
            label_margin: 6.0,
            font_size: 11.0,
            background: Color::WHITE,
            header_color: Color::RED,
            line_color: Color::BLACK,
            text_color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
}

/// Text block, vertically centred on `anchor.y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInstr {
    pub anchor: Point,
    pub text: String,
    pub color: Color,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInstr {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeInstr {
    pub rect: Rect,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    Text(TextInstr),
    Line(LineInstr),
    Shape(ShapeInstr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub font_size: f32,
    pub instructions: Vec<Instruction>,
}

pub struct LayoutEngine {
    metrics: Metrics,
}

impl LayoutEngine {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    // Overlapping same-day events are not stacked; later events paint over earlier ones.
    pub fn layout(&self, schedule: &Schedule) -> Result<Layout> {
        let events = schedule.events();
        let time_axis = TimeAxis::new(events, &self.metrics)?;
        let day_axis = DayAxis::new(events, schedule.order(), &self.metrics)?;

        let width = day_axis.width();
        let height = time_axis.height();

        let mut instructions = self.header(&day_axis, width, height);
        for event in events {
            self.occurrences(event, &time_axis, &day_axis, &mut instructions);
        }

        debug!(
            width,
            height,
            instructions = instructions.len(),
            "laid out schedule"
        );
        Ok(Layout {
            width,
            height,
            background: self.metrics.background,
            font_size: self.metrics.font_size,
            instructions,
        })
    }

    fn header(&self, day_axis: &DayAxis, width: f32, height: f32) -> Vec<Instruction> {
        let m = &self.metrics;
        let mut out = Vec::new();

        for (column, day) in day_axis.days().iter().enumerate() {
            let x = day_axis.column_x(column);
            out.push(Instruction::Text(TextInstr {
                anchor: Point::new(x + m.column_width / 2.0, m.header_height / 2.0),
                text: weekday_name(*day).to_string(),
                color: m.header_color,
                align: Align::Center,
            }));
        }

        out.push(Instruction::Line(LineInstr {
            from: Point::new(0.0, m.header_height),
            to: Point::new(width, m.header_height),
            color: m.line_color,
            width: m.line_width,
        }));

        for column in 1..day_axis.days().len() {
            let x = day_axis.column_x(column);
            out.push(Instruction::Line(LineInstr {
                from: Point::new(x, 0.0),
                to: Point::new(x, height),
                color: m.line_color,
                width: m.line_width,
            }));
        }

        out
    }

    fn occurrences(
        &self,
        event: &Event,
        time_axis: &TimeAxis,
        day_axis: &DayAxis,
        out: &mut Vec<Instruction>,
    ) {
        let m = &self.metrics;
        let top = time_axis.y(event.start());
        let bottom = time_axis.y(event.end());
        let label_x = day_axis.gutter_width() - m.label_margin;

        for day in event.days() {
            let Some(left) = day_axis.x(*day) else {
                warn!(day = weekday_name(*day), "event day has no column");
                continue;
            };
            let rect = Rect {
                left,
                top,
                right: left + day_axis.column_width(),
                bottom,
            };

            out.push(Instruction::Shape(ShapeInstr {
                rect,
                radius: m.corner_radius,
                color: event.color(),
            }));
            out.push(Instruction::Text(TextInstr {
                anchor: rect.center(),
                text: event.formatted_label(),
                color: m.text_color,
                align: Align::Center,
            }));
            for (time, y) in [(event.start(), top), (event.end(), bottom)] {
                out.push(Instruction::Text(TextInstr {
                    anchor: Point::new(label_x, y),
                    text: time.format_12_hour(),
                    color: event.color(),
                    align: Align::End,
                }));
            }
        }
    }
}
