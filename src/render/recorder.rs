//! A surface that records draw calls instead of painting them.
//!
//! Each call formats as one line, e.g. `stroke_line rgb(0,0,0) 0,0 -> 5,5`,
//! so a whole run can be compared against a plain text log.

use std::fmt;

use super::surface::DrawingSurface;
use crate::types::{Color, Extent, Point};

/// One operation issued to a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    ResetTransform,
    Translate(Point),
    Clear(Color),
    StrokeLine {
        color: Color,
        from: Point,
        to: Point,
    },
    FillRect {
        color: Color,
        origin: Point,
        size: Extent,
    },
    StrokeRect {
        color: Color,
        origin: Point,
        size: Extent,
    },
    FillEllipse {
        color: Color,
        origin: Point,
        size: Extent,
    },
    StrokeEllipse {
        color: Color,
        origin: Point,
        size: Extent,
    },
    FillPolygon { color: Color, points: Vec<Point> },
    StrokePolygon { color: Color, points: Vec<Point> },
}

struct Pt(Point);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

fn fmt_box(
    f: &mut fmt::Formatter<'_>,
    op: &str,
    color: &Color,
    origin: &Point,
    size: &Extent,
) -> fmt::Result {
    write!(f, "{op} {color} at {} size {}x{}", Pt(*origin), size.x, size.y)
}

fn fmt_polygon(
    f: &mut fmt::Formatter<'_>,
    op: &str,
    color: &Color,
    points: &[Point],
) -> fmt::Result {
    write!(f, "{op} {color}")?;
    for p in points {
        write!(f, " {}", Pt(*p))?;
    }
    Ok(())
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCall::ResetTransform => write!(f, "reset_transform"),
            DrawCall::Translate(p) => write!(f, "translate {} {}", p.x, p.y),
            DrawCall::Clear(color) => write!(f, "clear {color}"),
            DrawCall::StrokeLine { color, from, to } => {
                write!(f, "stroke_line {color} {} -> {}", Pt(*from), Pt(*to))
            }
            DrawCall::FillRect {
                color,
                origin,
                size,
            } => fmt_box(f, "fill_rect", color, origin, size),
            DrawCall::StrokeRect {
                color,
                origin,
                size,
            } => fmt_box(f, "stroke_rect", color, origin, size),
            DrawCall::FillEllipse {
                color,
                origin,
                size,
            } => fmt_box(f, "fill_ellipse", color, origin, size),
            DrawCall::StrokeEllipse {
                color,
                origin,
                size,
            } => fmt_box(f, "stroke_ellipse", color, origin, size),
            DrawCall::FillPolygon { color, points } => {
                fmt_polygon(f, "fill_polygon", color, points)
            }
            DrawCall::StrokePolygon { color, points } => {
                fmt_polygon(f, "stroke_polygon", color, points)
            }
        }
    }
}

/// Records every call in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// All calls, one per line, each line newline-terminated
    pub fn log(&self) -> String {
        self.calls.iter().map(|call| format!("{call}\n")).collect()
    }

    fn push(&mut self, call: DrawCall) {
        crate::log::trace!(%call, "draw call");
        self.calls.push(call);
    }
}

impl DrawingSurface for Recorder {
    fn reset_transform(&mut self) {
        self.push(DrawCall::ResetTransform);
    }

    fn translate(&mut self, offset: Point) {
        self.push(DrawCall::Translate(offset));
    }

    fn clear(&mut self, color: Color) {
        self.push(DrawCall::Clear(color));
    }

    fn stroke_line(&mut self, color: Color, from: Point, to: Point) {
        self.push(DrawCall::StrokeLine { color, from, to });
    }

    fn fill_rect(&mut self, color: Color, origin: Point, size: Extent) {
        self.push(DrawCall::FillRect { color, origin, size });
    }

    fn stroke_rect(&mut self, color: Color, origin: Point, size: Extent) {
        self.push(DrawCall::StrokeRect { color, origin, size });
    }

    fn fill_ellipse(&mut self, color: Color, origin: Point, size: Extent) {
        self.push(DrawCall::FillEllipse { color, origin, size });
    }

    fn stroke_ellipse(&mut self, color: Color, origin: Point, size: Extent) {
        self.push(DrawCall::StrokeEllipse { color, origin, size });
    }

    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        self.push(DrawCall::FillPolygon {
            color,
            points: points.to_vec(),
        });
    }

    fn stroke_polygon(&mut self, color: Color, points: &[Point]) {
        self.push(DrawCall::StrokePolygon {
            color,
            points: points.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    #[test]
    fn records_in_order_and_formats_one_line_per_call() {
        let mut rec = Recorder::new();
        rec.reset_transform();
        rec.translate(ivec2(10, -20));
        rec.stroke_line(Color::BLACK, ivec2(0, 0), ivec2(5, 5));
        rec.fill_rect(Color::RED, ivec2(5, 5), ivec2(1, 1));
        rec.stroke_ellipse(Color::BLUE, ivec2(0, 0), ivec2(20, 20));
        rec.fill_polygon(Color::GREEN, &[ivec2(0, 0), ivec2(10, 0), ivec2(10, 10)]);

        assert_eq!(rec.calls().len(), 6);
        assert!(rec.log().ends_with('\n'));
        insta::assert_snapshot!(rec.log().trim_end(), @r"
        reset_transform
        translate 10 -20
        stroke_line rgb(0,0,0) 0,0 -> 5,5
        fill_rect rgb(255,0,0) at 5,5 size 1x1
        stroke_ellipse rgb(0,0,255) at 0,0 size 20x20
        fill_polygon rgb(0,128,0) 0,0 10,0 10,10
        ");
    }

    #[test]
    fn take_empties_the_recorder() {
        let mut rec = Recorder::new();
        rec.clear(Color::WHITE);
        assert_eq!(rec.take(), vec![DrawCall::Clear(Color::WHITE)]);
        assert!(rec.calls().is_empty());
        assert_eq!(rec.log(), "");
    }
}
