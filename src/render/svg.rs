//! SVG generation
//!
//! `SvgSurface` keeps its own translation and bakes it into the
//! coordinates of every element, so the document has no nested
//! transforms. Coordinates are widened to `i64` before translating, so any
//! pair of `i32` values lands where it should. Rectangles and ellipses
//! with a non-positive width or height draw nothing.

use glam::{DVec2, I64Vec2};
use svg::Document;
use svg::node::Node;
use svg::node::element::{Ellipse, Line, Polygon, Rectangle};

use super::defaults;
use super::surface::DrawingSurface;
use crate::types::{Color, Extent, Point};

/// Output settings for [`SvgSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Document width in pixels
    pub width: u32,
    /// Document height in pixels
    pub height: u32,
    /// Background before the first `clear`
    pub background: Color,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: defaults::CANVAS_WIDTH,
            height: defaults::CANVAS_HEIGHT,
            background: defaults::BACKGROUND,
        }
    }
}

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fill(Color),
    Stroke(Color),
}

impl Paint {
    fn apply<N: Node>(self, mut node: N) -> N {
        match self {
            Paint::Fill(color) => node.assign("fill", color.to_string()),
            Paint::Stroke(color) => {
                node.assign("fill", "none");
                node.assign("stroke", color.to_string());
                node.assign("stroke-width", defaults::STROKE_WIDTH);
            }
        }
        node
    }
}

/// One shape in the document, in absolute (translated) coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Line {
        from: I64Vec2,
        to: I64Vec2,
        paint: Paint,
    },
    Rect {
        origin: I64Vec2,
        size: I64Vec2,
        paint: Paint,
    },
    Ellipse {
        center: DVec2,
        radius: DVec2,
        paint: Paint,
    },
    Polygon {
        points: Vec<I64Vec2>,
        paint: Paint,
    },
}

impl SvgElement {
    fn add_to(&self, document: Document) -> Document {
        match self {
            SvgElement::Line { from, to, paint } => document.add(
                paint.apply(
                    Line::new()
                        .set("x1", from.x)
                        .set("y1", from.y)
                        .set("x2", to.x)
                        .set("y2", to.y),
                ),
            ),
            SvgElement::Rect {
                origin,
                size,
                paint,
            } => document.add(
                paint.apply(
                    Rectangle::new()
                        .set("x", origin.x)
                        .set("y", origin.y)
                        .set("width", size.x)
                        .set("height", size.y),
                ),
            ),
            SvgElement::Ellipse {
                center,
                radius,
                paint,
            } => document.add(
                paint.apply(
                    Ellipse::new()
                        .set("cx", center.x)
                        .set("cy", center.y)
                        .set("rx", radius.x)
                        .set("ry", radius.y),
                ),
            ),
            SvgElement::Polygon { points, paint } => {
                let points = points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                document.add(paint.apply(Polygon::new().set("points", points)))
            }
        }
    }
}

/// A drawing surface that accumulates SVG elements
#[derive(Debug, Clone)]
pub struct SvgSurface {
    options: SvgOptions,
    background: Color,
    offset: I64Vec2,
    elements: Vec<SvgElement>,
}

impl SvgSurface {
    pub fn new(options: SvgOptions) -> Self {
        Self {
            options,
            background: options.background,
            offset: I64Vec2::ZERO,
            elements: Vec::new(),
        }
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Translation currently applied to new elements
    pub fn offset(&self) -> I64Vec2 {
        self.offset
    }

    /// Elements drawn since the last `clear`
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// The full document: background first, then every element in order
    pub fn document(&self) -> Document {
        let SvgOptions { width, height, .. } = self.options;
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", self.background.to_string());

        let document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .add(background);

        self.elements
            .iter()
            .fold(document, |document, element| element.add_to(document))
    }

    /// Render the full document as text
    pub fn to_svg(&self) -> String {
        format!("{}\n", self.document())
    }

    fn at(&self, p: Point) -> I64Vec2 {
        p.as_i64vec2().saturating_add(self.offset)
    }

    fn push(&mut self, element: SvgElement) {
        crate::log::trace!(?element, "svg element");
        self.elements.push(element);
    }

    fn rect(&mut self, paint: Paint, origin: Point, size: Extent) {
        if size.x <= 0 || size.y <= 0 {
            crate::log::debug!(w = size.x, h = size.y, "skipping empty rectangle");
            return;
        }
        self.push(SvgElement::Rect {
            origin: self.at(origin),
            size: size.as_i64vec2(),
            paint,
        });
    }

    fn ellipse(&mut self, paint: Paint, origin: Point, size: Extent) {
        if size.x <= 0 || size.y <= 0 {
            crate::log::debug!(w = size.x, h = size.y, "skipping empty ellipse");
            return;
        }
        let radius = size.as_dvec2() / 2.0;
        self.push(SvgElement::Ellipse {
            center: self.at(origin).as_dvec2() + radius,
            radius,
            paint,
        });
    }

    fn polygon(&mut self, paint: Paint, points: &[Point]) {
        let points = points.iter().map(|p| self.at(*p)).collect();
        self.push(SvgElement::Polygon { points, paint });
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SvgOptions::default())
    }
}

impl DrawingSurface for SvgSurface {
    fn reset_transform(&mut self) {
        self.offset = I64Vec2::ZERO;
    }

    fn translate(&mut self, offset: Point) {
        self.offset = self.offset.saturating_add(offset.as_i64vec2());
    }

    fn clear(&mut self, color: Color) {
        self.elements.clear();
        self.background = color;
    }

    fn stroke_line(&mut self, color: Color, from: Point, to: Point) {
        self.push(SvgElement::Line {
            from: self.at(from),
            to: self.at(to),
            paint: Paint::Stroke(color),
        });
    }

    fn fill_rect(&mut self, color: Color, origin: Point, size: Extent) {
        self.rect(Paint::Fill(color), origin, size);
    }

    fn stroke_rect(&mut self, color: Color, origin: Point, size: Extent) {
        self.rect(Paint::Stroke(color), origin, size);
    }

    fn fill_ellipse(&mut self, color: Color, origin: Point, size: Extent) {
        self.ellipse(Paint::Fill(color), origin, size);
    }

    fn stroke_ellipse(&mut self, color: Color, origin: Point, size: Extent) {
        self.ellipse(Paint::Stroke(color), origin, size);
    }

    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        self.polygon(Paint::Fill(color), points);
    }

    fn stroke_polygon(&mut self, color: Color, points: &[Point]) {
        self.polygon(Paint::Stroke(color), points);
    }
}
