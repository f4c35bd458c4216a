//! The drawing surface capability the interpreter draws against.
//!
//! Coordinates are integer pixels relative to the surface's current
//! transform. `translate` composes with the existing transform and
//! `reset_transform` drops it.

use enum_dispatch::enum_dispatch;

use super::recorder::Recorder;
use super::svg::SvgSurface;
use crate::types::{Color, Extent, Point};

/// A 2D canvas that accepts drawing operations.
///
/// Sizes are passed through as given, including zero and negative
/// extents; what those look like is up to the implementation.
#[enum_dispatch]
pub trait DrawingSurface {
    /// Drop any translation so (0, 0) is the surface's top-left again
    fn reset_transform(&mut self);

    /// Translate subsequent drawing by `offset`
    fn translate(&mut self, offset: Point);

    /// Repaint the whole surface with `color`
    fn clear(&mut self, color: Color);

    fn stroke_line(&mut self, color: Color, from: Point, to: Point);

    fn fill_rect(&mut self, color: Color, origin: Point, size: Extent);

    fn stroke_rect(&mut self, color: Color, origin: Point, size: Extent);

    /// Fill the ellipse inscribed in the rectangle at `origin` with `size`
    fn fill_ellipse(&mut self, color: Color, origin: Point, size: Extent);

    /// Outline the ellipse inscribed in the rectangle at `origin` with `size`
    fn stroke_ellipse(&mut self, color: Color, origin: Point, size: Extent);

    fn fill_polygon(&mut self, color: Color, points: &[Point]);

    fn stroke_polygon(&mut self, color: Color, points: &[Point]);
}

/// The surfaces this crate ships, selectable at runtime
#[enum_dispatch(DrawingSurface)]
#[derive(Debug, Clone)]
pub enum Backend {
    Svg(SvgSurface),
    Recorder(Recorder),
}

impl Backend {
    /// SVG document for the svg backend, `None` for the others
    pub fn to_svg(&self) -> Option<String> {
        match self {
            Backend::Svg(svg) => Some(svg.to_svg()),
            Backend::Recorder(_) => None,
        }
    }
}
