//! Default sizes and settings (all in surface pixels)

use glam::IVec2;

use crate::types::{Color, Extent};

/// Color `clear` repaints the surface with
pub const BACKGROUND: Color = Color::WHITE;
/// Size of the square `draw` paints when fill mode is on
pub const UNIT_SQUARE: Extent = IVec2::ONE;
pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 480;
pub const STROKE_WIDTH: u32 = 1;
