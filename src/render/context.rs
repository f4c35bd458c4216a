//! Drawing state - tracks pen, fill mode and origin between commands

use crate::types::{Color, PenColor, Point};

/// State carried from one command to the next within a program run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawingState {
    /// Color used for strokes and fills
    pub pen_color: PenColor,
    /// Whether shapes are filled instead of outlined
    pub fill_enabled: bool,
    /// Translation currently applied to the surface
    pub origin_offset: Point,
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// RGB value of the current pen
    pub fn pen(&self) -> Color {
        self.pen_color.rgb()
    }

    /// Back to black, unfilled, untranslated. Called when a new run begins.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec2, ivec2};

    #[test]
    fn defaults_match_a_fresh_session() {
        let state = DrawingState::new();
        assert_eq!(state.pen_color, PenColor::Black);
        assert!(!state.fill_enabled);
        assert_eq!(state.origin_offset, IVec2::ZERO);
        assert_eq!(state.pen(), Color::BLACK);
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut state = DrawingState {
            pen_color: PenColor::Blue,
            fill_enabled: true,
            origin_offset: ivec2(3, 4),
        };
        state.reset_all();
        assert_eq!(state, DrawingState::default());
    }
}
