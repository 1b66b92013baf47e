//! Drawing style - tint, edge thickness, depth and tessellation density

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Style applied when a chain is stroked.
///
/// A [`Brush`](crate::Brush) holds one of these and composes a fresh copy
/// per call with the caller's color. Fields use `#[serde(default)]` so that
/// hosts persisting a style won't break when new fields appear.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Tint applied to every quad
    pub color: Rgba,
    /// Edge thickness in pixels
    pub thickness: f32,
    /// Render depth hint for the backend (0.0 = front, 1.0 = back)
    pub depth: f32,
    /// Number of segments used to tessellate circles and arcs
    pub segments: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            thickness: 1.0,
            depth: 0.0,
            segments: 20,
        }
    }
}

impl Style {
    /// The same style with a different tint.
    pub fn with_color(self, color: Rgba) -> Self {
        Self { color, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert_eq!(style.color, Rgba::WHITE);
        assert_eq!(style.segments, 20);
        assert!((style.thickness - 1.0).abs() < f32::EPSILON);
        assert!(style.depth.abs() < f32::EPSILON);
    }

    #[test]
    fn test_with_color_keeps_rest() {
        let style = Style {
            thickness: 3.0,
            ..Style::default()
        };
        let tinted = style.with_color(Rgba::BLUE);
        assert_eq!(tinted.color, Rgba::BLUE);
        assert!((tinted.thickness - 3.0).abs() < f32::EPSILON);
    }
}
