//! Backend seam - the one operation a sprite backend must provide
//!
//! The renderer reduces every shape to an ordered sequence of [`DrawQuad`]s;
//! a backend draws each one by tinting, scaling and rotating a single
//! texture. Backends must preserve call order: quads arrive in reverse chain
//! order and alpha blending makes that ordering observable.

use nalgebra::{Point2, Vector2};
use thiserror::Error;

use crate::color::Rgba;

/// One unit of backend work: a unit quad with placement, tint and depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawQuad {
    /// World-space anchor the quad is drawn at
    pub position: Point2<f32>,
    /// Counter-clockwise rotation in radians
    pub rotation: f32,
    /// Pivot within the unit quad: (0.5, 0.5) is the center, (0.0, 0.5) the
    /// midpoint of the left edge
    pub origin: Point2<f32>,
    /// Per-axis scale: (length, thickness) for stretched quads, isotropic
    /// for stamps
    pub scale: Vector2<f32>,
    /// Tint color
    pub color: Rgba,
    /// Render depth hint (0.0 = front, 1.0 = back)
    pub depth: f32,
}

/// A sprite backend that can draw one transformed unit quad at a time.
pub trait QuadBackend {
    /// The backend's texture resource.
    type Texture;

    /// Error produced when texture creation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create the default 1x1 opaque-white texture.
    ///
    /// Called once when a [`Brush`](crate::Brush) is constructed without a
    /// caller-supplied texture.
    fn create_pixel_texture(&mut self) -> Result<Self::Texture, Self::Error>;

    /// Draw one quad using the full source region of `texture`.
    ///
    /// Implementations must draw quads in the order the calls arrive.
    fn draw_quad(&mut self, texture: &Self::Texture, quad: &DrawQuad);
}

/// How a brush holds its texture.
///
/// Release logic is structural: an owned texture drops with the brush, a
/// borrowed one never does. The mode is fixed at construction.
#[derive(Debug)]
pub enum TextureSlot<'t, T> {
    /// Created by the brush, dropped with it
    Owned(T),
    /// Supplied by the caller, never dropped by the brush
    Borrowed(&'t T),
}

impl<T> TextureSlot<'_, T> {
    /// The texture, whichever side owns it.
    pub fn get(&self) -> &T {
        match self {
            TextureSlot::Owned(texture) => texture,
            TextureSlot::Borrowed(texture) => texture,
        }
    }
}

/// Errors surfaced by brush construction.
#[derive(Debug, Error)]
pub enum BrushError {
    /// The backend failed to create the default 1x1 pixel texture.
    #[error("failed to create pixel texture: {0}")]
    TextureCreation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_slot_get() {
        let owned: TextureSlot<'_, u32> = TextureSlot::Owned(7);
        assert_eq!(*owned.get(), 7);

        let texture = 9_u32;
        let borrowed: TextureSlot<'_, u32> = TextureSlot::Borrowed(&texture);
        assert_eq!(*borrowed.get(), 9);
    }

    #[test]
    fn test_borrowed_slot_leaves_texture_alive() {
        let texture = String::from("pixel");
        {
            let slot = TextureSlot::Borrowed(&texture);
            assert_eq!(slot.get(), "pixel");
        }
        // The slot is gone, the caller's texture is not.
        assert_eq!(texture, "pixel");
    }
}
