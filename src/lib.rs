//! quadstroke - 2D primitive drawing through stretched sprite quads
//!
//! This library converts high-level shape requests (circle, line, box, pie,
//! sine wave) into ordered point chains and strokes those chains as a
//! sequence of stretched unit quads issued to a sprite backend.
//!
//! ## Pipeline
//!
//! Every draw call flows one way through three pure stages:
//!
//! 1. Tessellation: a [`ShapeRequest`] becomes a [`Chain`] of points
//! 2. Transform: the chain is optionally rotated about a pivot
//! 3. Rendering: the chain is walked pairwise and emitted as [`DrawQuad`]s
//!
//! The [`Brush`] facade composes the stages per call and retains no chain
//! state between calls, so separate brushes are fully independent.
//!
//! ## Backend contract
//!
//! The only thing a backend has to do is draw one transformed unit quad at a
//! time ([`QuadBackend::draw_quad`]) and preserve call order - chains are
//! walked in reverse creation order, which is observable under alpha
//! blending.
//!
//! ## Example
//!
//! ```
//! use nalgebra::Point2;
//! use quadstroke::{Brush, DrawQuad, QuadBackend, Rgba};
//!
//! /// A backend that just collects quads.
//! struct Collector {
//!     quads: Vec<DrawQuad>,
//! }
//!
//! impl QuadBackend for Collector {
//!     type Texture = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn create_pixel_texture(&mut self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn draw_quad(&mut self, _texture: &(), quad: &DrawQuad) {
//!         self.quads.push(*quad);
//!     }
//! }
//!
//! let mut backend = Collector { quads: Vec::new() };
//! let brush = Brush::new(&mut backend).unwrap();
//! brush.circle(&mut backend, Point2::new(320.0, 240.0), 64.0, Rgba::RED);
//!
//! // A 20-segment circle strokes as 20 stretched quads.
//! assert_eq!(backend.quads.len(), 20);
//! ```

mod backend;
mod brush;
mod color;
mod render;
mod style;
mod tessellate;
mod transform;

pub use backend::{BrushError, DrawQuad, QuadBackend, TextureSlot};
pub use brush::Brush;
pub use color::Rgba;
pub use render::{render, Strategy};
pub use style::Style;
pub use tessellate::{tessellate, Chain, Rect, ShapeRequest};
pub use transform::rotate;
