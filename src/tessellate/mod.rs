//! Tessellation - shape requests to point chains
//!
//! This module provides:
//! - [`Chain`], the ordered point sequence consumed by the renderer
//! - [`ShapeRequest`], a tagged union over the supported shapes
//! - [`tessellate`], which builds the chain for a request

mod chain;
mod shapes;

pub use chain::Chain;
pub use shapes::{tessellate, Rect, ShapeRequest};
