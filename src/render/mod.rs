//! Rendering - point chains to backend draw calls
//!
//! This module provides:
//! - [`Strategy`], the five ways a chain can be stroked
//! - [`render`], the pure function that emits the quad sequence for a chain

mod segment;

pub use segment::{render, Strategy};
