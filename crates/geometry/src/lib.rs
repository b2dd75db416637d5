//! Ground-projected pixel geometry for a camera on an orbiting platform.
//!
//! The body is modelled as a perfect sphere and every computation happens in
//! the 2-D plane spanned by the platform, the body centre, and the line of
//! sight. [`triangle`] holds the law-of-sines/cosines primitives;
//! [`engine::PixelGeometry`] owns the configuration and turns it into
//! per-pixel line-of-sight distances and ground footprint sizes.

pub mod engine;
pub mod triangle;

pub use engine::{GeometryError, PixelGeometry};
