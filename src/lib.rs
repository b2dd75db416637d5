//! Façade crate stitching the Orbit Pixel Calculator workspace together.
//!
//! The solver lives in library crates so multiple front-ends (CLI, GUI,
//! web) can share it; consumers and the integration test suite import
//! everything through this crate.

pub use orbit_config as config;
pub use orbit_core::{constants, units};
pub use orbit_export as export;
pub use orbit_geometry as geometry;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
