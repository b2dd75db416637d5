//! Core units, constants, and shared defaults for the Orbit Pixel Calculator workspace.

/// Physical constants and catalog defaults.
pub mod constants {
    /// Mean Earth radius (km), the default spherical body.
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Default platform altitude above the surface (km).
    pub const DEFAULT_ALTITUDE_KM: f64 = 550.0;
    /// Default total field of view (degrees).
    pub const DEFAULT_FIELD_OF_VIEW_DEG: f64 = 18.0;
    /// Default pointing offset from nadir (degrees).
    pub const DEFAULT_VIEW_ANGLE_DEG: f64 = 15.0;
    /// Default number of pixels across the field of view.
    pub const DEFAULT_PIXEL_COUNT: usize = 640;
}

/// Basic unit conversion helpers.
pub mod units {
    use std::f64::consts::PI;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * PI / 180.0
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * 180.0 / PI
    }

    /// Convert gradians to radians.
    #[inline]
    pub fn grad_to_rad(v: f64) -> f64 {
        v * PI / 200.0
    }

    /// Convert radians to gradians.
    #[inline]
    pub fn rad_to_grad(v: f64) -> f64 {
        v * 200.0 / PI
    }

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }
}
