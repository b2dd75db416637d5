//! The pixel-geometry engine: configuration, validity bounds, and the
//! per-pixel line-of-sight and footprint computations.

use std::f64::consts::PI;

use thiserror::Error;

use crate::triangle::{law_of_cosines, sine_law_angle, sine_law_side};

/// Errors raised when a configuration value is rejected at the
/// constructor/setter boundary.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Ground-projected pixel geometry for a one-dimensional camera array.
///
/// The engine owns its configuration and result vectors. Callers mutate the
/// configuration through the setters, invoke [`compute_line_of_sight`] and
/// [`compute_footprint_sizes`], then read the result slices. Angles are
/// stored and returned in radians, distances in km.
///
/// Range failures do not abort the entry points; they latch on the engine as
/// the [`fov_out_of_range`] / [`view_angle_out_of_range`] flags together with
/// [`error_message`]. The flags are cleared only by the setters, never by a
/// passing check, so callers must consult them before trusting the result
/// slices. When an entry point runs while the configuration is out of range,
/// the result vectors keep their previous contents.
///
/// [`compute_line_of_sight`]: PixelGeometry::compute_line_of_sight
/// [`compute_footprint_sizes`]: PixelGeometry::compute_footprint_sizes
/// [`fov_out_of_range`]: PixelGeometry::fov_out_of_range
/// [`view_angle_out_of_range`]: PixelGeometry::view_angle_out_of_range
/// [`error_message`]: PixelGeometry::error_message
#[derive(Debug, Clone)]
pub struct PixelGeometry {
    altitude_km: f64,
    field_of_view_rad: f64,
    view_angle_rad: f64,
    body_radius_km: f64,
    pixel_count: usize,
    angular_step_rad: f64,
    max_field_of_view_rad: f64,
    max_view_angle_rad: f64,
    fov_out_of_range: bool,
    view_angle_out_of_range: bool,
    error_message: String,
    angles_rad: Vec<f64>,
    line_of_sight_km: Vec<f64>,
    ray_samples_km: Vec<f64>,
    pixel_size_km: Vec<f64>,
}

impl PixelGeometry {
    /// Build an engine from a full configuration.
    ///
    /// Degenerate values (`altitude <= 0`, `body_radius <= 0`,
    /// `field_of_view < 0`, `pixel_count < 1`, non-finite scalars) are
    /// rejected here rather than surfacing later as NaNs or division by
    /// zero.
    pub fn new(
        altitude_km: f64,
        field_of_view_rad: f64,
        view_angle_rad: f64,
        body_radius_km: f64,
        pixel_count: usize,
    ) -> Result<Self, GeometryError> {
        validate_altitude(altitude_km)?;
        validate_field_of_view(field_of_view_rad)?;
        validate_view_angle(view_angle_rad)?;
        validate_body_radius(body_radius_km)?;
        validate_pixel_count(pixel_count)?;

        let mut geometry = Self {
            altitude_km,
            field_of_view_rad,
            view_angle_rad,
            body_radius_km,
            pixel_count,
            angular_step_rad: field_of_view_rad / pixel_count as f64,
            max_field_of_view_rad: 0.0,
            max_view_angle_rad: 0.0,
            fov_out_of_range: false,
            view_angle_out_of_range: false,
            error_message: String::new(),
            angles_rad: Vec::new(),
            line_of_sight_km: Vec::new(),
            ray_samples_km: Vec::new(),
            pixel_size_km: Vec::new(),
        };
        geometry.recompute_bounds();
        Ok(geometry)
    }

    /// Recompute both validity bounds from the current configuration.
    ///
    /// The setters reproduce the reference recomputation triggers, under
    /// which `max_view_angle` keeps the field of view that was current the
    /// last time the altitude or body radius changed. Callers that want the
    /// bound kept consistent after a field-of-view update can call this
    /// explicitly.
    pub fn recompute_bounds(&mut self) {
        // Outer ray tangent to the surface: right angle opposite the r + h side.
        self.max_field_of_view_rad = 2.0
            * sine_law_angle(
                self.body_radius_km + self.altitude_km,
                self.body_radius_km,
                PI / 2.0,
            );
        self.max_view_angle_rad = self.max_field_of_view_rad / 2.0 - self.field_of_view_rad / 2.0;
    }

    /// Set the platform altitude (km) and refresh both validity bounds.
    pub fn set_altitude(&mut self, altitude_km: f64) -> Result<(), GeometryError> {
        validate_altitude(altitude_km)?;
        self.clear_flags();
        self.altitude_km = altitude_km;
        self.recompute_bounds();
        Ok(())
    }

    /// Set the total field of view (radians) and refresh the angular step.
    ///
    /// Reference behaviour: `max_view_angle` is NOT refreshed here even
    /// though it depends on the field of view; it follows the next altitude
    /// or body-radius update (or an explicit [`recompute_bounds`] call).
    ///
    /// [`recompute_bounds`]: PixelGeometry::recompute_bounds
    pub fn set_field_of_view(&mut self, field_of_view_rad: f64) -> Result<(), GeometryError> {
        validate_field_of_view(field_of_view_rad)?;
        self.clear_flags();
        self.field_of_view_rad = field_of_view_rad;
        self.angular_step_rad = field_of_view_rad / self.pixel_count as f64;
        Ok(())
    }

    /// Set the signed pointing offset from nadir (radians).
    pub fn set_view_angle(&mut self, view_angle_rad: f64) -> Result<(), GeometryError> {
        validate_view_angle(view_angle_rad)?;
        self.clear_flags();
        self.view_angle_rad = view_angle_rad;
        Ok(())
    }

    /// Set the body radius (km) and refresh both validity bounds.
    pub fn set_body_radius(&mut self, body_radius_km: f64) -> Result<(), GeometryError> {
        validate_body_radius(body_radius_km)?;
        self.clear_flags();
        self.body_radius_km = body_radius_km;
        self.recompute_bounds();
        Ok(())
    }

    /// Set the pixel count and refresh the angular step.
    pub fn set_pixel_count(&mut self, pixel_count: usize) -> Result<(), GeometryError> {
        validate_pixel_count(pixel_count)?;
        self.clear_flags();
        self.pixel_count = pixel_count;
        self.angular_step_rad = self.field_of_view_rad / pixel_count as f64;
        Ok(())
    }

    /// Compute the pixel-centre sampling angles and line-of-sight distances.
    ///
    /// No-op on the result vectors when the configuration is out of range;
    /// the failure latches on the range flags instead.
    pub fn compute_line_of_sight(&mut self) {
        if !self.check_validity() {
            return;
        }
        let mut angles = Vec::with_capacity(self.pixel_count);
        let mut distances = Vec::with_capacity(self.pixel_count);
        for i in 0..self.pixel_count {
            // Midpoint of angular slice i, slices counted from the upper edge
            // of the field of view.
            let angle = self.view_angle_rad + self.field_of_view_rad / 2.0
                - (i as f64 + 1.0) * self.angular_step_rad
                + self.angular_step_rad / 2.0;
            distances.push(self.ray_length(angle));
            angles.push(angle);
        }
        self.angles_rad = angles;
        self.line_of_sight_km = distances;
    }

    /// Compute the ground footprint size (arc length, km) of every pixel.
    ///
    /// Samples the `pixel_count + 1` slice-boundary rays first, then derives
    /// each footprint from the chord between adjacent surface points. No-op
    /// on the result vectors when the configuration is out of range.
    pub fn compute_footprint_sizes(&mut self) {
        if !self.check_validity() {
            return;
        }
        self.sample_boundary_rays();
        let mut sizes = Vec::with_capacity(self.pixel_count);
        for i in 0..self.pixel_count {
            let chord = law_of_cosines(
                self.ray_samples_km[i],
                self.ray_samples_km[i + 1],
                self.angular_step_rad,
            );
            // Central angle subtended by a chord of a circle of radius r.
            let central_angle = 2.0 * (chord / (2.0 * self.body_radius_km)).asin();
            sizes.push(self.body_radius_km * central_angle);
        }
        self.pixel_size_km = sizes;
    }

    /// Platform altitude above the surface (km).
    pub fn altitude(&self) -> f64 {
        self.altitude_km
    }

    /// Total field of view (radians).
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view_rad
    }

    /// Signed pointing offset from nadir (radians).
    pub fn view_angle(&self) -> f64 {
        self.view_angle_rad
    }

    /// Body radius (km).
    pub fn body_radius(&self) -> f64 {
        self.body_radius_km
    }

    /// Number of pixels across the field of view.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Angular width of one pixel slice (radians).
    pub fn angular_step(&self) -> f64 {
        self.angular_step_rad
    }

    /// Largest field of view whose outer rays still intersect the surface.
    pub fn max_field_of_view(&self) -> f64 {
        self.max_field_of_view_rad
    }

    /// Largest absolute pointing offset allowed for the bounded field of view.
    pub fn max_view_angle(&self) -> f64 {
        self.max_view_angle_rad
    }

    /// Latched field-of-view range flag.
    pub fn fov_out_of_range(&self) -> bool {
        self.fov_out_of_range
    }

    /// Latched view-angle range flag.
    pub fn view_angle_out_of_range(&self) -> bool {
        self.view_angle_out_of_range
    }

    /// Human-readable description of the most recent range failure.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Pixel-centre sampling angles (radians), one per pixel.
    pub fn angles(&self) -> &[f64] {
        &self.angles_rad
    }

    /// Platform-to-surface distance (km) at each pixel centre.
    pub fn line_of_sight(&self) -> &[f64] {
        &self.line_of_sight_km
    }

    /// Slice-boundary ray lengths (km), `pixel_count + 1` entries.
    pub fn ray_samples(&self) -> &[f64] {
        &self.ray_samples_km
    }

    /// Ground footprint size (arc length, km) of each pixel.
    pub fn pixel_sizes(&self) -> &[f64] {
        &self.pixel_size_km
    }

    /// Check the configuration against the validity bounds, latching the
    /// matching flag and message on failure. Field of view is checked first,
    /// so when both values are out of range only the field-of-view failure
    /// is reported. Flags are never cleared here.
    fn check_validity(&mut self) -> bool {
        if self.field_of_view_rad > self.max_field_of_view_rad {
            self.fov_out_of_range = true;
            self.error_message = format!(
                "field of view {:.6} rad is greater than the max allowed value {:.6} rad",
                self.field_of_view_rad, self.max_field_of_view_rad
            );
            return false;
        }
        if self.view_angle_rad.abs() > self.max_view_angle_rad {
            self.view_angle_out_of_range = true;
            self.error_message = format!(
                "view angle {:.6} rad is greater than the max allowed value {:.6} rad",
                self.view_angle_rad, self.max_view_angle_rad
            );
            return false;
        }
        true
    }

    /// Length of the ray from the platform to the surface point it hits,
    /// for a ray offset `angle` from nadir.
    ///
    /// The body-centre vertex comes out as the reflex angle because the
    /// triangle is built from the platform's exterior viewpoint; the `2π −`
    /// form is the intended convention, not a candidate for simplification
    /// to the interior angle.
    fn ray_length(&self, angle: f64) -> f64 {
        let centre_angle = 2.0 * PI
            - sine_law_angle(
                self.body_radius_km,
                self.body_radius_km + self.altitude_km,
                angle,
            );
        let surface_angle = 2.0 * PI - angle - centre_angle;
        sine_law_side(angle, surface_angle, self.body_radius_km)
    }

    /// Ray lengths at the pixel-slice boundaries, upper edge first.
    fn sample_boundary_rays(&mut self) {
        let mut samples = Vec::with_capacity(self.pixel_count + 1);
        for i in 0..=self.pixel_count {
            let angle = self.view_angle_rad + self.field_of_view_rad / 2.0
                - i as f64 * self.angular_step_rad;
            samples.push(self.ray_length(angle));
        }
        self.ray_samples_km = samples;
    }

    fn clear_flags(&mut self) {
        self.fov_out_of_range = false;
        self.view_angle_out_of_range = false;
    }
}

fn validate_altitude(altitude_km: f64) -> Result<(), GeometryError> {
    if !altitude_km.is_finite() || altitude_km <= 0.0 {
        return Err(GeometryError::InvalidConfiguration(format!(
            "altitude must be positive and finite, got {altitude_km}"
        )));
    }
    Ok(())
}

fn validate_field_of_view(field_of_view_rad: f64) -> Result<(), GeometryError> {
    if !field_of_view_rad.is_finite() || field_of_view_rad < 0.0 {
        return Err(GeometryError::InvalidConfiguration(format!(
            "field of view must be non-negative and finite, got {field_of_view_rad}"
        )));
    }
    Ok(())
}

fn validate_view_angle(view_angle_rad: f64) -> Result<(), GeometryError> {
    if !view_angle_rad.is_finite() {
        return Err(GeometryError::InvalidConfiguration(format!(
            "view angle must be finite, got {view_angle_rad}"
        )));
    }
    Ok(())
}

fn validate_body_radius(body_radius_km: f64) -> Result<(), GeometryError> {
    if !body_radius_km.is_finite() || body_radius_km <= 0.0 {
        return Err(GeometryError::InvalidConfiguration(format!(
            "body radius must be positive and finite, got {body_radius_km}"
        )));
    }
    Ok(())
}

fn validate_pixel_count(pixel_count: usize) -> Result<(), GeometryError> {
    if pixel_count < 1 {
        return Err(GeometryError::InvalidConfiguration(format!(
            "pixel count must be at least 1, got {pixel_count}"
        )));
    }
    Ok(())
}
