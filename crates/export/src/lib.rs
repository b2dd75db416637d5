//! Export helpers for the per-pixel report table and JSON summaries.
//!
//! The geometry engine always returns angles in radians and distances in
//! km; unit selection (rad/deg/grad for angles, metres for footprint
//! sizes) happens here, on the presentation side of the contract.

use orbit_core::units;

/// Angle unit selectable for exported reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Radians,
    Degrees,
    Gradians,
}

impl AngleUnit {
    /// Convert an angle in radians to this unit.
    pub fn convert(self, angle_rad: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle_rad,
            AngleUnit::Degrees => units::rad_to_deg(angle_rad),
            AngleUnit::Gradians => units::rad_to_grad(angle_rad),
        }
    }

    /// Short label used in column headers.
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "deg",
            AngleUnit::Gradians => "grad",
        }
    }
}

pub mod report {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use orbit_core::units::km_to_m;

    use super::AngleUnit;

    const RULE: &str = "-------------------------------------------------";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the report column header for the chosen angle unit.
    pub fn write_header(writer: &mut dyn Write, unit: AngleUnit) -> io::Result<()> {
        writeln!(
            writer,
            "pixel \t angle ({}) \t LoS (km) \t Size (m)",
            unit.label()
        )?;
        writeln!(writer, "{}", RULE)
    }

    /// One report row; `pixel` is 1-based, `angle` already converted,
    /// `size_m` already in metres.
    #[derive(Debug, Clone)]
    pub struct Row {
        pub pixel: usize,
        pub angle: f64,
        pub los_km: f64,
        pub size_m: f64,
    }

    impl Row {
        /// Serialize the row, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{} \t {:.4} \t {:.4} \t {:.2}",
                self.pixel, self.angle, self.los_km, self.size_m
            )
        }
    }

    /// Write the full per-pixel table from the engine's result slices.
    pub fn write_report(
        writer: &mut dyn Write,
        unit: AngleUnit,
        angles_rad: &[f64],
        line_of_sight_km: &[f64],
        pixel_sizes_km: &[f64],
    ) -> io::Result<()> {
        write_header(writer, unit)?;
        for (i, ((angle, los), size)) in angles_rad
            .iter()
            .zip(line_of_sight_km)
            .zip(pixel_sizes_km)
            .enumerate()
        {
            Row {
                pixel: i + 1,
                angle: unit.convert(*angle),
                los_km: *los,
                size_m: km_to_m(*size),
            }
            .write_to(writer)?;
        }
        Ok(())
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Configuration echo, derived bounds, and result vectors for a JSON
    /// sidecar next to the text report.
    #[derive(Debug, Serialize)]
    pub struct Summary<'a> {
        pub scenario: &'a str,
        pub altitude_km: f64,
        pub field_of_view_rad: f64,
        pub view_angle_rad: f64,
        pub body_radius_km: f64,
        pub pixel_count: usize,
        pub max_field_of_view_rad: f64,
        pub max_view_angle_rad: f64,
        pub angles_rad: &'a [f64],
        pub line_of_sight_km: &'a [f64],
        pub pixel_size_km: &'a [f64],
    }

    /// Write the JSON summary to the given path, creating parent directories.
    pub fn write_summary(path: &Path, summary: &Summary<'_>) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
