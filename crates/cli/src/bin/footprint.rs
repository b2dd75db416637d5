use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use orbit_pixel_calculator::config::{ScenarioConfig, load_scenarios};
use orbit_pixel_calculator::constants;
use orbit_pixel_calculator::export::{AngleUnit, report, summary};
use orbit_pixel_calculator::geometry::PixelGeometry;
use orbit_pixel_calculator::units;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Per-pixel ground footprint calculator for an orbiting camera"
)]
struct Cli {
    /// Scenario manifest (YAML file, TOML file, or directory of TOML files)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Scenario name to select when the manifest holds several records
    #[arg(long)]
    name: Option<String>,

    /// Platform altitude above the surface in km
    #[arg(long, default_value_t = constants::DEFAULT_ALTITUDE_KM)]
    altitude_km: f64,

    /// Total field of view in degrees
    #[arg(long, default_value_t = constants::DEFAULT_FIELD_OF_VIEW_DEG)]
    fov_deg: f64,

    /// Pointing offset from nadir in degrees (signed)
    #[arg(long, default_value_t = constants::DEFAULT_VIEW_ANGLE_DEG, allow_negative_numbers = true)]
    view_angle_deg: f64,

    /// Body radius in km
    #[arg(long, default_value_t = constants::EARTH_RADIUS_KM)]
    radius_km: f64,

    /// Number of pixels across the field of view
    #[arg(long, default_value_t = constants::DEFAULT_PIXEL_COUNT)]
    pixels: usize,

    /// Angle unit for the report table
    #[arg(long, value_enum, default_value_t = AngleArg::Deg)]
    angle_unit: AngleArg,

    /// Report destination (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Optional JSON summary sidecar
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum AngleArg {
    Rad,
    Deg,
    Grad,
}

impl From<AngleArg> for AngleUnit {
    fn from(value: AngleArg) -> Self {
        match value {
            AngleArg::Rad => AngleUnit::Radians,
            AngleArg::Deg => AngleUnit::Degrees,
            AngleArg::Grad => AngleUnit::Gradians,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (scenario_name, altitude_km, fov_deg, view_angle_deg, radius_km, pixels) =
        match &cli.scenario {
            Some(path) => {
                let scenarios = load_scenarios(path)?;
                let scenario = select_scenario(&scenarios, cli.name.as_deref())?;
                (
                    scenario.name.clone(),
                    scenario.altitude_km,
                    scenario.field_of_view_deg,
                    scenario.view_angle_deg,
                    scenario.body_radius_km,
                    scenario.pixel_count,
                )
            }
            None => (
                "command line".to_string(),
                cli.altitude_km,
                cli.fov_deg,
                cli.view_angle_deg,
                cli.radius_km,
                cli.pixels,
            ),
        };

    let mut geometry = PixelGeometry::new(
        altitude_km,
        units::deg_to_rad(fov_deg),
        units::deg_to_rad(view_angle_deg),
        radius_km,
        pixels,
    )?;

    geometry.compute_line_of_sight();
    geometry.compute_footprint_sizes();
    if geometry.fov_out_of_range() || geometry.view_angle_out_of_range() {
        anyhow::bail!("{}", geometry.error_message());
    }

    let footprint_span_km: f64 = geometry.pixel_sizes().iter().sum();

    println!("=== Pixel Footprint ===");
    println!("Scenario       : {}", scenario_name);
    println!(
        "Platform       : altitude = {:.1} km, body radius = {:.1} km",
        altitude_km, radius_km
    );
    println!(
        "Field of view  : {:.4} deg (max {:.4} deg)",
        fov_deg,
        units::rad_to_deg(geometry.max_field_of_view())
    );
    println!(
        "View angle     : {:.4} deg (max {:.4} deg)",
        view_angle_deg,
        units::rad_to_deg(geometry.max_view_angle())
    );
    println!(
        "Footprint      : {} pixels spanning {:.3} km on the ground",
        pixels, footprint_span_km
    );

    let mut writer = report::writer_for_path(&cli.output)?;
    report::write_report(
        writer.as_mut(),
        AngleUnit::from(cli.angle_unit),
        geometry.angles(),
        geometry.line_of_sight(),
        geometry.pixel_sizes(),
    )?;
    writer.flush()?;

    if let Some(json_path) = &cli.json {
        summary::write_summary(
            json_path,
            &summary::Summary {
                scenario: &scenario_name,
                altitude_km,
                field_of_view_rad: geometry.field_of_view(),
                view_angle_rad: geometry.view_angle(),
                body_radius_km: radius_km,
                pixel_count: pixels,
                max_field_of_view_rad: geometry.max_field_of_view(),
                max_view_angle_rad: geometry.max_view_angle(),
                angles_rad: geometry.angles(),
                line_of_sight_km: geometry.line_of_sight(),
                pixel_size_km: geometry.pixel_sizes(),
            },
        )?;
    }

    Ok(())
}

fn select_scenario<'a>(
    scenarios: &'a [ScenarioConfig],
    name: Option<&str>,
) -> anyhow::Result<&'a ScenarioConfig> {
    match name {
        Some(wanted) => {
            let upper = wanted.to_uppercase();
            scenarios
                .iter()
                .find(|s| s.name.to_uppercase() == upper)
                .ok_or_else(|| anyhow::anyhow!("Scenario '{}' not found in manifest", wanted))
        }
        None => scenarios
            .first()
            .ok_or_else(|| anyhow::anyhow!("Scenario manifest is empty")),
    }
}
