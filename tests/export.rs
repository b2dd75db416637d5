use std::f64::consts::PI;

use orbit_pixel_calculator::export::{AngleUnit, report};

fn render(unit: AngleUnit, angles: &[f64], los: &[f64], sizes: &[f64]) -> String {
    let mut buffer = Vec::new();
    report::write_report(&mut buffer, unit, angles, los, sizes).expect("write report");
    String::from_utf8(buffer).expect("utf8 report")
}

#[test]
fn report_header_names_the_angle_unit() {
    let text = render(AngleUnit::Degrees, &[], &[], &[]);
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "pixel \t angle (deg) \t LoS (km) \t Size (m)"
    );
    assert!(lines.next().unwrap().starts_with("----"));
    assert!(lines.next().is_none());

    assert!(render(AngleUnit::Radians, &[], &[], &[]).contains("angle (rad)"));
    assert!(render(AngleUnit::Gradians, &[], &[], &[]).contains("angle (grad)"));
}

#[test]
fn rows_are_one_based_and_converted() {
    let angles = [PI / 4.0, -PI / 4.0];
    let los = [550.1234, 560.5];
    let sizes_km = [0.0005, 0.00025];

    let text = render(AngleUnit::Degrees, &angles, &los, &sizes_km);
    let rows: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(rows.len(), 2);

    // 1-based pixel index, angle in degrees, LoS in km, size in metres.
    assert_eq!(rows[0], "1 \t 45.0000 \t 550.1234 \t 0.50");
    assert_eq!(rows[1], "2 \t -45.0000 \t 560.5000 \t 0.25");
}

#[test]
fn gradian_conversion_uses_200_per_half_turn() {
    let text = render(AngleUnit::Gradians, &[PI / 4.0], &[600.0], &[0.001]);
    let row = text.lines().nth(2).unwrap();
    assert_eq!(row, "1 \t 50.0000 \t 600.0000 \t 1.00");
}

#[test]
fn radians_pass_through_unchanged() {
    assert_eq!(AngleUnit::Radians.convert(1.25), 1.25);
    assert!((AngleUnit::Degrees.convert(PI) - 180.0).abs() < 1e-12);
    assert!((AngleUnit::Gradians.convert(PI) - 200.0).abs() < 1e-12);
}
