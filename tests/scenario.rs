use std::fs;

use orbit_pixel_calculator::config::load_scenarios;

#[test]
fn toml_scenario_loads_with_defaulted_radius() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("leo.toml");
    fs::write(
        &path,
        r#"
name = "LEO 550"
altitude_km = 550.0
field_of_view_deg = 18.0
view_angle_deg = 15.0
pixel_count = 640
"#,
    )
    .expect("write scenario");

    let scenarios = load_scenarios(&path).expect("load toml scenario");
    assert_eq!(scenarios.len(), 1);
    let scenario = &scenarios[0];
    assert_eq!(scenario.name, "LEO 550");
    assert_eq!(scenario.altitude_km, 550.0);
    assert_eq!(scenario.pixel_count, 640);
    // body_radius_km omitted: falls back to the Earth radius.
    assert_eq!(scenario.body_radius_km, 6371.0);
}

#[test]
fn yaml_catalog_loads_multiple_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    fs::write(
        &path,
        r#"
- name: "LEO 550"
  altitude_km: 550.0
  field_of_view_deg: 18.0
  view_angle_deg: 15.0
  body_radius_km: 6371.0
  pixel_count: 640
- name: "Lunar mapper"
  altitude_km: 100.0
  field_of_view_deg: 12.0
  view_angle_deg: 0.0
  body_radius_km: 1737.4
  pixel_count: 256
"#,
    )
    .expect("write catalog");

    let scenarios = load_scenarios(&path).expect("load yaml catalog");
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[1].name, "Lunar mapper");
    assert_eq!(scenarios[1].body_radius_km, 1737.4);
}

#[test]
fn directory_of_toml_files_loads_in_sorted_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b_second.toml"),
        "name = \"Second\"\naltitude_km = 2000.0\nfield_of_view_deg = 10.0\nview_angle_deg = 0.5\npixel_count = 1024\n",
    )
    .expect("write second");
    fs::write(
        dir.path().join("a_first.toml"),
        "name = \"First\"\naltitude_km = 550.0\nfield_of_view_deg = 18.0\nview_angle_deg = 15.0\npixel_count = 640\n",
    )
    .expect("write first");
    // Non-TOML entries are ignored.
    fs::write(dir.path().join("notes.txt"), "ignore me").expect("write notes");

    let scenarios = load_scenarios(dir.path()).expect("load scenario dir");
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].name, "First");
    assert_eq!(scenarios[1].name, "Second");
}

#[test]
fn missing_manifest_reports_an_io_error() {
    let err = load_scenarios("configs/does_not_exist.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read scenario"));
}
