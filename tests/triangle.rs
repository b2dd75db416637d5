use std::f64::consts::PI;

use orbit_pixel_calculator::geometry::triangle::{law_of_cosines, sine_law_angle, sine_law_side};

#[test]
fn sine_law_angle_recovers_right_triangle_angles() {
    // 3-4-5 right triangle, right angle opposite the hypotenuse.
    let angle_opposite_3 = sine_law_angle(5.0, 3.0, PI / 2.0);
    let angle_opposite_4 = sine_law_angle(5.0, 4.0, PI / 2.0);

    assert!((angle_opposite_3 - 0.6_f64.asin()).abs() < 1e-15);
    assert!((angle_opposite_4 - 0.8_f64.asin()).abs() < 1e-15);
    assert!((angle_opposite_3 + angle_opposite_4 + PI / 2.0 - PI).abs() < 1e-12);
}

#[test]
fn sine_law_side_matches_equilateral_and_right_triangles() {
    // Equilateral: all angles pi/3, all sides equal.
    let side = sine_law_side(PI / 3.0, PI / 3.0, 2.0);
    assert!((side - 2.0).abs() < 1e-12);

    // 3-4-5: side opposite the right angle from the side opposite asin(0.6).
    let hypotenuse = sine_law_side(0.6_f64.asin(), PI / 2.0, 3.0);
    assert!((hypotenuse - 5.0).abs() < 1e-12);
}

#[test]
fn law_of_cosines_covers_right_and_degenerate_angles() {
    // Right angle reduces to Pythagoras.
    assert!((law_of_cosines(3.0, 4.0, PI / 2.0) - 5.0).abs() < 1e-12);
    // Zero enclosed angle collapses to the side difference.
    assert!((law_of_cosines(7.0, 4.0, 0.0) - 3.0).abs() < 1e-12);
    // Straight angle stretches to the side sum.
    assert!((law_of_cosines(7.0, 4.0, PI) - 11.0).abs() < 1e-12);
}

#[test]
fn sine_law_angle_propagates_nan_outside_asin_domain() {
    // side_b * sin(angle_a) / side_a = 2 > 1: documented precondition
    // violation, expressed as NaN rather than a panic.
    let angle = sine_law_angle(1.0, 2.0, PI / 2.0);
    assert!(angle.is_nan());
}
