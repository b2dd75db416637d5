//! Triangle-solving primitives shared by the geometry engine.
//!
//! All three functions assume a well-formed, non-degenerate triangle. When
//! the argument handed to `asin` falls outside [-1, 1] the result is NaN;
//! callers must stay inside the geometrically valid domain (the engine's
//! validity bounds guarantee this for every internal call site).

/// Law of sines, case 1: two sides and one non-enclosed angle are known.
/// Returns the angle opposite `side_b`.
pub fn sine_law_angle(side_a: f64, side_b: f64, angle_a: f64) -> f64 {
    (side_b * angle_a.sin() / side_a).asin()
}

/// Law of sines, case 2: two angles and one side are known.
/// Returns the side opposite `angle_b`.
pub fn sine_law_side(angle_a: f64, angle_b: f64, side_a: f64) -> f64 {
    side_a * angle_b.sin() / angle_a.sin()
}

/// Law of cosines: two sides and the enclosed angle are known.
/// Returns the third side.
pub fn law_of_cosines(side_a: f64, side_b: f64, angle: f64) -> f64 {
    (side_a * side_a + side_b * side_b - 2.0 * side_a * side_b * angle.cos()).sqrt()
}
