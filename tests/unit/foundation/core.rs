use super::*;

#[test]
fn direction_flips_and_maps_progress() {
    assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
    assert_eq!(Direction::Reverse.flipped(), Direction::Forward);
    assert_eq!(Direction::Forward.drawn_fraction(0.25), 0.25);
    assert_eq!(Direction::Reverse.drawn_fraction(0.25), 0.75);
}

#[test]
fn stroke_offset_rounds_up() {
    assert_eq!(stroke_offset(100.0, 0.5), 50.0);
    assert_eq!(stroke_offset(10.0, 0.55), 5.0);
    assert_eq!(stroke_offset(10.0, 0.51), 5.0);
    assert_eq!(stroke_offset(10.0, 0.49), 6.0);
}

#[test]
fn stroke_offset_never_leaves_bounds() {
    assert_eq!(stroke_offset(100.0, 1.3), 0.0);
    assert_eq!(stroke_offset(100.0, -0.2), 100.0);
    assert_eq!(stroke_offset(0.0, 0.5), 0.0);
}

#[test]
fn shape_id_is_transparent_in_json() {
    let id = ShapeId::new("outline");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"outline\"");
    assert_eq!(id.to_string(), "outline");
}
