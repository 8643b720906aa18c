use crate::{Coord, CoreError, Location, LocationStyle};

use googletest::prelude::*;

fn square() -> Vec<Coord> {
    vec![
        Coord::new(51.50, -0.12),
        Coord::new(51.50, -0.11),
        Coord::new(51.49, -0.11),
        Coord::new(51.49, -0.12),
    ]
}

#[test]
fn given_named_location_with_paths_when_validated_then_ok() {
    let location = Location::new("Main Stage".to_string(), square());

    assert_that!(location.validate(), ok(anything()));
}

#[test]
fn given_blank_name_when_validated_then_error_names_field() {
    let location = Location::new("   ".to_string(), square());

    let result = location.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "name"
    ));
}

#[test]
fn given_no_paths_when_validated_then_error_names_field() {
    let location = Location::new("Main Stage".to_string(), Vec::new());

    let result = location.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "paths"
    ));
}

#[test]
fn given_partial_style_when_applied_then_only_supplied_fields_change() {
    let mut location = Location::new("Main Stage".to_string(), square());
    location.fill_color = Some("#000000".to_string());
    location.stroke_weight = Some(2.0);

    location.apply_style(&LocationStyle {
        stroke_color: Some("#ff0000".to_string()),
        fill_opacity: Some(0.35),
        ..LocationStyle::default()
    });

    assert_eq!(location.stroke_color.as_deref(), Some("#ff0000"));
    assert_eq!(location.fill_opacity, Some(0.35));
    assert_eq!(location.fill_color.as_deref(), Some("#000000"));
    assert_eq!(location.stroke_weight, Some(2.0));
    assert_that!(location.stroke_opacity, none());
}
