use super::*;

#[test]
fn bounds_table_matches_field_order() {
    let mut p = ParameterSet::default();
    let floats: Vec<&str> = p.float_fields_mut().iter().map(|(n, _)| *n).collect();
    let ints: Vec<&str> = p.int_fields_mut().iter().map(|(n, _)| *n).collect();
    let table: Vec<&str> = BOUNDED_PARAMS.iter().map(|b| b.name).collect();
    assert_eq!([floats, ints].concat(), table);
}

#[test]
fn defaults_sit_inside_their_bounds() {
    let defaults = serde_json::to_value(ParameterSet::default()).unwrap();
    for b in BOUNDED_PARAMS {
        let v = defaults[b.name].as_f64().unwrap();
        assert_eq!(v, b.default, "{}", b.name);
        assert!(b.min <= v && v <= b.max, "{}", b.name);
    }
}

#[test]
fn sanitized_clamps_and_repairs() {
    let p = ParameterSet {
        brightness: 3.0,
        contrast: -1.0,
        speed: f64::NAN,
        canvas_scale: 2.0,
        canvas_blur: 500,
        canvas_noise: 31,
        rotation: -90,
        ..ParameterSet::default()
    };
    let s = p.sanitized();
    assert_eq!(s.brightness, 1.0);
    assert_eq!(s.contrast, 0.0);
    assert_eq!(s.speed, 1.0);
    assert_eq!(s.canvas_scale, 0.95);
    assert_eq!(s.canvas_blur, 50);
    assert_eq!(s.canvas_noise, 30);
    assert_eq!(s.rotation, 270);
}

#[test]
fn sanitized_leaves_valid_sets_untouched() {
    let p = ParameterSet {
        brightness: 0.2,
        contrast: 1.1,
        crop_w: -4,
        ..ParameterSet::default()
    };
    assert_eq!(p.sanitized(), p);
}

#[test]
fn partial_json_takes_defaults() {
    let p: ParameterSet = serde_json::from_value(serde_json::json!({
        "brightness": 0.1,
        "eq_preset": "warm"
    }))
    .unwrap();
    assert_eq!(p.brightness, 0.1);
    assert_eq!(p.eq_preset, ColorPreset::Warm);
    assert_eq!(p.contrast, 1.0);
    assert!(p.clear_metadata);
    assert!(p.random_metadata);
}

#[test]
fn apply_json_updates_known_fields() {
    let mut p = ParameterSet::default();
    let applied = p
        .apply_json(&serde_json::json!({
            "canvas_enabled": true,
            "canvas_blur": 30,
            "audio_pitch": 1.02
        }))
        .unwrap();
    assert_eq!(applied.len(), 3);
    assert!(p.canvas_enabled);
    assert_eq!(p.canvas_blur, 30);
    assert_eq!(p.audio_pitch, 1.02);
}

#[test]
fn apply_json_tolerates_non_finite_untouched_fields() {
    let mut p = ParameterSet {
        gamma: f64::NAN,
        ..ParameterSet::default()
    };
    let applied = p
        .apply_json(&serde_json::json!({ "brightness": 0.1 }))
        .unwrap();
    assert_eq!(applied, ["brightness"]);
    assert_eq!(p.brightness, 0.1);
    assert_eq!(p.gamma, ParameterSet::default().gamma);
}

#[test]
fn apply_json_rejects_unknown_or_mistyped_without_mutation() {
    let mut p = ParameterSet::default();

    let err = p
        .apply_json(&serde_json::json!({ "brightness": 0.5, "sparkle": 1 }))
        .unwrap_err();
    assert!(matches!(err, CompileError::Validation(_)));
    assert_eq!(p, ParameterSet::default());

    let err = p
        .apply_json(&serde_json::json!({ "canvas_blur": "lots" }))
        .unwrap_err();
    assert!(matches!(err, CompileError::Validation(_)));
    assert_eq!(p, ParameterSet::default());

    assert!(p.apply_json(&serde_json::json!([1, 2])).is_err());
}
