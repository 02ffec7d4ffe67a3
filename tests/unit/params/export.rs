use super::*;

#[test]
fn export_rounds_per_field() {
    let p = ParameterSet {
        canvas_enabled: true,
        canvas_scale: 0.876_54,
        canvas_corner_smooth: 1.234,
        canvas_bg_zoom: 1.123_456,
        canvas_vignette: 0.333,
        audio_pitch_enabled: true,
        audio_pitch: 1.012_345,
        brightness: 0.012_34,
        hue: 12.345,
        ..ParameterSet::default()
    };
    let e = ExportedParams::from_params(&p);
    assert_eq!(e.canvas_scale, 0.877);
    assert_eq!(e.canvas_corner_smooth, 1.23);
    assert_eq!(e.canvas_bg_zoom, 1.123);
    assert_eq!(e.canvas_vignette, 0.33);
    assert_eq!(e.audio_pitch, 1.0123);
    assert_eq!(e.brightness, 0.012);
    assert_eq!(e.hue, 12.3);
}

#[test]
fn export_has_fixed_key_set() {
    let json = serde_json::to_value(ExportedParams::from_params(&ParameterSet::default())).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    let mut expected = vec![
        "audio_pitch",
        "audio_pitch_enabled",
        "brightness",
        "canvas_bg_zoom",
        "canvas_blur",
        "canvas_corner_radius",
        "canvas_corner_smooth",
        "canvas_enabled",
        "canvas_noise",
        "canvas_scale",
        "canvas_vignette",
        "clear_metadata",
        "contrast",
        "gamma",
        "hue",
        "random_metadata",
        "saturation",
    ];
    expected.sort_unstable();
    let mut keys = keys;
    keys.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn exported_snapshot_reapplies() {
    let source = ParameterSet {
        canvas_enabled: true,
        canvas_noise: 8,
        audio_pitch_enabled: true,
        audio_pitch: 0.97,
        saturation: 1.05,
        ..ParameterSet::default()
    };
    let exported = ExportedParams::from_params(&source);

    let mut target = ParameterSet {
        custom_filter: "sobel".to_string(),
        ..ParameterSet::default()
    };
    exported.apply_to(&mut target).unwrap();

    assert!(target.canvas_enabled);
    assert_eq!(target.canvas_noise, 8);
    assert_eq!(target.audio_pitch, 0.97);
    assert_eq!(target.saturation, 1.05);
    assert_eq!(target.custom_filter, "sobel");
    assert!(exported.to_json_pretty().unwrap().contains("\"canvas_noise\": 8"));
}
