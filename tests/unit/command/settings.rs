use super::*;

#[test]
fn defaults_are_valid() {
    let s = EncodeSettings::default();
    s.validate().unwrap();
    assert_eq!(s.program, "ffmpeg");
    assert_eq!(s.clip_preview_secs, 2);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let s: EncodeSettings =
        serde_json::from_str(r#"{ "program": "/opt/ffmpeg/bin/ffmpeg", "video_bitrate": "4M" }"#)
            .unwrap();
    assert_eq!(s.program, "/opt/ffmpeg/bin/ffmpeg");
    assert_eq!(s.video_bitrate, "4M");
    assert_eq!(s.audio_bitrate, "192k");
}

#[test]
fn validate_rejects_blank_and_zero() {
    let s = EncodeSettings {
        export_preset: "  ".into(),
        ..EncodeSettings::default()
    };
    assert!(matches!(s.validate(), Err(CompileError::Validation(_))));

    let s = EncodeSettings {
        clip_preview_secs: 0,
        ..EncodeSettings::default()
    };
    assert!(s.validate().is_err());
}
