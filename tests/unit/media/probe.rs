use super::*;

#[test]
fn empty_report_uses_fallback() {
    let info = MediaInfo::from_probe(&ProbeReport::default());
    assert_eq!(info, MediaInfo::fallback());
    assert_eq!(info.width, 1920);
    assert_eq!(info.height, 1080);
    assert_eq!(info.frame_rate, FrameRate { num: 30, den: 1 });
    assert_eq!(info.duration_secs, 10.0);
    assert_eq!(info.sample_rate, 44_100);
}

#[test]
fn report_accepts_text_and_numeric_frame_rate() {
    let text: ProbeReport = serde_json::from_value(serde_json::json!({
        "width": 1280,
        "height": 720,
        "frame_rate": "25/1",
        "duration": 3.5,
        "sample_rate": 48000
    }))
    .unwrap();
    let info = MediaInfo::from_probe(&text);
    assert_eq!((info.width, info.height), (1280, 720));
    assert_eq!(info.frame_rate, FrameRate { num: 25, den: 1 });
    assert_eq!(info.duration_secs, 3.5);
    assert_eq!(info.sample_rate, 48_000);

    let numeric: ProbeReport =
        serde_json::from_value(serde_json::json!({ "frame_rate": 59.94 })).unwrap();
    let info = MediaInfo::from_probe(&numeric);
    assert_eq!(info.frame_rate, FrameRate { num: 2997, den: 50 });
}

#[test]
fn invalid_fields_fall_back_individually() {
    let report = ProbeReport {
        width: Some(0),
        height: Some(720),
        frame_rate: Some(ProbeFrameRate::Text("n/a".to_string())),
        duration: Some(f64::NAN),
        sample_rate: Some(0),
    };
    let info = MediaInfo::from_probe(&report);
    assert_eq!(info.width, 1920);
    assert_eq!(info.height, 720);
    assert_eq!(info.frame_rate, FrameRate { num: 30, den: 1 });
    assert_eq!(info.duration_secs, 10.0);
    assert_eq!(info.sample_rate, 44_100);
}

#[test]
fn ffprobe_layout_is_understood() {
    let raw = serde_json::json!({
        "streams": [
            { "codec_type": "audio", "sample_rate": "48000" },
            {
                "codec_type": "video",
                "width": 1080,
                "height": 1920,
                "r_frame_rate": "30000/1001",
                "duration": "12.000000"
            }
        ],
        "format": { "duration": "12.512000" }
    });
    let report = ProbeReport::from_ffprobe_json(&raw).unwrap();
    assert_eq!(report.width, Some(1080));
    assert_eq!(report.height, Some(1920));
    assert_eq!(report.duration, Some(12.512));
    assert_eq!(report.sample_rate, Some(48_000));

    let info = MediaInfo::from_probe(&report);
    assert_eq!(info.frame_rate, FrameRate { num: 30000, den: 1001 });
}

#[test]
fn ffprobe_stream_duration_used_without_format() {
    let raw = serde_json::json!({
        "streams": [{ "width": 640, "height": 480, "duration": "4.0" }]
    });
    let report = ProbeReport::from_ffprobe_json(&raw).unwrap();
    assert_eq!(report.width, Some(640));
    assert_eq!(report.duration, Some(4.0));
    assert_eq!(report.sample_rate, None);
}

#[test]
fn unknown_dimensions_is_not_usable_for_canvas() {
    assert!(!MediaInfo::unknown_dimensions().has_dimensions());
    assert!(MediaInfo::fallback().has_dimensions());
}
