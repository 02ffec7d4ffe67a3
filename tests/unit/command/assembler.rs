use super::*;
use chrono::TimeZone;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn request(mode: InvocationMode, output: &str) -> InvocationRequest {
    InvocationRequest {
        mode,
        input: PathBuf::from("in.mp4"),
        output: PathBuf::from(output),
        seek_secs: 5.0,
    }
}

fn compile_with(
    params: &ParameterSet,
    media: &MediaInfo,
    req: &InvocationRequest,
) -> CompileResult<CommandSpec> {
    let settings = EncodeSettings::default();
    let mut rng = StdRng::seed_from_u64(9);
    CommandAssembler::new(params, media, &settings).compile(req, &mut rng, now())
}

fn args(params: &ParameterSet, req: &InvocationRequest) -> Vec<String> {
    compile_with(params, &MediaInfo::fallback(), req)
        .unwrap()
        .to_args()
}

#[test]
fn frame_capture_seeks_and_takes_one_frame() {
    let a = args(
        &ParameterSet::default(),
        &request(InvocationMode::FrameCapture, "frame.png"),
    );
    assert_eq!(
        a,
        ["ffmpeg", "-y", "-ss", "5.0", "-i", "in.mp4", "-frames:v", "1", "frame.png"]
    );
}

#[test]
fn frame_capture_never_gets_audio_filter() {
    let p = ParameterSet {
        speed: 2.0,
        ..ParameterSet::default()
    };
    let a = args(&p, &request(InvocationMode::FrameCapture, "frame.png"));
    assert!(a.contains(&"setpts=0.5*PTS".to_string()));
    assert!(!a.contains(&"-af".to_string()));
}

#[test]
fn clip_preview_caps_duration_and_uses_fast_preset() {
    let p = ParameterSet {
        speed: 2.0,
        ..ParameterSet::default()
    };
    let mut req = request(InvocationMode::ClipPreview, "clip.mp4");
    req.seek_secs = 1.5;
    assert_eq!(
        args(&p, &req),
        [
            "ffmpeg",
            "-y",
            "-ss",
            "1.5",
            "-i",
            "in.mp4",
            "-vf",
            "setpts=0.5*PTS",
            "-t",
            "2",
            "-preset",
            "ultrafast",
            "-af",
            "atempo=2.000000",
            "clip.mp4",
        ]
    );
}

#[test]
fn full_export_adds_bitrates_and_metadata() {
    let a = args(
        &ParameterSet::default(),
        &request(InvocationMode::FullExport, "out.mp4"),
    );
    assert_eq!(
        &a[..9],
        ["ffmpeg", "-y", "-i", "in.mp4", "-b:v", "8M", "-preset", "faster", "-b:a"]
    );
    assert_eq!(a[9], "192k");
    assert_eq!(&a[10..14], ["-map_metadata", "-1", "-map_metadata", "-1"]);
    assert_eq!(a[14], "-metadata");
    assert!(a[15].starts_with("encoder="));
    assert!(a[17].starts_with("software="));
    assert!(a[19].starts_with("creation_time="));
    assert_eq!(a.last().map(String::as_str), Some("out.mp4"));
    assert_eq!(a.len(), 21);
}

#[test]
fn full_export_without_metadata_flags() {
    let p = ParameterSet {
        clear_metadata: false,
        random_metadata: false,
        ..ParameterSet::default()
    };
    let a = args(&p, &request(InvocationMode::FullExport, "out.mp4"));
    assert!(!a.iter().any(|x| x.starts_with("-map_metadata") || x == "-metadata"));

    let p = ParameterSet {
        clear_metadata: false,
        random_metadata: true,
        ..ParameterSet::default()
    };
    let a = args(&p, &request(InvocationMode::FullExport, "out.mp4"));
    assert_eq!(a.iter().filter(|x| *x == "-map_metadata").count(), 1);
}

#[test]
fn canvas_uses_complex_graph_and_maps_audio() {
    let p = ParameterSet {
        canvas_enabled: true,
        ..ParameterSet::default()
    };
    let a = args(&p, &request(InvocationMode::ClipPreview, "clip.mp4"));
    let i = a.iter().position(|x| x == "-filter_complex").unwrap();
    assert!(a[i + 1].starts_with("[0:v]split=2[bg][fg];"));
    assert_eq!(&a[i + 2..i + 6], ["-map", "[vignette_out]", "-map", "0:a?"]);
    assert!(!a.contains(&"-vf".to_string()));

    let a = args(&p, &request(InvocationMode::FrameCapture, "frame.png"));
    assert!(a.contains(&"-filter_complex".to_string()));
    assert!(!a.contains(&"0:a?".to_string()));
}

#[test]
fn canvas_without_dimensions_falls_back_to_forced_chain() {
    let p = ParameterSet {
        canvas_enabled: true,
        crop_w: 640,
        crop_h: 360,
        vignette: 0.5,
        ..ParameterSet::default()
    };
    let spec = compile_with(
        &p,
        &MediaInfo::unknown_dimensions(),
        &request(InvocationMode::ClipPreview, "clip.mp4"),
    )
    .unwrap();
    assert!(!spec.map_audio);
    let a = spec.to_args();
    assert!(!a.contains(&"-filter_complex".to_string()));
    let i = a.iter().position(|x| x == "-vf").unwrap();
    assert_eq!(a[i + 1], "crop=640:360:0:0,vignette=PI/8.0");
}

#[test]
fn canvas_graph_errors_abort_compile() {
    let p = ParameterSet {
        canvas_enabled: true,
        ..ParameterSet::default()
    };
    let media = MediaInfo {
        width: 2,
        height: 2,
        ..MediaInfo::fallback()
    };
    assert!(matches!(
        compile_with(&p, &media, &request(InvocationMode::FullExport, "o.mp4")),
        Err(CompileError::GraphConstruction(_))
    ));
}

#[test]
fn invalid_seek_and_settings_are_rejected() {
    let mut req = request(InvocationMode::ClipPreview, "clip.mp4");
    req.seek_secs = -1.0;
    assert!(matches!(
        compile_with(&ParameterSet::default(), &MediaInfo::fallback(), &req),
        Err(CompileError::Validation(_))
    ));

    let mut req = request(InvocationMode::FullExport, "out.mp4");
    req.seek_secs = f64::NAN;
    assert!(compile_with(&ParameterSet::default(), &MediaInfo::fallback(), &req).is_ok());

    let settings = EncodeSettings {
        program: String::new(),
        ..EncodeSettings::default()
    };
    let media = MediaInfo::fallback();
    let mut rng = StdRng::seed_from_u64(0);
    let res = CommandAssembler::new(&ParameterSet::default(), &media, &settings).compile(
        &request(InvocationMode::FrameCapture, "f.png"),
        &mut rng,
        now(),
    );
    assert!(res.is_err());
}

#[test]
fn compiling_twice_is_identical() {
    let p = ParameterSet {
        canvas_enabled: true,
        canvas_corner_radius: 10,
        audio_pitch_enabled: true,
        audio_pitch: 1.03,
        brightness: -0.2,
        ..ParameterSet::default()
    };
    let req = request(InvocationMode::FullExport, "out.mp4");
    assert_eq!(args(&p, &req), args(&p, &req));
}

#[test]
fn shell_line_quotes_special_arguments() {
    let p = ParameterSet {
        canvas_enabled: true,
        canvas_vignette: 0.0,
        ..ParameterSet::default()
    };
    let mut req = request(InvocationMode::FrameCapture, "my frame.png");
    req.seek_secs = 0.0;
    let line = compile_with(&p, &MediaInfo::fallback(), &req)
        .unwrap()
        .to_shell_line();
    assert!(line.starts_with("ffmpeg -y -ss 0.0 -i in.mp4 -filter_complex '[0:v]split=2"));
    assert!(line.contains("-map '[composed]'"));
    assert!(line.ends_with("'my frame.png'"));
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
}
