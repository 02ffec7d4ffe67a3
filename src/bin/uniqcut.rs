use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "uniqcut", version)]
struct Cli {
    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ffmpeg argument vector for one invocation.
    Compile(CompileArgs),
    /// Print the flat parameter export JSON.
    ExportParams(ExportArgs),
    /// Apply a randomized uniquify preset and print the parameter set.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Invocation mode.
    #[arg(long, value_enum)]
    mode: ModeChoice,

    /// Source media path.
    #[arg(long)]
    input: PathBuf,

    /// Destination path.
    #[arg(long)]
    output: PathBuf,

    /// Parameter JSON (partial sets and export files both work).
    #[arg(long)]
    params: Option<PathBuf>,

    /// Probe JSON: `{width,height,frame_rate,duration,sample_rate}` or raw `ffprobe -of json`.
    #[arg(long)]
    probe: Option<PathBuf>,

    /// Encode settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seek offset in seconds (frame and clip modes).
    #[arg(long, default_value_t = 0.0)]
    seek: f64,

    /// Seed for metadata randomization.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Lines)]
    format: FormatChoice,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Parameter JSON; defaults when omitted.
    #[arg(long)]
    params: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset strength.
    #[arg(long, value_enum)]
    level: LevelChoice,

    /// Parameter JSON to start from; defaults when omitted.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Seed for the preset jitter.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Frame,
    Clip,
    Export,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Lines,
    Json,
    Shell,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelChoice {
    Light,
    Medium,
    Heavy,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::ExportParams(args) => cmd_export(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn read_json(path: &Path, what: &str) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn load_params(path: Option<&Path>) -> anyhow::Result<uniqcut::ParameterSet> {
    let mut params = uniqcut::ParameterSet::default();
    if let Some(path) = path {
        let value = read_json(path, "parameters")?;
        params
            .apply_json(&value)
            .with_context(|| format!("apply parameters from '{}'", path.display()))?;
    }
    Ok(params)
}

fn load_media(path: Option<&Path>) -> anyhow::Result<uniqcut::MediaInfo> {
    let Some(path) = path else {
        return Ok(uniqcut::MediaInfo::fallback());
    };
    let value = read_json(path, "probe")?;
    let report = if value.get("streams").is_some() {
        uniqcut::ProbeReport::from_ffprobe_json(&value)?
    } else {
        serde_json::from_value(value).context("probe JSON has an unexpected shape")?
    };
    Ok(uniqcut::MediaInfo::from_probe(&report))
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<uniqcut::EncodeSettings> {
    match path {
        Some(path) => Ok(serde_json::from_value(read_json(path, "settings")?)
            .context("settings JSON has an unexpected shape")?),
        None => Ok(uniqcut::EncodeSettings::default()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let params = load_params(args.params.as_deref())?;
    let media = load_media(args.probe.as_deref())?;
    let settings = load_settings(args.settings.as_deref())?;

    let mode = match args.mode {
        ModeChoice::Frame => uniqcut::InvocationMode::FrameCapture,
        ModeChoice::Clip => uniqcut::InvocationMode::ClipPreview,
        ModeChoice::Export => uniqcut::InvocationMode::FullExport,
    };
    let request = uniqcut::InvocationRequest {
        mode,
        input: args.input,
        output: args.output,
        seek_secs: args.seek,
    };

    let mut rng = make_rng(args.seed);
    let spec = uniqcut::CommandAssembler::new(&params, &media, &settings).compile(
        &request,
        &mut rng,
        chrono::Utc::now(),
    )?;

    match args.format {
        FormatChoice::Lines => {
            for arg in spec.to_args() {
                println!("{arg}");
            }
        }
        FormatChoice::Json => println!("{}", serde_json::to_string_pretty(&spec.to_args())?),
        FormatChoice::Shell => println!("{}", spec.to_shell_line()),
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let params = load_params(args.params.as_deref())?;
    println!(
        "{}",
        uniqcut::ExportedParams::from_params(&params).to_json_pretty()?
    );
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let mut params = load_params(args.params.as_deref())?;
    let level = match args.level {
        LevelChoice::Light => uniqcut::UniquifyLevel::Light,
        LevelChoice::Medium => uniqcut::UniquifyLevel::Medium,
        LevelChoice::Heavy => uniqcut::UniquifyLevel::Heavy,
    };
    let mut rng = make_rng(args.seed);
    uniqcut::apply_uniquify_preset(&mut params, level, &mut rng);
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}
