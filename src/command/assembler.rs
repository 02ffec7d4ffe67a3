use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::audio::tempo::AudioPitchTempoResolver;
use crate::command::settings::EncodeSettings;
use crate::filter::canvas::CanvasCompositor;
use crate::filter::chain::{ChainMode, FilterChainBuilder};
use crate::filter::expr::FilterExpression;
use crate::filter::graph::{FilterGraph, PadLabel};
use crate::foundation::core::fmt_num;
use crate::foundation::error::{CompileError, CompileResult};
use crate::media::info::MediaInfo;
use crate::metadata::randomizer::{MetadataDirective, MetadataRandomizer};
use crate::params::model::ParameterSet;

/// What the produced command is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// One still frame at the seek offset.
    FrameCapture,
    /// Short fast-encoded clip starting at the seek offset.
    ClipPreview,
    /// Whole file at export quality, with metadata directives.
    FullExport,
}

/// Input/output and seek offset for one compile call.
#[derive(Clone, Debug, PartialEq)]
pub struct InvocationRequest {
    /// Invocation mode.
    pub mode: InvocationMode,
    /// Source media path.
    pub input: PathBuf,
    /// Destination path; always the last argument.
    pub output: PathBuf,
    /// Seek offset in seconds (frame capture and clip preview only).
    pub seek_secs: f64,
}

/// Video processing attached to a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoFilter {
    /// No video filter.
    None,
    /// Simple chain passed with `-vf`.
    Chain(FilterExpression),
    /// Complex graph passed with `-filter_complex`, its output pad mapped with `-map`.
    Graph {
        /// Validated graph.
        graph: FilterGraph,
        /// Pad mapped as the video stream.
        output: PadLabel,
    },
}

/// A fully compiled transcoder invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandSpec {
    /// Executable.
    pub program: String,
    /// Mode the command was compiled for.
    pub mode: InvocationMode,
    /// Input seek, emitted before `-i`.
    pub seek_secs: Option<f64>,
    /// Source path.
    pub input: PathBuf,
    /// Video filter or graph.
    pub video: VideoFilter,
    /// Map the optional source audio (`-map 0:a?`); only with a graph.
    pub map_audio: bool,
    /// Mode-specific encoder flags, in order.
    pub options: Vec<(&'static str, String)>,
    /// Audio chain passed with `-af`.
    pub audio: Option<FilterExpression>,
    /// Metadata directives, in order.
    pub metadata: Vec<MetadataDirective>,
    /// Destination path.
    pub output: PathBuf,
}

impl CommandSpec {
    /// Ordered argument vector, starting with the program name.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.program.clone(), "-y".to_string()];
        if let Some(seek) = self.seek_secs {
            args.extend(["-ss".to_string(), fmt_num(seek)]);
        }
        args.extend(["-i".to_string(), self.input.to_string_lossy().into_owned()]);

        match &self.video {
            VideoFilter::None => {}
            VideoFilter::Chain(chain) => args.extend(["-vf".to_string(), chain.to_string()]),
            VideoFilter::Graph { graph, output } => {
                args.extend([
                    "-filter_complex".to_string(),
                    graph.to_string(),
                    "-map".to_string(),
                    output.to_string(),
                ]);
                if self.map_audio {
                    args.extend(["-map".to_string(), "0:a?".to_string()]);
                }
            }
        }

        for (flag, value) in &self.options {
            args.extend([flag.to_string(), value.clone()]);
        }
        if let Some(audio) = &self.audio {
            args.extend(["-af".to_string(), audio.to_string()]);
        }
        for directive in &self.metadata {
            args.extend(directive.to_args());
        }

        args.push(self.output.to_string_lossy().into_owned());
        args
    }

    /// Single line for display, POSIX-shell quoted where needed.
    pub fn to_shell_line(&self) -> String {
        self.to_args()
            .iter()
            .map(|a| shell_quote(a))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Composes video, audio and metadata compilation into one [`CommandSpec`].
#[derive(Clone, Debug)]
pub struct CommandAssembler<'a> {
    params: ParameterSet,
    media: &'a MediaInfo,
    settings: &'a EncodeSettings,
}

impl<'a> CommandAssembler<'a> {
    /// Assembler over a sanitized copy of `params`.
    pub fn new(params: &ParameterSet, media: &'a MediaInfo, settings: &'a EncodeSettings) -> Self {
        Self {
            params: params.sanitized(),
            media,
            settings,
        }
    }

    /// Compile the command for `request`.
    ///
    /// `rng` and `now` feed metadata randomization (full export only). Either a complete
    /// command is returned or an error; nothing partial.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = ?request.mode))]
    pub fn compile<R: Rng>(
        &self,
        request: &InvocationRequest,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> CompileResult<CommandSpec> {
        self.settings.validate()?;
        let mode = request.mode;

        let seek_secs = match mode {
            InvocationMode::FrameCapture | InvocationMode::ClipPreview => {
                if !request.seek_secs.is_finite() || request.seek_secs < 0.0 {
                    return Err(CompileError::validation(format!(
                        "seek offset must be finite and >= 0, got {}",
                        request.seek_secs
                    )));
                }
                Some(request.seek_secs)
            }
            InvocationMode::FullExport => None,
        };

        let video = self.video_filter()?;
        let map_audio =
            matches!(video, VideoFilter::Graph { .. }) && mode != InvocationMode::FrameCapture;

        let s = self.settings;
        let (options, audio, metadata) = match mode {
            InvocationMode::FrameCapture => (vec![("-frames:v", "1".to_string())], None, Vec::new()),
            InvocationMode::ClipPreview => (
                vec![
                    ("-t", s.clip_preview_secs.to_string()),
                    ("-preset", s.preview_preset.clone()),
                ],
                self.audio_filter()?,
                Vec::new(),
            ),
            InvocationMode::FullExport => {
                let metadata = MetadataRandomizer::new(rng, now)
                    .directives(self.params.clear_metadata, self.params.random_metadata);
                (
                    vec![
                        ("-b:v", s.video_bitrate.clone()),
                        ("-preset", s.export_preset.clone()),
                        ("-b:a", s.audio_bitrate.clone()),
                    ],
                    self.audio_filter()?,
                    metadata,
                )
            }
        };

        Ok(CommandSpec {
            program: s.program.clone(),
            mode,
            seek_secs,
            input: request.input.clone(),
            video,
            map_audio,
            options,
            audio,
            metadata,
            output: request.output.clone(),
        })
    }

    fn video_filter(&self) -> CompileResult<VideoFilter> {
        let canvas = self.params.canvas_enabled;
        if canvas && self.media.has_dimensions() {
            if let Some(c) = CanvasCompositor::new(&self.params, self.media).compose()? {
                tracing::debug!(output = c.output.name(), "using canvas graph");
                return Ok(VideoFilter::Graph {
                    graph: c.graph,
                    output: c.output,
                });
            }
        }

        let mode = if canvas {
            tracing::warn!("canvas requested but media dimensions are unknown, using simple chain");
            ChainMode::FullForced
        } else {
            ChainMode::Full
        };
        Ok(FilterChainBuilder::new(&self.params, self.media)
            .build(mode)
            .map_or(VideoFilter::None, VideoFilter::Chain))
    }

    fn audio_filter(&self) -> CompileResult<Option<FilterExpression>> {
        AudioPitchTempoResolver::new(&self.params, self.media).resolve()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/assembler.rs"]
mod tests;
