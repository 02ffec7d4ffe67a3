//! `uniqcut` compiles video edit parameters into ffmpeg filter expressions and
//! argument vectors.
//!
//! The compiler is pure: every call takes a [`ParameterSet`] and a [`MediaInfo`]
//! snapshot and returns freshly built values. Randomness (metadata, presets) and the
//! clock are passed in explicitly.
//!
//! ```no_run
//! use uniqcut::{
//!     CommandAssembler, EncodeSettings, InvocationMode, InvocationRequest, MediaInfo,
//!     ParameterSet,
//! };
//!
//! let params = ParameterSet { brightness: 0.2, ..ParameterSet::default() };
//! let media = MediaInfo::fallback();
//! let settings = EncodeSettings::default();
//! let request = InvocationRequest {
//!     mode: InvocationMode::FullExport,
//!     input: "in.mp4".into(),
//!     output: "out.mp4".into(),
//!     seek_secs: 0.0,
//! };
//! let spec = CommandAssembler::new(&params, &media, &settings)
//!     .compile(&request, &mut rand::rng(), chrono::Utc::now())?;
//! println!("{}", spec.to_shell_line());
//! # Ok::<(), uniqcut::CompileError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Audio pitch/tempo compilation.
pub mod audio;
/// Command assembly per invocation mode.
pub mod command;
/// Video filter chains and graphs.
pub mod filter;
/// Errors and numeric helpers.
pub mod foundation;
/// Media metadata and probe parsing.
pub mod media;
/// Metadata directives.
pub mod metadata;
/// Edit parameters, export schema and presets.
pub mod params;

pub use audio::tempo::{AudioPitchTempoResolver, TempoChain};
pub use command::assembler::{
    CommandAssembler, CommandSpec, InvocationMode, InvocationRequest, VideoFilter,
};
pub use command::report::ExecutionReport;
pub use command::settings::EncodeSettings;
pub use filter::canvas::{CanvasComposite, CanvasCompositor, CanvasGeometry, CornerMask};
pub use filter::chain::{ChainMode, FilterChainBuilder};
pub use filter::expr::{Filter, FilterArg, FilterExpression};
pub use filter::graph::{FilterGraph, GraphNode, PadLabel};
pub use foundation::core::FrameRate;
pub use foundation::error::{CompileError, CompileResult};
pub use media::info::MediaInfo;
pub use media::probe::ProbeReport;
pub use metadata::randomizer::{MetadataDirective, MetadataRandomizer};
pub use params::export::ExportedParams;
pub use params::model::{ColorPreset, ParameterSet};
pub use params::presets::{UniquifyLevel, apply_uniquify_preset, randomize_pitch};
