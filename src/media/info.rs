use crate::foundation::core::FrameRate;

/// Fallback frame width when probing fails.
pub const FALLBACK_WIDTH: u32 = 1920;
/// Fallback frame height when probing fails.
pub const FALLBACK_HEIGHT: u32 = 1080;
/// Fallback duration in seconds when probing fails.
pub const FALLBACK_DURATION_SECS: f64 = 10.0;
/// Fallback audio sample rate in Hz when probing fails.
pub const FALLBACK_SAMPLE_RATE: u32 = 44_100;

/// Known metadata about the loaded source.
///
/// `width`/`height` of zero mean "not known yet"; the canvas composite is unavailable
/// in that state and the command assembler falls back to the simple filter chain.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaInfo {
    /// Frame width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Frame height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Video frame rate.
    #[serde(default)]
    pub frame_rate: FrameRate,
    /// Container duration in seconds.
    #[serde(default = "default_duration")]
    pub duration_secs: f64,
    /// Audio sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_width() -> u32 {
    FALLBACK_WIDTH
}

fn default_height() -> u32 {
    FALLBACK_HEIGHT
}

fn default_duration() -> f64 {
    FALLBACK_DURATION_SECS
}

fn default_sample_rate() -> u32 {
    FALLBACK_SAMPLE_RATE
}

impl MediaInfo {
    /// The documented fallback: 1920x1080, 30 fps, 10 s, 44100 Hz.
    pub fn fallback() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
            frame_rate: FrameRate::default(),
            duration_secs: FALLBACK_DURATION_SECS,
            sample_rate: FALLBACK_SAMPLE_RATE,
        }
    }

    /// State before any source was probed: frame size unknown, other fields at fallback.
    pub fn unknown_dimensions() -> Self {
        Self {
            width: 0,
            height: 0,
            ..Self::fallback()
        }
    }

    /// `true` when both frame dimensions are known (> 0).
    pub fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Sample rate to use for audio arithmetic; never zero.
    pub fn effective_sample_rate(&self) -> u32 {
        if self.sample_rate == 0 {
            FALLBACK_SAMPLE_RATE
        } else {
            self.sample_rate
        }
    }
}

impl Default for MediaInfo {
    fn default() -> Self {
        Self::fallback()
    }
}
