use rand::Rng;

use crate::foundation::core::round_to;
use crate::params::model::ParameterSet;

/// Strength of a one-click uniquify preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniquifyLevel {
    /// Pitch jitter and metadata only.
    Light,
    /// Adds a subtle canvas composite.
    Medium,
    /// Stronger canvas plus small color jitter.
    Heavy,
}

impl UniquifyLevel {
    fn pitch_range(self) -> (f64, f64) {
        match self {
            Self::Light => (0.98, 1.02),
            Self::Medium => (0.97, 1.03),
            Self::Heavy => (0.96, 1.04),
        }
    }
}

/// Apply a uniquify preset to `params`, drawing jitter from `rng`.
///
/// Only the fields the preset controls are touched.
pub fn apply_uniquify_preset<R: Rng>(
    params: &mut ParameterSet,
    level: UniquifyLevel,
    rng: &mut R,
) {
    let (lo, hi) = level.pitch_range();
    params.audio_pitch_enabled = true;
    params.audio_pitch = rng.random_range(lo..=hi);
    params.clear_metadata = true;
    params.random_metadata = true;

    match level {
        UniquifyLevel::Light => {
            params.canvas_enabled = false;
        }
        UniquifyLevel::Medium => {
            params.canvas_enabled = true;
            params.canvas_scale = 0.92;
            params.canvas_blur = 20;
            params.canvas_corner_radius = 15;
            params.canvas_corner_smooth = 1.2;
            params.canvas_noise = 3;
            params.canvas_vignette = 0.2;
        }
        UniquifyLevel::Heavy => {
            params.canvas_enabled = true;
            params.canvas_scale = 0.85;
            params.canvas_blur = 30;
            params.canvas_corner_radius = 25;
            params.canvas_corner_smooth = 1.5;
            params.canvas_bg_zoom = 1.2;
            params.canvas_noise = 8;
            params.canvas_vignette = 0.4;
            params.brightness = rng.random_range(-0.05..=0.05);
            params.saturation = rng.random_range(0.95..=1.05);
        }
    }

    tracing::debug!(?level, pitch = params.audio_pitch, "applied uniquify preset");
}

/// Enable pitch shifting with a random factor in `[0.97, 1.03]`, rounded to 3 decimals.
pub fn randomize_pitch<R: Rng>(params: &mut ParameterSet, rng: &mut R) {
    params.audio_pitch = round_to(rng.random_range(0.97..=1.03), 3);
    params.audio_pitch_enabled = true;
}

#[cfg(test)]
#[path = "../../tests/unit/params/presets.rs"]
mod tests;
