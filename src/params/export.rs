use crate::foundation::core::round_to;
use crate::foundation::error::CompileResult;
use crate::params::model::ParameterSet;

/// Flat, rounded snapshot of the uniquify-relevant parameters for external tools.
///
/// The key set is fixed; re-importing goes through [`ParameterSet::apply_json`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportedParams {
    /// Canvas composite enabled.
    pub canvas_enabled: bool,
    /// Foreground scale, 3 decimals.
    pub canvas_scale: f64,
    /// Background blur radius.
    pub canvas_blur: u32,
    /// Corner radius.
    pub canvas_corner_radius: u32,
    /// Corner zone multiplier, 2 decimals.
    pub canvas_corner_smooth: f64,
    /// Background zoom, 3 decimals.
    pub canvas_bg_zoom: f64,
    /// Noise strength.
    pub canvas_noise: u32,
    /// Composite vignette, 2 decimals.
    pub canvas_vignette: f64,
    /// Pitch shifting enabled.
    pub audio_pitch_enabled: bool,
    /// Pitch factor, 4 decimals.
    pub audio_pitch: f64,
    /// Strip metadata on export.
    pub clear_metadata: bool,
    /// Randomize metadata on export.
    pub random_metadata: bool,
    /// Brightness, 3 decimals.
    pub brightness: f64,
    /// Contrast, 3 decimals.
    pub contrast: f64,
    /// Saturation, 3 decimals.
    pub saturation: f64,
    /// Gamma, 3 decimals.
    pub gamma: f64,
    /// Hue, 1 decimal.
    pub hue: f64,
}

impl ExportedParams {
    /// Snapshot `params` (sanitized first) with per-field rounding.
    pub fn from_params(params: &ParameterSet) -> Self {
        let p = params.sanitized();
        Self {
            canvas_enabled: p.canvas_enabled,
            canvas_scale: round_to(p.canvas_scale, 3),
            canvas_blur: p.canvas_blur,
            canvas_corner_radius: p.canvas_corner_radius,
            canvas_corner_smooth: round_to(p.canvas_corner_smooth, 2),
            canvas_bg_zoom: round_to(p.canvas_bg_zoom, 3),
            canvas_noise: p.canvas_noise,
            canvas_vignette: round_to(p.canvas_vignette, 2),
            audio_pitch_enabled: p.audio_pitch_enabled,
            audio_pitch: round_to(p.audio_pitch, 4),
            clear_metadata: p.clear_metadata,
            random_metadata: p.random_metadata,
            brightness: round_to(p.brightness, 3),
            contrast: round_to(p.contrast, 3),
            saturation: round_to(p.saturation, 3),
            gamma: round_to(p.gamma, 3),
            hue: round_to(p.hue, 1),
        }
    }

    /// Pretty JSON text.
    pub fn to_json_pretty(&self) -> CompileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply this snapshot onto an existing parameter set.
    pub fn apply_to(&self, params: &mut ParameterSet) -> CompileResult<()> {
        let value = serde_json::to_value(self)?;
        params.apply_json(&value)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/export.rs"]
mod tests;
