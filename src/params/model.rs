use crate::foundation::error::{CompileError, CompileResult};

/// Named color preset appended after manual color edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPreset {
    /// No preset.
    #[default]
    None,
    /// `curves=vintage`.
    Vintage,
    /// Cold color temperature (9000 K).
    Cool,
    /// Warm color temperature (4500 K).
    Warm,
    /// High contrast, slightly darker gamma.
    Dramatic,
    /// Desaturated, lower contrast.
    Muted,
    /// Saturated, higher contrast.
    Vibrant,
}

/// Range and default of a bounded numeric parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamBounds {
    /// Parameter name (matches the serde field name).
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Default value.
    pub default: f64,
}

const fn fp(name: &'static str, min: f64, max: f64, default: f64) -> ParamBounds {
    ParamBounds {
        name,
        min,
        max,
        default,
    }
}

/// Bounded parameters: the float fields first, then the canvas integers.
pub const BOUNDED_PARAMS: [ParamBounds; 21] = [
    fp("brightness", -1.0, 1.0, 0.0),
    fp("contrast", 0.0, 3.0, 1.0),
    fp("saturation", 0.0, 3.0, 1.0),
    fp("gamma", 0.1, 3.0, 1.0),
    fp("gamma_r", 0.1, 3.0, 1.0),
    fp("gamma_g", 0.1, 3.0, 1.0),
    fp("gamma_b", 0.1, 3.0, 1.0),
    fp("hue", -180.0, 180.0, 0.0),
    fp("sharpen", 0.0, 3.0, 0.0),
    fp("blur", 0.0, 10.0, 0.0),
    fp("denoise_strength", 0.0, 10.0, 0.0),
    fp("vignette", 0.0, 1.0, 0.0),
    fp("speed", 0.25, 4.0, 1.0),
    fp("canvas_scale", 0.7, 0.95, 0.85),
    fp("canvas_corner_smooth", 0.5, 3.0, 1.0),
    fp("canvas_bg_zoom", 1.0, 1.3, 1.15),
    fp("canvas_vignette", 0.0, 1.0, 0.3),
    fp("audio_pitch", 0.95, 1.05, 1.0),
    fp("canvas_blur", 0.0, 50.0, 25.0),
    fp("canvas_corner_radius", 0.0, 50.0, 20.0),
    fp("canvas_noise", 0.0, 30.0, 0.0),
];

/// The full set of edit parameters for one compile call.
///
/// Values are plain data; callers may deserialize partial JSON (missing fields take
/// their defaults). Compilers always work on [`ParameterSet::sanitized`] output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Additive brightness, neutral 0.
    pub brightness: f64,
    /// Contrast multiplier, neutral 1.
    pub contrast: f64,
    /// Saturation multiplier, neutral 1.
    pub saturation: f64,
    /// Global gamma, neutral 1.
    pub gamma: f64,
    /// Red gamma, neutral 1.
    pub gamma_r: f64,
    /// Green gamma, neutral 1.
    pub gamma_g: f64,
    /// Blue gamma, neutral 1.
    pub gamma_b: f64,
    /// Hue rotation in degrees.
    pub hue: f64,
    /// Unsharp amount.
    pub sharpen: f64,
    /// Box blur radius.
    pub blur: f64,
    /// Non-local-means strength.
    pub denoise_strength: f64,
    /// Vignette strength (standalone, not the canvas one).
    pub vignette: f64,
    /// Playback speed multiplier.
    pub speed: f64,

    /// Rotation in degrees; one of 0/90/180/270.
    pub rotation: i32,
    /// Mirror horizontally.
    pub hflip: bool,
    /// Mirror vertically.
    pub vflip: bool,

    /// Target width text; empty keeps the aspect (`-1`).
    pub scale_width: String,
    /// Target height text; empty keeps the aspect (`-1`).
    pub scale_height: String,

    /// Crop offset X.
    pub crop_x: i64,
    /// Crop offset Y.
    pub crop_y: i64,
    /// Crop width; non-positive disables the crop.
    pub crop_w: i64,
    /// Crop height; non-positive disables the crop.
    pub crop_h: i64,

    /// Grayscale channel mix.
    pub colorize: bool,
    /// Invert colors.
    pub negate: bool,
    /// Named color preset.
    pub eq_preset: ColorPreset,
    /// Free-form filter text appended verbatim.
    pub custom_filter: String,

    /// Enable the canvas composite.
    pub canvas_enabled: bool,
    /// Foreground scale factor.
    pub canvas_scale: f64,
    /// Background box-blur radius.
    pub canvas_blur: u32,
    /// Foreground corner radius in pixels.
    pub canvas_corner_radius: u32,
    /// Corner zone multiplier.
    pub canvas_corner_smooth: f64,
    /// Background zoom factor.
    pub canvas_bg_zoom: f64,
    /// Synthetic noise strength over the composite.
    pub canvas_noise: u32,
    /// Vignette strength over the composite.
    pub canvas_vignette: f64,

    /// Pitch factor applied when `audio_pitch_enabled`.
    pub audio_pitch: f64,
    /// Enable pitch shifting.
    pub audio_pitch_enabled: bool,

    /// Strip existing container metadata on export.
    pub clear_metadata: bool,
    /// Write randomized encoder/software/creation_time tags on export.
    pub random_metadata: bool,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            gamma: 1.0,
            gamma_r: 1.0,
            gamma_g: 1.0,
            gamma_b: 1.0,
            hue: 0.0,
            sharpen: 0.0,
            blur: 0.0,
            denoise_strength: 0.0,
            vignette: 0.0,
            speed: 1.0,
            rotation: 0,
            hflip: false,
            vflip: false,
            scale_width: String::new(),
            scale_height: String::new(),
            crop_x: 0,
            crop_y: 0,
            crop_w: 0,
            crop_h: 0,
            colorize: false,
            negate: false,
            eq_preset: ColorPreset::None,
            custom_filter: String::new(),
            canvas_enabled: false,
            canvas_scale: 0.85,
            canvas_blur: 25,
            canvas_corner_radius: 20,
            canvas_corner_smooth: 1.0,
            canvas_bg_zoom: 1.15,
            canvas_noise: 0,
            canvas_vignette: 0.3,
            audio_pitch: 1.0,
            audio_pitch_enabled: false,
            clear_metadata: true,
            random_metadata: true,
        }
    }
}

impl ParameterSet {
    fn float_fields_mut(&mut self) -> [(&'static str, &mut f64); 18] {
        [
            ("brightness", &mut self.brightness),
            ("contrast", &mut self.contrast),
            ("saturation", &mut self.saturation),
            ("gamma", &mut self.gamma),
            ("gamma_r", &mut self.gamma_r),
            ("gamma_g", &mut self.gamma_g),
            ("gamma_b", &mut self.gamma_b),
            ("hue", &mut self.hue),
            ("sharpen", &mut self.sharpen),
            ("blur", &mut self.blur),
            ("denoise_strength", &mut self.denoise_strength),
            ("vignette", &mut self.vignette),
            ("speed", &mut self.speed),
            ("canvas_scale", &mut self.canvas_scale),
            ("canvas_corner_smooth", &mut self.canvas_corner_smooth),
            ("canvas_bg_zoom", &mut self.canvas_bg_zoom),
            ("canvas_vignette", &mut self.canvas_vignette),
            ("audio_pitch", &mut self.audio_pitch),
        ]
    }

    fn int_fields_mut(&mut self) -> [(&'static str, &mut u32); 3] {
        [
            ("canvas_blur", &mut self.canvas_blur),
            ("canvas_corner_radius", &mut self.canvas_corner_radius),
            ("canvas_noise", &mut self.canvas_noise),
        ]
    }

    /// Copy with every bounded value clamped into its range.
    ///
    /// Non-finite floats are replaced by their default. Each repair is logged at `warn`.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();

        for (i, (name, value)) in out.float_fields_mut().into_iter().enumerate() {
            let bounds = BOUNDED_PARAMS[i];
            debug_assert_eq!(bounds.name, name);
            if !value.is_finite() {
                tracing::warn!(param = name, "non-finite value replaced by default");
                *value = bounds.default;
            } else if *value < bounds.min || *value > bounds.max {
                let clamped = value.clamp(bounds.min, bounds.max);
                tracing::warn!(param = name, value = *value, clamped, "value clamped into range");
                *value = clamped;
            }
        }

        for (i, (name, value)) in out.int_fields_mut().into_iter().enumerate() {
            let bounds = BOUNDED_PARAMS[18 + i];
            debug_assert_eq!(bounds.name, name);
            let max = bounds.max as u32;
            if *value > max {
                tracing::warn!(param = name, value = *value, max, "value clamped into range");
                *value = max;
            }
        }

        out.rotation = out.rotation.rem_euclid(360);
        out
    }

    /// Apply a flat `name -> value` mapping, e.g. an exported parameter file.
    ///
    /// Unknown names and mistyped values are rejected and leave `self` unchanged.
    /// Fields not named in `overrides` come back sanitized. Returns the names that
    /// were applied.
    pub fn apply_json(&mut self, overrides: &serde_json::Value) -> CompileResult<Vec<String>> {
        let Some(map) = overrides.as_object() else {
            return Err(CompileError::validation(
                "parameter overrides must be a JSON object",
            ));
        };

        // Non-finite floats serialize as null and would not deserialize back.
        let mut current = serde_json::to_value(self.sanitized())?;
        let Some(fields) = current.as_object_mut() else {
            return Err(CompileError::serde("parameter set did not serialize to an object"));
        };

        let mut applied = Vec::with_capacity(map.len());
        for (key, value) in map {
            if !fields.contains_key(key) {
                return Err(CompileError::validation(format!("unknown parameter '{key}'")));
            }
            fields.insert(key.clone(), value.clone());
            applied.push(key.clone());
        }

        let updated: ParameterSet = serde_json::from_value(current).map_err(|e| {
            CompileError::validation(format!("invalid parameter value: {e}"))
        })?;
        *self = updated;
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
