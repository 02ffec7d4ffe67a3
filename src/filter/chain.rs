use crate::filter::expr::{Filter, FilterExpression};
use crate::foundation::core::fmt_num;
use crate::media::info::MediaInfo;
use crate::params::model::{ColorPreset, ParameterSet};

/// Which stages the simple chain may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainMode {
    /// Regular `-vf` chain. Yields nothing while the canvas effect is enabled.
    Full,
    /// Regular chain even though the canvas flag is set (canvas not usable).
    FullForced,
    /// Color stages folded on top of the canvas composite: no crop, scale, rotate,
    /// flip or vignette.
    ForegroundOnly,
}

impl ChainMode {
    fn geometry(self) -> bool {
        !matches!(self, Self::ForegroundOnly)
    }
}

/// Renders a [`ParameterSet`] into an ordered single-input filter chain.
///
/// Stage order is fixed: crop, scale, rotate, hflip, vflip, eq, hue, sharpen, blur,
/// denoise, vignette, colorize, negate, preset, setpts, custom text. A parameter only
/// contributes a stage when it differs from its neutral value.
#[derive(Clone, Debug)]
pub struct FilterChainBuilder<'a> {
    params: ParameterSet,
    media: &'a MediaInfo,
}

impl<'a> FilterChainBuilder<'a> {
    /// Builder over a sanitized copy of `params`.
    pub fn new(params: &ParameterSet, media: &'a MediaInfo) -> Self {
        Self {
            params: params.sanitized(),
            media,
        }
    }

    /// Build the chain; `None` when no stage is needed.
    pub fn build(&self, mode: ChainMode) -> Option<FilterExpression> {
        let p = &self.params;
        if p.canvas_enabled && mode == ChainMode::Full {
            return None;
        }

        let mut chain = FilterExpression::new();

        if mode.geometry() {
            if let Some(crop) = self.crop() {
                chain.push(crop);
            }
            if let Some(scale) = self.scale() {
                chain.push(scale);
            }
            self.rotate(&mut chain);
            if p.hflip {
                chain.push(Filter::bare("hflip"));
            }
            if p.vflip {
                chain.push(Filter::bare("vflip"));
            }
        }

        if let Some(eq) = self.eq() {
            chain.push(eq);
        }
        if p.hue != 0.0 {
            chain.push(Filter::keyed("hue", [("h", fmt_num(p.hue))]));
        }
        if p.sharpen > 0.0 {
            let a = fmt_num(p.sharpen);
            chain.push(Filter::positional(
                "unsharp",
                ["5".to_string(), "5".into(), a.clone(), "5".into(), "5".into(), a],
            ));
        }
        if p.blur > 0.0 {
            chain.push(Filter::positional("boxblur", [fmt_num(p.blur), "1".into()]));
        }
        if p.denoise_strength > 0.0 {
            chain.push(Filter::positional(
                "nlmeans",
                [fmt_num(p.denoise_strength), "7".into(), "5".into(), "3".into(), "3".into()],
            ));
        }
        if mode.geometry() && p.vignette > 0.0 {
            chain.push(vignette(p.vignette));
        }
        if p.colorize {
            chain.push(Filter::positional(
                "colorchannelmixer",
                [".3", ".4", ".3", "0", ".3", ".4", ".3", "0", ".3", ".4", ".3"],
            ));
        }
        if p.negate {
            chain.push(Filter::bare("negate"));
        }
        if let Some(preset) = preset_filter(p.eq_preset) {
            chain.push(preset);
        }
        if p.speed != 1.0 {
            chain.push(Filter::positional("setpts", [format!("{}*PTS", fmt_num(1.0 / p.speed))]));
        }
        let custom = p.custom_filter.trim();
        if !custom.is_empty() {
            chain.push(Filter::raw(custom));
        }

        chain.non_empty()
    }

    fn crop(&self) -> Option<Filter> {
        let p = &self.params;
        if p.crop_w == 0 && p.crop_h == 0 {
            return None;
        }
        if p.crop_w <= 0 || p.crop_h <= 0 {
            tracing::warn!(w = p.crop_w, h = p.crop_h, "non-positive crop size, crop omitted");
            return None;
        }
        let full_frame = p.crop_x == 0
            && p.crop_y == 0
            && p.crop_w == i64::from(self.media.width)
            && p.crop_h == i64::from(self.media.height);
        if full_frame {
            return None;
        }
        Some(Filter::positional(
            "crop",
            [p.crop_w, p.crop_h, p.crop_x, p.crop_y].map(|v| v.to_string()),
        ))
    }

    fn scale(&self) -> Option<Filter> {
        let w = self.params.scale_width.trim();
        let h = self.params.scale_height.trim();
        if w.is_empty() && h.is_empty() {
            return None;
        }
        let side = |s: &str| if s.is_empty() { "-1".to_string() } else { s.to_string() };
        Some(Filter::positional("scale", [side(w), side(h)]))
    }

    fn rotate(&self, chain: &mut FilterExpression) {
        match self.params.rotation {
            0 => {}
            90 => chain.push(Filter::positional("transpose", ["1"])),
            180 => {
                chain.push(Filter::positional("transpose", ["1"]));
                chain.push(Filter::positional("transpose", ["1"]));
            }
            270 => chain.push(Filter::positional("transpose", ["2"])),
            other => tracing::warn!(rotation = other, "unsupported rotation angle, omitted"),
        }
    }

    fn eq(&self) -> Option<Filter> {
        let p = &self.params;
        let parts: Vec<(&str, String)> = [
            ("brightness", p.brightness, 0.0),
            ("contrast", p.contrast, 1.0),
            ("saturation", p.saturation, 1.0),
            ("gamma", p.gamma, 1.0),
            ("gamma_r", p.gamma_r, 1.0),
            ("gamma_g", p.gamma_g, 1.0),
            ("gamma_b", p.gamma_b, 1.0),
        ]
        .into_iter()
        .filter(|(_, v, neutral)| v != neutral)
        .map(|(k, v, _)| (k, fmt_num(v)))
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(Filter::keyed("eq", parts))
        }
    }
}

/// `vignette=PI/D` with `D = 4 / strength`.
pub(crate) fn vignette(strength: f64) -> Filter {
    Filter::positional("vignette", [format!("PI/{}", fmt_num(4.0 / strength))])
}

fn preset_filter(preset: ColorPreset) -> Option<Filter> {
    let f = match preset {
        ColorPreset::None => return None,
        ColorPreset::Vintage => Filter::positional("curves", ["vintage"]),
        ColorPreset::Cool => Filter::keyed("colortemperature", [("t", "9000")]),
        ColorPreset::Warm => Filter::keyed("colortemperature", [("t", "4500")]),
        ColorPreset::Dramatic => Filter::keyed(
            "eq",
            [("contrast", "1.3"), ("saturation", "1.2"), ("gamma", "0.8")],
        ),
        ColorPreset::Muted => Filter::keyed("eq", [("saturation", "0.6"), ("contrast", "0.9")]),
        ColorPreset::Vibrant => Filter::keyed("eq", [("saturation", "1.5"), ("contrast", "1.1")]),
    };
    Some(f)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/chain.rs"]
mod tests;
