use crate::filter::expr::{Filter, FilterExpression};
use crate::foundation::core::fmt_num;
use crate::foundation::error::{CompileError, CompileResult};
use crate::media::info::MediaInfo;
use crate::params::model::ParameterSet;

/// Lowest factor a single `atempo` stage accepts.
pub const ATEMPO_MIN: f64 = 0.5;
/// Highest factor a single `atempo` stage accepts.
pub const ATEMPO_MAX: f64 = 2.0;

const UNITY_EPS: f64 = 1e-9;

/// A tempo factor split into `atempo`-sized stages.
///
/// `steps` holds the whole-range divisions (`2.0` or `0.5`), `remainder` the final
/// in-range factor, omitted when it is 1.
#[derive(Clone, Debug, PartialEq)]
pub struct TempoChain {
    steps: Vec<f64>,
    remainder: Option<f64>,
}

impl TempoChain {
    /// Decompose `target` so that every stage lies in `[0.5, 2.0]`.
    pub fn decompose(target: f64) -> CompileResult<Self> {
        if !target.is_finite() || target <= 0.0 {
            return Err(CompileError::validation(format!(
                "tempo factor must be finite and > 0, got {target}"
            )));
        }

        let mut steps = Vec::new();
        let mut rest = target;
        while rest > ATEMPO_MAX {
            steps.push(ATEMPO_MAX);
            rest /= ATEMPO_MAX;
        }
        while rest < ATEMPO_MIN {
            steps.push(ATEMPO_MIN);
            rest /= ATEMPO_MIN;
        }
        let remainder = ((rest - 1.0).abs() >= UNITY_EPS).then_some(rest);

        Ok(Self { steps, remainder })
    }

    /// All stage factors in order.
    pub fn factors(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().copied().chain(self.remainder)
    }

    /// Product of all stages (1.0 for an empty chain).
    pub fn product(&self) -> f64 {
        self.factors().product()
    }

    /// `true` when no stage is needed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.remainder.is_none()
    }

    /// `atempo` stages; the remainder is printed with six decimals.
    pub fn to_expression(&self) -> FilterExpression {
        self.steps
            .iter()
            .map(|f| Filter::positional("atempo", [fmt_num(*f)]))
            .chain(
                self.remainder
                    .map(|r| Filter::positional("atempo", [format!("{r:.6}")])),
            )
            .collect()
    }
}

/// Combines pitch shifting (resample trick) with speed into one audio chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioPitchTempoResolver {
    pitch: Option<f64>,
    speed: f64,
    sample_rate: u32,
}

impl AudioPitchTempoResolver {
    /// Resolver for sanitized `params` and the source sample rate.
    pub fn new(params: &ParameterSet, media: &MediaInfo) -> Self {
        let p = params.sanitized();
        Self {
            pitch: p.audio_pitch_enabled.then_some(p.audio_pitch),
            speed: p.speed,
            sample_rate: media.effective_sample_rate(),
        }
    }

    fn active_pitch(&self) -> Option<f64> {
        self.pitch.filter(|p| *p != 1.0)
    }

    /// Overall `atempo` factor: `speed / pitch` when pitch shifting, else `speed`.
    pub fn tempo_factor(&self) -> f64 {
        match self.active_pitch() {
            Some(pitch) => self.speed / pitch,
            None => self.speed,
        }
    }

    /// The `-af` chain, or `None` when pitch and speed are both neutral.
    pub fn resolve(&self) -> CompileResult<Option<FilterExpression>> {
        let mut chain = FilterExpression::new();

        if let Some(pitch) = self.active_pitch() {
            let shifted = (f64::from(self.sample_rate) * pitch).trunc() as u32;
            chain.push(Filter::positional("asetrate", [shifted.to_string()]));
            chain.push(Filter::positional("aresample", [self.sample_rate.to_string()]));
        }

        let tempo = TempoChain::decompose(self.tempo_factor())?;
        tracing::debug!(
            tempo = self.tempo_factor(),
            stages = tempo.factors().count(),
            "resolved audio tempo chain"
        );
        chain.extend(tempo.to_expression());

        Ok(chain.non_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/tempo.rs"]
mod tests;
