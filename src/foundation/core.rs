use crate::foundation::error::{CompileError, CompileResult};

/// Rational frame rate in Hz (`num / den`, always reduced).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRate {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl FrameRate {
    /// Build a reduced frame rate; both terms must be non-zero.
    pub fn new(num: u32, den: u32) -> CompileResult<Self> {
        if den == 0 {
            return Err(CompileError::validation("frame rate den must be > 0"));
        }
        if num == 0 {
            return Err(CompileError::validation("frame rate num must be > 0"));
        }
        let g = gcd(num, den);
        Ok(Self {
            num: num / g,
            den: den / g,
        })
    }

    /// Parse `"num/den"` (as printed by ffprobe) or a decimal like `"29.97"`.
    pub fn parse(text: &str) -> CompileResult<Self> {
        let text = text.trim();
        if let Some((num, den)) = text.split_once('/') {
            let num = num
                .trim()
                .parse::<u32>()
                .map_err(|_| CompileError::validation(format!("invalid frame rate '{text}'")))?;
            let den = den
                .trim()
                .parse::<u32>()
                .map_err(|_| CompileError::validation(format!("invalid frame rate '{text}'")))?;
            return Self::new(num, den);
        }
        let hz = text
            .parse::<f64>()
            .map_err(|_| CompileError::validation(format!("invalid frame rate '{text}'")))?;
        Self::from_hz(hz)
    }

    /// Approximate a decimal rate with millihertz precision.
    pub fn from_hz(hz: f64) -> CompileResult<Self> {
        if !hz.is_finite() || hz <= 0.0 || hz > f64::from(u32::MAX) / 1000.0 {
            return Err(CompileError::validation(format!(
                "frame rate must be finite and > 0, got {hz}"
            )));
        }
        let num = (hz * 1000.0).round() as u32;
        Self::new(num.max(1), 1000)
    }

    /// Frame rate as floating-point Hz.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl std::fmt::Display for FrameRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Largest even integer `<= v` (chroma subsampling needs even sizes).
pub fn even_floor(v: u32) -> u32 {
    v - (v % 2)
}

/// Scale a pixel dimension by `factor`, truncating, then floor to even.
pub fn scaled_even(dim: u32, factor: f64) -> u32 {
    let scaled = (f64::from(dim) * factor).trunc();
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    even_floor(scaled.min(f64::from(u32::MAX)) as u32)
}

/// Format a float for filter arguments.
///
/// Shortest round-trip representation; integral values keep one decimal (`2.0`).
pub fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(v: f64, places: i32) -> f64 {
    let p = 10f64.powi(places);
    (v * p).round() / p
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
