use crate::foundation::core::FrameRate;
use crate::foundation::error::CompileResult;
use crate::media::info::{FALLBACK_DURATION_SECS, FALLBACK_HEIGHT, FALLBACK_WIDTH, MediaInfo};

/// Frame rate as reported by a probe: `"num/den"` text or a plain number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ProbeFrameRate {
    /// Rational or decimal text, e.g. `"30000/1001"`.
    Text(String),
    /// Floating-point Hz.
    Hz(f64),
}

/// Result of probing a media file. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProbeReport {
    /// Frame width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Frame height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Video frame rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<ProbeFrameRate>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Audio sample rate in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
}

#[derive(serde::Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    duration: Option<String>,
    sample_rate: Option<String>,
}

#[derive(serde::Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

#[derive(serde::Deserialize)]
struct FfprobeOut {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

impl ProbeReport {
    /// Read the `ffprobe -of json` layout (`streams[]` + `format`).
    ///
    /// The first stream tagged `video` (or the first stream without a `codec_type`)
    /// provides geometry; the first `audio` stream provides the sample rate.
    /// `format.duration` wins over the stream duration.
    pub fn from_ffprobe_json(value: &serde_json::Value) -> CompileResult<Self> {
        let out: FfprobeOut = serde_json::from_value(value.clone())?;

        let video = out
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
            .or_else(|| out.streams.iter().find(|s| s.codec_type.is_none()));
        let audio = out
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("audio"))
            .or_else(|| {
                out.streams
                    .iter()
                    .find(|s| s.codec_type.is_none() && s.sample_rate.is_some())
            });

        let duration = out
            .format
            .as_ref()
            .and_then(|f| f.duration.as_deref())
            .or_else(|| video.and_then(|v| v.duration.as_deref()))
            .and_then(|d| d.trim().parse::<f64>().ok());

        Ok(Self {
            width: video.and_then(|v| v.width),
            height: video.and_then(|v| v.height),
            frame_rate: video
                .and_then(|v| v.r_frame_rate.clone())
                .map(ProbeFrameRate::Text),
            duration,
            sample_rate: audio
                .and_then(|a| a.sample_rate.as_deref())
                .and_then(|sr| sr.trim().parse::<u32>().ok()),
        })
    }
}

impl MediaInfo {
    /// Build media info from a probe result, substituting the fallback per missing field.
    pub fn from_probe(report: &ProbeReport) -> Self {
        let fallback = Self::fallback();

        let width = report.width.filter(|w| *w > 0).unwrap_or(FALLBACK_WIDTH);
        let height = report.height.filter(|h| *h > 0).unwrap_or(FALLBACK_HEIGHT);

        let frame_rate = match report.frame_rate.as_ref() {
            Some(ProbeFrameRate::Text(t)) => FrameRate::parse(t).ok(),
            Some(ProbeFrameRate::Hz(hz)) => FrameRate::from_hz(*hz).ok(),
            None => None,
        };
        let frame_rate = frame_rate.unwrap_or_else(|| {
            if report.frame_rate.is_some() {
                tracing::warn!(
                    frame_rate = ?report.frame_rate,
                    "unparseable probe frame rate, using fallback"
                );
            }
            fallback.frame_rate
        });

        let duration_secs = report
            .duration
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(FALLBACK_DURATION_SECS);
        let sample_rate = report
            .sample_rate
            .filter(|sr| *sr > 0)
            .unwrap_or(fallback.sample_rate);

        Self {
            width,
            height,
            frame_rate,
            duration_secs,
            sample_rate,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;
