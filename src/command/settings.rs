use crate::foundation::error::{CompileError, CompileResult};

/// Fixed encoder options per invocation mode. Loadable from partial JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    /// Transcoder executable name or path.
    pub program: String,
    /// Duration cap of a clip preview, in seconds.
    pub clip_preview_secs: u32,
    /// Encode preset for clip previews.
    pub preview_preset: String,
    /// Encode preset for full exports.
    pub export_preset: String,
    /// Video bitrate for full exports.
    pub video_bitrate: String,
    /// Audio bitrate for full exports.
    pub audio_bitrate: String,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            clip_preview_secs: 2,
            preview_preset: "ultrafast".to_string(),
            export_preset: "faster".to_string(),
            video_bitrate: "8M".to_string(),
            audio_bitrate: "192k".to_string(),
        }
    }
}

impl EncodeSettings {
    /// Reject empty values and a zero preview window.
    pub fn validate(&self) -> CompileResult<()> {
        for (name, value) in [
            ("program", &self.program),
            ("preview_preset", &self.preview_preset),
            ("export_preset", &self.export_preset),
            ("video_bitrate", &self.video_bitrate),
            ("audio_bitrate", &self.audio_bitrate),
        ] {
            if value.trim().is_empty() {
                return Err(CompileError::validation(format!(
                    "encode setting '{name}' must be non-empty"
                )));
            }
        }
        if self.clip_preview_secs == 0 {
            return Err(CompileError::validation("clip_preview_secs must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/settings.rs"]
mod tests;
