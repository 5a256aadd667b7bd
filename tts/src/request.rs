use serde::Serialize;

use crate::{Result, TTSError};

/// Body of a `POST /synthesize` call.
///
/// Built with [`SynthesisRequest::new`], which trims the text and refuses
/// empty input, so every value of this type is safe to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisRequest {
    text: String,
    /// Outer `None` leaves the field out of the body entirely. `Some(None)`
    /// sends an explicit `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_preset: Option<Option<String>>,
}

impl SynthesisRequest {
    /// Request without a preset field.
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TTSError::EmptyText);
        }
        Ok(Self {
            text: text.to_string(),
            voice_preset: None,
        })
    }

    /// Carry the `voice_preset` field. An empty or missing selection is sent
    /// as `null`.
    pub fn with_preset(mut self, preset: Option<&str>) -> Self {
        let preset = preset.filter(|p| !p.is_empty()).map(str::to_string);
        self.voice_preset = Some(preset);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice_preset(&self) -> Option<&str> {
        self.voice_preset.as_ref().and_then(|p| p.as_deref())
    }
}
