//! Turns a synthesize action into one `/synthesize` request and reflects the
//! result in the bound [`Widgets`].
//!
//! Per request the controller moves `Idle -> Requesting -> Idle`. Entry side
//! effects (busy trigger, loader shown, player and error hidden) land before
//! the network call; cleanup runs after it settles on every path, including
//! when the request future is dropped.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::watch;
use tracing::{debug, error, info};
use tts::{SynthesisRequest, Synthesizer, TTSError};

use crate::widgets::{BUSY_LABEL, BindError, Page, Widgets};
use crate::{BlobStore, KeyPress, PlaybackUrl};

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to synthesize.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
}

/// How a synthesize action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Audio is bound to the player under this reference.
    Success(PlaybackUrl),
    /// Text was empty after trimming; nothing was sent.
    ValidationError,
    /// The server answered with a non-success status.
    HttpError { status: u16, message: String },
    /// Transport or body failure.
    NetworkError(String),
    /// Another request was still in flight; nothing changed.
    Busy,
}

impl Outcome {
    /// Message shown to the user, if the outcome is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::ValidationError => Some(EMPTY_TEXT_MESSAGE),
            Outcome::HttpError { message, .. } | Outcome::NetworkError(message) => {
                Some(message.as_str())
            }
            Outcome::Success(_) | Outcome::Busy => None,
        }
    }
}

pub struct SynthesisController {
    widgets: watch::Sender<Widgets>,
    idle_label: String,
    synthesizer: Arc<dyn Synthesizer>,
    blobs: Arc<dyn BlobStore>,
    in_flight: AtomicBool,
}

impl SynthesisController {
    /// Bind to `page`. Fails when the trigger or the text input is missing.
    pub fn bind(
        page: Page,
        synthesizer: Arc<dyn Synthesizer>,
        blobs: Arc<dyn BlobStore>,
    ) -> Result<Self, BindError> {
        let widgets = Widgets::bind(page)?;
        let idle_label = widgets.trigger.label.clone();
        let (widgets, _) = watch::channel(widgets);
        Ok(Self {
            widgets,
            idle_label,
            synthesizer,
            blobs,
            in_flight: AtomicBool::new(false),
        })
    }

    pub async fn handle_synthesize_click(&self) -> Outcome {
        info!("synthesize clicked");
        let Some(_cleanup) = InFlight::acquire(self) else {
            debug!("request already in flight");
            return Outcome::Busy;
        };

        let Some(request) = self.begin() else {
            self.show_error(EMPTY_TEXT_MESSAGE);
            return Outcome::ValidationError;
        };
        debug!(text = request.text(), "sending synthesis request");

        match self.synthesizer.synthesize(&request).await {
            Ok(audio) => {
                info!(bytes = audio.len(), "audio generated");
                Outcome::Success(self.play(audio))
            }
            Err(TTSError::Status { status, message }) => {
                error!(status, %message, "synthesis rejected");
                self.show_error(&message);
                Outcome::HttpError { status, message }
            }
            Err(e) => {
                error!(error = %e, "synthesis failed");
                let message = format!("Failed to generate audio: {e}");
                self.show_error(&message);
                Outcome::NetworkError(message)
            }
        }
    }

    /// Ctrl+Enter / Cmd+Enter runs the click handler; other keys are ignored.
    pub async fn handle_keyboard_shortcut(&self, key: &KeyPress) -> Option<Outcome> {
        if !key.is_submit_shortcut() {
            return None;
        }
        Some(self.handle_synthesize_click().await)
    }

    pub fn show_error(&self, message: &str) {
        self.widgets.send_modify(|w| {
            w.error_message.text = message.to_string();
            w.error_message.hidden = false;
        });
    }

    pub fn set_text(&self, text: &str) {
        self.widgets.send_modify(|w| w.text_input.value = text.to_string());
    }

    /// Change the preset selection. Returns `false` when there is no
    /// selector or it does not offer `preset`.
    pub fn select_preset(&self, preset: Option<&str>) -> bool {
        self.widgets.send_if_modified(|w| match w.preset_selector.as_mut() {
            Some(selector) => selector.select(preset),
            None => false,
        })
    }

    pub fn snapshot(&self) -> Widgets {
        self.widgets.borrow().clone()
    }

    /// Receive a notification after every widget change.
    pub fn subscribe(&self) -> watch::Receiver<Widgets> {
        self.widgets.subscribe()
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.load(Ordering::SeqCst) {
            Phase::Requesting
        } else {
            Phase::Idle
        }
    }

    /// Audio behind the player's current source.
    pub fn current_audio(&self) -> Option<Vec<u8>> {
        let src = self.widgets.borrow().audio_player.src.clone()?;
        self.blobs.resolve(&src)
    }

    /// Release the active playback reference and hide the player.
    pub fn teardown(&self) {
        let mut released = None;
        self.widgets.send_if_modified(|w| {
            released = w.audio_player.src.take();
            w.audio_container.hidden = true;
            released.is_some()
        });
        if let Some(url) = released {
            debug!(%url, "releasing playback reference");
            self.blobs.revoke(&url);
        }
    }

    /// Validate the text and apply the entry side effects.
    fn begin(&self) -> Option<SynthesisRequest> {
        let mut request = None;
        self.widgets.send_if_modified(|w| {
            let Ok(req) = SynthesisRequest::new(&w.text_input.value) else {
                return false;
            };
            request = Some(match &w.preset_selector {
                Some(selector) => req.with_preset(Some(selector.selected.as_str())),
                None => req,
            });
            w.trigger.disabled = true;
            w.trigger.label = BUSY_LABEL.to_string();
            w.loader.hidden = false;
            w.audio_container.hidden = true;
            w.error_message.hidden = true;
            true
        });
        request
    }

    fn play(&self, audio: Vec<u8>) -> PlaybackUrl {
        let previous = self.widgets.borrow().audio_player.src.clone();
        if let Some(prev) = previous {
            debug!(url = %prev, "releasing previous playback reference");
            self.blobs.revoke(&prev);
        }
        let url = self.blobs.create(audio);
        self.widgets.send_modify(|w| {
            w.audio_player.src = Some(url.clone());
            w.audio_container.hidden = false;
        });
        url
    }

    fn finish(&self) {
        let label = self.idle_label.clone();
        self.widgets.send_modify(|w| {
            w.trigger.disabled = false;
            w.trigger.label = label;
            w.loader.hidden = true;
        });
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

impl Drop for SynthesisController {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Holds the in-flight flag; dropping it runs cleanup.
struct InFlight<'a>(&'a SynthesisController);

impl<'a> InFlight<'a> {
    fn acquire(controller: &'a SynthesisController) -> Option<Self> {
        controller
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(controller))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}
