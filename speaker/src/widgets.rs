//! The named UI slots the controller reads and writes.

use thiserror::Error;
use tracing::{debug, error};

use crate::PlaybackUrl;

pub const IDLE_LABEL: &str = "Synthesize Speech";
pub const BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub disabled: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            label: IDLE_LABEL.to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
}

/// Drop-down of voice presets. An empty `selected` means nothing is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetSelector {
    pub options: Vec<String>,
    pub selected: String,
}

impl PresetSelector {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: String::new(),
        }
    }

    /// Select `preset`, or clear the selection with `None`/`""`.
    /// Unknown presets leave the selection untouched.
    pub fn select(&mut self, preset: Option<&str>) -> bool {
        match preset.filter(|p| !p.is_empty()) {
            None => {
                self.selected.clear();
                true
            }
            Some(p) if self.options.iter().any(|o| o == p) => {
                self.selected = p.to_string();
                true
            }
            Some(_) => false,
        }
    }
}

/// A container that is either shown or hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub hidden: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Self { hidden: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioPlayer {
    pub src: Option<PlaybackUrl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub hidden: bool,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            hidden: true,
        }
    }
}

/// Elements available to the controller at startup. `None` marks a slot the
/// host could not provide.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub trigger: Option<Button>,
    pub text_input: Option<TextField>,
    pub preset_selector: Option<PresetSelector>,
    pub audio_container: Option<Panel>,
    pub audio_player: Option<AudioPlayer>,
    pub loader: Option<Panel>,
    pub error_message: Option<Label>,
}

impl Page {
    /// Every slot present except the preset selector.
    pub fn standard() -> Self {
        Self {
            trigger: Some(Button::default()),
            text_input: Some(TextField::default()),
            preset_selector: None,
            audio_container: Some(Panel::default()),
            audio_player: Some(AudioPlayer::default()),
            loader: Some(Panel::default()),
            error_message: Some(Label::default()),
        }
    }

    /// Standard page plus a preset selector offering `presets`.
    pub fn with_presets(presets: Vec<String>) -> Self {
        Self {
            preset_selector: Some(PresetSelector::new(presets)),
            ..Self::standard()
        }
    }
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error("required element not found: {0}")]
    Missing(&'static str),
}

/// Bound UI state, owned by a single controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widgets {
    pub trigger: Button,
    pub text_input: TextField,
    pub preset_selector: Option<PresetSelector>,
    pub audio_container: Panel,
    pub audio_player: AudioPlayer,
    pub loader: Panel,
    pub error_message: Label,
}

impl Widgets {
    /// Bind the slots of `page`. The trigger and text input are required;
    /// other missing slots start out in their default, hidden state.
    pub fn bind(page: Page) -> Result<Self, BindError> {
        debug!(
            trigger = page.trigger.is_some(),
            text_input = page.text_input.is_some(),
            preset_selector = page.preset_selector.is_some(),
            audio_container = page.audio_container.is_some(),
            audio_player = page.audio_player.is_some(),
            loader = page.loader.is_some(),
            error_message = page.error_message.is_some(),
            "elements found"
        );
        let Some(trigger) = page.trigger else {
            error!("required element not found: trigger");
            return Err(BindError::Missing("trigger"));
        };
        let Some(text_input) = page.text_input else {
            error!("required element not found: text input");
            return Err(BindError::Missing("text input"));
        };
        Ok(Self {
            trigger,
            text_input,
            preset_selector: page.preset_selector,
            audio_container: page.audio_container.unwrap_or_default(),
            audio_player: page.audio_player.unwrap_or_default(),
            loader: page.loader.unwrap_or_default(),
            error_message: page.error_message.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_trigger_and_text_input() {
        let no_trigger = Page {
            trigger: None,
            ..Page::standard()
        };
        assert!(matches!(
            Widgets::bind(no_trigger),
            Err(BindError::Missing("trigger"))
        ));

        let no_input = Page {
            text_input: None,
            ..Page::standard()
        };
        assert!(matches!(
            Widgets::bind(no_input),
            Err(BindError::Missing("text input"))
        ));
    }

    #[test]
    fn optional_slots_default_hidden() {
        let page = Page {
            trigger: Some(Button::default()),
            text_input: Some(TextField::default()),
            ..Page::default()
        };
        let w = Widgets::bind(page).unwrap();
        assert!(w.loader.hidden);
        assert!(w.audio_container.hidden);
        assert!(w.error_message.hidden);
        assert!(w.preset_selector.is_none());
    }

    #[test]
    fn selector_only_accepts_known_presets() {
        let mut sel = PresetSelector::new(vec!["calm".into(), "bright".into()]);
        assert!(sel.select(Some("calm")));
        assert!(!sel.select(Some("shouty")));
        assert_eq!(sel.selected, "calm");
        assert!(sel.select(None));
        assert_eq!(sel.selected, "");
    }
}
