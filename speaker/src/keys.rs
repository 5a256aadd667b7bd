#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Command on macOS, the Windows key elsewhere.
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

/// A key pressed while the text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    /// Ctrl+Enter or Cmd+Enter.
    pub fn is_submit_shortcut(&self) -> bool {
        self.key == Key::Enter && (self.modifiers.ctrl || self.modifiers.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_shortcut() {
        assert!(KeyPress::new(Key::Enter).with_ctrl().is_submit_shortcut());
        assert!(KeyPress::new(Key::Enter).with_meta().is_submit_shortcut());
        assert!(!KeyPress::new(Key::Enter).is_submit_shortcut());
        assert!(!KeyPress::new(Key::Char('s')).with_ctrl().is_submit_shortcut());
    }
}
