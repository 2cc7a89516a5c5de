/// Keys the controller cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Where keyboard focus is when the stroke arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS, Super elsewhere
    pub meta: bool,
    pub shift: bool,
    pub focus: Focus,
}

impl KeyStroke {
    pub fn new(key: Key, focus: Focus) -> Self {
        Self { key, ctrl: false, meta: false, shift: false, focus }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl+Enter or Meta+Enter while the input has focus.
    pub fn is_submit_accelerator(&self) -> bool {
        self.focus == Focus::Input && self.key == Key::Enter && (self.ctrl || self.meta)
    }
}

/// What the host should do with the keystroke after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Consumed; the default action (newline) must not reach the text field
    Suppressed,
    Passthrough,
}
