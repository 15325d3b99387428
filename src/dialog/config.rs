//! Presentation settings shared by every request a manager shows.

use serde::{Deserialize, Serialize};

/// Which control receives initial focus when the dialog has no text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonFocus {
    /// Focus the OK control.
    Ok,
    /// Focus the Cancel control, falling back to OK when there is none.
    Cancel,
    /// Focus a hidden anchor, leaving no visible control focused.
    None,
}

impl Default for ButtonFocus {
    fn default() -> Self {
        Self::Ok
    }
}

/// Display strings for the default buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub ok: String,
    pub cancel: String,
}

impl Labels {
    pub fn new(ok: impl Into<String>, cancel: impl Into<String>) -> Self {
        Self {
            ok: ok.into(),
            cancel: cancel.into(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new("OK", "Cancel")
    }
}

/// Dialog presentation configuration. Mutable between presentations; not
/// per-request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Initial-focus target for dialogs without a text input.
    #[serde(default)]
    pub button_focus: ButtonFocus,

    /// Render OK before Cancel instead of the default Cancel-then-OK order.
    #[serde(default)]
    pub button_reverse: bool,

    /// Button display strings.
    #[serde(default)]
    pub labels: Labels,
}

impl DialogConfig {
    /// Create a configuration with the default focus, order, and labels.
    pub fn new() -> Self {
        Self {
            button_focus: ButtonFocus::default(),
            button_reverse: false,
            labels: Labels::default(),
        }
    }

    pub fn with_button_focus(mut self, focus: ButtonFocus) -> Self {
        self.button_focus = focus;
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.button_reverse = reversed;
        self
    }

    pub fn with_labels(mut self, ok: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.labels = Labels::new(ok, cancel);
        self
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self::new()
    }
}
