//! Queued dialog intents.
//!
//! A [`DialogRequest`] carries everything one dialog needs: its kind, the
//! message, optional resolution actions, and (for prompts) the pre-filled
//! input text. Requests are immutable once enqueued; only queue membership
//! changes afterwards.

use std::fmt;

use crate::dialog::manager::DialogManager;
use crate::host::DialogHost;

/// The three dialog shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// A message with a single OK control.
    Alert,
    /// A message with OK and Cancel controls.
    Confirm,
    /// A message with a text input, OK (form submit), and Cancel controls.
    Prompt,
}

impl DialogKind {
    /// Whether this shape renders a Cancel control.
    pub fn has_cancel(self) -> bool {
        !matches!(self, Self::Alert)
    }

    /// Whether this shape renders a text input.
    pub fn has_input(self) -> bool {
        matches!(self, Self::Prompt)
    }
}

/// Accept action, split by arity so a mismatch with the request kind is a
/// checkable precondition instead of a silently dropped value.
pub(crate) enum AcceptAction<H: DialogHost> {
    Unit(Box<dyn FnOnce(&mut DialogManager<H>)>),
    Value(Box<dyn FnOnce(&mut DialogManager<H>, String)>),
}

type DenyAction<H> = Box<dyn FnOnce(&mut DialogManager<H>)>;

/// One queued dialog intent.
///
/// Built with the kind constructors and fluent setters:
///
/// ```
/// use colloquy::{DialogRequest, TestHost};
///
/// let request: DialogRequest<TestHost> = DialogRequest::prompt("Project name?")
///     .with_placeholder("untitled")
///     .on_submit(|_dialogs, name| println!("creating {name}"))
///     .on_deny(|_dialogs| println!("cancelled"));
/// ```
///
/// Resolution actions receive the manager so they can enqueue follow-up
/// dialogs; they run strictly after the resolved dialog's listeners are torn
/// down and the queue has advanced, so the manager they see is in a clean
/// state.
pub struct DialogRequest<H: DialogHost> {
    kind: DialogKind,
    message: String,
    accept: Option<AcceptAction<H>>,
    deny: Option<DenyAction<H>>,
    placeholder: Option<String>,
}

impl<H: DialogHost> DialogRequest<H> {
    fn new(kind: DialogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            accept: None,
            deny: None,
            placeholder: None,
        }
    }

    /// An alert: message plus a single OK control.
    pub fn alert(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Alert, message)
    }

    /// A confirm: message plus OK and Cancel controls.
    pub fn confirm(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Confirm, message)
    }

    /// A prompt: message plus a text input, OK (submit), and Cancel controls.
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Prompt, message)
    }

    /// Run when the dialog is accepted. For prompts use [`on_submit`]
    /// instead; the mismatch is rejected at enqueue time.
    ///
    /// [`on_submit`]: DialogRequest::on_submit
    pub fn on_accept(mut self, action: impl FnOnce(&mut DialogManager<H>) + 'static) -> Self {
        self.accept = Some(AcceptAction::Unit(Box::new(action)));
        self
    }

    /// Run when a prompt is accepted, receiving the input's current value.
    pub fn on_submit(
        mut self,
        action: impl FnOnce(&mut DialogManager<H>, String) + 'static,
    ) -> Self {
        self.accept = Some(AcceptAction::Value(Box::new(action)));
        self
    }

    /// Run when the dialog is denied via Cancel or Escape.
    pub fn on_deny(mut self, action: impl FnOnce(&mut DialogManager<H>) + 'static) -> Self {
        self.deny = Some(Box::new(action));
        self
    }

    /// Pre-fill the prompt's input. Empty text is ignored at present time.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub(crate) fn has_deny(&self) -> bool {
        self.deny.is_some()
    }

    /// `Some(true)` when the accept action expects the submitted value.
    pub(crate) fn accept_takes_value(&self) -> Option<bool> {
        self.accept
            .as_ref()
            .map(|action| matches!(action, AcceptAction::Value(_)))
    }

    pub(crate) fn take_accept(&mut self) -> Option<AcceptAction<H>> {
        self.accept.take()
    }

    pub(crate) fn take_deny(&mut self) -> Option<DenyAction<H>> {
        self.deny.take()
    }
}

impl<H: DialogHost> fmt::Debug for DialogRequest<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("has_accept", &self.accept.is_some())
            .field("has_deny", &self.deny.is_some())
            .field("placeholder", &self.placeholder)
            .finish()
    }
}
