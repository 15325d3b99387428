//! Key-code constants for the dialog keyboard contract.
//!
//! Hosts translating raw keyboard input into [`DomEvent`](crate::DomEvent)s
//! use these codes: Space and Escape arrive as `Keyup` events, while Enter
//! inside a prompt's input is expected to surface as a `Submit` event on the
//! form.

/// Enter key. Hosts map this to form submission rather than a keyup.
pub const ENTER: u32 = 13;

/// Escape key. Activates Cancel while a cancellable dialog is open.
pub const ESCAPE: u32 = 27;

/// Space key. Activates OK while a dialog without a text input is open.
pub const SPACE: u32 = 32;
