//! colloquy: a queued modal dialog manager.
//!
//! Alert, confirm, and prompt dialogs presented over a host surface, one at
//! a time. Requests are serialized through a FIFO queue, keyboard focus is
//! trapped inside the active dialog's controls, and every listener lives
//! exactly as long as the request it serves. The host (a real page bridge,
//! a widget toolkit, or the in-memory [`TestHost`]) plugs in behind the
//! [`DialogHost`] trait and feeds interaction back through
//! [`DialogManager::dispatch`].
//!
//! ```
//! use colloquy::{DialogManager, DialogRequest, TestHost};
//!
//! # fn main() -> colloquy::DialogResult<()> {
//! let mut dialogs = DialogManager::new(TestHost::new());
//! dialogs
//!     .alert("Welcome back.")?
//!     .enqueue(
//!         DialogRequest::confirm("Restore the previous session?")
//!             .on_accept(|_| println!("restoring"))
//!             .on_deny(|_| println!("starting fresh")),
//!     )?;
//! # Ok(())
//! # }
//! ```
//!
//! Resolution is callback-driven: the enqueue operations return immediately
//! and the accept/deny actions run only after the resolved dialog's
//! listeners are torn down, so a callback that enqueues a follow-up dialog
//! observes a clean manager.

pub mod dialog;
pub mod error;
pub mod host;
pub mod keys;

mod validate;

pub use dialog::{
    render, ButtonFocus, ControlId, DialogConfig, DialogKind, DialogManager, DialogRequest,
    Labels, Phase, Tag, ViewNode,
};
pub use error::{DialogError, DialogResult};
pub use host::{DialogHost, DomEvent, EventKind, ShowTransition, Surface, TestHost};
