//! Host abstraction for the dialog system.
//!
//! The manager never touches a real page directly. Everything it needs from
//! the outside world is bundled behind the [`DialogHost`] trait: an element
//! service (create, mount, lookup, focus), an event service (attach/detach),
//! and a presentation transition service (show/hide). A host forwards user
//! interaction back into the core through [`DialogManager::dispatch`] and
//! signals a finished show transition through [`DialogManager::notify_shown`].
//!
//! [`DialogManager::dispatch`]: crate::DialogManager::dispatch
//! [`DialogManager::notify_shown`]: crate::DialogManager::notify_shown


pub use test::TestHost;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dialog::view::{ControlId, Tag, ViewNode};

/// Event categories the manager binds listeners for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A pointer activation on a control.
    Click,
    /// Form submission (Enter inside the prompt input).
    Submit,
    /// A key released while the dialog is open.
    Keyup,
    /// An element received keyboard focus.
    Focus,
}

/// A host event targeting a mounted element.
#[derive(Debug, Clone)]
pub struct DomEvent<H> {
    /// The element the event fired on.
    pub target: H,

    /// Event category.
    pub kind: EventKind,

    /// Key code for `Keyup` events, `None` otherwise. See [`crate::keys`].
    pub key: Option<u32>,
}

impl<H> DomEvent<H> {
    /// Create an event with no key payload.
    pub fn new(target: H, kind: EventKind) -> Self {
        Self {
            target,
            kind,
            key: None,
        }
    }

    /// Create a keyup event carrying a key code.
    pub fn keyup(target: H, key: u32) -> Self {
        Self {
            target,
            kind: EventKind::Keyup,
            key: Some(key),
        }
    }
}

/// The container and cover/backdrop pair owned by one manager, created
/// lazily on first use and reused for the manager's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface<H> {
    /// The dialog container element.
    pub element: H,

    /// The cover element rendered behind the container.
    pub cover: H,
}

/// How the host's show transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTransition {
    /// The dialog is visible as soon as `dialog_show` returns; initial focus
    /// is applied immediately.
    Immediate,
    /// The host animates the transition and will call
    /// [`DialogManager::notify_shown`](crate::DialogManager::notify_shown)
    /// once the dialog is actually visible.
    Deferred,
}

/// Backend services the dialog manager drives.
///
/// One implementor covers the element, event, and transition services; the
/// associated [`Handle`](DialogHost::Handle) is whatever cheap reference the
/// host uses to identify an element.
pub trait DialogHost {
    /// Host element reference.
    type Handle: Clone + PartialEq + fmt::Debug;

    // --- element service ---

    /// Create a detached element with the given class string.
    fn create(&mut self, tag: Tag, classes: &str) -> Self::Handle;

    /// Mark an element inserted and observable.
    fn ready(&mut self, element: &Self::Handle);

    /// The document body, target of the dialog keyup listener.
    fn body(&self) -> Self::Handle;

    /// Replace the container's content with the rendered view tree.
    fn mount(&mut self, container: &Self::Handle, view: &ViewNode);

    /// Look up a mounted control by id. Returns `None` when the current
    /// content has no such control.
    fn lookup(&self, control: ControlId) -> Option<Self::Handle>;

    /// Replace an element's class string.
    fn set_classes(&mut self, element: &Self::Handle, classes: &str);

    /// Set a text input's value.
    fn set_value(&mut self, element: &Self::Handle, value: &str);

    /// Read a text input's current value.
    fn value(&self, element: &Self::Handle) -> String;

    /// Move keyboard focus to an element.
    fn focus(&mut self, element: &Self::Handle);

    /// Select the full contents of a text input.
    fn select_all(&mut self, element: &Self::Handle);

    /// The element currently holding keyboard focus, if any.
    fn focused(&self) -> Option<Self::Handle>;

    // --- event service ---

    /// Start delivering `event` on `element` to the manager.
    fn attach(&mut self, element: &Self::Handle, event: EventKind);

    /// Stop delivering `event` on `element`.
    fn detach(&mut self, element: &Self::Handle, event: EventKind);

    // --- transition service ---

    /// Run the visual show transition for the surface.
    fn dialog_show(&mut self, surface: &Surface<Self::Handle>) -> ShowTransition;

    /// Run the visual hide transition for the surface.
    fn dialog_hide(&mut self, surface: &Surface<Self::Handle>);
}
