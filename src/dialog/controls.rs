//! Transient per-presentation state: control handles and live listeners.

use tracing::trace;

use crate::host::{DialogHost, EventKind};

/// Which internal handler a binding routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandlerRole {
    /// OK clicked.
    Accept,
    /// Cancel clicked.
    Deny,
    /// Prompt form submitted.
    Submit,
    /// Key released on the body.
    Keyup,
    /// Focus landed on the containment sentinel.
    ResetFocus,
}

/// Handles to the currently mounted interactive elements. Valid only while a
/// request is active; replaced wholesale on every render.
#[derive(Debug)]
pub(crate) struct Controls<H> {
    pub ok: H,
    pub cancel: Option<H>,
    pub input: Option<H>,
    pub form: Option<H>,
    pub reset: H,
    /// Initial-focus target when no input is present.
    pub initial_focus: H,
}

#[derive(Debug)]
struct Binding<H> {
    target: H,
    event: EventKind,
    role: HandlerRole,
}

/// The record of exactly the listeners bound for the active request, so
/// teardown detaches precisely what was attached.
#[derive(Debug)]
pub(crate) struct ListenerSet<H> {
    bindings: Vec<Binding<H>>,
}

impl<H: Clone + PartialEq> ListenerSet<H> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Attach a listener on the host and record it for teardown.
    pub fn bind<Host>(&mut self, host: &mut Host, target: &H, event: EventKind, role: HandlerRole)
    where
        Host: DialogHost<Handle = H>,
    {
        host.attach(target, event);
        trace!(?event, ?role, "listener bound");
        self.bindings.push(Binding {
            target: target.clone(),
            event,
            role,
        });
    }

    /// Detach every recorded listener.
    pub fn unbind_all<Host>(&mut self, host: &mut Host)
    where
        Host: DialogHost<Handle = H>,
    {
        for binding in self.bindings.drain(..) {
            host.detach(&binding.target, binding.event);
        }
    }

    /// The handler role a live binding routes this event to, if any.
    pub fn match_event(&self, target: &H, event: EventKind) -> Option<HandlerRole> {
        self.bindings
            .iter()
            .find(|binding| binding.target == *target && binding.event == event)
            .map(|binding| binding.role)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
