//! Dialog manager: the queueing, focus, and lifecycle state machine.
//!
//! The manager is responsible for:
//! - Serializing requests through a FIFO queue with exactly one active head
//! - Presenting the head (render, mount, control lookup, listener binding)
//! - Routing host events to the active request's handlers
//! - Keeping keyboard focus inside the active dialog's controls
//! - Tearing down listeners before delivering any resolution action

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::dialog::config::{ButtonFocus, DialogConfig};
use crate::dialog::controls::{Controls, HandlerRole, ListenerSet};
use crate::dialog::request::{AcceptAction, DialogKind, DialogRequest};
use crate::dialog::view::{self, ControlId, Tag};
use crate::error::{DialogError, DialogResult};
use crate::host::{DialogHost, DomEvent, EventKind, ShowTransition, Surface};
use crate::{keys, validate};

/// Lifecycle state of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Queue empty; the surface, if it exists, is hidden.
    Idle,
    /// Head rendered and listeners live, but initial focus is deferred until
    /// the host reports the show transition complete.
    Opening,
    /// Head active and interactive.
    Presenting,
    /// Inside a resolution, between one request's teardown and the next
    /// request's render.
    Advancing,
}

/// A queued modal dialog manager.
///
/// One instance owns one dialog stack: its queue, its container/cover
/// surface, and its presentation config. Callers needing independent stacks
/// create separate managers.
pub struct DialogManager<H: DialogHost> {
    host: H,
    phase: Phase,
    queue: VecDeque<DialogRequest<H>>,
    surface: Option<Surface<H::Handle>>,
    controls: Option<Controls<H::Handle>>,
    listeners: ListenerSet<H::Handle>,
    /// Focus holder at the start of the current queue session, restored when
    /// the queue drains.
    callee: Option<H::Handle>,
    config: DialogConfig,
}

impl<H: DialogHost> DialogManager<H> {
    /// Create a manager with default presentation settings.
    pub fn new(host: H) -> Self {
        Self::with_config(host, DialogConfig::default())
    }

    /// Create a manager with the given presentation settings.
    pub fn with_config(host: H, config: DialogConfig) -> Self {
        Self {
            host,
            phase: Phase::Idle,
            queue: VecDeque::new(),
            surface: None,
            controls: None,
            listeners: ListenerSet::new(),
            callee: None,
            config,
        }
    }

    // --- accessors ---

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DialogConfig {
        &mut self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a dialog is currently shown.
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Number of queued requests, the active one included.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Kind of the active request, if one is shown.
    pub fn active_kind(&self) -> Option<DialogKind> {
        if self.phase == Phase::Idle {
            return None;
        }
        self.queue.front().map(|request| request.kind())
    }

    /// The container/cover pair, once created.
    pub fn surface(&self) -> Option<&Surface<H::Handle>> {
        self.surface.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // --- entry points ---

    /// Enqueue an alert with a single OK control.
    pub fn alert(&mut self, message: impl Into<String>) -> DialogResult<&mut Self> {
        self.enqueue(DialogRequest::alert(message))
    }

    /// Enqueue a confirm with OK and Cancel controls.
    pub fn confirm(&mut self, message: impl Into<String>) -> DialogResult<&mut Self> {
        self.enqueue(DialogRequest::confirm(message))
    }

    /// Enqueue a prompt with a text input, OK (submit), and Cancel controls.
    pub fn prompt(&mut self, message: impl Into<String>) -> DialogResult<&mut Self> {
        self.enqueue(DialogRequest::prompt(message))
    }

    /// Enqueue a built request. Presents immediately when nothing is shown;
    /// otherwise the request waits its turn in FIFO order.
    ///
    /// Fails fast with [`DialogError::InvalidArgument`] before any state
    /// change when the request shape is invalid.
    pub fn enqueue(&mut self, request: DialogRequest<H>) -> DialogResult<&mut Self> {
        validate::check(&request)?;
        self.ensure_surface();

        debug!(kind = ?request.kind(), queued = self.queue.len(), "dialog request enqueued");
        self.queue.push_back(request);

        if self.phase == Phase::Idle {
            // new queue session: remember where focus came from
            self.callee = self.host.focused();
            self.present(false)?;
        }
        Ok(self)
    }

    // --- host notifications ---

    /// Route a host event to the active request's handlers. Returns whether
    /// a live binding consumed the event; events with no live binding (from
    /// a previous request, or with no dialog open) are ignored.
    pub fn dispatch(&mut self, event: &DomEvent<H::Handle>) -> DialogResult<bool> {
        if self.listeners.is_empty() {
            return Ok(false);
        }
        let Some(role) = self.listeners.match_event(&event.target, event.kind) else {
            return Ok(false);
        };

        match role {
            HandlerRole::Accept | HandlerRole::Submit => {
                self.resolve_accept()?;
                Ok(true)
            }
            HandlerRole::Deny => {
                self.resolve_deny()?;
                Ok(true)
            }
            HandlerRole::Keyup => self.handle_keyup(event),
            HandlerRole::ResetFocus => {
                self.redirect_focus();
                Ok(true)
            }
        }
    }

    /// Called by hosts with deferred show transitions once the dialog is
    /// actually visible; applies the pending initial focus. Ignored outside
    /// the opening phase (e.g. when the dialog resolved mid-transition).
    pub fn notify_shown(&mut self) {
        if self.phase != Phase::Opening {
            warn!(phase = ?self.phase, "show transition completion ignored");
            return;
        }
        self.apply_initial_focus();
        self.phase = Phase::Presenting;
        debug!("show transition complete");
    }

    // --- presentation ---

    fn ensure_surface(&mut self) {
        if self.surface.is_some() {
            return;
        }
        let cover = self.host.create(Tag::Div, &view::cover_hidden_classes());
        let element = self.host.create(Tag::Section, &view::dialog_hidden_classes());
        self.host.ready(&cover);
        self.host.ready(&element);
        info!("dialog surface created");
        self.surface = Some(Surface { element, cover });
    }

    /// Render and activate the queue head. `from_queue` marks the draining
    /// path, where focus is applied immediately instead of waiting for the
    /// show transition.
    fn present(&mut self, from_queue: bool) -> DialogResult<()> {
        let Some(request) = self.queue.front() else {
            return Ok(());
        };
        let kind = request.kind();
        let placeholder = request.placeholder_text().map(str::to_owned);
        let tree = view::render(request, &self.config);

        let Some(surface) = self.surface.clone() else {
            return Ok(());
        };

        self.phase = if from_queue { Phase::Presenting } else { Phase::Opening };
        self.host.mount(&surface.element, &tree);
        let show = self.host.dialog_show(&surface);

        let reset = self.require(ControlId::ResetFocus)?;
        let ok = self.require(ControlId::Ok)?;
        let cancel = self.host.lookup(ControlId::Cancel);
        let input = self.host.lookup(ControlId::Input);
        let form = self.host.lookup(ControlId::Form);

        // the kind decides which controls must exist, not lookup luck
        if kind.has_cancel() && cancel.is_none() {
            return Err(DialogError::MissingControl(ControlId::Cancel));
        }
        if kind.has_input() {
            if input.is_none() {
                return Err(DialogError::MissingControl(ControlId::Input));
            }
            if form.is_none() {
                return Err(DialogError::MissingControl(ControlId::Form));
            }
        }

        let initial_focus = match (self.config.button_focus, cancel.as_ref()) {
            (ButtonFocus::Cancel, Some(cancel)) => cancel.clone(),
            (ButtonFocus::None, _) => self.require(ControlId::NoneFocus)?,
            _ => ok.clone(),
        };

        if let (Some(input), Some(text)) = (input.as_ref(), placeholder.as_deref()) {
            if !text.is_empty() {
                self.host.set_value(input, text);
            }
        }

        let controls = Controls {
            ok,
            cancel,
            input,
            form,
            reset,
            initial_focus,
        };

        // sentinel first, so containment is live before anything else
        self.listeners
            .bind(&mut self.host, &controls.reset, EventKind::Focus, HandlerRole::ResetFocus);
        self.listeners
            .bind(&mut self.host, &controls.ok, EventKind::Click, HandlerRole::Accept);
        if let Some(cancel) = controls.cancel.as_ref() {
            self.listeners
                .bind(&mut self.host, cancel, EventKind::Click, HandlerRole::Deny);
        }
        let body = self.host.body();
        self.listeners
            .bind(&mut self.host, &body, EventKind::Keyup, HandlerRole::Keyup);
        if let Some(form) = controls.form.as_ref() {
            self.listeners
                .bind(&mut self.host, form, EventKind::Submit, HandlerRole::Submit);
        }
        self.controls = Some(controls);

        debug!(?kind, from_queue, bound = self.listeners.len(), "dialog presented");

        if from_queue || show == ShowTransition::Immediate {
            self.apply_initial_focus();
            self.phase = Phase::Presenting;
        }
        Ok(())
    }

    fn require(&self, control: ControlId) -> DialogResult<H::Handle> {
        self.host
            .lookup(control)
            .ok_or(DialogError::MissingControl(control))
    }

    fn apply_initial_focus(&mut self) {
        let Some(controls) = self.controls.as_ref() else {
            return;
        };
        if let Some(input) = controls.input.as_ref() {
            self.host.focus(input);
            self.host.select_all(input);
        } else {
            self.host.focus(&controls.initial_focus);
        }
    }

    /// Focus guard: focus escaped past the last control, bring it back in.
    fn redirect_focus(&mut self) {
        let Some(controls) = self.controls.as_ref() else {
            return;
        };
        let target = controls
            .input
            .as_ref()
            .or(controls.cancel.as_ref())
            .unwrap_or(&controls.ok);
        debug!("focus guard redirect");
        self.host.focus(target);
    }

    // --- resolution ---

    fn handle_keyup(&mut self, event: &DomEvent<H::Handle>) -> DialogResult<bool> {
        let Some(kind) = self.active_kind() else {
            return Ok(false);
        };
        match event.key {
            Some(keys::SPACE) if !kind.has_input() => {
                self.resolve_accept()?;
                Ok(true)
            }
            Some(keys::ESCAPE) if kind.has_cancel() => {
                self.resolve_deny()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn resolve_accept(&mut self) -> DialogResult<()> {
        let Some(kind) = self.queue.front().map(|request| request.kind()) else {
            return Ok(());
        };
        // capture the value before the queue advances and replaces controls
        let value = if kind.has_input() {
            self.controls
                .as_ref()
                .and_then(|controls| controls.input.as_ref())
                .map(|input| self.host.value(input))
        } else {
            None
        };

        debug!(?kind, "dialog accepted");
        self.teardown();
        let Some(mut resolved) = self.queue.pop_front() else {
            return Ok(());
        };
        let accept = resolved.take_accept();
        self.hide_or_advance()?;

        match accept {
            Some(AcceptAction::Unit(action)) => action(self),
            Some(AcceptAction::Value(action)) => action(self, value.unwrap_or_default()),
            None => {}
        }
        Ok(())
    }

    fn resolve_deny(&mut self) -> DialogResult<()> {
        let Some(kind) = self.queue.front().map(|request| request.kind()) else {
            return Ok(());
        };
        debug!(?kind, "dialog denied");
        self.teardown();
        let Some(mut resolved) = self.queue.pop_front() else {
            return Ok(());
        };
        let deny = resolved.take_deny();
        self.hide_or_advance()?;

        if let Some(action) = deny {
            action(self);
        }
        Ok(())
    }

    fn teardown(&mut self) {
        self.listeners.unbind_all(&mut self.host);
        self.phase = Phase::Advancing;
    }

    /// Present the next request back-to-back, or hide the surface and
    /// restore focus to the pre-session holder when the queue is drained.
    fn hide_or_advance(&mut self) -> DialogResult<()> {
        if !self.queue.is_empty() {
            return self.present(true);
        }

        self.phase = Phase::Idle;
        self.controls = None;
        if let Some(surface) = self.surface.clone() {
            self.host
                .set_classes(&surface.element, &view::dialog_hidden_classes());
            self.host
                .set_classes(&surface.cover, &view::cover_hidden_classes());
            self.host.dialog_hide(&surface);
        }
        if let Some(callee) = self.callee.take() {
            self.host.focus(&callee);
        }
        info!("dialog queue drained");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test::ElementId;
    use crate::host::TestHost;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn click(dialogs: &mut DialogManager<TestHost>, control: ControlId) {
        let element = dialogs.host().control(control).expect("control mounted");
        dialogs
            .dispatch(&DomEvent::new(element, EventKind::Click))
            .expect("dispatch");
    }

    fn keyup(dialogs: &mut DialogManager<TestHost>, key: u32) -> bool {
        let body = dialogs.host().body();
        dialogs
            .dispatch(&DomEvent::keyup(body, key))
            .expect("dispatch")
    }

    fn submit(dialogs: &mut DialogManager<TestHost>) {
        let form = dialogs.host().control(ControlId::Form).expect("form mounted");
        dialogs
            .dispatch(&DomEvent::new(form, EventKind::Submit))
            .expect("dispatch");
    }

    fn shown_message(dialogs: &DialogManager<TestHost>) -> String {
        dialogs
            .host()
            .mounted()
            .and_then(|tree| tree.find_by_class("colloquy-message"))
            .and_then(|node| node.text.clone())
            .expect("message mounted")
    }

    fn type_into_input(dialogs: &mut DialogManager<TestHost>, text: &str) {
        let input = dialogs.host().control(ControlId::Input).expect("input mounted");
        dialogs.host_mut().set_value(&input, text);
    }

    /// A focused page element to restore to after the queue drains.
    fn focus_page_element(dialogs: &mut DialogManager<TestHost>) -> ElementId {
        let element = dialogs.host_mut().create(Tag::Div, "page");
        dialogs.host_mut().focus(&element);
        element
    }

    #[test]
    fn test_alert_presents_immediately() {
        init_tracing();
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.alert("Saved.").unwrap();

        assert!(dialogs.is_open());
        assert_eq!(dialogs.phase(), Phase::Presenting);
        assert_eq!(dialogs.active_kind(), Some(DialogKind::Alert));
        assert_eq!(dialogs.host().show_calls(), 1);
        assert_eq!(shown_message(&dialogs), "Saved.");
    }

    #[test]
    fn test_chaining() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs
            .alert("one")
            .unwrap()
            .confirm("two")
            .unwrap()
            .prompt("three")
            .unwrap();
        assert_eq!(dialogs.queue_len(), 3);
        assert_eq!(shown_message(&dialogs), "one");
    }

    #[test]
    fn test_accept_resolves_and_hides() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let accepted = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&accepted);
        dialogs
            .enqueue(DialogRequest::alert("Done.").on_accept(move |_| *flag.borrow_mut() = true))
            .unwrap();

        click(&mut dialogs, ControlId::Ok);

        assert!(*accepted.borrow());
        assert!(!dialogs.is_open());
        assert_eq!(dialogs.queue_len(), 0);
        assert_eq!(dialogs.host().hide_calls(), 1);
        let surface = dialogs.surface().expect("surface").clone();
        assert!(dialogs
            .host()
            .element_classes(&surface.element)
            .contains("hidden"));
    }

    #[test]
    fn test_fifo_ordering() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&order);
            dialogs
                .enqueue(
                    DialogRequest::confirm(name).on_accept(move |_| log.borrow_mut().push(name)),
                )
                .unwrap();
        }

        assert_eq!(shown_message(&dialogs), "first");
        click(&mut dialogs, ControlId::Ok);
        assert_eq!(shown_message(&dialogs), "second");
        click(&mut dialogs, ControlId::Ok);
        assert_eq!(shown_message(&dialogs), "third");
        click(&mut dialogs, ControlId::Ok);

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
        assert!(!dialogs.is_open());
    }

    #[test]
    fn test_at_most_one_active_listener_set() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.confirm("first").unwrap().confirm("second").unwrap();

        // reset focus + ok + cancel + body keyup
        assert_eq!(dialogs.host().listener_count(), 4);
        click(&mut dialogs, ControlId::Ok);
        // the second dialog's bindings replaced the first's entirely
        assert_eq!(dialogs.host().listener_count(), 4);
        click(&mut dialogs, ControlId::Ok);
        assert_eq!(dialogs.host().listener_count(), 0);
    }

    #[test]
    fn test_prompt_submit_delivers_typed_value() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let got = Rc::new(RefCell::new(None));
        let out = Rc::clone(&got);
        dialogs
            .enqueue(
                DialogRequest::prompt("Name?")
                    .on_submit(move |_, value| *out.borrow_mut() = Some(value)),
            )
            .unwrap();

        type_into_input(&mut dialogs, "ada");
        submit(&mut dialogs);

        assert_eq!(got.borrow().as_deref(), Some("ada"));
        assert!(!dialogs.is_open());
    }

    #[test]
    fn test_prompt_accept_delivers_unmodified_placeholder() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let got = Rc::new(RefCell::new(None));
        let out = Rc::clone(&got);
        dialogs
            .enqueue(
                DialogRequest::prompt("Name?")
                    .with_placeholder("anon")
                    .on_submit(move |_, value| *out.borrow_mut() = Some(value)),
            )
            .unwrap();

        click(&mut dialogs, ControlId::Ok);
        assert_eq!(got.borrow().as_deref(), Some("anon"));
    }

    #[test]
    fn test_prompt_accept_delivers_cleared_empty_value() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let got = Rc::new(RefCell::new(None));
        let out = Rc::clone(&got);
        dialogs
            .enqueue(
                DialogRequest::prompt("Name?")
                    .with_placeholder("anon")
                    .on_submit(move |_, value| *out.borrow_mut() = Some(value)),
            )
            .unwrap();

        type_into_input(&mut dialogs, "");
        click(&mut dialogs, ControlId::Ok);
        assert_eq!(got.borrow().as_deref(), Some(""));
    }

    #[test]
    fn test_empty_placeholder_not_applied() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs
            .enqueue(DialogRequest::prompt("Name?").with_placeholder(""))
            .unwrap();
        let input = dialogs.host().control(ControlId::Input).unwrap();
        assert_eq!(dialogs.host().value(&input), "");
    }

    #[test]
    fn test_escape_is_noop_on_alert() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.alert("Heads up.").unwrap();

        assert!(!keyup(&mut dialogs, keys::ESCAPE));
        assert!(dialogs.is_open());
        assert_eq!(dialogs.active_kind(), Some(DialogKind::Alert));
    }

    #[test]
    fn test_escape_denies_confirm() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let denied = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&denied);
        dialogs
            .enqueue(DialogRequest::confirm("Sure?").on_deny(move |_| *flag.borrow_mut() = true))
            .unwrap();

        assert!(keyup(&mut dialogs, keys::ESCAPE));
        assert!(*denied.borrow());
        assert!(!dialogs.is_open());
    }

    #[test]
    fn test_cancel_click_denies() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let denied = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&denied);
        dialogs
            .enqueue(DialogRequest::confirm("Sure?").on_deny(move |_| *flag.borrow_mut() = true))
            .unwrap();

        click(&mut dialogs, ControlId::Cancel);
        assert!(*denied.borrow());
        assert!(!dialogs.is_open());
    }

    #[test]
    fn test_space_accepts_confirm_but_not_prompt() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.confirm("Sure?").unwrap();
        assert!(keyup(&mut dialogs, keys::SPACE));
        assert!(!dialogs.is_open());

        // space must remain typable inside a prompt's input
        dialogs.prompt("Name?").unwrap();
        assert!(!keyup(&mut dialogs, keys::SPACE));
        assert!(dialogs.is_open());
    }

    #[test]
    fn test_queue_drain_restores_focus_once() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let page = focus_page_element(&mut dialogs);

        dialogs.confirm("first").unwrap().confirm("second").unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Ok));

        click(&mut dialogs, ControlId::Ok);
        // advancing keeps focus inside the dialog, not back on the page
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Ok));
        assert_ne!(dialogs.host().focused(), Some(page));

        click(&mut dialogs, ControlId::Ok);
        assert_eq!(dialogs.host().focused(), Some(page));
    }

    #[test]
    fn test_invalid_requests_leave_queue_unchanged() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.confirm("pending").unwrap();

        let invalid: [DialogRequest<TestHost>; 4] = [
            DialogRequest::alert(""),
            DialogRequest::confirm("Sure?").with_placeholder("x"),
            DialogRequest::alert("Done.").on_deny(|_| {}),
            DialogRequest::prompt("Name?").on_accept(|_| {}),
        ];
        for request in invalid {
            let error = dialogs.enqueue(request).err().expect("request rejected");
            assert!(matches!(error, DialogError::InvalidArgument(_)));
        }
        assert_eq!(dialogs.queue_len(), 1);
        assert_eq!(shown_message(&dialogs), "pending");
    }

    #[test]
    fn test_focus_guard_redirects_to_input_then_cancel_then_ok() {
        let mut dialogs = DialogManager::new(TestHost::new());

        dialogs.prompt("Name?").unwrap();
        let reset = dialogs.host().control(ControlId::ResetFocus).unwrap();
        dialogs.dispatch(&DomEvent::new(reset, EventKind::Focus)).unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Input));
        click(&mut dialogs, ControlId::Cancel);

        dialogs.confirm("Sure?").unwrap();
        let reset = dialogs.host().control(ControlId::ResetFocus).unwrap();
        dialogs.dispatch(&DomEvent::new(reset, EventKind::Focus)).unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Cancel));
        click(&mut dialogs, ControlId::Ok);

        dialogs.alert("Done.").unwrap();
        let reset = dialogs.host().control(ControlId::ResetFocus).unwrap();
        dialogs.dispatch(&DomEvent::new(reset, EventKind::Focus)).unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Ok));
    }

    #[test]
    fn test_initial_focus_follows_config() {
        let mut dialogs = DialogManager::with_config(
            TestHost::new(),
            DialogConfig::new().with_button_focus(ButtonFocus::Cancel),
        );
        dialogs.confirm("Sure?").unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Cancel));
        click(&mut dialogs, ControlId::Cancel);

        // alert has no cancel control: fall back to ok
        dialogs.alert("Done.").unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Ok));
    }

    #[test]
    fn test_initial_focus_none_uses_hidden_anchor() {
        let mut dialogs = DialogManager::with_config(
            TestHost::new(),
            DialogConfig::new().with_button_focus(ButtonFocus::None),
        );
        dialogs.confirm("Sure?").unwrap();
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::NoneFocus));
    }

    #[test]
    fn test_prompt_initial_focus_selects_input() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs
            .enqueue(DialogRequest::prompt("Name?").with_placeholder("anon"))
            .unwrap();
        let input = dialogs.host().control(ControlId::Input).unwrap();
        assert_eq!(dialogs.host().focused(), Some(input));
        assert_eq!(dialogs.host().selection(), Some(input));
    }

    #[test]
    fn test_deferred_show_delays_initial_focus() {
        let mut dialogs = DialogManager::new(TestHost::with_deferred_show());
        let page = focus_page_element(&mut dialogs);

        dialogs.prompt("Name?").unwrap();
        assert_eq!(dialogs.phase(), Phase::Opening);
        // focus untouched until the transition reports completion
        assert_eq!(dialogs.host().focused(), Some(page));

        dialogs.notify_shown();
        assert_eq!(dialogs.phase(), Phase::Presenting);
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Input));
    }

    #[test]
    fn test_stale_notify_shown_is_ignored() {
        let mut dialogs = DialogManager::new(TestHost::with_deferred_show());
        dialogs.confirm("Sure?").unwrap();

        // resolved mid-transition: the late completion must not refocus
        click(&mut dialogs, ControlId::Ok);
        assert!(!dialogs.is_open());
        dialogs.notify_shown();
        assert!(!dialogs.is_open());
        assert_eq!(dialogs.host().focused_control(), None);
    }

    #[test]
    fn test_advance_applies_focus_without_waiting() {
        let mut dialogs = DialogManager::new(TestHost::with_deferred_show());
        dialogs.confirm("first").unwrap().confirm("second").unwrap();
        dialogs.notify_shown();

        click(&mut dialogs, ControlId::Ok);
        // draining path: no notify_shown needed for the second dialog
        assert_eq!(dialogs.phase(), Phase::Presenting);
        assert_eq!(dialogs.host().focused_control(), Some(ControlId::Ok));
    }

    #[test]
    fn test_events_ignored_when_idle() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.alert("Done.").unwrap();
        let ok = dialogs.host().control(ControlId::Ok).unwrap();
        click(&mut dialogs, ControlId::Ok);

        // stale event from the resolved dialog
        assert!(!dialogs.dispatch(&DomEvent::new(ok, EventKind::Click)).unwrap());
        assert!(!keyup(&mut dialogs, keys::ESCAPE));
    }

    #[test]
    fn test_nested_enqueue_from_callback_keeps_fifo() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs
            .enqueue(DialogRequest::confirm("first").on_accept(|dialogs| {
                dialogs.alert("nested").expect("nested enqueue");
            }))
            .unwrap();
        dialogs.confirm("second").unwrap();

        click(&mut dialogs, ControlId::Ok);
        // the already-queued request presents before the nested one
        assert_eq!(shown_message(&dialogs), "second");
        click(&mut dialogs, ControlId::Ok);
        assert_eq!(shown_message(&dialogs), "nested");
        click(&mut dialogs, ControlId::Ok);
        assert!(!dialogs.is_open());
    }

    #[test]
    fn test_nested_enqueue_after_drain_reopens() {
        let mut dialogs = DialogManager::new(TestHost::new());
        let page = focus_page_element(&mut dialogs);
        dialogs
            .enqueue(DialogRequest::confirm("first").on_accept(|dialogs| {
                dialogs.alert("follow-up").expect("nested enqueue");
            }))
            .unwrap();

        click(&mut dialogs, ControlId::Ok);
        // the queue drained before the callback ran, then reopened
        assert!(dialogs.is_open());
        assert_eq!(shown_message(&dialogs), "follow-up");

        click(&mut dialogs, ControlId::Ok);
        assert_eq!(dialogs.host().focused(), Some(page));
    }

    #[test]
    fn test_surface_created_once() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.alert("one").unwrap();
        let surface = dialogs.surface().cloned().expect("surface");
        click(&mut dialogs, ControlId::Ok);

        dialogs.alert("two").unwrap();
        assert_eq!(dialogs.surface().cloned(), Some(surface));
    }

    #[test]
    fn test_config_mut_applies_to_next_presentation() {
        let mut dialogs = DialogManager::new(TestHost::new());
        dialogs.config_mut().labels.ok = "Proceed".to_string();
        dialogs.confirm("Sure?").unwrap();
        let tree = dialogs.host().mounted().unwrap();
        assert_eq!(
            tree.find(ControlId::Ok).and_then(|n| n.text.as_deref()),
            Some("Proceed")
        );
    }
}
