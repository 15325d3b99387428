//! Pure view construction for the active request.
//!
//! [`render`] turns the queue head and the manager configuration into a
//! [`ViewNode`] tree. Nothing here touches a host: the same request and
//! config always produce the same tree, so markup generation is testable
//! without a live page. The host materializes the tree in
//! [`DialogHost::mount`](crate::DialogHost::mount).

use serde::{Serialize, Serializer};
use std::fmt;

use crate::dialog::config::{ButtonFocus, DialogConfig};
use crate::dialog::request::{DialogKind, DialogRequest};
use crate::host::DialogHost;

/// Prefix for every generated class name and control id.
pub const PREFIX: &str = "colloquy";

/// Element tags the dialog system produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Div,
    Section,
    Article,
    Nav,
    Form,
    Input,
    Button,
    Anchor,
    Paragraph,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
            Self::Nav => "nav",
            Self::Form => "form",
            Self::Input => "input",
            Self::Button => "button",
            Self::Anchor => "a",
            Self::Paragraph => "p",
        }
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Identifiers for the interactive controls a render produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The OK (or Submit) button.
    Ok,
    /// The Cancel button.
    Cancel,
    /// The prompt text input.
    Input,
    /// The prompt form element.
    Form,
    /// The focus-containment sentinel, always last in the tree.
    ResetFocus,
    /// The hidden anchor focused under [`ButtonFocus::None`].
    NoneFocus,
}

impl ControlId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "colloquy-ok",
            Self::Cancel => "colloquy-cancel",
            Self::Input => "colloquy-text",
            Self::Form => "colloquy-form",
            Self::ResetFocus => "colloquy-reset-focus",
            Self::NoneFocus => "colloquy-none-focus",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ControlId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One node of the rendered element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewNode {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ControlId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ControlId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for a control by id.
    pub fn find(&self, id: ControlId) -> Option<&ViewNode> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Depth-first search for the first node carrying a class.
    pub fn find_by_class(&self, class: &str) -> Option<&ViewNode> {
        if self.classes.iter().any(|c| c == class) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }
}

/// Class string for the visible dialog container.
pub fn dialog_classes() -> String {
    format!("{PREFIX}-dialog")
}

/// Class string for the hidden dialog container.
pub fn dialog_hidden_classes() -> String {
    format!("{PREFIX}-dialog is-{PREFIX}-dialog-hidden")
}

/// Class string for the visible cover.
pub fn cover_classes() -> String {
    format!("{PREFIX}-cover")
}

/// Class string for the hidden cover.
pub fn cover_hidden_classes() -> String {
    format!("{PREFIX}-cover is-{PREFIX}-cover-hidden")
}

/// Build the element tree for a request under the given configuration.
///
/// Structure, in order: an optional hidden none-focus anchor (only under
/// [`ButtonFocus::None`]), the article with message, prompt input, and
/// button bar (wrapped in a form for prompts), and the reset-focus sentinel
/// as the last element.
pub fn render<H: DialogHost>(request: &DialogRequest<H>, config: &DialogConfig) -> ViewNode {
    let mut inner = ViewNode::new(Tag::Div).with_class(format!("{PREFIX}-dialog-inner"));

    if config.button_focus == ButtonFocus::None {
        inner = inner.with_child(none_focus_anchor());
    }

    let article = article(request, config);
    inner = if request.kind().has_input() {
        inner.with_child(
            ViewNode::new(Tag::Form)
                .with_id(ControlId::Form)
                .with_child(article),
        )
    } else {
        inner.with_child(article)
    };

    inner.with_child(reset_focus_anchor())
}

fn article<H: DialogHost>(request: &DialogRequest<H>, config: &DialogConfig) -> ViewNode {
    let mut article = ViewNode::new(Tag::Article).with_class(format!("{PREFIX}-inner"));

    article = article.with_child(
        ViewNode::new(Tag::Paragraph)
            .with_class(format!("{PREFIX}-message"))
            .with_text(request.message()),
    );

    if request.kind().has_input() {
        article = article.with_child(input_field());
    }

    article.with_child(button_nav(request.kind(), config))
}

fn input_field() -> ViewNode {
    ViewNode::new(Tag::Div)
        .with_class(format!("{PREFIX}-text-wrapper"))
        .with_child(
            ViewNode::new(Tag::Input)
                .with_id(ControlId::Input)
                .with_class(format!("{PREFIX}-text"))
                .with_attr("type", "text"),
        )
}

fn button_nav(kind: DialogKind, config: &DialogConfig) -> ViewNode {
    let nav = ViewNode::new(Tag::Nav).with_class(format!("{PREFIX}-buttons"));

    match kind {
        DialogKind::Alert => nav.with_child(ok_button(config, false)),
        DialogKind::Confirm | DialogKind::Prompt => {
            let ok = ok_button(config, kind.has_input());
            let cancel = cancel_button(config);
            if config.button_reverse {
                nav.with_child(ok).with_child(cancel)
            } else {
                nav.with_child(cancel).with_child(ok)
            }
        }
    }
}

fn ok_button(config: &DialogConfig, submit: bool) -> ViewNode {
    ViewNode::new(Tag::Button)
        .with_id(ControlId::Ok)
        .with_class(format!("{PREFIX}-button"))
        .with_class(format!("{PREFIX}-button-ok"))
        .with_attr("role", "button")
        .with_attr("type", if submit { "submit" } else { "button" })
        .with_text(config.labels.ok.clone())
}

fn cancel_button(config: &DialogConfig) -> ViewNode {
    ViewNode::new(Tag::Button)
        .with_id(ControlId::Cancel)
        .with_class(format!("{PREFIX}-button"))
        .with_class(format!("{PREFIX}-button-cancel"))
        .with_attr("role", "button")
        .with_attr("type", "button")
        .with_text(config.labels.cancel.clone())
}

fn reset_focus_anchor() -> ViewNode {
    ViewNode::new(Tag::Anchor)
        .with_id(ControlId::ResetFocus)
        .with_class(format!("{PREFIX}-reset-focus"))
        .with_attr("href", "#")
        .with_text("Reset Focus")
}

fn none_focus_anchor() -> ViewNode {
    ViewNode::new(Tag::Anchor)
        .with_id(ControlId::NoneFocus)
        .with_class(format!("{PREFIX}-hidden"))
        .with_attr("href", "#")
}
