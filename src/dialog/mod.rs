//! Dialog system for queued modal prompts
//!
//! This module provides the dialog manager and its supporting pieces: the
//! request model, the presentation config, the pure view renderer, and the
//! transient per-presentation control state.

pub mod config;
pub mod manager;
pub mod request;
pub mod view;

pub(crate) mod controls;

pub use config::{ButtonFocus, DialogConfig, Labels};
pub use manager::{DialogManager, Phase};
pub use request::{DialogKind, DialogRequest};
pub use view::{render, ControlId, Tag, ViewNode};
