//! Error types for the dialog system.

use crate::dialog::view::ControlId;

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// A request precondition was violated. Raised synchronously, before any
    /// queue or surface state changes.
    #[error("invalid dialog request: {0}")]
    InvalidArgument(&'static str),

    /// A control the render deterministically produces was not found by the
    /// host after mount. This is a host defect and is propagated rather than
    /// recovered from.
    #[error("dialog control '{0}' missing after render")]
    MissingControl(ControlId),
}
