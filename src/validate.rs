//! Fail-fast request preconditions.
//!
//! Every check runs synchronously before a request touches the queue, so a
//! rejected request has no side effect at all. Type-level preconditions
//! (message is a string, callbacks are callable) are already enforced by the
//! compiler; what remains checkable at runtime is the shape of the request
//! relative to its kind.

use crate::dialog::request::{DialogKind, DialogRequest};
use crate::error::{DialogError, DialogResult};
use crate::host::DialogHost;

/// Validate a request before it is enqueued.
pub(crate) fn check<H: DialogHost>(request: &DialogRequest<H>) -> DialogResult<()> {
    if request.message().is_empty() {
        return Err(DialogError::InvalidArgument("message must not be empty"));
    }

    if request.placeholder_text().is_some() && request.kind() != DialogKind::Prompt {
        return Err(DialogError::InvalidArgument(
            "placeholder is only valid for prompt dialogs",
        ));
    }

    if request.has_deny() && !request.kind().has_cancel() {
        return Err(DialogError::InvalidArgument(
            "alert dialogs have no cancel control to deny with",
        ));
    }

    match (request.kind(), request.accept_takes_value()) {
        (DialogKind::Prompt, Some(false)) => Err(DialogError::InvalidArgument(
            "prompt accept actions receive the submitted value",
        )),
        (DialogKind::Alert | DialogKind::Confirm, Some(true)) => Err(DialogError::InvalidArgument(
            "only prompt dialogs produce a value to accept",
        )),
        _ => Ok(()),
    }
}
