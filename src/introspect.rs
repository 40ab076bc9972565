// src/introspect.rs

//! Helpers that inspect arbitrary errors for tagged-error information.

use std::error::Error;

use tracing::{debug, trace};

use crate::code::ErrorCode;
use crate::errors::{ClassifyError, Result};
use crate::tag::TagType;
use crate::tagged::TaggedError;

/// Interpret `err` as a [`TaggedError`] whose tag is an [`ErrorCode`].
pub fn try_error_code(err: &(dyn Error + 'static)) -> Result<ErrorCode> {
    let tagged = err
        .downcast_ref::<TaggedError>()
        .ok_or(ClassifyError::NotTagged)?;

    tagged
        .tag_as::<ErrorCode>()
        .cloned()
        .ok_or_else(|| ClassifyError::TagTypeMismatch {
            expected: TagType::of::<ErrorCode>().name(),
            found: tagged.tag_type().name(),
        })
}

/// Best-effort classification: the [`ErrorCode`] tag of `err`, or
/// [`ErrorCode::INTERNAL_ERROR`] when there is none.
pub fn error_code(err: &(dyn Error + 'static)) -> ErrorCode {
    match try_error_code(err) {
        Ok(code) => code,
        Err(reason) => {
            debug!(%reason, "falling back to internal error code");
            ErrorCode::INTERNAL_ERROR
        }
    }
}

/// Flatten a chain of tagged errors into `"<tag>: <tag>: ... <message>"`.
///
/// Each tagged level contributes its tag; the innermost tagged error
/// contributes its message. A non-tagged error anywhere in the chain ends it
/// with its plain rendering.
pub fn error_message(err: &(dyn Error + 'static)) -> String {
    let Some(tagged) = err.downcast_ref::<TaggedError>() else {
        return err.to_string();
    };

    match tagged.cause() {
        Some(cause) => {
            trace!(tag = %tagged.tag(), "unwrapping cause");
            format!("{}: {}", tagged.tag(), error_message(cause))
        }
        None => format!("{}: {}", tagged.tag(), tagged.message()),
    }
}
