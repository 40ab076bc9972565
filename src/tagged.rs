// src/tagged.rs

//! The [`TaggedError`] value type.

use std::error::Error;
use std::fmt;

use tracing::trace;

use crate::stack::StackTrace;
use crate::tag::{AnyTag, Tag, TagType};

/// Prefix of the message of an error built with [`TaggedError::from_cause`].
pub const CAUSE_PREFIX: &str = "Error caused by: ";

/// Boxed cause of a [`TaggedError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error carrying a tag, a message, the stack at construction time and an
/// optional cause.
///
/// Immutable once built. Rendering with `{}` yields
/// `"<tag> <tag type>: <message>\n<stack trace>"`.
pub struct TaggedError {
    tag: Box<dyn AnyTag>,
    tag_type: TagType,
    message: String,
    stack_trace: StackTrace,
    cause: Option<BoxError>,
}

impl TaggedError {
    /// Build an error from a tag and a message, capturing the current stack.
    pub fn new<T: Tag>(tag: T, message: impl Into<String>) -> Self {
        Self::build(tag, message.into(), None)
    }

    /// Like [`TaggedError::new`], with the message produced from format
    /// arguments. See also [`tagged_error!`](crate::tagged_error).
    pub fn new_fmt<T: Tag>(tag: T, args: fmt::Arguments<'_>) -> Self {
        Self::build(tag, fmt::format(args), None)
    }

    /// Wrap an existing error.
    ///
    /// The message becomes [`CAUSE_PREFIX`] followed by the cause's own
    /// rendering, and the cause is kept for [`TaggedError::cause`].
    pub fn from_cause<T, E>(tag: T, cause: E) -> Self
    where
        T: Tag,
        E: Into<BoxError>,
    {
        let cause = cause.into();
        let message = format!("{CAUSE_PREFIX}{cause}");
        Self::build(tag, message, Some(cause))
    }

    /// Wrap a cause that may be absent.
    ///
    /// Returns `None` when there is nothing to wrap, so callers cannot mistake
    /// a missing cause for a real error.
    pub fn from_optional_cause<T, E>(tag: T, cause: Option<E>) -> Option<Self>
    where
        T: Tag,
        E: Into<BoxError>,
    {
        cause.map(|cause| Self::from_cause(tag, cause))
    }

    fn build<T: Tag>(tag: T, message: String, cause: Option<BoxError>) -> Self {
        let stack_trace = StackTrace::capture();
        let tag_type = TagType::of::<T>();

        trace!(
            tag = %tag,
            tag_type = %tag_type,
            stack_bytes = stack_trace.len(),
            has_cause = cause.is_some(),
            "tagged error constructed"
        );

        Self {
            tag: Box::new(tag),
            tag_type,
            message,
            stack_trace,
            cause,
        }
    }

    pub fn tag(&self) -> &dyn AnyTag {
        self.tag.as_ref()
    }

    /// Checked access to the tag as a concrete type.
    pub fn tag_as<T: Tag>(&self) -> Option<&T> {
        self.tag.as_any().downcast_ref::<T>()
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack_trace
    }

    /// True iff `tag` has the stored tag's type and compares equal to it.
    pub fn equal_tag<T: Tag>(&self, tag: &T) -> bool {
        self.tag_type.is::<T>() && self.tag.eq_any(tag)
    }
}

impl fmt::Display for TaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}\n{}",
            self.tag, self.tag_type, self.message, self.stack_trace
        )
    }
}

impl fmt::Debug for TaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedError")
            .field("tag", &self.tag)
            .field("tag_type", &self.tag_type.name())
            .field("message", &self.message)
            .field("stack_trace", &self.stack_trace)
            .field("cause", &self.cause)
            .finish()
    }
}

impl Error for TaggedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Build a [`TaggedError`] with a formatted message.
///
/// ```
/// use gerror::tagged_error;
///
/// let err = tagged_error!("ErrNotFound", "no entry for key {}", 42);
/// assert_eq!(err.message(), "no entry for key 42");
/// ```
#[macro_export]
macro_rules! tagged_error {
    ($tag:expr, $($arg:tt)+) => {
        $crate::TaggedError::new_fmt($tag, ::std::format_args!($($arg)+))
    };
}
