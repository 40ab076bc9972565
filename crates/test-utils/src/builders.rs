#![allow(dead_code)]

use std::fmt;

use gerror::{BoxError, ErrorCode, Tag, TaggedError};

/// Builder for cause chains, innermost error first.
///
/// ```ignore
/// let err = ChainBuilder::root("ErrDb", "connection refused")
///     .wrap("ErrRepo")
///     .wrap("ErrService")
///     .build();
/// ```
pub struct ChainBuilder {
    current: TaggedError,
}

impl ChainBuilder {
    pub fn root<T: Tag>(tag: T, message: &str) -> Self {
        Self {
            current: TaggedError::new(tag, message),
        }
    }

    /// Start from a plain (non-tagged) error.
    pub fn from_plain<T: Tag>(tag: T, cause: impl Into<BoxError>) -> Self {
        Self {
            current: TaggedError::from_cause(tag, cause),
        }
    }

    pub fn wrap<T: Tag>(self, tag: T) -> Self {
        Self {
            current: TaggedError::from_cause(tag, self.current),
        }
    }

    pub fn build(self) -> TaggedError {
        self.current
    }
}

/// Chain of `depth` wrappers over a root error; levels are tagged
/// `ErrorCode("level-0")` (root) up to `ErrorCode("level-{depth}")`.
pub fn numbered_chain(depth: usize, root_message: &str) -> TaggedError {
    let mut builder = ChainBuilder::root(ErrorCode::new("level-0"), root_message);
    for level in 1..=depth {
        builder = builder.wrap(ErrorCode::new(format!("level-{level}")));
    }
    builder.build()
}

/// A plain error type that is not a `TaggedError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainError(pub String);

impl PlainError {
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PlainError {}

/// Two nested calls ending in the construction of an `"ErrExample"` error.
pub fn outer() -> TaggedError {
    inner()
}

#[inline(never)]
fn inner() -> TaggedError {
    TaggedError::new("ErrExample", "Example error message")
}
