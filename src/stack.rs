// src/stack.rs

//! Bounded stack trace snapshots.

use std::backtrace::Backtrace;
use std::fmt;

/// Upper bound, in bytes, of a rendered stack trace.
pub const MAX_STACK_SIZE: usize = 4096;

/// Rendered call stack captured once at error construction.
///
/// Never longer than [`MAX_STACK_SIZE`] bytes; longer renderings are cut at
/// the last UTF-8 character boundary that fits.
#[derive(Clone, PartialEq, Eq)]
pub struct StackTrace(Box<str>);

impl StackTrace {
    /// Snapshot the calling thread's stack.
    ///
    /// Capture is unconditional and ignores `RUST_BACKTRACE`.
    pub fn capture() -> Self {
        Self::from_text(Backtrace::force_capture().to_string())
    }

    /// Wrap an already rendered trace, applying the size bound.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.len() > MAX_STACK_SIZE {
            let mut end = MAX_STACK_SIZE;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self(text.into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The full trace is noisy in `{:?}` output of the owning error.
impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackTrace")
            .field("len", &self.0.len())
            .finish()
    }
}
