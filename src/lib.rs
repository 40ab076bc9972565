// src/lib.rs

//! Tagged errors with a stack trace captured at construction.
//!
//! A [`TaggedError`] couples an application-defined tag with a message, a
//! bounded [`StackTrace`] and an optional cause. The helpers in
//! [`introspect`] classify arbitrary errors by [`ErrorCode`] and flatten
//! chains of causes into a single line.
//!
//! ```
//! use gerror::{ErrorCode, TaggedError, error_code, error_message};
//!
//! const NOT_FOUND: ErrorCode = ErrorCode::from_static("Not Found");
//!
//! let inner = TaggedError::new(NOT_FOUND, "no such user");
//! let outer = TaggedError::from_cause(ErrorCode::from_static("Lookup Failed"), inner);
//!
//! assert_eq!(error_message(&outer), "Lookup Failed: Not Found: no such user");
//! assert_eq!(error_code(&outer), ErrorCode::from_static("Lookup Failed"));
//! ```

pub mod code;
pub mod errors;
pub mod introspect;
pub mod stack;
pub mod tag;
pub mod tagged;

pub use crate::code::ErrorCode;
pub use crate::errors::{ClassifyError, Result};
pub use crate::introspect::{error_code, error_message, try_error_code};
pub use crate::stack::{MAX_STACK_SIZE, StackTrace};
pub use crate::tag::{AnyTag, Tag, TagType};
pub use crate::tagged::{BoxError, CAUSE_PREFIX, TaggedError};
