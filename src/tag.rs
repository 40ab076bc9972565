// src/tag.rs

//! Error tags and their runtime type descriptors.
//!
//! A tag is stored type-erased inside a [`TaggedError`](crate::TaggedError),
//! so every comparison or extraction goes through a checked downcast.

use std::any::{Any, TypeId};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

/// An application-defined error identifier.
///
/// Blanket-implemented for every `'static` type that can be compared and
/// printed and shared between threads: `&'static str`, `String`, integers,
/// [`ErrorCode`](crate::ErrorCode) and application enums all qualify.
///
/// `Display` is required on top of equality because tags are rendered into
/// the error string and into [`error_message`](crate::error_message). Types
/// without it (bare unit structs, tuples) need a `Display` impl or a newtype
/// before they can be used as tags.
pub trait Tag: Any + Display + Debug + PartialEq + Send + Sync {}

impl<T> Tag for T where T: Any + Display + Debug + PartialEq + Send + Sync {}

/// Object-safe view of a stored tag.
pub trait AnyTag: Display + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Runtime type of the concrete tag.
    fn tag_type(&self) -> TagType;

    /// True iff `other` has the same concrete type and compares equal.
    fn eq_any(&self, other: &dyn Any) -> bool;
}

impl<T: Tag> AnyTag for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn tag_type(&self) -> TagType {
        TagType::of::<T>()
    }

    fn eq_any(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// Runtime type descriptor of a tag.
///
/// Equality and hashing use the `TypeId`; the name is only for rendering.
#[derive(Clone, Copy, Debug)]
pub struct TagType {
    id: TypeId,
    name: &'static str,
}

impl TagType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TagType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TagType {}

impl Hash for TagType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
