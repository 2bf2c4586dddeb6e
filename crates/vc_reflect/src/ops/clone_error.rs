use alloc::borrow::Cow;

use thiserror::Error;

/// A enumeration of all error outcomes that might happen when
/// running [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ReflectCloneError {
    /// The type does not support clone.
    #[error("`reflect_clone` not support for `{type_path}`")]
    NotSupport { type_path: Cow<'static, str> },

    /// The field cannot be cloned.
    #[error("field `{type_path}::{field}` cannot be made cloneable for `reflect_clone`")]
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}
