use crate::info::{Type, Typed};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// "Opaque" means the type's internal representation is not exposed, for
/// example primitive types like `u64` or heap-backed types like `String`.
/// A path ends at an opaque value.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
