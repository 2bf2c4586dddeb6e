use crate::info::{Type, Typed};

// -----------------------------------------------------------------------------
// FuncInfo

/// A container for compile-time callable info.
///
/// The signature of a callable value is only known once it holds a
/// function, see [`Function::signature`](crate::ops::Function::signature).
#[derive(Debug, Clone)]
pub struct FuncInfo {
    ty: Type,
}

impl FuncInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`FuncInfo`].
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
