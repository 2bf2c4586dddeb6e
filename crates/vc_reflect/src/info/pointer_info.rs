use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// PointerInfo

/// A container for compile-time pointer-like info.
///
/// Covers `Option<T>`, `Box<T>`, `Arc<T>`, and the dynamic slots
/// ([`Dyn`](crate::ops::Dyn), JSON values) whose pointee type is only
/// known at runtime.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Option<u32>>::type_info().as_pointer().unwrap();
/// assert!(info.is_nullable());
/// assert!(info.pointee_info().unwrap().type_is::<u32>());
///
/// let info = <Box<u32>>::type_info().as_pointer().unwrap();
/// assert!(!info.is_nullable());
/// ```
#[derive(Debug, Clone)]
pub struct PointerInfo {
    ty: Type,
    pointee_info: Option<fn() -> &'static TypeInfo>,
    nullable: bool,
}

impl PointerInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`PointerInfo`] with a static pointee type.
    #[inline]
    pub fn new<TPointer: Typed, TPointee: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            pointee_info: Some(TPointee::type_info),
            nullable,
        }
    }

    /// Create a new [`PointerInfo`] whose pointee type is decided at runtime.
    #[inline]
    pub fn dynamic<TPointer: Typed>() -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            pointee_info: None,
            nullable: true,
        }
    }

    /// Returns the pointee's [`TypeInfo`], `None` for dynamic pointers.
    #[inline]
    pub fn pointee_info(&self) -> Option<&'static TypeInfo> {
        self.pointee_info.map(|f| f())
    }

    /// Returns `true` if the pointee type is decided at runtime.
    #[inline]
    pub const fn is_dynamic(&self) -> bool {
        self.pointee_info.is_none()
    }

    /// Returns `true` if the pointer can be absent.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
