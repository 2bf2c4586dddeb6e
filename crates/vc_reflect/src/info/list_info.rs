use core::any::TypeId;

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// ListInfo

/// A container for compile-time list-like info, e.g. `Vec<T>` or `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <[u8; 4]>::type_info().as_list().unwrap();
/// assert!(info.is_fixed());
/// assert_eq!(info.capacity(), Some(4));
/// assert!(info.item_info().type_is::<u8>());
/// ```
#[derive(Debug, Clone)]
pub struct ListInfo {
    ty: Type,
    item_ty_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
    capacity: Option<usize>,
}

impl ListInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new growable [`ListInfo`].
    #[inline]
    pub fn new<TList: Typed, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            capacity: None,
        }
    }

    /// Create a new fixed-size [`ListInfo`].
    #[inline]
    pub fn fixed<TList: Typed, TItem: Typed>(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new::<TList, TItem>()
        }
    }

    /// Returns the item's `TypeId`.
    #[inline]
    pub const fn item_ty_id(&self) -> TypeId {
        self.item_ty_id
    }

    /// Returns the item's [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the capacity of fixed-size lists.
    #[inline]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns `true` if the list cannot grow.
    #[inline]
    pub const fn is_fixed(&self) -> bool {
        self.capacity.is_some()
    }
}
