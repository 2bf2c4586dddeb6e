use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// StreamInfo

/// A container for compile-time stream info, e.g. `Chan<T>`.
#[derive(Debug, Clone)]
pub struct StreamInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl StreamInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`StreamInfo`].
    #[inline]
    pub fn new<TStream: Typed, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TStream>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the item's [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
