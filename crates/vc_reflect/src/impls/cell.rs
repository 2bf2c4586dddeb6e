//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! ## NonGenericTypeInfoCell
//!
//! For non generic types. Internally, there is an [`OnceLock`], almost
//! no additional expenses.
//!
//! ## GenericTypeInfoCell
//!
//! If the type is generic, the `static CELL` inside the function is shared by
//! every instantiation. Therefore, the inner of this container is a map keyed
//! by [`TypeId`] wrapped in a [`RwLock`].

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::{Any, TypeId};
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::info::TypeInfo;

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// struct A2 {
///     a: u32,
/// }
///
/// impl Typed for A2 {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<u32>("a")]))
///         })
///     }
/// }
///
/// let info = A2::type_info().as_struct().unwrap();
/// assert_eq!(info.field("a").unwrap().name(), "a");
/// assert_eq!(info.type_name(), "A2");
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the info stored in the cell.
    ///
    /// If the cell is empty, it is filled from the given function.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use vc_reflect::impls::GenericTypeInfoCell;
/// use vc_reflect::info::{ListInfo, TypeInfo, Typed};
///
/// struct Stack<T>(Vec<T>);
///
/// impl<T: Typed> Typed for Stack<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
///
/// let u8s = Stack::<u8>::type_info().as_list().unwrap();
/// let i64s = Stack::<i64>::type_info().as_list().unwrap();
/// assert!(u8s.item_info().type_is::<u8>());
/// assert!(i64s.item_info().type_is::<i64>());
/// assert!(!core::ptr::eq(u8s, i64s));
/// ```
pub struct GenericTypeInfoCell(RwLock<BTreeMap<TypeId, &'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(BTreeMap::new()))
    }

    /// Returns the info stored for type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(
        &self,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        if let Some(&info) = self.0.read().get(&type_id) {
            return info;
        }
        // Built outside the lock, `f` may ask for other descriptors.
        let info = f();
        *self
            .0
            .write()
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(info)))
    }
}

impl Default for GenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
