use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A {
///     id: u32,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert_eq!(info.as_struct().unwrap().field_len(), 1);
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] to cache the
/// descriptor, the function is called on every traversal step.
///
/// ```
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// struct Marker {
///     id: u32,
/// }
///
/// impl Typed for Marker {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<u32>("id")]))
///         })
///     }
/// }
///
/// assert!(Marker::type_info().type_is::<Marker>());
/// assert_eq!(Marker::type_info().as_struct().unwrap().index_of("id"), Some(0));
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Since [`Typed::type_info`] is a static method, it cannot be called
/// through `dyn Reflect`; this trait is its object-safe counterpart.
///
/// Do not implement it manually, it is blanket-implemented for every [`Typed`] type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
