use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Function, List, Map, Pointer, Stream, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of "kinds" of a reflected type.
///
/// Obtained via [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Func(&'a dyn Function),
    Stream(&'a dyn Stream),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of "kinds" of a reflected type.
///
/// Obtained via [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Func(&'a mut dyn Function),
    Stream(&'a mut dyn Stream),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_and_cast {
    ($ty:ident, $lt:lifetime, $($ref:tt)*) => {
        impl<$lt> $ty<$lt> {
            /// Returns the [`ReflectKind`] of this value.
            pub fn kind(&self) -> ReflectKind {
                match self {
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::List(_) => ReflectKind::List,
                    Self::Map(_) => ReflectKind::Map,
                    Self::Pointer(_) => ReflectKind::Pointer,
                    Self::Func(_) => ReflectKind::Func,
                    Self::Stream(_) => ReflectKind::Stream,
                    Self::Opaque(_) => ReflectKind::Opaque,
                }
            }

            /// Returns the value as a [`Struct`], if it is one.
            pub fn as_struct(self) -> Option<$($ref)* dyn Struct> {
                match self {
                    Self::Struct(value) => Some(value),
                    _ => None,
                }
            }

            /// Returns the value as a [`List`], if it is one.
            pub fn as_list(self) -> Option<$($ref)* dyn List> {
                match self {
                    Self::List(value) => Some(value),
                    _ => None,
                }
            }

            /// Returns the value as a [`Map`], if it is one.
            pub fn as_map(self) -> Option<$($ref)* dyn Map> {
                match self {
                    Self::Map(value) => Some(value),
                    _ => None,
                }
            }

            /// Returns the value as a [`Pointer`], if it is one.
            pub fn as_pointer(self) -> Option<$($ref)* dyn Pointer> {
                match self {
                    Self::Pointer(value) => Some(value),
                    _ => None,
                }
            }

            /// Returns the value as a [`Function`], if it is one.
            pub fn as_func(self) -> Option<$($ref)* dyn Function> {
                match self {
                    Self::Func(value) => Some(value),
                    _ => None,
                }
            }

            /// Returns the value as a [`Stream`], if it is one.
            pub fn as_stream(self) -> Option<$($ref)* dyn Stream> {
                match self {
                    Self::Stream(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

impl_kind_and_cast!(ReflectRef, 'a, &'a);
impl_kind_and_cast!(ReflectMut, 'a, &'a mut);
