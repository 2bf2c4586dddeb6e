use core::{error, fmt};

use crate::info::{FuncInfo, ListInfo, MapInfo, OpaqueInfo};
use crate::info::{PointerInfo, StreamInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the shape "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection trait, such as
/// [`Struct`] or [`List`], and decides how a path component is
/// interpreted against a value of that kind.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`ReflectRef::kind`] or [`TypeInfo::kind`].
///
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Records with named fields and methods.
    Struct,
    /// Index-addressable sequences, growable or fixed-size.
    List,
    /// Keyed maps.
    Map,
    /// Nullable or owning single-child containers.
    Pointer,
    /// Callable values.
    Func,
    /// Channel-like FIFO streams.
    Stream,
    /// Leaf values.
    Opaque,
}

impl ReflectKind {
    /// Returns `true` if a value of this kind can be absent (nil).
    #[inline]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Pointer | Self::Func | Self::Stream)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Func => f.pad("Func"),
            Self::Stream => f.pad("Stream"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Type information for the reflected shape kinds.
///
/// Generally obtained through [`Typed::type_info`] when the type is known,
/// or [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
/// Both return a `'static` reference cached on first access.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Func(FuncInfo),
    Stream(StreamInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_func: Func => FuncInfo);
    impl_cast_method!(as_stream: Stream => StreamInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Func(info) => info.ty(),
            Self::Stream(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`] of the described type.
    pub const fn kind(&self) -> ReflectKind {
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

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Returns a short name for the shape of the type.
    ///
    /// - `struct`, `map`, `func`, `chan` for the matching kinds.
    /// - `slice` for growable lists, `array` for fixed-size ones.
    /// - `ptr` for pointers, `interface` for dynamic pointers.
    /// - The type name for opaque values, e.g. `i32`.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::List(info) if info.is_fixed() => "array",
            Self::List(_) => "slice",
            Self::Map(_) => "map",
            Self::Pointer(info) if info.is_dynamic() => "interface",
            Self::Pointer(_) => "ptr",
            Self::Func(_) => "func",
            Self::Stream(_) => "chan",
            Self::Opaque(info) => info.type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReflectKind;
    use crate::info::Typed;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn shape_names() {
        assert_eq!(<Vec<i32>>::type_info().shape_name(), "slice");
        assert_eq!(<[i32; 3]>::type_info().shape_name(), "array");
        assert_eq!(<Option<u8>>::type_info().shape_name(), "ptr");
        assert_eq!(<Box<String>>::type_info().shape_name(), "ptr");
        assert_eq!(<f64>::type_info().shape_name(), "f64");
        assert_eq!(<String>::type_info().shape_name(), "String");
    }

    #[test]
    fn cast_reports_kinds() {
        let err = <i32>::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Opaque);
    }
}
