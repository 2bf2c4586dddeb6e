use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a reflected type: its [`TypeId`] and its full path.
///
/// The path comes from [`core::any::type_name`], so it is meant for
/// diagnostics and schema output, not for lookups. Equality and hashing
/// only consider the [`TypeId`].
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Type;
///
/// let ty = Type::of::<Vec<i32>>();
/// assert!(ty.is::<Vec<i32>>());
/// assert_eq!(ty.name(), "Vec<i32>");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::vec::Vec<i32>`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type path without the leading module path.
    ///
    /// Generic arguments are kept as they are, only the outermost
    /// module path is stripped.
    pub fn name(&self) -> &'static str {
        let path = self.path;
        let generic_start = path.find('<').unwrap_or(path.len());
        match path[..generic_start].rfind("::") {
            Some(index) => &path[index + 2..],
            None => path,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `ty`, `ty_id`, `type_is`, `type_path` and `type_name`
/// for a descriptor holding a [`Type`] field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::Type;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn short_names() {
        assert_eq!(Type::of::<i32>().name(), "i32");
        assert_eq!(Type::of::<String>().name(), "String");
        assert_eq!(Type::of::<Vec<String>>().name(), "Vec<alloc::string::String>");
    }

    #[test]
    fn identity_ignores_path() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
    }
}
