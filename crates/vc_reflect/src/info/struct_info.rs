use alloc::boxed::Box;
use alloc::vec::Vec;
use std::collections::HashMap;

use crate::info::{MethodInfo, NamedField, Type, Typed};

// -----------------------------------------------------------------------------
// StructInfo

/// A container for compile-time named struct info.
///
/// Besides fields, a struct carries its method table: the getters and
/// setters a path can reach by name after the fields were checked.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// #[reflect(getter(total))]
/// struct Account {
///     debit: i64,
///     credit: i64,
/// }
///
/// impl Account {
///     fn total(&self) -> i64 {
///         self.credit - self.debit
///     }
/// }
///
/// let info = Account::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("credit"), Some(1));
/// assert!(info.method("total").unwrap().signature().is_getter());
/// ```
#[derive(Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    methods: Box<[MethodInfo]>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of fields is the declaration order, wildcards visit
    /// them in this order.
    pub fn new<T: Typed>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            field_indices,
            methods: Box::new([]),
        }
    }

    /// Attach the method table.
    pub fn with_methods(self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        Self {
            methods: methods.into_iter().collect::<Vec<_>>().into_boxed_slice(),
            ..self
        }
    }

    /// Returns the [`NamedField`] with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index for the given field name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the method with the given name, if present.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|method| method.name() == name)
    }

    /// Returns the method table.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }
}

#[cfg(test)]
mod tests {
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{NamedField, StructInfo, TypeInfo, Typed};

    struct Rgb;

    impl Typed for Rgb {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Struct(StructInfo::new::<Self>(&[
                    NamedField::new::<u8>("r"),
                    NamedField::new::<u8>("g"),
                    NamedField::new::<u8>("b"),
                ]))
            })
        }
    }

    #[test]
    fn fields_by_name() {
        let info = Rgb::type_info().as_struct().unwrap();
        assert_eq!(info.index_of("b"), Some(2));
        assert_eq!(info.field("g").map(NamedField::name), Some("g"));
        assert!(info.field("a").is_none());
        assert_eq!(info.index_of("a"), None);

        let names = info.iter().map(NamedField::name).collect::<alloc::vec::Vec<_>>();
        assert_eq!(names, ["r", "g", "b"]);
    }
}
