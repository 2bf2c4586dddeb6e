use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Dyn, Interface, Pointer, ReflectCloneError};

impl<I: Interface> Typed for Dyn<I> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::dynamic::<Self>()))
    }
}

impl<I: Interface> Reflect for Dyn<I> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut cloned = Dyn::<I>::nil();
        if let Some(value) = self.get() {
            cloned
                .store(value.reflect_clone()?)
                .map_err(|_| ReflectCloneError::NotSupport {
                    type_path: Self::type_info().type_path().into(),
                })?;
        }
        Ok(Box::new(cloned))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl<I: Interface> Pointer for Dyn<I> {
    #[inline]
    fn is_null(&self) -> bool {
        self.get().is_none()
    }

    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.get()
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.get_mut()
    }

    /// The concrete type of an empty slot is unknown.
    #[inline]
    fn fill_default(&mut self) -> bool {
        false
    }

    #[inline]
    fn accepts(&self, value: &dyn Reflect) -> bool {
        I::is_satisfied_by(value)
    }

    fn store(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Dyn::new(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;
    use crate::info::MethodInfo;
    use crate::info::{NamedField, StructInfo, TypeInfo, Typed};
    use crate::impls::NonGenericTypeInfoCell;
    use crate::ops::{AnyValue, Dyn, Interface, Pointer, ReflectCloneError, Struct};

    struct Counter {
        count: u32,
    }

    impl Typed for Counter {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Struct(
                    StructInfo::new::<Self>(&[NamedField::new::<u32>("count")])
                        .with_methods([MethodInfo::getter::<Self, _>("get", |c: &Counter| c.count)]),
                )
            })
        }
    }

    impl Reflect for Counter {
        crate::reflection::impl_reflect_cast_fn!(Struct);

        fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
            Ok(Box::new(Counter { count: self.count }))
        }
    }

    impl Struct for Counter {
        fn field(&self, name: &str) -> Option<&dyn Reflect> {
            (name == "count").then_some(&self.count as &dyn Reflect)
        }

        fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
            (name == "count").then_some(&mut self.count as &mut dyn Reflect)
        }

        fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
            (index == 0).then_some(&self.count as &dyn Reflect)
        }

        fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
            (index == 0).then_some(&mut self.count as &mut dyn Reflect)
        }

        fn name_at(&self, index: usize) -> Option<&str> {
            (index == 0).then_some("count")
        }

        fn field_len(&self) -> usize {
            1
        }
    }

    struct Getter;

    impl Interface for Getter {
        const NAME: &'static str = "Getter";
        const METHODS: &'static [&'static str] = &["get"];
    }

    #[test]
    fn interface_checks_methods() {
        let mut slot = Dyn::<Getter>::nil();
        assert!(!slot.accepts(&1_u32));
        assert!(slot.accepts(&Counter { count: 1 }));
        assert!(slot.accepts(&Box::new(Counter { count: 1 })));

        assert!(slot.store(Box::new(1_u32)).is_err());
        assert!(slot.store(Box::new(Counter { count: 2 })).is_ok());
        assert!(!slot.is_null());
    }

    #[test]
    fn any_value_takes_everything() {
        let mut slot = Dyn::<AnyValue>::default();
        assert!(!slot.fill_default());
        slot.store(Box::new(7_u8)).unwrap();

        let cloned = slot.reflect_clone().unwrap();
        let cloned = cloned.downcast_ref::<Dyn<AnyValue>>().unwrap();
        assert_eq!(cloned.get().unwrap().downcast_ref::<u8>(), Some(&7));
        assert_eq!(format!("{:?}", slot), "interface {}(7)");
    }
}
