use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectCloneError};

impl<T: Reflect + Typed + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let cloned = match self {
            Some(pointee) => Some(crate::impls::clone_as(pointee)?),
            None => None,
        };
        Ok(Box::new(cloned))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed + Default> Pointer for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn fill_default(&mut self) -> bool {
        *self = Some(T::default());
        true
    }

    #[inline]
    fn accepts(&self, value: &dyn Reflect) -> bool {
        value.is::<T>()
    }

    fn store(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::Pointer;

    #[test]
    fn store_accepts_pointee_type() {
        let mut slot: Option<String> = None;
        assert!(slot.accepts(&String::new()));
        assert!(!slot.accepts(&1_u8));

        assert!(slot.store(Box::new(String::from("x"))).is_ok());
        assert_eq!(slot.as_deref(), Some("x"));
        assert!(slot.store(Box::new(1_u8)).is_err());
    }

    #[test]
    fn debug_sees_through() {
        let none: Option<u8> = None;
        assert_eq!(format!("{:?}", none.as_reflect()), "nil");
        assert_eq!(format!("{:?}", Some(3_u8).as_reflect()), "3");
    }
}
