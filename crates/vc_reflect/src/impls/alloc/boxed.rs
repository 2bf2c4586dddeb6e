use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectCloneError};

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let pointee = crate::impls::clone_as::<T>(self)?;
        Ok(Box::new(Box::new(pointee)))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some((**self).as_reflect_mut())
    }

    /// A box always holds a value, there is nothing to fill.
    #[inline]
    fn fill_default(&mut self) -> bool {
        false
    }

    #[inline]
    fn accepts(&self, value: &dyn Reflect) -> bool {
        value.is::<T>()
    }

    fn store(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        **self = value.take::<T>()?;
        Ok(())
    }
}
