use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectCloneError};

impl<T: Reflect + Typed> Typed for Arc<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Arc<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    /// Clones the handle, the pointee is shared.
    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(Arc::clone(self)))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    /// Only unique handles lend their pointee mutably.
    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(|pointee| pointee.as_reflect_mut())
    }

    #[inline]
    fn fill_default(&mut self) -> bool {
        false
    }

    #[inline]
    fn accepts(&self, value: &dyn Reflect) -> bool {
        value.is::<T>()
    }

    fn store(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Arc::new(value.take::<T>()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::ops::Pointer;

    #[test]
    fn shared_pointee_is_read_only() {
        let mut unique = Arc::new(1_u8);
        assert!(unique.pointee_mut().is_some());

        let cloned = unique.reflect_clone().unwrap();
        assert!(unique.pointee_mut().is_none());
        assert_eq!(
            cloned.downcast_ref::<Arc<u8>>().map(|v| **v),
            Some(1)
        );
    }
}
