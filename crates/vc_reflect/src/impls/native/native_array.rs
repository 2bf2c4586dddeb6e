use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{List, ReflectCloneError};

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::fixed::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(List);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let items = self
            .iter()
            .map(crate::impls::clone_as)
            .collect::<Result<Vec<T>, ReflectCloneError>>()?;

        let array: Self = items.try_into().map_err(|_| ReflectCloneError::NotSupport {
            type_path: Self::type_info().type_path().into(),
        })?;

        Ok(Box::new(array))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::list_debug(self, f)
    }
}

impl<T: Reflect + Typed, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn is_fixed(&self) -> bool {
        true
    }

    #[inline]
    fn grow_to(&mut self, len: usize) -> bool {
        len <= N
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::List;

    #[test]
    fn fixed_size() {
        let mut array = [1_u8, 2, 3];
        assert!(array.is_fixed());
        assert!(array.grow_to(2));
        assert!(!array.grow_to(4));
        assert_eq!(List::len(&array), 3);

        let cloned = array.reflect_clone().unwrap();
        assert_eq!(cloned.downcast_ref::<[u8; 3]>(), Some(&[1, 2, 3]));
    }
}
