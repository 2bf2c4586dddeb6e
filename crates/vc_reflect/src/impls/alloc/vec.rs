use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{List, ReflectCloneError};

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let items = self
            .iter()
            .map(crate::impls::clone_as)
            .collect::<Result<Vec<T>, ReflectCloneError>>()?;
        Ok(Box::new(items))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::list_debug(self, f)
    }
}

impl<T: Reflect + Typed + Default> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    fn grow_to(&mut self, len: usize) -> bool {
        let additional = len.saturating_sub(Vec::len(self));
        if additional > 0 {
            if self.try_reserve_exact(additional).is_err() {
                return false;
            }
            self.resize_with(len, T::default);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::ops::List;

    #[test]
    fn grow_appends_defaults() {
        let mut list = vec![5_i32];
        assert!(list.grow_to(3));
        assert_eq!(list, [5, 0, 0]);

        assert!(list.grow_to(1));
        assert_eq!(List::len(&list), 3);
    }

    #[test]
    fn grow_fails_without_memory() {
        let mut list = vec![5_u64];
        assert!(!list.grow_to(usize::MAX));
        assert_eq!(list, [5]);
    }

    #[test]
    fn items_by_index() {
        let mut list: Vec<u8> = vec![1, 2];
        *List::get_mut(&mut list, 1).unwrap().downcast_mut::<u8>().unwrap() = 9;

        assert_eq!(List::get(&list, 1).unwrap().downcast_ref::<u8>(), Some(&9));
        assert!(List::get(&list, 2).is_none());
        assert_eq!(format!("{:?}", list.as_reflect()), "[1, 9]");
    }
}
