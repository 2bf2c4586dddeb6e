use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{FuncInfo, TypeInfo, Typed};
use crate::ops::{Func, ReflectCloneError};

impl Typed for Func {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Func(FuncInfo::new::<Self>()))
    }
}

impl Reflect for Func {
    crate::reflection::impl_reflect_cast_fn!(Func);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}
