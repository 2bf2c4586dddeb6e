/// Implement `Reflect` methods for opaque types that are `Clone + Debug`.
macro_rules! impl_simple_type_reflect {
    () => {
        $crate::reflection::impl_reflect_cast_fn!(Opaque);

        #[inline]
        fn reflect_clone(
            &self,
        ) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
            Ok(::alloc::boxed::Box::new(Clone::clone(self)))
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_simple_type_reflect;
