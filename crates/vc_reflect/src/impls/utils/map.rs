// -----------------------------------------------------------------------------
// For std HashMap and BTreeMap

macro_rules! impl_reflect_for_map {
    ($ty:ident<K, V $(, $state:ident)?> $(where $($bound:tt)*)?) => {
        impl<K, V $(, $state)?> $crate::info::Typed for $ty<K, V $(, $state)?>
        where
            K: $crate::ops::MapKey + $crate::Reflect + $crate::info::Typed,
            V: $crate::Reflect + $crate::info::Typed + Default,
            $($($bound)*)?
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Map($crate::info::MapInfo::new::<Self, K, V>(
                        <K as $crate::ops::MapKey>::STRING_LIKE,
                    ))
                })
            }
        }

        impl<K, V $(, $state)?> $crate::Reflect for $ty<K, V $(, $state)?>
        where
            K: $crate::ops::MapKey + $crate::Reflect + $crate::info::Typed,
            V: $crate::Reflect + $crate::info::Typed + Default,
            $($($bound)*)?
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            fn reflect_clone(&self) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
                let mut map = Self::default();
                for (key, value) in Self::iter(self) {
                    map.insert($crate::impls::clone_as(key)?, $crate::impls::clone_as(value)?);
                }
                Ok(::alloc::boxed::Box::new(map))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::map_debug(self, f)
            }
        }

        impl<K, V $(, $state)?> $crate::ops::Map for $ty<K, V $(, $state)?>
        where
            K: $crate::ops::MapKey + $crate::Reflect + $crate::info::Typed,
            V: $crate::Reflect + $crate::info::Typed + Default,
            $($($bound)*)?
        {
            #[inline]
            fn has_string_keys(&self) -> bool {
                <K as $crate::ops::MapKey>::STRING_LIKE
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn get(&self, key: &str) -> Option<&dyn $crate::Reflect> {
                let key = <K as $crate::ops::MapKey>::from_component(key)?;
                Self::get(self, &key).map($crate::Reflect::as_reflect)
            }

            fn get_mut(&mut self, key: &str) -> Option<&mut dyn $crate::Reflect> {
                let key = <K as $crate::ops::MapKey>::from_component(key)?;
                Self::get_mut(self, &key).map($crate::Reflect::as_reflect_mut)
            }

            fn insert_default(&mut self, key: &str) -> Option<&mut dyn $crate::Reflect> {
                let key = <K as $crate::ops::MapKey>::from_component(key)?;
                Some(self.entry(key).or_default().as_reflect_mut())
            }

            fn insert_boxed(
                &mut self,
                key: &str,
                value: ::alloc::boxed::Box<dyn $crate::Reflect>,
            ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
                let Some(key) = <K as $crate::ops::MapKey>::from_component(key) else {
                    return Err(value);
                };
                Self::insert(self, key, value.take::<V>()?);
                Ok(())
            }

            fn keys(&self) -> ::alloc::vec::Vec<::alloc::string::String> {
                Self::keys(self).map($crate::ops::MapKey::to_component).collect()
            }
        }
    };
}

pub(crate) use impl_reflect_for_map;
