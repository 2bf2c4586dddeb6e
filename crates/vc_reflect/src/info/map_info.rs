use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// MapInfo

/// A container for compile-time map-like info, e.g. `HashMap<K, V>`.
///
/// Paths address map entries with plain text, so only maps whose keys
/// are string-like can be traversed.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_reflect::info::Typed;
///
/// let info = <HashMap<String, f32>>::type_info().as_map().unwrap();
/// assert!(info.has_string_keys());
/// assert!(info.value_info().type_is::<f32>());
///
/// let info = <HashMap<u32, f32>>::type_info().as_map().unwrap();
/// assert!(!info.has_string_keys());
/// ```
#[derive(Debug, Clone)]
pub struct MapInfo {
    ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
    string_keys: bool,
}

impl MapInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`MapInfo`].
    #[inline]
    pub fn new<TMap: Typed, TKey: Typed, TValue: Typed>(string_keys: bool) -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
            string_keys,
        }
    }

    /// Returns the key's [`TypeInfo`].
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the value's [`TypeInfo`].
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Returns `true` if keys are string-like.
    #[inline]
    pub const fn has_string_keys(&self) -> bool {
        self.string_keys
    }
}
