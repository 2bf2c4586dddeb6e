use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::Reflect;

// -----------------------------------------------------------------------------
// MapKey

/// Key types usable by reflected maps.
///
/// Paths carry keys as text, so a key must convert from and to a
/// path component. Only maps whose keys are [`STRING_LIKE`] can be
/// traversed; other keys are still listed by [`Map::keys`].
///
/// [`STRING_LIKE`]: MapKey::STRING_LIKE
pub trait MapKey: Ord + core::hash::Hash + Sized {
    /// `true` if the key is textual.
    const STRING_LIKE: bool;

    /// Parses a key from a path component.
    fn from_component(component: &str) -> Option<Self>;

    /// Formats the key as a path component.
    fn to_component(&self) -> String;
}

impl MapKey for String {
    const STRING_LIKE: bool = true;

    #[inline]
    fn from_component(component: &str) -> Option<Self> {
        Some(component.into())
    }

    #[inline]
    fn to_component(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_int_key {
    ($($ty:ty),* $(,)?) => {$(
        impl MapKey for $ty {
            const STRING_LIKE: bool = false;

            #[inline]
            fn from_component(component: &str) -> Option<Self> {
                component.parse().ok()
            }

            #[inline]
            fn to_component(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_int_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// -----------------------------------------------------------------------------
// Map

/// A trait used to power [map-like] operations via reflection.
///
/// Entries are addressed by the text of a path component.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use vc_reflect::ops::Map;
///
/// let mut map: HashMap<String, u32> = HashMap::new();
/// assert!(map.get("a").is_none());
///
/// let value = map.insert_default("a").unwrap();
/// *value.downcast_mut::<u32>().unwrap() = 7;
///
/// assert_eq!(map["a"], 7);
/// assert_eq!(Map::keys(&map), ["a"]);
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
pub trait Map: Reflect {
    /// Returns `true` if keys are textual.
    fn has_string_keys(&self) -> bool;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns a reference to the value under `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value under `key`.
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Returns the value under `key`, inserting a default one first if
    /// there is none.
    ///
    /// Returns `None` if `key` is not a valid key.
    fn insert_default(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Inserts `value` under `key`.
    ///
    /// Returns the value back if its type does not match the map's
    /// value type or `key` is not a valid key.
    fn insert_boxed(&mut self, key: &str, value: Box<dyn Reflect>)
    -> Result<(), Box<dyn Reflect>>;

    /// Returns a snapshot of the keys.
    fn keys(&self) -> Vec<String>;

    /// Returns `true` if the map holds no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
