use core::fmt;

use crate::Reflect;
use crate::ops::{List, Map, Pointer, Struct};

/// A function use for implementing [`Reflect::reflect_debug`] for structs.
///
/// Fields are written in declaration order.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_info().type_name());
    for index in 0..dyn_struct.field_len() {
        if let (Some(name), Some(field)) = (dyn_struct.name_at(index), dyn_struct.field_at(index)) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] for lists.
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for index in 0..dyn_list.len() {
        if let Some(item) = dyn_list.get(index) {
            debug.entry(&item as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] for maps.
///
/// Entries are written in key order.
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut keys = dyn_map.keys();
    keys.sort_unstable();

    let mut debug = f.debug_map();
    for key in &keys {
        if let Some(value) = dyn_map.get(key) {
            debug.entry(key, &value as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] for pointers.
///
/// Null pointers print as `nil`, others print their pointee.
#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(pointee) => pointee.reflect_debug(f),
        None => f.write_str("nil"),
    }
}

/// Clones a value known to be of type `T` through [`Reflect::reflect_clone`].
#[inline]
pub fn clone_as<T: Reflect>(value: &T) -> Result<T, crate::ops::ReflectCloneError> {
    value
        .reflect_clone()?
        .take::<T>()
        .map_err(|_| crate::ops::ReflectCloneError::NotSupport {
            type_path: value.reflect_type_info().type_path().into(),
        })
}
