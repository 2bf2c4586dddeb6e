//! `serde_json` values.
//!
//! A [`Value`] behaves like a boxed interface: a dynamic pointer whose
//! pointee is the `bool`, [`Number`], `String`, `Vec<Value>` or object
//! it currently holds. `null` is the nil pointer.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map as JsonMap, Number, Value};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{MapInfo, OpaqueInfo, PointerInfo, TypeInfo, Typed};
use crate::ops::{Map, Pointer, ReflectCloneError};

// -----------------------------------------------------------------------------
// Number

impl Typed for Number {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for Number {
    crate::reflection::impl_reflect_cast_fn!(Opaque);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Value

impl Typed for Value {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Pointer(PointerInfo::dynamic::<Self>()))
    }
}

impl Reflect for Value {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl Pointer for Value {
    #[inline]
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        match self {
            Value::Null => None,
            Value::Bool(value) => Some(value),
            Value::Number(value) => Some(value),
            Value::String(value) => Some(value),
            Value::Array(value) => Some(value),
            Value::Object(value) => Some(value),
        }
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        match self {
            Value::Null => None,
            Value::Bool(value) => Some(value),
            Value::Number(value) => Some(value),
            Value::String(value) => Some(value),
            Value::Array(value) => Some(value),
            Value::Object(value) => Some(value),
        }
    }

    /// `null` becomes an empty object.
    fn fill_default(&mut self) -> bool {
        *self = Value::Object(JsonMap::new());
        true
    }

    fn accepts(&self, value: &dyn Reflect) -> bool {
        is_json_like(value)
    }

    fn store(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = into_json(value)?;
        Ok(())
    }
}

fn is_json_like(value: &dyn Reflect) -> bool {
    value.is::<bool>()
        || value.is::<Number>()
        || value.is::<String>()
        || value.is::<&'static str>()
        || value.is::<Vec<Value>>()
        || value.is::<JsonMap<String, Value>>()
        || crate::convert::as_json_number(value).is_some()
}

/// Converts a reflected value into a JSON value.
///
/// Returns the value back if it has no JSON counterpart.
pub fn into_json(value: Box<dyn Reflect>) -> Result<Value, Box<dyn Reflect>> {
    if let Some(number) = crate::convert::as_json_number(&*value) {
        return Ok(Value::Number(number));
    }
    let value = match value.take::<bool>() {
        Ok(value) => return Ok(Value::Bool(value)),
        Err(value) => value,
    };
    let value = match value.take::<Number>() {
        Ok(value) => return Ok(Value::Number(value)),
        Err(value) => value,
    };
    let value = match value.take::<String>() {
        Ok(value) => return Ok(Value::String(value)),
        Err(value) => value,
    };
    let value = match value.take::<&'static str>() {
        Ok(value) => return Ok(Value::String(value.into())),
        Err(value) => value,
    };
    let value = match value.take::<Vec<Value>>() {
        Ok(value) => return Ok(Value::Array(value)),
        Err(value) => value,
    };
    value.take::<JsonMap<String, Value>>().map(Value::Object)
}

// -----------------------------------------------------------------------------
// Map<String, Value>

impl Typed for JsonMap<String, Value> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Map(MapInfo::new::<Self, String, Value>(true)))
    }
}

impl Reflect for JsonMap<String, Value> {
    crate::reflection::impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::map_debug(self, f)
    }
}

impl Map for JsonMap<String, Value> {
    #[inline]
    fn has_string_keys(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        JsonMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        JsonMap::get(self, key).map(Reflect::as_reflect)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        JsonMap::get_mut(self, key).map(Reflect::as_reflect_mut)
    }

    fn insert_default(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        Some(self.entry(key).or_insert(Value::Null))
    }

    fn insert_boxed(&mut self, key: &str, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let value = match value.take::<Value>() {
            Ok(value) => value,
            Err(value) => into_json(value)?,
        };
        JsonMap::insert(self, key.into(), value);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        JsonMap::keys(self).cloned().collect()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use serde_json::{Value, json};

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{Map, Pointer};

    #[test]
    fn value_is_dynamic_pointer() {
        let info = Value::type_info().as_pointer().unwrap();
        assert!(info.is_dynamic());
        assert_eq!(Value::type_info().shape_name(), "interface");

        let value = json!({ "a": 1 });
        let pointee = Pointer::pointee(&value).unwrap();
        assert_eq!(pointee.reflect_kind(), ReflectKind::Map);
        assert!(Pointer::pointee(&Value::Null).is_none());
    }

    #[test]
    fn store_converts_scalars() {
        let mut value = Value::Null;
        value.store(Box::new(5_u8)).unwrap();
        assert_eq!(value, json!(5));

        value.store(Box::new(String::from("x"))).unwrap();
        assert_eq!(value, json!("x"));

        assert!(value.store(Box::new(())).is_err());
    }

    #[test]
    fn null_fills_with_object() {
        let mut value = Value::Null;
        assert!(value.fill_default());
        assert_eq!(value, json!({}));
    }

    #[test]
    fn object_entries() {
        let mut value = json!({ "b": true });
        let Value::Object(map) = &mut value else {
            panic!("expected an object");
        };

        assert!(Map::insert_default(map, "a").is_some());
        assert!(Map::insert_boxed(map, "c", Box::new(1.5_f64)).is_ok());

        let existing = Map::insert_default(map, "b").unwrap();
        assert_eq!(existing.downcast_ref::<Value>(), Some(&json!(true)));
        assert_eq!(value, json!({ "a": null, "b": true, "c": 1.5 }));
    }
}
