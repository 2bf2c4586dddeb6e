//! A JSON rendering of the shape of a type.
//!
//! Records become objects keyed by the serialization name of their
//! fields, everything else a short description of its shape:
//!
//! | Type                   | Rendering                           |
//! |------------------------|-------------------------------------|
//! | pointer                | `*` and the pointee shape: `*i32`   |
//! | dynamic pointer        | `interface`                         |
//! | growable list          | `[]` and the item rendering         |
//! | map                    | `map[key]` and the value rendering  |
//! | fixed list, func, chan | `array`, `func`, `chan`             |
//! | scalar                 | the type name: `u8`, `String`       |
//!
//! Nested renderings are inlined with their quotes removed, a list of
//! records reads `[]{a:i32}`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::TypeId;

use serde_json::{Map, Value};
use vc_reflect::info::{TypeInfo, Typed};

/// Renders the shape of `info` as JSON.
///
/// A record containing itself is rendered `struct` where it recurs.
///
/// # Examples
///
/// ```
/// use vc_path::json_schema_of;
/// use vc_reflect::derive::Reflect;
/// use serde_json::json;
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     x: i32,
///     #[serde(rename = "tags")]
///     labels: Vec<String>,
/// }
///
/// assert_eq!(json_schema_of::<Point>(), json!({ "x": "i32", "tags": "[]String" }));
/// ```
pub fn json_schema(info: &'static TypeInfo) -> Value {
    render(info, &mut Vec::new())
}

/// Renders the shape of `T`, see [`json_schema`].
#[inline]
pub fn json_schema_of<T: Typed>() -> Value {
    json_schema(T::type_info())
}

/// Renders the shape of `info` as a JSON string, keys sorted.
pub fn json_schema_string(info: &'static TypeInfo) -> String {
    json_schema(info).to_string()
}

fn render(info: &'static TypeInfo, open: &mut Vec<TypeId>) -> Value {
    match info {
        TypeInfo::Struct(record) => {
            if open.contains(&info.ty_id()) {
                return Value::from(info.shape_name());
            }
            open.push(info.ty_id());
            let fields = record
                .iter()
                .map(|field| {
                    let name = field.external_name().to_string();
                    (name, render(field.type_info(), open))
                })
                .collect::<Map<String, Value>>();
            open.pop();
            Value::Object(fields)
        }
        TypeInfo::Pointer(pointer) => match pointer.pointee_info() {
            Some(pointee) => Value::from(["*", pointee.shape_name()].concat()),
            None => Value::from(info.shape_name()),
        },
        TypeInfo::List(list) if !list.is_fixed() => {
            let item = inline(render(list.item_info(), open));
            Value::from(["[]", item.as_str()].concat())
        }
        TypeInfo::Map(map) => {
            let key = map.key_info().shape_name();
            let value = inline(render(map.value_info(), open));
            Value::from(["map[", key, "]", value.as_str()].concat())
        }
        _ => Value::from(info.shape_name()),
    }
}

fn inline(value: Value) -> String {
    value.to_string().replace('"', "")
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use serde_json::json;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;
    use vc_reflect::ops::{Chan, Func};

    use super::{json_schema_of, json_schema_string};

    #[derive(Reflect, Default)]
    struct Entry {
        #[serde(rename = "id")]
        key: u32,
        score: Option<f64>,
    }

    #[derive(Reflect, Default)]
    struct Catalog {
        entries: Vec<Entry>,
        index: HashMap<String, Box<Entry>>,
        slots: [u8; 4],
        extra: serde_json::Value,
        hook: Func,
        feed: Chan<u8>,
        children: Vec<Catalog>,
    }

    #[test]
    fn renders_shapes() {
        assert_eq!(
            json_schema_of::<Catalog>(),
            json!({
                "entries": "[]{id:u32,score:*f64}",
                "index": "map[String]*struct",
                "slots": "array",
                "extra": "interface",
                "hook": "func",
                "feed": "chan",
                "children": "[]struct",
            })
        );
    }

    #[test]
    fn renders_scalars() {
        assert_eq!(json_schema_of::<i16>(), json!("i16"));
        assert_eq!(json_schema_of::<Vec<Vec<u8>>>(), json!("[][]u8"));
        assert_eq!(json_schema_of::<HashMap<u32, bool>>(), json!("map[u32]bool"));
    }

    #[test]
    fn string_sorts_keys() {
        assert_eq!(
            json_schema_string(Entry::type_info()),
            r#"{"id":"u32","score":"*f64"}"#
        );
    }
}
