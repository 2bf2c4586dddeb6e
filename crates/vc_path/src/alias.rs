//! Translation of serialization names into field names.
//!
//! Paths written against a JSON document name fields by their JSON keys.
//! [`json_aliases`] collects the keys declared by a type (and every type
//! reachable from it), and [`Path::translate`] rewrites a path with them
//! so it can be applied to the reflected value.
//!
//! ```
//! use vc_path::{Path, json_aliases_of};
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default)]
//! struct User {
//!     #[serde(rename = "userName")]
//!     name: String,
//! }
//!
//! let aliases = json_aliases_of::<User>();
//! assert_eq!(Path::new("userName").translate(&aliases), Path::new("name"));
//! ```

use alloc::string::{String, ToString};
use core::any::TypeId;
use std::collections::{HashMap, HashSet};

use vc_reflect::info::{TypeInfo, Typed};

use crate::Path;

/// Collects the serialization names declared by `info` and the types it
/// contains, mapped to their field names.
///
/// Fields without a serialization name are left out. When two fields
/// share a serialization name, the last one visited wins.
pub fn json_aliases(info: &'static TypeInfo) -> HashMap<String, String> {
    let mut aliases = HashMap::new();
    let mut visited = HashSet::new();
    collect(info, &mut aliases, &mut visited);
    aliases
}

/// Collects the serialization names of `T`, see [`json_aliases`].
#[inline]
pub fn json_aliases_of<T: Typed>() -> HashMap<String, String> {
    json_aliases(T::type_info())
}

fn collect(
    info: &'static TypeInfo,
    aliases: &mut HashMap<String, String>,
    visited: &mut HashSet<TypeId>,
) {
    if !visited.insert(info.ty_id()) {
        return;
    }

    match info {
        TypeInfo::Struct(info) => {
            for field in info.iter() {
                if let Some(serial) = field.serial_name() {
                    aliases.insert(serial.to_string(), field.name().to_string());
                }
                collect(field.type_info(), aliases, visited);
            }
        }
        TypeInfo::List(info) => collect(info.item_info(), aliases, visited),
        TypeInfo::Map(info) => collect(info.value_info(), aliases, visited),
        TypeInfo::Pointer(info) => {
            if let Some(pointee) = info.pointee_info() {
                collect(pointee, aliases, visited);
            }
        }
        TypeInfo::Func(_) | TypeInfo::Stream(_) | TypeInfo::Opaque(_) => {}
    }
}

impl Path {
    /// Replaces every component found in `aliases` by its mapped value.
    ///
    /// Components without an alias, wildcards included, are kept.
    pub fn translate(&self, aliases: &HashMap<String, String>) -> Path {
        Path::from_components(
            self.components()
                .iter()
                .map(|component| aliases.get(component).unwrap_or(component).as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use std::collections::HashMap;

    use serde::Serialize;
    use vc_reflect::derive::Reflect;

    use super::json_aliases_of;
    use crate::Path;

    #[derive(Reflect, Default, Serialize)]
    struct Leaf {
        #[serde(rename = "bob")]
        b: i32,
        #[serde(rename = "eve")]
        e: i32,
    }

    #[derive(Reflect, Default)]
    struct Branch {
        #[serde(rename = "dan")]
        d: Leaf,
    }

    #[derive(Reflect, Default)]
    struct Root {
        #[serde(rename = "alice")]
        a: Leaf,
        #[serde(rename = "charlie")]
        c: HashMap<String, Option<Branch>>,
        #[reflect(serial = "blob")]
        data: serde_json::Value,
        plain: u8,
    }

    fn translate(path: &str) -> String {
        Path::new(path).translate(&json_aliases_of::<Root>()).to_string()
    }

    #[test]
    fn collects_nested_names() {
        let aliases = json_aliases_of::<Root>();
        assert_eq!(aliases.len(), 6);
        assert_eq!(aliases["alice"], "a");
        assert_eq!(aliases["eve"], "e");
        assert!(!aliases.contains_key("plain"));
    }

    #[test]
    fn translates_components() {
        assert_eq!(translate("alice.bob"), "a.b");
        assert_eq!(translate("charlie.dan.eve"), "c.d.e");
        assert_eq!(translate("charlie.*.eve"), "c.*.e");
        assert_eq!(translate("zebra.alice.wall"), "zebra.a.wall");
        assert_eq!(translate("blob.foo"), "data.foo");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn aliases_match_serialized_keys() {
        let aliases = json_aliases_of::<Leaf>();
        let serialized = serde_json::to_value(Leaf::default()).unwrap();
        let mut keys = serialized.as_object().unwrap().keys();
        assert!(keys.all(|key| aliases.contains_key(key)));
    }
}
