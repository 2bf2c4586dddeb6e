use std::collections::HashMap;

crate::impls::impl_reflect_for_map!(
    HashMap<K, V, S> where S: ::core::hash::BuildHasher + Default + Send + Sync + 'static
);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn string_keys_only() {
        assert!(<HashMap<String, u8>>::type_info().as_map().unwrap().has_string_keys());
        assert!(!<HashMap<u32, u8>>::type_info().as_map().unwrap().has_string_keys());
    }

    #[test]
    fn inserts() {
        let mut map: HashMap<String, u8> = HashMap::new();
        map.insert("a".into(), 3);

        Map::insert_default(&mut map, "a").unwrap();
        assert_eq!(map["a"], 3);
        Map::insert_default(&mut map, "z").unwrap();
        assert_eq!(map.remove("z"), Some(0));

        assert!(Map::insert_boxed(&mut map, "b", Box::new(9_u8)).is_ok());
        assert!(Map::insert_boxed(&mut map, "c", Box::new(9_i8)).is_err());
        assert_eq!(map["b"], 9);
        assert_eq!(Map::len(&map), 2);
    }

    #[test]
    fn clone_and_debug() {
        let mut map: HashMap<String, u8> = HashMap::new();
        map.insert("y".into(), 2);
        map.insert("x".into(), 1);

        let cloned = map.reflect_clone().unwrap();
        assert_eq!(cloned.downcast_ref::<HashMap<String, u8>>(), Some(&map));
        assert_eq!(alloc::format!("{:?}", map.as_reflect()), r#"{"x": 1, "y": 2}"#);
    }
}
