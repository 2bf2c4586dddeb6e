use alloc::collections::BTreeMap;

crate::impls::impl_reflect_for_map!(BTreeMap<K, V>);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use crate::ops::Map;

    #[test]
    fn keys_in_order() {
        let mut map: BTreeMap<String, i32> = BTreeMap::new();
        map.insert("b".into(), 2);
        map.insert("a".into(), 1);

        assert_eq!(Map::keys(&map), vec!["a", "b"]);
        assert_eq!(Map::get(&map, "b").unwrap().downcast_ref::<i32>(), Some(&2));
        assert!(Map::get(&map, "c").is_none());
    }

    #[test]
    fn integer_keys() {
        let mut map: BTreeMap<u16, i32> = BTreeMap::new();
        map.insert(7, 1);

        assert!(!map.has_string_keys());
        assert!(Map::get(&map, "7").is_some());
        assert!(Map::get(&map, "x").is_none());
        assert_eq!(Map::keys(&map), vec!["7"]);
    }
}
