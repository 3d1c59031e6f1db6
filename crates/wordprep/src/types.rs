//! # Common Types

/// The integer id assigned to a token by a [`crate::vocab::Vocabulary`].
pub type TokenId = u32;

/// The occurrence count type for vocabulary frequencies.
pub type CountType = u64;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WPHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WPHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WPHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WPHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WPHashMap<K, V> {
            WPHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WPHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_aliases() {
        let mut map: WPHashMap<String, TokenId> = hash_map_with_capacity(4);
        map.insert("a".to_string(), 1);
        assert_eq!(map.get("a"), Some(&1));

        let set: WPHashSet<TokenId> = [1, 2, 2].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
