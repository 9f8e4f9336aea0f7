use fnv::FnvHasher;
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

type FnvBuildHasher = BuildHasherDefault<FnvHasher>;

/// Set of small keys such as arena indices or coordinates, used when counting distinct
/// disjoint-set roots.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}

/// Key to arena index lookup for the disjoint set, presized to the number of grid cells.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}
