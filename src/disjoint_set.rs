//! Union-find over arbitrary elements identified by a caller supplied key function.
//!
//! Nodes live in an arena and refer to their parent by index, path compression
//! rewrites those indices in place.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::utils::{self, FnvHashMap};

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    parent: usize,
    rank: usize,
}

pub struct DisjointSet<T, K, F>
    where F: Fn(&T) -> K
{
    nodes: Vec<Node<K>>,
    indices: FnvHashMap<K, usize>,
    key_fn: F,
    element_type: PhantomData<fn(&T)>,
}

impl<T, K, F> fmt::Debug for DisjointSet<T, K, F>
    where K: fmt::Debug,
          F: Fn(&T) -> K
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DisjointSet :: nodes: {:?}", self.nodes)
    }
}

impl<T, K, F> DisjointSet<T, K, F>
    where K: Hash + Eq + Clone,
          F: Fn(&T) -> K
{
    pub fn new(key_fn: F) -> DisjointSet<T, K, F> {
        DisjointSet::with_capacity(0, key_fn)
    }

    pub fn with_capacity(capacity: usize, key_fn: F) -> DisjointSet<T, K, F> {
        DisjointSet {
            nodes: Vec::with_capacity(capacity),
            indices: utils::fnv_hashmap(capacity),
            key_fn,
            element_type: PhantomData,
        }
    }

    /// Number of elements tracked, regardless of how they are grouped.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registers `element` as a new singleton group.
    ///
    /// Keys must be unique, adding an element whose key is already present changes nothing
    /// and returns false.
    pub fn add(&mut self, element: &T) -> bool {
        let key = (self.key_fn)(element);
        if self.indices.contains_key(&key) {
            return false;
        }

        let index = self.nodes.len();
        self.nodes.push(Node {
            key: key.clone(),
            parent: index,
            rank: 0,
        });
        self.indices.insert(key, index);
        true
    }

    /// The key of the representative of the group `element` belongs to.
    /// Returns None if the element was never added.
    ///
    /// Every node on the way to the root is repointed directly at the root.
    pub fn find(&mut self, element: &T) -> Option<K> {
        self.index_of(element).map(|index| {
            let root = self.compressing_root(index);
            self.nodes[root].key.clone()
        })
    }

    /// Same answer as `find` without path compression, for use through a shared reference.
    pub fn root_key(&self, element: &T) -> Option<&K> {
        self.index_of(element).map(|index| &self.nodes[self.root(index)].key)
    }

    /// Unions the groups of `a` and `b` by rank.
    /// Returns true if two distinct groups were joined, missing elements are ignored.
    pub fn merge(&mut self, a: &T, b: &T) -> bool {
        let (a_index, b_index) = match (self.index_of(a), self.index_of(b)) {
            (Some(a_index), Some(b_index)) => (a_index, b_index),
            _ => return false,
        };

        let mut a_root = self.compressing_root(a_index);
        let mut b_root = self.compressing_root(b_index);
        if a_root == b_root {
            return false;
        }

        if self.nodes[a_root].rank < self.nodes[b_root].rank {
            std::mem::swap(&mut a_root, &mut b_root);
        }
        if self.nodes[a_root].rank == self.nodes[b_root].rank {
            self.nodes[a_root].rank += 1;
        }
        self.nodes[b_root].parent = a_root;
        true
    }

    /// True iff both elements are present and share a representative.
    pub fn has_same_group(&mut self, a: &T, b: &T) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a_index), Some(b_index)) => {
                self.compressing_root(a_index) == self.compressing_root(b_index)
            }
            _ => false,
        }
    }

    /// Number of distinct groups, resolved from scratch on every call.
    pub fn component_count(&self) -> usize {
        let mut roots = utils::fnv_hashset(self.nodes.len());
        for index in 0..self.nodes.len() {
            roots.insert(self.root(index));
        }
        roots.len()
    }

    #[inline]
    fn index_of(&self, element: &T) -> Option<usize> {
        self.indices.get(&(self.key_fn)(element)).cloned()
    }

    fn root(&self, index: usize) -> usize {
        let mut current = index;
        while self.nodes[current].parent != current {
            current = self.nodes[current].parent;
        }
        current
    }

    fn compressing_root(&mut self, index: usize) -> usize {
        let root = self.root(index);

        let mut current = index;
        while current != root {
            let next = self.nodes[current].parent;
            self.nodes[current].parent = root;
            current = next;
        }
        root
    }
}
