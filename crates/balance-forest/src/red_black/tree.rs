use std::fmt::Debug;

use crate::util;

use super::types::RbNode;
use super::util::{assert_red_black_tree, insert, print};

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Arena-backed red-black tree, grown by insertion only.
///
/// Duplicate keys are inserted as distinct nodes to the right of the
/// existing equal key; nothing is ever replaced or removed.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Inserts `key` as a fresh red node and restores the color
    /// invariants. Returns the new node's arena index.
    pub fn insert(&mut self, key: K) -> u32 {
        self.arena.push(RbNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        self.root = insert(&mut self.arena, self.root, idx, &self.comparator);
        idx
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &RbNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Visits every node in key order.
    pub fn for_each<G: FnMut(u32, &RbNode<K>)>(&self, f: G) {
        util::for_each(&self.arena, self.root, f);
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_red_black_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn print(&self) -> String
    where
        K: Debug,
    {
        print::<K, RbNode<K>>(&self.arena, self.root, "")
    }
}
