//! Node trait definitions.
//!
//! Each node stores its links as `Option<u32>` indices into a
//! [`Vec`]-backed arena. All tree-manipulation functions take the arena
//! plus indices; the arena is the sole owner of every node.

/// Tree links (`p`, `l`, `r`).
///
/// `p` is a non-owning back-index; ownership flows strictly root to
/// children through `l` and `r`.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the insertion engines.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Keyed node interface shared by both engines.
///
/// Nodes carry a bare key; two nodes with equal keys are distinct
/// entities identified by their arena index.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}
