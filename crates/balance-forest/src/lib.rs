//! Self-balancing binary search tree construction engines.
//!
//! Provides the two insertion engines behind the step-by-step tree
//! builder: AVL insertion with rotation-based rebalancing and red-black
//! insertion with color fixup. Trees grow by insertion only; each engine
//! restores its structural invariant after every single insertion, so a
//! recorder can take a consistent snapshot between any two insertions.
//!
//! All "pointers" are `Option<u32>` indices into a `Vec`-backed arena
//! owned by the tree value. Parent links are non-owning back-indices:
//! the red-black fixup walks them upward, and the shared in-order
//! traversal uses them to iterate without an explicit stack.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`KeyNode`] link traits |
//! | [`util`] | `first`, `next`, `last`, `size`, `for_each` traversal helpers |
//! | [`avl`] | [`AvlNode`], height-based insert/rotations, [`AvlTree`] |
//! | [`red_black`] | [`RbNode`], insert + color fixup, [`RbTree`] |

pub mod avl;
pub mod red_black;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlTree};
pub use red_black::{RbNode, RbTree};
pub use types::{KeyNode, Node};
pub use util::{first, last, next, size};
