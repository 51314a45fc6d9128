//! Red-black insertion engine.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::RbTree;
pub use types::{RbNode, RbNodeLike};
pub use util::{assert_red_black_tree, insert, print};
