//! Immutable per-step copies of a tree under construction.

use serde::{Deserialize, Serialize};

/// Node color in a red-black snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Balancing metadata carried by one snapshot node: the memoized height
/// for AVL trees, the color for red-black trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceTag {
    Height(u32),
    Color(Color),
}

/// One node of a snapshot. Links are indices into the snapshot's own
/// node list; there are no parent links.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub value: f64,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub balance: BalanceTag,
}

/// A deep, parent-link-free copy of a tree at one point in time, tagged
/// with the key whose insertion produced it.
///
/// Snapshots never alias live engine state: the recorder copies the
/// engine's arena node by node, so mutating the live tree afterwards
/// cannot change a snapshot already taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    root: Option<u32>,
    nodes: Vec<SnapshotNode>,
    inserted: Option<f64>,
}

impl Snapshot {
    pub(crate) fn new(root: Option<u32>, nodes: Vec<SnapshotNode>, inserted: Option<f64>) -> Self {
        Self {
            root,
            nodes,
            inserted,
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn nodes(&self) -> &[SnapshotNode] {
        &self.nodes
    }

    pub fn node(&self, idx: u32) -> &SnapshotNode {
        &self.nodes[idx as usize]
    }

    /// The key whose insertion produced this snapshot, if any.
    pub fn inserted(&self) -> Option<f64> {
        self.inserted
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values in key order. Snapshots carry no parent links, so this
    /// walks with an explicit stack.
    pub fn in_order(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(i) = curr {
                stack.push(i);
                curr = self.nodes[i as usize].left;
            }
            let Some(i) = stack.pop() else {
                break;
            };
            out.push(self.nodes[i as usize].value);
            curr = self.nodes[i as usize].right;
        }
        out
    }

    /// Verifies the structural invariants the originating engine is
    /// supposed to have restored: key order, and either the AVL balance
    /// bound or the red-black color rules depending on the node tags.
    pub fn assert_valid(&self) -> Result<(), String> {
        let values = self.in_order();
        if values.len() != self.nodes.len() {
            return Err("Unreachable nodes in snapshot".to_string());
        }
        if values.windows(2).any(|w| w[0] > w[1]) {
            return Err("Node order violated".to_string());
        }

        let Some(root) = self.root else {
            return Ok(());
        };

        match self.nodes[root as usize].balance {
            BalanceTag::Height(_) => {
                self.check_heights(Some(root))?;
            }
            BalanceTag::Color(c) => {
                if c != Color::Black {
                    return Err("Root is not black".to_string());
                }
                self.check_black_height(Some(root))?;
            }
        }

        Ok(())
    }

    fn check_heights(&self, node: Option<u32>) -> Result<u32, String> {
        let Some(node) = node else {
            return Ok(0);
        };
        let n = &self.nodes[node as usize];
        let lh = self.check_heights(n.left)?;
        let rh = self.check_heights(n.right)?;
        let actual = match n.balance {
            BalanceTag::Height(h) => h,
            BalanceTag::Color(_) => return Err("Mixed balance metadata".to_string()),
        };
        let expected = 1 + lh.max(rh);
        if actual != expected {
            return Err(format!("Height mismatch: expected {expected}, got {actual}"));
        }
        if lh.abs_diff(rh) > 1 {
            return Err("AVL balance violated".to_string());
        }
        Ok(expected)
    }

    fn check_black_height(&self, node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };
        let n = &self.nodes[node as usize];
        let color = match n.balance {
            BalanceTag::Color(c) => c,
            BalanceTag::Height(_) => return Err("Mixed balance metadata".to_string()),
        };
        if color == Color::Red {
            for child in [n.left, n.right].into_iter().flatten() {
                if matches!(
                    self.nodes[child as usize].balance,
                    BalanceTag::Color(Color::Red)
                ) {
                    return Err("Red node has red child".to_string());
                }
            }
        }
        let lh = self.check_black_height(n.left)?;
        let rh = self.check_black_height(n.right)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }
        Ok(lh + usize::from(color == Color::Black))
    }
}
