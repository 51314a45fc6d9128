//! Trace recording: drive a key sequence through an engine, one
//! snapshot per insertion.

use balance_forest::avl::AvlTree;
use balance_forest::red_black::RbTree;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::snapshot::{BalanceTag, Color, Snapshot, SnapshotNode};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    /// Keys must be finite: NaN and the infinities break the total
    /// order the engines assume. Rejected here, at the boundary where
    /// keys enter the core; the engines themselves never fail.
    #[error("key at position {index} is not a finite number: {value}")]
    NonFiniteKey { index: usize, value: f64 },
}

/// Ordered, append-only sequence of snapshots, one per insertion, in
/// insertion order. Immutable once built; playback reads it by index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    snapshots: Vec<Snapshot>,
}

impl Trace {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}

/// A tree construction engine the recorder can drive.
///
/// There are exactly two implementations and both are known statically;
/// the trait exists as a seam for the recorder, not for dynamic
/// dispatch. `Default` gives the recorder a fresh, empty tree: a new
/// trace never continues an old one.
pub trait InsertEngine: Default {
    fn insert_key(&mut self, key: f64);

    /// Copies the current tree into parent-link-free snapshot nodes.
    /// Arena indices are preserved, so equal key sequences produce
    /// structurally identical captures.
    fn capture(&self) -> (Option<u32>, Vec<SnapshotNode>);
}

impl InsertEngine for AvlTree<f64> {
    fn insert_key(&mut self, key: f64) {
        self.insert(key);
    }

    fn capture(&self) -> (Option<u32>, Vec<SnapshotNode>) {
        let nodes = self
            .arena()
            .iter()
            .map(|n| SnapshotNode {
                value: n.k,
                left: n.l,
                right: n.r,
                balance: BalanceTag::Height(n.h),
            })
            .collect();
        (self.root_index(), nodes)
    }
}

impl InsertEngine for RbTree<f64> {
    fn insert_key(&mut self, key: f64) {
        self.insert(key);
    }

    fn capture(&self) -> (Option<u32>, Vec<SnapshotNode>) {
        let nodes = self
            .arena()
            .iter()
            .map(|n| SnapshotNode {
                value: n.k,
                left: n.l,
                right: n.r,
                balance: BalanceTag::Color(if n.b { Color::Black } else { Color::Red }),
            })
            .collect();
        (self.root_index(), nodes)
    }
}

/// Runs every key through a fresh engine in input order and records one
/// snapshot per insertion.
///
/// The resulting trace has exactly `keys.len()` snapshots; an empty key
/// list yields an empty trace, which the playback controller treats as
/// idle. Given the same keys and the same engine type the result is
/// identical down to arena indices.
pub fn build_trace<E: InsertEngine>(keys: &[f64]) -> Result<Trace, TraceError> {
    let mut engine = E::default();
    let mut snapshots = Vec::with_capacity(keys.len());

    for (index, &key) in keys.iter().enumerate() {
        if !key.is_finite() {
            return Err(TraceError::NonFiniteKey { index, value: key });
        }
        engine.insert_key(key);
        let (root, nodes) = engine.capture();
        snapshots.push(Snapshot::new(root, nodes, Some(key)));
    }

    Ok(Trace { snapshots })
}

/// Records an AVL construction trace.
pub fn avl_trace(keys: &[f64]) -> Result<Trace, TraceError> {
    build_trace::<AvlTree<f64>>(keys)
}

/// Records a red-black construction trace.
pub fn red_black_trace(keys: &[f64]) -> Result<Trace, TraceError> {
    build_trace::<RbTree<f64>>(keys)
}
