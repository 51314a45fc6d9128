use std::fmt::Debug;

use crate::util::{first, next};

use super::types::AvlNodeLike;

#[inline]
fn set_p<K, N>(arena: &mut [N], i: u32, v: Option<u32>)
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<K, N>(arena: &mut [N], i: u32, v: Option<u32>)
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<K, N>(arena: &mut [N], i: u32, v: Option<u32>)
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].set_r(v);
}

#[inline]
fn height_of<K, N>(arena: &[N], i: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    i.map(|i| arena[i as usize].height()).unwrap_or(0)
}

#[inline]
fn update_height<K, N>(arena: &mut [N], i: u32)
where
    N: AvlNodeLike<K>,
{
    let lh = height_of(arena, arena[i as usize].l());
    let rh = height_of(arena, arena[i as usize].r());
    arena[i as usize].set_height(1 + lh.max(rh));
}

#[inline]
fn balance_of<K, N>(arena: &[N], i: u32) -> i32
where
    N: AvlNodeLike<K>,
{
    let lh = height_of(arena, arena[i as usize].l()) as i32;
    let rh = height_of(arena, arena[i as usize].r()) as i32;
    lh - rh
}

/// Inserts node `n` into the tree rooted at `root` and rebalances.
///
/// Keys not strictly less than the current node are routed right, so a
/// duplicate key always lands to the right of the existing equal key.
/// Returns the new root index. Callers must use the returned root; the
/// previous root may have been rotated below another node.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    Some(insert_at(arena, root, n, comparator))
}

fn insert_at<K, N, C>(arena: &mut [N], node: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(i) = node else {
        return n;
    };

    let cmp = comparator(arena[n as usize].key(), arena[i as usize].key());
    if cmp < 0 {
        let li = arena[i as usize].l();
        let l = insert_at(arena, li, n, comparator);
        set_l(arena, i, Some(l));
        set_p(arena, l, Some(i));
    } else {
        let ri = arena[i as usize].r();
        let r = insert_at(arena, ri, n, comparator);
        set_r(arena, i, Some(r));
        set_p(arena, r, Some(i));
    }

    update_height(arena, i);
    rebalance_after_insert(arena, i, n, comparator)
}

/// Applies one of the four rebalancing cases at `i` after `n` was
/// inserted somewhere below it. Returns the subtree's new root.
fn rebalance_after_insert<K, N, C>(arena: &mut [N], i: u32, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let balance = balance_of(arena, i);

    if balance > 1 {
        let l = arena[i as usize].l().expect("left-heavy node has left child");
        if comparator(arena[n as usize].key(), arena[l as usize].key()) < 0 {
            rotate_right(arena, i)
        } else {
            rotate_left(arena, l);
            rotate_right(arena, i)
        }
    } else if balance < -1 {
        let r = arena[i as usize].r().expect("right-heavy node has right child");
        if comparator(arena[n as usize].key(), arena[r as usize].key()) < 0 {
            rotate_right(arena, r);
            rotate_left(arena, i)
        } else {
            rotate_left(arena, i)
        }
    } else {
        i
    }
}

/// Right rotation at `n`. Re-parents three links and recomputes the two
/// heights that changed; ancestors are left to the unwinding insertion.
fn rotate_right<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let l = arena[n as usize].l().expect("rotation pivot has left child");
    let lr = arena[l as usize].r();
    let p = arena[n as usize].p();

    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }
    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    set_p(arena, l, p);
    if let Some(p) = p {
        if arena[p as usize].l() == Some(n) {
            set_l(arena, p, Some(l));
        } else {
            set_r(arena, p, Some(l));
        }
    }

    update_height(arena, n);
    update_height(arena, l);
    l
}

/// Left rotation at `n`, mirror of [`rotate_right`].
fn rotate_left<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let r = arena[n as usize].r().expect("rotation pivot has right child");
    let rl = arena[r as usize].l();
    let p = arena[n as usize].p();

    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }
    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    set_p(arena, r, p);
    if let Some(p) = p {
        if arena[p as usize].l() == Some(n) {
            set_l(arena, p, Some(r));
        } else {
            set_r(arena, p, Some(r));
        }
    }

    update_height(arena, n);
    update_height(arena, r);
    r
}

fn tree_height<K, N>(arena: &[N], node: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    let Some(node) = node else {
        return 0;
    };
    let lh = tree_height(arena, arena[node as usize].l());
    let rh = tree_height(arena, arena[node as usize].r());
    1 + lh.max(rh)
}

/// Verifies parent links, memoized heights, the AVL balance bound, and
/// in-order key order over the whole tree.
pub fn assert_avl_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err("Root has parent".to_string());
    }

    fn validate_links_and_height<K, N>(arena: &[N], node: u32) -> Result<(), String>
    where
        N: AvlNodeLike<K>,
    {
        let l = arena[node as usize].l();
        let r = arena[node as usize].r();

        if let Some(l) = l {
            if arena[l as usize].p() != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
            validate_links_and_height(arena, l)?;
        }
        if let Some(r) = r {
            if arena[r as usize].p() != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
            validate_links_and_height(arena, r)?;
        }

        let lh = tree_height(arena, l);
        let rh = tree_height(arena, r);
        let expected = 1 + lh.max(rh);
        let actual = arena[node as usize].height();
        if actual != expected {
            return Err(format!("Height mismatch: expected {expected}, got {actual}"));
        }
        if !(-1..=1).contains(&(lh as i32 - rh as i32)) {
            return Err("AVL balance violated".to_string());
        }

        Ok(())
    }

    validate_links_and_height(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            let cmp = comparator(arena[prev as usize].key(), arena[i as usize].key());
            if cmp > 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.key()
            )
        }
    }
}
