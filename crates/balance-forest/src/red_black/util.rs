use std::fmt::Debug;

use crate::util::{first, next};

use super::types::RbNodeLike;

#[inline]
fn set_p<K, N>(arena: &mut Vec<N>, i: u32, v: Option<u32>)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<K, N>(arena: &mut Vec<N>, i: u32, v: Option<u32>)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<K, N>(arena: &mut Vec<N>, i: u32, v: Option<u32>)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_r(v);
}

#[inline]
fn is_black<K, N>(arena: &[N], i: u32) -> bool
where
    N: RbNodeLike<K>,
{
    arena[i as usize].is_black()
}

#[inline]
fn set_black<K, N>(arena: &mut Vec<N>, i: u32, v: bool)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_black(v);
}

/// Inserts node `n` (red) into the tree rooted at `root`, then restores
/// the color invariants.
///
/// Same duplicate routing as the AVL engine: keys not strictly less than
/// the current node go right. Returns the new root index.
pub fn insert<K, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        set_black(arena, n, true);
        return Some(n);
    };

    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let next = if cmp < 0 {
            arena[curr as usize].l()
        } else {
            arena[curr as usize].r()
        };
        match next {
            Some(next) => curr = next,
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                break;
            }
        }
    }

    Some(insert_fixup(arena, root.expect("root exists"), n))
}

/// Walks upward from the freshly inserted red node `z` repairing red-red
/// violations. Each pass either terminates after at most two rotations
/// or recolors and continues from the grandparent, two levels up.
fn insert_fixup<K, N>(arena: &mut Vec<N>, mut root: u32, mut z: u32) -> u32
where
    N: RbNodeLike<K>,
{
    loop {
        let Some(p) = arena[z as usize].p() else {
            break;
        };
        if is_black(arena, p) {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = arena[p as usize].p().expect("red node has grandparent");

        if arena[g as usize].l() == Some(p) {
            let uncle = arena[g as usize].r();
            if uncle.map(|u| !is_black(arena, u)).unwrap_or(false) {
                set_black(arena, p, true);
                set_black(arena, uncle.expect("uncle exists"), true);
                set_black(arena, g, false);
                z = g;
                continue;
            }
            if arena[p as usize].r() == Some(z) {
                z = p;
                rotate_left(arena, &mut root, z);
            }
            let p = arena[z as usize].p().expect("straightened node has parent");
            let g = arena[p as usize].p().expect("straightened node has grandparent");
            set_black(arena, p, true);
            set_black(arena, g, false);
            rotate_right(arena, &mut root, g);
        } else {
            let uncle = arena[g as usize].l();
            if uncle.map(|u| !is_black(arena, u)).unwrap_or(false) {
                set_black(arena, p, true);
                set_black(arena, uncle.expect("uncle exists"), true);
                set_black(arena, g, false);
                z = g;
                continue;
            }
            if arena[p as usize].l() == Some(z) {
                z = p;
                rotate_right(arena, &mut root, z);
            }
            let p = arena[z as usize].p().expect("straightened node has parent");
            let g = arena[p as usize].p().expect("straightened node has grandparent");
            set_black(arena, p, true);
            set_black(arena, g, false);
            rotate_left(arena, &mut root, g);
        }
    }

    set_black(arena, root, true);
    root
}

/// Left rotation at `x`. Reassigns parent links on the pivot, the
/// promoted child, and the re-parented subtree, and updates `root` when
/// the rotation occurs at the root.
fn rotate_left<K, N>(arena: &mut Vec<N>, root: &mut u32, x: u32)
where
    N: RbNodeLike<K>,
{
    let y = arena[x as usize].r().expect("rotation pivot has right child");
    let yl = arena[y as usize].l();

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }

    let p = arena[x as usize].p();
    set_p(arena, y, p);
    match p {
        None => *root = y,
        Some(p) => {
            if arena[p as usize].l() == Some(x) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
        }
    }

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Right rotation at `x`, mirror of [`rotate_left`].
fn rotate_right<K, N>(arena: &mut Vec<N>, root: &mut u32, x: u32)
where
    N: RbNodeLike<K>,
{
    let y = arena[x as usize].l().expect("rotation pivot has left child");
    let yr = arena[y as usize].r();

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }

    let p = arena[x as usize].p();
    set_p(arena, y, p);
    match p {
        None => *root = y,
        Some(p) => {
            if arena[p as usize].l() == Some(x) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
        }
    }

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Verifies parent links, root blackness, the no-red-red rule, uniform
/// black-height, and in-order key order over the whole tree.
pub fn assert_red_black_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err("Root has parent".to_string());
    }
    if !arena[root as usize].is_black() {
        return Err("Root is not black".to_string());
    }

    fn black_height<K, N>(arena: &[N], node: Option<u32>) -> Result<usize, String>
    where
        N: RbNodeLike<K>,
    {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = arena[node as usize].l();
        let r = arena[node as usize].r();

        if let Some(li) = l {
            if arena[li as usize].p() != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
        }
        if let Some(ri) = r {
            if arena[ri as usize].p() != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
        }

        if !arena[node as usize].is_black() {
            if l.map(|i| !arena[i as usize].is_black()).unwrap_or(false) {
                return Err("Red node has red left child".to_string());
            }
            if r.map(|i| !arena[i as usize].is_black()).unwrap_or(false) {
                return Err("Red node has red right child".to_string());
            }
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }

        Ok(lh + usize::from(arena[node as usize].is_black()))
    }

    black_height(arena, Some(root))?;

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

/// Debug printer for red-black trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: RbNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [{}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                if n.is_black() { "B" } else { "R" },
                n.key()
            )
        }
    }
}
