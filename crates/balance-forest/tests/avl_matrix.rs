use balance_forest::avl::{assert_avl_tree, insert, AvlNode, AvlTree};
use balance_forest::util::{first, last, size};

fn avl_cmp(a: &i32, b: &i32) -> i32 {
    a.cmp(b) as i32
}

fn insert_value(arena: &mut Vec<AvlNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    arena.push(AvlNode::new(value));
    let idx = (arena.len() - 1) as u32;
    let root = insert(arena, root, idx, &avl_cmp);
    if let Err(err) = assert_avl_tree(arena, root, &avl_cmp) {
        panic!("invalid avl tree after insert({value}): {err}");
    }
    root
}

fn keys_in_order(arena: &[AvlNode<i32>], root: Option<u32>) -> Vec<i32> {
    let mut keys = Vec::new();
    balance_forest::util::for_each(arena, root, |_i, n| keys.push(n.k));
    keys
}

#[test]
fn avl_perfectly_balanced_seven_keys_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for value in [50, 30, 70, 20, 40, 60, 80] {
        root = insert_value(&mut arena, root, value);
    }

    let r = root.expect("non-empty tree");
    assert_eq!(size(&arena, root), 7);
    assert_eq!(arena[r as usize].k, 50);
    assert_eq!(arena[r as usize].h, 3);

    let l = arena[r as usize].l.expect("left child") as usize;
    let rr = arena[r as usize].r.expect("right child") as usize;
    assert_eq!(arena[l].k, 30);
    assert_eq!(arena[rr].k, 70);
    assert_eq!(arena[l].h, 2);
    assert_eq!(arena[rr].h, 2);

    let leaves: Vec<i32> = [arena[l].l, arena[l].r, arena[rr].l, arena[rr].r]
        .into_iter()
        .map(|i| arena[i.expect("leaf") as usize].k)
        .collect();
    assert_eq!(leaves, vec![20, 40, 60, 80]);
    assert_eq!(keys_in_order(&arena, root), vec![20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn avl_ascending_triple_single_left_rotation_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for value in [1, 2, 3] {
        root = insert_value(&mut arena, root, value);
    }

    let r = root.expect("non-empty tree") as usize;
    assert_eq!(arena[r].k, 2);
    assert_eq!(arena[r].h, 2);
    assert_eq!(arena[arena[r].l.expect("left") as usize].k, 1);
    assert_eq!(arena[arena[r].r.expect("right") as usize].k, 3);
}

#[test]
fn avl_descending_triple_single_right_rotation_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for value in [3, 2, 1] {
        root = insert_value(&mut arena, root, value);
    }

    let r = root.expect("non-empty tree") as usize;
    assert_eq!(arena[r].k, 2);
    assert_eq!(arena[arena[r].l.expect("left") as usize].k, 1);
    assert_eq!(arena[arena[r].r.expect("right") as usize].k, 3);
}

#[test]
fn avl_zigzag_double_rotations_matrix() {
    // Left-Right shape.
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;
    for value in [3, 1, 2] {
        root = insert_value(&mut arena, root, value);
    }
    let r = root.expect("non-empty tree") as usize;
    assert_eq!(arena[r].k, 2);

    // Right-Left shape.
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;
    for value in [1, 3, 2] {
        root = insert_value(&mut arena, root, value);
    }
    let r = root.expect("non-empty tree") as usize;
    assert_eq!(arena[r].k, 2);
}

#[test]
fn avl_numbers_from_0_to_100_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for i in 0..=100 {
        root = insert_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    assert_eq!(keys_in_order(&arena, root), (0..=100).collect::<Vec<_>>());
    assert_eq!(first(&arena, root).map(|i| arena[i as usize].k), Some(0));
    assert_eq!(last(&arena, root).map(|i| arena[i as usize].k), Some(100));
}

#[test]
fn avl_numbers_from_100_to_0_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for i in (0..=100).rev() {
        root = insert_value(&mut arena, root, i);
    }
    assert_eq!(size(&arena, root), 101);
    assert_eq!(keys_in_order(&arena, root), (0..=100).collect::<Vec<_>>());
}

#[test]
fn avl_numbers_both_directions_from_50_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for i in 0..=40 {
        root = insert_value(&mut arena, root, 50 + i);
        root = insert_value(&mut arena, root, 50 - i);
        assert_eq!(size(&arena, root), (i * 2 + 2) as usize);
    }
}

#[test]
fn avl_duplicate_keys_inserted_to_the_right_matrix() {
    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;

    for value in [5, 5, 5, 5] {
        root = insert_value(&mut arena, root, value);
    }
    assert_eq!(size(&arena, root), 4);
    assert_eq!(keys_in_order(&arena, root), vec![5, 5, 5, 5]);

    let mut arena = Vec::<AvlNode<i32>>::new();
    let mut root = None;
    for value in [3, 1, 3, 2, 3] {
        root = insert_value(&mut arena, root, value);
    }
    assert_eq!(keys_in_order(&arena, root), vec![1, 2, 3, 3, 3]);
}

#[test]
fn avl_tree_wrapper_matrix() {
    let mut tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);

    for value in [8, 4, 12, 2, 6, 10, 14] {
        tree.insert(value);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 7);
    assert!(!tree.is_empty());

    let mut keys = Vec::new();
    tree.for_each(|_i, n| keys.push(n.k));
    assert_eq!(keys, vec![2, 4, 6, 8, 10, 12, 14]);

    let dump = tree.print();
    assert!(dump.contains("h="));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
}

#[test]
fn avl_tree_float_keys_matrix() {
    let mut tree = AvlTree::<f64>::new();
    for value in [3.5, 1.25, 7.75, 0.5, 2.0] {
        tree.insert(value);
        tree.assert_valid().unwrap();
    }
    let mut keys = Vec::new();
    tree.for_each(|_i, n| keys.push(n.k));
    assert_eq!(keys, vec![0.5, 1.25, 2.0, 3.5, 7.75]);
}
