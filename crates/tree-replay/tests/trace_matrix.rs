use proptest::prelude::*;
use tree_replay::{
    avl_trace, random_keys, red_black_trace, BalanceTag, Color, KeySource, Trace,
};

fn sorted(mut keys: Vec<f64>) -> Vec<f64> {
    keys.sort_by(|a, b| a.partial_cmp(b).expect("finite keys"));
    keys
}

fn check_trace(trace: &Trace, keys: &[f64]) {
    assert_eq!(trace.len(), keys.len());
    for (i, snapshot) in trace.iter().enumerate() {
        assert_eq!(snapshot.len(), i + 1, "snapshot {i} has one node per key");
        assert_eq!(snapshot.inserted(), Some(keys[i]));
        assert_eq!(snapshot.in_order(), sorted(keys[..=i].to_vec()));
        if let Err(err) = snapshot.assert_valid() {
            panic!("invalid snapshot {i}: {err}");
        }
    }
}

#[test]
fn trace_length_law_matrix() {
    let keys = [5.0, 3.0, 8.0, 1.0, 4.0];
    assert_eq!(avl_trace(&keys).unwrap().len(), 5);
    assert_eq!(red_black_trace(&keys).unwrap().len(), 5);

    assert_eq!(avl_trace(&[]).unwrap().len(), 0);
    assert!(avl_trace(&[]).unwrap().is_empty());
    assert_eq!(red_black_trace(&[]).unwrap().len(), 0);
}

#[test]
fn trace_snapshots_valid_at_every_step_matrix() {
    let keys = [50.0, 30.0, 70.0, 20.0, 40.0, 60.0, 80.0, 65.0, 62.0];

    check_trace(&avl_trace(&keys).unwrap(), &keys);
    check_trace(&red_black_trace(&keys).unwrap(), &keys);
}

#[test]
fn trace_determinism_law_matrix() {
    let keys = random_keys(42, 64, -500, 500);

    assert_eq!(avl_trace(&keys).unwrap(), avl_trace(&keys).unwrap());
    assert_eq!(
        red_black_trace(&keys).unwrap(),
        red_black_trace(&keys).unwrap()
    );
}

#[test]
fn trace_earlier_snapshots_never_see_later_keys_matrix() {
    let keys = [9.0, 2.0, 7.0, 4.0];
    let trace = avl_trace(&keys).unwrap();

    let first = trace.get(0).unwrap();
    assert_eq!(first.in_order(), vec![9.0]);

    let second = trace.get(1).unwrap();
    assert_eq!(second.in_order(), vec![2.0, 9.0]);

    assert_eq!(trace.last().unwrap().in_order(), vec![2.0, 4.0, 7.0, 9.0]);
}

#[test]
fn trace_avl_balanced_seven_keys_matrix() {
    let keys = [50.0, 30.0, 70.0, 20.0, 40.0, 60.0, 80.0];
    let trace = avl_trace(&keys).unwrap();
    let last = trace.last().unwrap();

    let root = last.node(last.root().unwrap());
    assert_eq!(root.value, 50.0);
    assert_eq!(root.balance, BalanceTag::Height(3));
}

#[test]
fn trace_red_black_recolor_scenario_matrix() {
    let keys = [10.0, 20.0, 30.0];
    let trace = red_black_trace(&keys).unwrap();
    let last = trace.last().unwrap();

    let root = last.node(last.root().unwrap());
    assert_eq!(root.value, 20.0);
    assert_eq!(root.balance, BalanceTag::Color(Color::Black));
    assert_eq!(
        last.node(root.left.unwrap()).balance,
        BalanceTag::Color(Color::Red)
    );
    assert_eq!(
        last.node(root.right.unwrap()).balance,
        BalanceTag::Color(Color::Red)
    );
}

#[test]
fn trace_rejects_non_finite_keys_matrix() {
    let err = avl_trace(&[1.0, 2.0, f64::NAN]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "key at position 2 is not a finite number: NaN"
    );

    assert!(red_black_trace(&[f64::INFINITY]).is_err());
    assert!(avl_trace(&[1.0, f64::NEG_INFINITY, 3.0]).is_err());
}

#[test]
fn trace_snapshot_serializes_for_renderer_matrix() {
    let trace = red_black_trace(&[10.0, 20.0, 30.0]).unwrap();
    let json = serde_json::to_value(trace.last().unwrap()).unwrap();

    assert_eq!(json["inserted"], 30.0);
    assert!(json["nodes"].as_array().unwrap().len() == 3);
    assert!(json["nodes"][0]["value"].is_number());
}

#[test]
fn keygen_reproducible_matrix() {
    assert_eq!(random_keys(7, 32, 0, 100), random_keys(7, 32, 0, 100));
    assert_ne!(random_keys(7, 32, 0, 100), random_keys(8, 32, 0, 100));

    let mut source = KeySource::new(7);
    let first = source.random_keys(16, 0, 100);
    let second = source.random_keys(16, 0, 100);
    assert_ne!(first, second, "a source advances between batches");

    for key in random_keys(99, 128, -50, 50) {
        assert!(key.is_finite());
        assert!((-50.0..=50.0).contains(&key));
    }
}

proptest! {
    #[test]
    fn prop_avl_trace_valid_for_any_keys(raw in prop::collection::vec(-100i32..100, 0..48)) {
        let keys: Vec<f64> = raw.iter().map(|&k| k as f64).collect();
        let trace = avl_trace(&keys).unwrap();
        check_trace(&trace, &keys);
    }

    #[test]
    fn prop_red_black_trace_valid_for_any_keys(raw in prop::collection::vec(-100i32..100, 0..48)) {
        let keys: Vec<f64> = raw.iter().map(|&k| k as f64).collect();
        let trace = red_black_trace(&keys).unwrap();
        check_trace(&trace, &keys);
    }

    #[test]
    fn prop_traces_deterministic(raw in prop::collection::vec(-100i32..100, 0..32)) {
        let keys: Vec<f64> = raw.iter().map(|&k| k as f64).collect();
        prop_assert_eq!(avl_trace(&keys).unwrap(), avl_trace(&keys).unwrap());
        prop_assert_eq!(red_black_trace(&keys).unwrap(), red_black_trace(&keys).unwrap());
    }
}
