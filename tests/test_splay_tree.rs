use rand::Rng;
use splay_set::splay_tree::SplaySet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

fn assert_strictly_ascending(set: &SplaySet<u32>) {
    let keys = set.traverse();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(keys.len(), set.len());
}

fn keys(set: &SplaySet<u32>) -> Vec<u32> {
    set.iter().cloned().collect()
}

#[test]
fn int_test_splay_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = SplaySet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 10_000u32);

        match rng.gen_range(0, 3) {
            0 => {
                assert_eq!(set.add(key), expected.insert(key));
                assert_eq!(set.root(), Some(&key));
            },
            1 => {
                let present = expected.contains(&key);
                assert_eq!(set.contains(&key), present);
                if present {
                    assert_eq!(set.root(), Some(&key));
                }
            },
            _ => assert_eq!(set.remove(&key), expected.remove(&key)),
        }
    }

    assert_eq!(set.len(), expected.len());
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
}

#[test]
fn int_test_order_after_every_mutation() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 3, 5, 7]);
    let mut set = SplaySet::new();

    for _ in 0..2_000 {
        let key = rng.gen_range(0, 500u32);
        if rng.gen() {
            set.add(key);
        } else {
            set.remove(&key);
        }
        assert_strictly_ascending(&set);
    }
}

#[test]
fn int_test_insertion_order_independent() {
    let mut rng = rand::thread_rng();
    let mut keys: Vec<u32> = (0..1_000).collect();
    rng.shuffle(&mut keys);

    let shuffled: SplaySet<u32> = keys.iter().cloned().collect();
    let ascending: SplaySet<u32> = (0..1_000).collect();
    let descending: SplaySet<u32> = (0..1_000).rev().collect();

    assert_eq!(shuffled.traverse(), ascending.traverse());
    assert_eq!(descending.traverse(), ascending.traverse());
}

#[test]
fn int_test_ascending_then_descending_scenario() {
    let mut set = SplaySet::new();
    for key in 0..50 {
        set.add(key);
    }
    for key in (50..100).rev() {
        set.add(key);
    }

    assert_eq!(set.len(), 100);
    assert_eq!(keys(&set), (0..100).collect::<Vec<u32>>());

    assert!(set.remove(&27));
    assert!(!set.contains(&27));
    assert_eq!(set.len(), 99);
    assert_eq!(
        keys(&set),
        (0..100).filter(|key| *key != 27).collect::<Vec<u32>>(),
    );
    assert_eq!(
        format!("{}", set),
        (0..100)
            .filter(|key| *key != 27)
            .map(|key| key.to_string())
            .collect::<Vec<String>>()
            .join(" "),
    );
}

#[test]
fn int_test_empty_set() {
    let mut set: SplaySet<u32> = SplaySet::new();
    assert!(!set.contains(&0));
    assert!(!set.remove(&0));
    assert!(set.traverse().is_empty());
    assert!(set.is_empty());
}

#[test]
fn int_test_drain_by_extremes() {
    let mut set: SplaySet<u32> = (0..1_000).collect();
    for key in 0..500 {
        assert_eq!(set.pop_min(), Some(key));
        assert_eq!(set.pop_max(), Some(999 - key));
    }
    assert!(set.is_empty());
    assert_eq!(set.pop_min(), None);
}
