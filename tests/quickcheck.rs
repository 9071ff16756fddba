use quickcheck::quickcheck;
use splay_set::splay_tree::SplaySet;
use std::collections::BTreeSet;

fn keys(set: &SplaySet<u32>) -> Vec<u32> {
    set.iter().cloned().collect()
}

quickcheck! {
    fn round_trip(xs: Vec<u32>) -> bool {
        let set: SplaySet<u32> = xs.iter().cloned().collect();
        let expected: BTreeSet<u32> = xs.into_iter().collect();
        set.len() == expected.len() && keys(&set) == expected.into_iter().collect::<Vec<u32>>()
    }

    fn add_then_contains(xs: Vec<u32>, x: u32) -> bool {
        let mut set: SplaySet<u32> = xs.into_iter().collect();
        set.add(x);
        set.root() == Some(&x) && set.contains(&x)
    }

    fn add_is_idempotent(xs: Vec<u32>, x: u32) -> bool {
        let mut set: SplaySet<u32> = xs.into_iter().collect();
        set.add(x);
        let before = keys(&set);
        !set.add(x) && keys(&set) == before
    }

    fn contains_splays_to_root(xs: Vec<u32>, x: u32) -> bool {
        let x_in_xs = xs.contains(&x);
        let mut set: SplaySet<u32> = xs.into_iter().collect();
        let found = set.contains(&x);
        found == x_in_xs && (!found || set.root() == Some(&x))
    }

    fn remove(xs: Vec<u32>, x: u32) -> bool {
        let x_in_xs = xs.contains(&x);
        let mut set: SplaySet<u32> = xs.iter().cloned().collect();
        let before = keys(&set);

        if set.remove(&x) {
            x_in_xs && !set.contains(&x) && set.len() + 1 == before.len()
        } else {
            !x_in_xs && keys(&set) == before
        }
    }

    fn order_after_removals(xs: Vec<u32>, ys: Vec<u32>) -> bool {
        let mut set: SplaySet<u32> = xs.into_iter().collect();
        for y in &ys {
            set.remove(y);
        }
        let keys = keys(&set);
        keys.windows(2).all(|pair| pair[0] < pair[1]) && ys.iter().all(|y| !keys.contains(y))
    }

    fn pop_min_max(xs: Vec<u32>) -> bool {
        let min = xs.iter().cloned().min();
        let max = xs.iter().cloned().max();
        let mut set: SplaySet<u32> = xs.into_iter().collect();
        set.min() == min.as_ref() && set.max() == max.as_ref() && set.pop_max() == max
            && (set.is_empty() || set.pop_min() == min)
    }
}
