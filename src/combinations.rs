// Copyright (C) 2020-2026 Andy Kurnia.

use super::{matrix, move_set};
use std::collections::BTreeSet;

// Calls found with every combination of exactly k items, in lexicographic
// order of positions.
pub fn for_each_combination<T: Copy, F: FnMut(&[T])>(items: &[T], k: usize, found: &mut F) {
    struct Env<'a, T: Copy, F: FnMut(&[T])> {
        items: &'a [T],
        k: usize,
        buf: Vec<T>,
        found: &'a mut F,
    }
    fn iter<T: Copy, F: FnMut(&[T])>(env: &mut Env<'_, T, F>, start: usize) {
        if env.buf.len() == env.k {
            (env.found)(&env.buf);
            return;
        }
        // leave room for the rest.
        let need = env.k - env.buf.len();
        for i in start..=env.items.len() - need {
            env.buf.push(env.items[i]);
            iter(env, i + 1);
            env.buf.pop();
        }
    }
    if k > items.len() {
        return;
    }
    iter(
        &mut Env {
            items,
            k,
            buf: Vec::with_capacity(k),
            found,
        },
        0,
    );
}

// Advances to the next lexicographic permutation. false (and sorted) after
// the last one.
pub fn next_permutation<T: Ord>(v: &mut [T]) -> bool {
    if v.len() < 2 {
        return false;
    }
    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        v.reverse();
        return false;
    }
    let mut j = v.len() - 1;
    while v[j] <= v[i - 1] {
        j -= 1;
    }
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

// Every subset of 1..=max_size placements lying in a single column or a
// single row. Over-generates: most of these are not playable.
pub fn collinear_combinations(
    candidates: &BTreeSet<move_set::Placement>,
    dim: matrix::Dim,
    max_size: usize,
) -> BTreeSet<move_set::MoveSet> {
    let mut combinations = BTreeSet::new();
    let mut lane = Vec::new();
    for down in [true, false] {
        let num_lanes = if down { dim.cols } else { dim.rows };
        for lane_num in 0..num_lanes {
            lane.clear();
            lane.extend(
                candidates
                    .iter()
                    .filter(|p| p.location.lane_idx(down).0 == lane_num)
                    .copied(),
            );
            for k in 1..=max_size.min(lane.len()) {
                for_each_combination(&lane, k, &mut |placements: &[move_set::Placement]| {
                    if let Some(m) = move_set::MoveSet::new(placements.to_vec()) {
                        combinations.insert(m);
                    }
                });
            }
        }
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix::Location;
    use move_set::Placement;

    fn p(col: i8, row: i8, tile: u8) -> Placement {
        Placement {
            location: Location::new(col, row),
            tile,
        }
    }

    #[test]
    fn combinations_count() {
        let mut seen = Vec::new();
        for_each_combination(&[1, 2, 3, 4], 2, &mut |c: &[i32]| seen.push(c.to_vec()));
        assert_eq!(
            seen,
            [[1, 2], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4]].map(|x| x.to_vec())
        );
        let mut n = 0;
        for_each_combination(&[1, 2], 3, &mut |_: &[i32]| n += 1);
        assert_eq!(n, 0);
    }

    #[test]
    fn permutations_of_multiset() {
        let mut v = vec![1, 1, 2];
        let mut all = vec![v.clone()];
        while next_permutation(&mut v) {
            all.push(v.clone());
        }
        assert_eq!(all, [vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
        assert_eq!(v, [1, 1, 2]);
    }

    #[test]
    fn collinear_only_and_bounded() {
        let dim = matrix::Dim { rows: 5, cols: 5 };
        let candidates = [p(0, 0, 3), p(1, 0, 1), p(2, 0, 20), p(2, 1, 15), p(4, 4, 7)]
            .into_iter()
            .collect::<BTreeSet<_>>();
        let combos = collinear_combinations(&candidates, dim, 2);
        for m in &combos {
            assert!((1..=2).contains(&m.len()));
            assert!(m.orientation().is_some());
        }
        // 5 singles, row 0 pairs: 3, column c pair: 1.
        assert_eq!(combos.len(), 5 + 3 + 1);
        let all = collinear_combinations(&candidates, dim, 7);
        assert!(all.contains(&move_set::MoveSet::new(vec![p(0, 0, 3), p(1, 0, 1), p(2, 0, 20)]).unwrap()));
        assert!(!all.contains(&move_set::MoveSet::new(vec![p(0, 0, 3), p(2, 1, 15)]).unwrap()));
    }

    #[test]
    fn independent_of_input_order() {
        let dim = matrix::Dim { rows: 5, cols: 5 };
        let forward = [p(0, 0, 3), p(1, 0, 1), p(2, 0, 20), p(2, 1, 15)];
        let mut backward = forward;
        backward.reverse();
        let a = collinear_combinations(&forward.into_iter().collect(), dim, 7);
        let b = collinear_combinations(&backward.into_iter().collect(), dim, 7);
        assert_eq!(a, b);
    }
}
