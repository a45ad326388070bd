//! Planner for n-ary MatchSet intersection.
//!
//! Dense intervals fold together first (their pairwise intersection is
//! free), the remaining sets reduce smallest-first to keep intermediate
//! results small, and a surviving dense interval is intersected last,
//! where its linear range filter applies to an already-small set.

use crate::set::{MatchSet, SetRepr};
use log::debug;

/// Reduces a collection of MatchSets to their intersection.
///
/// The reduction order is chosen by size; the logical result does not
/// depend on the input order. An empty input yields the empty set.
pub fn intersect_with_plan<'a>(sets: Vec<MatchSet<'a>>) -> MatchSet<'a> {
    let mut dense_fold: Option<MatchSet<'a>> = None;
    let mut rest: Vec<MatchSet<'a>> = Vec::new();

    for set in sets {
        if matches!(set.repr, SetRepr::Dense(_)) {
            dense_fold = Some(match dense_fold {
                Some(acc) => acc.intersect(&set),
                None => set,
            });
        } else {
            rest.push(set);
        }
    }

    rest.sort_by_key(MatchSet::size_hint);

    debug!(
        "plan: {} sorted sets (sizes {:?}), dense fold: {}",
        rest.len(),
        rest.iter().map(MatchSet::size_hint).collect::<Vec<_>>(),
        dense_fold.is_some()
    );

    let mut iter = rest.into_iter();
    let mut acc = match iter.next() {
        Some(first) => first,
        None => return dense_fold.unwrap_or_else(MatchSet::empty),
    };
    for set in iter {
        acc = acc.intersect(&set);
    }
    if let Some(dense) = dense_fold {
        acc = acc.intersect(&dense);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{DenseInterval, IndexView, SetRepr};

    fn owned(v: Vec<u32>) -> MatchSet<'static> {
        MatchSet::new(SetRepr::Owned(v))
    }

    fn dense(first: u32, last: u32) -> MatchSet<'static> {
        MatchSet::new(SetRepr::Dense(DenseInterval::new(first, last)))
    }

    #[test]
    fn test_empty_input() {
        let result = intersect_with_plan(Vec::new());
        assert!(result.repr.positions().is_empty());
        assert!(!result.complement);
    }

    #[test]
    fn test_dense_only_input_returns_fold() {
        let result = intersect_with_plan(vec![dense(0, 9), dense(3, 12), dense(2, 7)]);
        assert!(matches!(result.repr, SetRepr::Dense(_)));
        assert_eq!(result.repr.positions(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_mixed_input_applies_dense_last() {
        let sets = vec![
            dense(2, 8),
            owned(vec![1, 3, 5, 7, 9]),
            owned(vec![3, 4, 5, 7]),
        ];
        let result = intersect_with_plan(sets);
        assert_eq!(result.repr.positions(), vec![3, 5, 7]);
    }

    #[test]
    fn test_input_order_independence() {
        let a = || owned(vec![1, 2, 3, 5, 8, 13, 21]);
        let b = || owned(vec![2, 3, 5, 8]);
        let c = || dense(3, 20);

        let forward = intersect_with_plan(vec![a(), b(), c()]);
        let backward = intersect_with_plan(vec![c(), b(), a()]);
        assert_eq!(forward.repr.positions(), backward.repr.positions());
        assert_eq!(forward.repr.positions(), vec![3, 5, 8]);
    }

    #[test]
    fn test_complemented_set_in_plan() {
        // {1..9} minus {4, 6}, then clipped by the dense interval.
        let sets = vec![
            owned((1..10).collect()),
            MatchSet {
                repr: SetRepr::Owned(vec![4, 6]),
                complement: true,
            },
            dense(2, 7),
        ];
        let result = intersect_with_plan(sets);
        assert!(!result.complement);
        assert_eq!(result.repr.positions(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_views_with_shifts_reduce_to_match_starts() {
        // Clause 0 at {0, 4}, clause 1 at {1, 5}: starts {0, 4}.
        let first = [0u32, 4];
        let second = [1u32, 5];
        let sets = vec![
            MatchSet::new(SetRepr::View(IndexView::new(&first, 0))),
            MatchSet::new(SetRepr::View(IndexView::new(&second, 1))),
        ];
        let result = intersect_with_plan(sets);
        assert_eq!(result.repr.positions(), vec![0, 4]);
    }
}
