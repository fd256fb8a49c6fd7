//! In-place insertion and removal that preserve the ordering invariant.
//!
//! Both are a linear scan plus an O(n) shift; a flat vector is kept over
//! amortized structures on purpose.

use crate::cmp::{Compare, Natural};

/// Inserts `elem` at the first position whose element compares strictly
/// greater, so equal elements keep their arrival order.
pub fn insert<T>(seq: &mut Vec<T>, elem: T)
where
    T: Ord,
{
    insert_by(seq, elem, Natural)
}

pub fn insert_by<T, C>(seq: &mut Vec<T>, elem: T, mut cmp: C)
where
    C: Compare<T>,
{
    let at = seq
        .iter()
        .position(|existing| cmp.compare(&elem, existing).is_lt())
        .unwrap_or(seq.len());

    seq.insert(at, elem);
}

/// Removes the leftmost element comparing equal to `elem`. Returns whether
/// one was found; a miss leaves the sequence untouched.
pub fn remove<T>(seq: &mut Vec<T>, elem: &T) -> bool
where
    T: Ord,
{
    remove_by(seq, elem, Natural)
}

pub fn remove_by<T, C>(seq: &mut Vec<T>, elem: &T, mut cmp: C) -> bool
where
    C: Compare<T>,
{
    match seq
        .iter()
        .position(|existing| cmp.compare(elem, existing).is_eq())
    {
        Some(at) => {
            seq.remove(at);
            true
        }
        None => false,
    }
}
