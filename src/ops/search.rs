//! Binary searches over a single ordered sequence.

use std::cmp::Ordering;
use std::ops::Range;

use crate::cmp::{Compare, Natural};

/// Classic bisection. Returns some index whose element compares equal to
/// `target`, or `None`. When several elements compare equal, which index is
/// returned is unspecified; use [`equal_range`] when it matters.
pub fn binary_search<T>(seq: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    binary_search_by(seq, target, Natural)
}

pub fn binary_search_by<T, C>(seq: &[T], target: &T, mut cmp: C) -> Option<usize>
where
    C: Compare<T>,
{
    let mut lo: isize = 0;
    let mut hi: isize = seq.len() as isize - 1;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;

        match cmp.compare(target, &seq[mid as usize]) {
            Ordering::Less => hi = mid - 1,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => return Some(mid as usize),
        }
    }

    None
}

/// Lower bound: smallest index whose element compares `>= target`, or
/// `seq.len()` when every element compares below it.
pub fn binary_search_ge<T>(seq: &[T], target: &T) -> usize
where
    T: Ord,
{
    binary_search_ge_by(seq, target, Natural)
}

pub fn binary_search_ge_by<T, C>(seq: &[T], target: &T, mut cmp: C) -> usize
where
    C: Compare<T>,
{
    lower_bound(seq, target, &mut cmp)
}

/// Upper bound: smallest index whose element compares `> target`, or
/// `seq.len()` when no element does.
pub fn binary_search_gt<T>(seq: &[T], target: &T) -> usize
where
    T: Ord,
{
    binary_search_gt_by(seq, target, Natural)
}

pub fn binary_search_gt_by<T, C>(seq: &[T], target: &T, mut cmp: C) -> usize
where
    C: Compare<T>,
{
    upper_bound(seq, target, &mut cmp)
}

/// Half-open index range of the elements comparing equal to `target`;
/// empty (`start == end`) at the insertion point when none do.
pub fn equal_range<T>(seq: &[T], target: &T) -> Range<usize>
where
    T: Ord,
{
    equal_range_by(seq, target, Natural)
}

pub fn equal_range_by<T, C>(seq: &[T], target: &T, mut cmp: C) -> Range<usize>
where
    C: Compare<T>,
{
    lower_bound(seq, target, &mut cmp)..upper_bound(seq, target, &mut cmp)
}

fn lower_bound<T, C>(seq: &[T], target: &T, cmp: &mut C) -> usize
where
    C: Compare<T>,
{
    let mut lo = 0;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if cmp.compare(&seq[mid], target).is_lt() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

fn upper_bound<T, C>(seq: &[T], target: &T, cmp: &mut C) -> usize
where
    C: Compare<T>,
{
    let mut lo = 0;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if cmp.compare(&seq[mid], target).is_le() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}
