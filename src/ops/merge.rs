//! Two-pointer kernels over a pair of ordered sequences.
//!
//! Each kernel walks one forward pointer per input, advancing whichever
//! side compares smaller and consuming both on a tie. All run in O(n+m)
//! with the comparator untouched once either side is exhausted. Inputs
//! must already be ordered under the supplied comparator; the kernels do
//! not check this.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::cmp::{Compare, Natural};
use crate::visitor::Visitor;

/// Inline capacity of the `inplace_merge` scratch buffer.
const INLINE_SCRATCH: usize = 32;

/// Multiset union: ties are emitted once, from the left sequence.
pub fn union<T, V>(a: &[T], b: &[T], visitor: &mut V)
where
    T: Ord + Clone,
    V: Visitor<T>,
{
    union_by(a, b, Natural, visitor)
}

pub fn union_by<T, C, V>(a: &[T], b: &[T], mut cmp: C, visitor: &mut V)
where
    T: Clone,
    C: Compare<T>,
    V: Visitor<T>,
{
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match cmp.compare(&a[i], &b[j]) {
            Ordering::Less => {
                visitor.visit(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                visitor.visit(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                visitor.visit(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }

    emit_tail(&a[i..], visitor);
    emit_tail(&b[j..], visitor);
}

/// Multiset intersection: each tie consumes one element from both sides.
pub fn intersection<T, V>(a: &[T], b: &[T], visitor: &mut V)
where
    T: Ord + Clone,
    V: Visitor<T>,
{
    intersection_by(a, b, Natural, visitor)
}

pub fn intersection_by<T, C, V>(a: &[T], b: &[T], mut cmp: C, visitor: &mut V)
where
    T: Clone,
    C: Compare<T>,
    V: Visitor<T>,
{
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match cmp.compare(&a[i], &b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                visitor.visit(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
}

/// Multiset subtraction `a - b`: each element of `b` cancels at most one
/// equal element of `a`.
pub fn difference<T, V>(a: &[T], b: &[T], visitor: &mut V)
where
    T: Ord + Clone,
    V: Visitor<T>,
{
    difference_by(a, b, Natural, visitor)
}

pub fn difference_by<T, C, V>(a: &[T], b: &[T], mut cmp: C, visitor: &mut V)
where
    T: Clone,
    C: Compare<T>,
    V: Visitor<T>,
{
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match cmp.compare(&a[i], &b[j]) {
            Ordering::Less => {
                visitor.visit(a[i].clone());
                i += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    emit_tail(&a[i..], visitor);
}

pub fn symmetric_difference<T, V>(a: &[T], b: &[T], visitor: &mut V)
where
    T: Ord + Clone,
    V: Visitor<T>,
{
    symmetric_difference_by(a, b, Natural, visitor)
}

pub fn symmetric_difference_by<T, C, V>(a: &[T], b: &[T], mut cmp: C, visitor: &mut V)
where
    T: Clone,
    C: Compare<T>,
    V: Visitor<T>,
{
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match cmp.compare(&a[i], &b[j]) {
            Ordering::Less => {
                visitor.visit(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                visitor.visit(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    emit_tail(&a[i..], visitor);
    emit_tail(&b[j..], visitor);
}

/// Stable two-way merge: ties emit the left element, then the right.
pub fn merge<T, V>(a: &[T], b: &[T], visitor: &mut V)
where
    T: Ord + Clone,
    V: Visitor<T>,
{
    merge_by(a, b, Natural, visitor)
}

pub fn merge_by<T, C, V>(a: &[T], b: &[T], mut cmp: C, visitor: &mut V)
where
    T: Clone,
    C: Compare<T>,
    V: Visitor<T>,
{
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match cmp.compare(&a[i], &b[j]) {
            Ordering::Less => {
                visitor.visit(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                visitor.visit(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                visitor.visit(a[i].clone());
                visitor.visit(b[j].clone());
                i += 1;
                j += 1;
            }
        }
    }

    emit_tail(&a[i..], visitor);
    emit_tail(&b[j..], visitor);
}

/// Duplicate-aware containment: true iff every element of `b` matches a
/// distinct element of `a`. An empty `b` is always included.
pub fn includes<T>(a: &[T], b: &[T]) -> bool
where
    T: Ord,
{
    includes_by(a, b, Natural)
}

pub fn includes_by<T, C>(a: &[T], b: &[T], mut cmp: C) -> bool
where
    C: Compare<T>,
{
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match cmp.compare(&a[i], &b[j]) {
            Ordering::Less => i += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            // `a` is already past this element, so it can never match.
            Ordering::Greater => return false,
        }
    }

    j == b.len()
}

/// Merges the ordered runs `[0, middle)` and `[middle, len)` of `seq` into
/// one ordered sequence, with the same tie rule as [`merge`].
///
/// Goes through a full-length scratch buffer: the stable tie rule cannot be
/// honoured in place without auxiliary space.
///
/// # Panics
///
/// Panics if `middle > seq.len()`.
pub fn inplace_merge<T>(seq: &mut [T], middle: usize)
where
    T: Ord + Clone,
{
    inplace_merge_by(seq, middle, Natural)
}

pub fn inplace_merge_by<T, C>(seq: &mut [T], middle: usize, mut cmp: C)
where
    T: Clone,
    C: Compare<T>,
{
    assert!(
        middle <= seq.len(),
        "run boundary {} past end of sequence of length {}",
        middle,
        seq.len()
    );

    // A trivial run on either side leaves the sequence already ordered.
    if middle == 0 || middle == seq.len() {
        return;
    }

    let mut scratch: SmallVec<[T; INLINE_SCRATCH]> = SmallVec::with_capacity(seq.len());
    let mut i = 0;
    let mut j = middle;

    while i < middle && j < seq.len() {
        match cmp.compare(&seq[i], &seq[j]) {
            Ordering::Less => {
                scratch.push(seq[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                scratch.push(seq[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                scratch.push(seq[i].clone());
                scratch.push(seq[j].clone());
                i += 1;
                j += 1;
            }
        }
    }

    scratch.extend(seq[i..middle].iter().cloned());
    scratch.extend(seq[j..].iter().cloned());

    for (slot, value) in seq.iter_mut().zip(scratch) {
        *slot = value;
    }
}

fn emit_tail<T, V>(tail: &[T], visitor: &mut V)
where
    T: Clone,
    V: Visitor<T>,
{
    for value in tail {
        visitor.visit(value.clone());
    }
}
