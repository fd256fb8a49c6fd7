
use quickcheck::Arbitrary;
use seqops::{
    ops::{self, Merge2},
    visitor::VecWriter,
};
use std::fmt;

// Arbitrary ordered sequence //

/// Sorted vector fixture. Duplicates are kept on purpose: the operations
/// under test have multiset semantics.
#[derive(Debug, Clone)]
pub struct SortedSeq(Vec<i32>);

impl SortedSeq {
    pub fn from_unsorted(mut vec: Vec<i32>) -> Self {
        vec.sort_unstable();
        Self(vec)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl From<SortedSeq> for Vec<i32> {
    fn from(value: SortedSeq) -> Self {
        value.into_inner()
    }
}

impl From<Vec<i32>> for SortedSeq {
    fn from(value: Vec<i32>) -> Self {
        Self::from_unsorted(value)
    }
}

impl AsRef<[i32]> for SortedSeq {
    fn as_ref(&self) -> &[i32] {
        &self.0
    }
}

impl Arbitrary for SortedSeq {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self::from_unsorted(Vec::<i32>::arbitrary(g))
    }
}

// Arbitrary merge-family kernel //

#[derive(Clone)]
pub struct MergeFn(&'static str, pub Merge2<[i32], VecWriter<i32>>);

impl fmt::Debug for MergeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Arbitrary for MergeFn {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        g.choose(
            [
                MergeFn("union", ops::union),
                MergeFn("intersection", ops::intersection),
                MergeFn("difference", ops::difference),
                MergeFn("symmetric_difference", ops::symmetric_difference),
                MergeFn("merge", ops::merge),
            ]
            .as_slice(),
        )
        .unwrap()
        .clone()
    }
}

// Arbitrary pair of sequences //

/// Pair with a shared portion, so intersections and ties are actually hit.
#[derive(Debug, Clone)]
pub struct SimilarSeqPair(pub SortedSeq, pub SortedSeq);

impl Arbitrary for SimilarSeqPair {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let shared: Vec<i32> = Vec::arbitrary(g);

        let mut left = Vec::arbitrary(g);
        let mut right = Vec::arbitrary(g);
        left.extend(&shared);
        right.extend(&shared);

        SimilarSeqPair(left.into(), right.into())
    }
}

/// Two ordered runs, for driving `inplace_merge` against `merge`.
#[derive(Debug, Clone)]
pub struct RunPair {
    pub left: SortedSeq,
    pub right: SortedSeq,
}

impl RunPair {
    /// The concatenation `left ++ right` and the run boundary.
    pub fn concat(&self) -> (Vec<i32>, usize) {
        let mut seq = self.left.as_slice().to_vec();
        seq.extend_from_slice(self.right.as_slice());
        (seq, self.left.as_slice().len())
    }
}

impl Arbitrary for RunPair {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let shared: Vec<i32> = Vec::arbitrary(g);

        let mut left = Vec::arbitrary(g);
        let mut right = Vec::arbitrary(g);
        left.extend(&shared);
        right.extend(&shared);

        RunPair {
            left: left.into(),
            right: right.into(),
        }
    }
}
