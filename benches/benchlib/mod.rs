use std::ops::Range;

use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

/// Sorted fixture of the requested length. Duplicates are permitted, as
/// they are by the algorithms under test.
pub fn uniform_sorted_seq(range: Range<i32>, len: usize) -> Vec<i32> {
    let rng = &mut thread_rng();
    let dist = Uniform::from(range);

    let mut result: Vec<i32> = (0..len).map(|_| dist.sample(rng)).collect();
    result.sort_unstable();
    result
}

/// Unsorted probe values drawn from the same range.
pub fn uniform_probes(range: Range<i32>, len: usize) -> Vec<i32> {
    let rng = &mut thread_rng();
    let dist = Uniform::from(range);

    (0..len).map(|_| dist.sample(rng)).collect()
}
