mod edit;
mod merge;
mod search;

pub use {edit::*, merge::*, search::*};

use crate::visitor::VecWriter;

/// Two-sequence kernel writing its result through a visitor.
pub type Merge2<I, V> = fn(a: &I, b: &I, visitor: &mut V);

/// Runs a two-sequence kernel and collects the result into a fresh vector.
pub fn run_2set<T>(a: &[T], b: &[T], op: Merge2<[T], VecWriter<T>>) -> Vec<T> {
    let mut writer: VecWriter<T> = VecWriter::new();
    op(a, b, &mut writer);
    writer.into()
}
