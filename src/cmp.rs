use std::cmp::Ordering;

/// Three-way comparison driving every algorithm in this crate.
///
/// Any `FnMut(&T, &T) -> Ordering` closure qualifies through the blanket
/// impl below; [`Natural`] selects the `Ord` ordering of the element type.
/// The comparator must be deterministic and consistent with how the input
/// sequences are actually ordered; the algorithms never inspect it beyond
/// calling it.
pub trait Compare<T> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering;

    fn lt(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    fn le(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_le()
    }

    fn gt(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_gt()
    }

    fn ge(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_ge()
    }

    fn eq(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }
}

/// Natural ordering of the element type. Every operation without a `_by`
/// suffix uses this comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<F, T> Compare<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
