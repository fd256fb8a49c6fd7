/// Receives algorithm output element by element, so the same kernel can
/// fill a vector, a slice, or just count.
pub trait Visitor<T> {
    fn visit(&mut self, value: T);
}

pub trait Clearable {
    fn clear(&mut self);
}

/// Counts emitted elements without storing them.
pub struct Counter {
    count: usize,
}

impl Counter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Visitor<T> for Counter {
    fn visit(&mut self, _value: T) {
        self.count += 1;
    }
}

impl Clearable for Counter {
    fn clear(&mut self) {
        self.count = 0;
    }
}

/// Collects emitted elements into a vector.
pub struct VecWriter<T> {
    items: Vec<T>,
}

impl<T> VecWriter<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(cardinality: usize) -> Self {
        Self {
            items: Vec::with_capacity(cardinality),
        }
    }
}

impl<T> AsRef<[T]> for VecWriter<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<VecWriter<T>> for Vec<T> {
    fn from(value: VecWriter<T>) -> Self {
        value.items
    }
}

impl<T> Default for VecWriter<T> {
    fn default() -> Self {
        Self {
            items: Vec::default(),
        }
    }
}

impl<T> Visitor<T> for VecWriter<T> {
    fn visit(&mut self, value: T) {
        self.items.push(value);
    }
}

impl<T> Clearable for VecWriter<T> {
    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Writes emitted elements into a caller-provided slice.
pub struct SliceWriter<'a, T> {
    data: &'a mut [T],
    position: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T> From<&'a mut [T]> for SliceWriter<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self { data, position: 0 }
    }
}

impl<'a, T> Visitor<T> for SliceWriter<'a, T> {
    fn visit(&mut self, value: T) {
        self.data[self.position] = value;
        self.position += 1;
    }
}

impl<'a, T> Clearable for SliceWriter<'a, T> {
    fn clear(&mut self) {
        self.position = 0;
    }
}
