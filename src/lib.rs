pub mod cmp;
pub mod ops;
pub mod visitor;

pub use cmp::{Compare, Natural};
