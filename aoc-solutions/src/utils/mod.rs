//! Small helpers shared by several days

pub mod disjoint_set;
pub mod grid;

pub use disjoint_set::DisjointSet;
pub use grid::Grid;
