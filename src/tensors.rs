//! Linear algebra containers.

pub mod matrix;
