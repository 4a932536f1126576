//! The number domains: the arbitrary-precision integer kernel and the
//! canonical rational numbers built on top of it.

pub mod integer;
pub mod rational;
