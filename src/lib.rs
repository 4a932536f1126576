//! Exact dense linear algebra over arbitrary-precision rational numbers.
//!
//! Every value is a fully reduced fraction of [rug] integers, so matrix
//! reductions, determinants and inverses are computed without any rounding.
//! Singular and ill-shaped inputs are reported through `Result`s rather
//! than approximate answers.
//!
//! # Examples
//!
//! ```
//! use ratlin::tensors::matrix::Matrix;
//!
//! let a = Matrix::from_entries(2, vec![2.into(), 1.into(), 1.into(), 1.into()]).unwrap();
//! assert_eq!(a.det().unwrap(), 1.into());
//!
//! let inv = a.inv().unwrap();
//! assert_eq!(a.mul(&inv).unwrap(), Matrix::identity(2));
//! ```

pub mod domains;
pub mod printer;
pub mod tensors;
