//! Printing of rationals and matrices in plain text or LaTeX, and exact
//! positional-numeral expansion in an arbitrary base.

use std::fmt::{self, Display, Formatter};

use rug::Complete;

use crate::{
    domains::{
        integer::{self, Integer},
        rational::{Rational, RationalError},
    },
    tensors::matrix::Matrix,
};

/// The output dialect of the printers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PrintMode {
    #[default]
    Plain,
    Latex,
}

/// Print a borrowed rational as `num/den`, or as a bare integer when the
/// denominator is 1. In LaTeX mode a proper fraction becomes `\frac{..}{..}`.
pub struct RationalPrinter<'a> {
    rational: &'a Rational,
    mode: PrintMode,
}

impl<'a> RationalPrinter<'a> {
    pub fn new(rational: &'a Rational, mode: PrintMode) -> RationalPrinter<'a> {
        RationalPrinter { rational, mode }
    }
}

impl Display for RationalPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.rational.is_integer() {
            return write!(f, "{}", self.rational.numerator());
        }

        match self.mode {
            PrintMode::Plain => write!(
                f,
                "{}/{}",
                self.rational.numerator(),
                self.rational.denominator()
            ),
            PrintMode::Latex => write!(
                f,
                "\\frac{{{}}}{{{}}}",
                self.rational.numerator(),
                self.rational.denominator()
            ),
        }
    }
}

/// Print a borrowed matrix row by row: `[a b; c d]` in plain mode, a
/// `bmatrix` environment in LaTeX mode.
pub struct MatrixPrinter<'a> {
    matrix: &'a Matrix,
    mode: PrintMode,
}

impl<'a> MatrixPrinter<'a> {
    pub fn new(matrix: &'a Matrix, mode: PrintMode) -> MatrixPrinter<'a> {
        MatrixPrinter { matrix, mode }
    }
}

impl Display for MatrixPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.mode {
            PrintMode::Plain => {
                f.write_str("[")?;
                for (r, row) in self.matrix.row_iter().enumerate() {
                    if r > 0 {
                        f.write_str("; ")?;
                    }
                    for (c, e) in row.iter().enumerate() {
                        if c > 0 {
                            f.write_str(" ")?;
                        }
                        RationalPrinter::new(e, PrintMode::Plain).fmt(f)?;
                    }
                }
                f.write_str("]")
            }
            PrintMode::Latex => {
                f.write_str("\\begin{bmatrix}")?;
                for (r, row) in self.matrix.row_iter().enumerate() {
                    if r > 0 {
                        f.write_str("\\\\")?;
                    }
                    for (c, e) in row.iter().enumerate() {
                        if c > 0 {
                            f.write_str("&")?;
                        }
                        RationalPrinter::new(e, PrintMode::Latex).fmt(f)?;
                    }
                }
                f.write_str("\\end{bmatrix}")
            }
        }
    }
}

/// Write `r` as a positional numeral in `base`, which must be in `2..=36`.
/// Digits above 9 are lowercase letters.
///
/// With `max_digits = Some(n)` the fractional expansion is cut off after `n`
/// digits. With `None` the exact expansion is returned, with the repeating
/// digit cycle in square brackets: `1/6` in base 10 prints as `0.1[6]`. The
/// cycle is found by tracking the remainder of each long-division step; a
/// repeated remainder closes the period.
pub fn radix_string(
    r: &Rational,
    base: u32,
    max_digits: Option<u32>,
) -> Result<String, RationalError> {
    if !(2..=36).contains(&base) {
        return Err(RationalError::InvalidArgument(
            "the base must be between 2 and 36",
        ));
    }

    let den = r.denominator();
    let mut out = String::new();
    if r.is_negative() {
        out.push('-');
    }

    let num = integer::abs(r.numerator());
    let int = (&num / den).complete();
    out.push_str(&int.to_string_radix(base as i32));

    let mut rem = num % den;
    if rem == 0 || max_digits == Some(0) {
        return Ok(out);
    }
    out.push('.');

    let digit = |d: Integer| char::from_digit(d.to_u32_wrapping(), 36).unwrap();

    match max_digits {
        Some(n) => {
            for _ in 0..n {
                if rem == 0 {
                    break;
                }
                rem *= base;
                let d = (&rem / den).complete();
                rem %= den;
                out.push(digit(d));
            }
        }
        None => {
            // digits are single ASCII bytes, so the bracket insertion
            // position can be computed from the digit index
            let frac_start = out.len();
            let mut seen: Vec<Integer> = vec![];
            while rem != 0 {
                if let Some(pos) = seen.iter().position(|s| *s == rem) {
                    out.insert(frac_start + pos, '[');
                    out.push(']');
                    break;
                }
                seen.push(rem.clone());
                rem *= base;
                let d = (&rem / den).complete();
                rem %= den;
                out.push(digit(d));
            }
        }
    }

    Ok(out)
}
