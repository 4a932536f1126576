//! The integer kernel: pure helper functions over arbitrary-precision
//! integers, used by [Rational](crate::domains::rational::Rational)
//! normalization and by the positional-numeral printer.

use rug::{ops::RemRounding, Complete};

/// An arbitrary-precision signed integer.
pub type Integer = rug::Integer;

/// Return the absolute value of `a`.
pub fn abs(a: &Integer) -> Integer {
    a.abs_ref().complete()
}

/// Return the sign of `a` as `-1`, `0` or `1`.
pub fn sign(a: &Integer) -> i32 {
    match a.cmp0() {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Compute the greatest common divisor of `a` and `b` with the Euclidean
/// algorithm. The result is non-negative and `gcd(0, 0) = 0`.
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    let mut a = abs(a);
    let mut b = abs(b);

    while b != 0 {
        if a < b {
            std::mem::swap(&mut a, &mut b);
        } else {
            a %= &b;
        }
    }

    a
}

/// Compute the least common multiple of `a` and `b` as `|a*b| / gcd(a, b)`,
/// with `lcm(0, 0) = 0`.
pub fn lcm(a: &Integer, b: &Integer) -> Integer {
    let g = gcd(a, b);
    if g == 0 {
        return Integer::new();
    }

    abs(&(a * b).complete()) / g
}

/// Compute `a mod b`, where the result is always in `[0, |b|)` regardless of
/// the sign of `a`. `b` must be nonzero.
pub fn floor_mod(a: &Integer, b: &Integer) -> Integer {
    debug_assert!(*b != 0, "floor_mod by zero");
    Integer::from(a.rem_euc(b))
}

/// Compute `n!` for `n >= 0`.
pub fn factorial(n: u32) -> Integer {
    Integer::factorial(n).complete()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(&12.into(), &18.into()), 6);
        assert_eq!(gcd(&(-12).into(), &18.into()), 6);
        assert_eq!(gcd(&12.into(), &(-18).into()), 6);
        assert_eq!(gcd(&0.into(), &5.into()), 5);
        assert_eq!(gcd(&0.into(), &0.into()), 0);
        assert_eq!(gcd(&1.into(), &987654321.into()), 1);
    }

    #[test]
    fn lcm_uses_gcd_identity() {
        assert_eq!(lcm(&4.into(), &6.into()), 12);
        assert_eq!(lcm(&(-4).into(), &6.into()), 12);
        assert_eq!(lcm(&0.into(), &7.into()), 0);
        assert_eq!(lcm(&0.into(), &0.into()), 0);
    }

    #[test]
    fn floor_mod_is_non_negative() {
        assert_eq!(floor_mod(&7.into(), &3.into()), 1);
        assert_eq!(floor_mod(&(-7).into(), &3.into()), 2);
        assert_eq!(floor_mod(&(-7).into(), &(-3).into()), 2);
        assert_eq!(floor_mod(&6.into(), &3.into()), 0);
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!(sign(&(-3).into()), -1);
        assert_eq!(sign(&0.into()), 0);
        assert_eq!(sign(&9.into()), 1);
        assert_eq!(abs(&(-3).into()), 3);
    }

    #[test]
    fn factorial_exact() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20).to_string(), "2432902008176640000");
    }
}
