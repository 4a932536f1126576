use rand::{rngs::StdRng, Rng, SeedableRng};

use ratlin::{
    domains::rational::Rational,
    tensors::matrix::{Matrix, MatrixError},
};

fn random_rational(rng: &mut StdRng) -> Rational {
    Rational::from((rng.gen_range(-9i64..=9), rng.gen_range(1i64..=9)))
}

fn random_matrix(rng: &mut StdRng, nrows: u32, ncols: u32) -> Matrix {
    let data = (0..nrows as usize * ncols as usize)
        .map(|_| random_rational(rng))
        .collect();
    Matrix::from_linear(data, nrows, ncols).unwrap()
}

#[test]
fn inverse_roundtrip() {
    let mut rng = StdRng::seed_from_u64(17);

    let mut inverted = 0;
    for n in 1..6u32 {
        for _ in 0..10 {
            let a = random_matrix(&mut rng, n, n);
            match a.inv() {
                Ok(inv) => {
                    assert_eq!(a.mul(&inv).unwrap(), Matrix::identity(n));
                    assert_eq!(inv.mul(&a).unwrap(), Matrix::identity(n));
                    inverted += 1;
                }
                Err(MatrixError::Singular) => {
                    assert_eq!(a.det().unwrap(), Rational::zero());
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }

    // random matrices are singular only rarely
    assert!(inverted > 30);
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = StdRng::seed_from_u64(5);

    for n in 1..5u32 {
        for _ in 0..10 {
            let a = random_matrix(&mut rng, n, n);
            let b = random_matrix(&mut rng, n, n);
            assert_eq!(
                a.mul(&b).unwrap().det().unwrap(),
                &a.det().unwrap() * &b.det().unwrap()
            );
        }
    }
}

#[test]
fn determinant_sign_flips_on_row_swap() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..10 {
        let a = random_matrix(&mut rng, 4, 4);
        let mut b = a.clone();
        b.swap_rows(0, 2);
        assert_eq!(a.det().unwrap(), -b.det().unwrap());
    }
}

#[test]
fn product_associativity_and_transpose() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let a = random_matrix(&mut rng, 2, 3);
        let b = random_matrix(&mut rng, 3, 4);
        let c = random_matrix(&mut rng, 4, 2);

        assert_eq!(
            a.mul(&b).unwrap().mul(&c).unwrap(),
            a.mul(&b.mul(&c).unwrap()).unwrap()
        );
        assert_eq!(
            a.mul(&b).unwrap().transpose(),
            b.transpose().mul(&a.transpose()).unwrap()
        );
    }
}

#[test]
fn augment_slice_roundtrip() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..10 {
        let a = random_matrix(&mut rng, 3, 2);
        let b = random_matrix(&mut rng, 3, 4);
        let aug = a.augment(&b).unwrap();
        assert_eq!(aug.ncols(), 6);
        assert_eq!(aug.slice_columns(0, 2).unwrap(), a);
        assert_eq!(aug.slice_columns(2, 6).unwrap(), b);
    }
}

#[test]
fn rank_bounds_and_echelon_invariance() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10 {
        let a = random_matrix(&mut rng, 3, 5);
        let r = a.rank();
        assert!(r <= 3);
        assert_eq!(a.transpose().rank(), r);
        // reducing an echelon form is idempotent for the rank
        assert_eq!(a.row_echelon_form().rank(), r);
    }
}

#[test]
fn rational_field_laws() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let a = random_rational(&mut rng);
        let b = random_rational(&mut rng);
        let c = random_rational(&mut rng);

        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        assert_eq!(&a - &a, Rational::zero());
        if !b.is_zero() {
            assert_eq!(a.div(&b).unwrap() * &b, a);
        }
    }
}
