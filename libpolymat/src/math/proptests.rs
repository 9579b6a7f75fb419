//! Property-based tests for the numeric stack.

use super::*;
use crate::parser::parse_poly;

use num_traits::{One, Zero};
use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (-30i64..30, 1i64..8).prop_map(|(num, den)| Fraction::new(num, den).unwrap())
}

fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
    fraction().prop_filter("non-zero", |f| !f.is_zero())
}

fn poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec((0u64..6, fraction()), 0..5).prop_map(|terms| Poly::from_sparse(&terms))
}

/// A square matrix of small integer constants.
fn square_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=4).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(-6i64..6, n), n).prop_map(|rows| {
            Matrix::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(Poly::from).collect())
                    .collect(),
            )
            .unwrap()
        })
    })
}

proptest! {
    #[test]
    fn fraction_is_normalized(num in small_int(), den in non_zero_int()) {
        let f = Fraction::new(num, den).unwrap();
        prop_assert!(f.denom() > 0);
        prop_assert_eq!(gcd_i64(f.numer(), f.denom()), 1);
        prop_assert_eq!(Fraction::new(f.numer(), f.denom()).unwrap(), f);
        // a/b == c/d <=> ad == cb
        prop_assert_eq!(f.numer() * den, num * f.denom());
    }

    #[test]
    fn fraction_additive_inverse(a in fraction()) {
        prop_assert_eq!(a + (-a), Fraction::zero());
    }

    #[test]
    fn fraction_multiplicative_inverse(a in non_zero_fraction()) {
        let inv = Fraction::one().div(a).unwrap();
        prop_assert_eq!(a * inv, Fraction::one());
    }

    #[test]
    fn fraction_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn fraction_associative(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn fraction_order_is_consistent(a in fraction(), b in fraction()) {
        prop_assert_eq!(a < b, (b - a).numer() > 0);
    }

    #[test]
    fn poly_round_trips_through_text(p in poly()) {
        let text = p.to_string().replace(' ', "");
        prop_assert_eq!(parse_poly(&text), Ok(p));
    }

    #[test]
    fn poly_sub_self_is_zero(p in poly()) {
        prop_assert!((&p - &p).is_zero());
    }

    #[test]
    fn poly_mul_identity(p in poly()) {
        prop_assert_eq!(&p * &Poly::one(), p);
    }

    #[test]
    fn poly_distributive(a in poly(), b in poly(), c in poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn poly_eval_is_a_homomorphism(a in poly(), b in poly(), x in -2i64..=2) {
        prop_assert_eq!((&a + &b).eval(x), a.eval(x) + b.eval(x));
        prop_assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
    }

    #[test]
    fn matrix_unit_is_identity(m in square_matrix()) {
        let unit = Matrix::unit(m.rows());
        prop_assert_eq!(m.mul(&unit).unwrap(), m.clone());
        prop_assert_eq!(unit.mul(&m).unwrap(), m);
    }

    #[test]
    fn matrix_times_inverse_is_unit(m in square_matrix()) {
        prop_assume!(!m.determinant().is_zero());
        let inv = m.inverted().unwrap();
        prop_assert_eq!(m.mul(&inv).unwrap(), Matrix::unit(m.rows()));
    }
}
