//! Modular arithmetic property tests.

use proptest::prelude::*;
use smallfield::{FieldElement, divide_mod, inverse_mod, mul_mod, pow_mod, reduce};

/// Primes of assorted sizes, up to the largest prime below 2^63.
const PRIMES: &[i64] = &[
    2,
    3,
    7,
    97,
    65_537,
    1_000_000_007,
    2_305_843_009_213_693_951,
    9_223_372_036_854_775_783,
];

prop_compose! {
    fn prime()(index in 0..PRIMES.len()) -> i64 {
        PRIMES[index]
    }
}

prop_compose! {
    fn nonzero_residue()(p in prime())(n in 1..p, p in Just(p)) -> (i64, i64) {
        (n, p)
    }
}

proptest! {
    #[test]
    fn reduce_is_canonical(n in any::<i64>(), p in 1..i64::MAX) {
        let r = reduce(n, p);
        prop_assert!((0..p).contains(&r));
        prop_assert_eq!((n as i128 - r as i128) % p as i128, 0);
    }

    #[test]
    fn mul_mod_matches_wide_arithmetic(x in any::<i64>(), y in any::<i64>(), p in prime()) {
        let expected = (x as i128 * y as i128).rem_euclid(p as i128) as i64;
        prop_assert_eq!(mul_mod(x, y, p), expected);
    }

    #[test]
    fn inverse_times_element_is_one((n, p) in nonzero_residue()) {
        let inv = inverse_mod(p, n).unwrap();
        prop_assert_eq!(mul_mod(n, inv, p), 1);
        prop_assert_eq!(divide_mod(p, n, inv), Some(1));
    }

    #[test]
    fn zero_has_no_inverse(p in prime(), x in any::<i64>(), k in -1000i64..1000) {
        let multiple = p.saturating_mul(k);
        prop_assume!(multiple % p == 0);
        prop_assert_eq!(inverse_mod(p, multiple), None);
        prop_assert_eq!(divide_mod(p, x, multiple), None);
    }

    #[test]
    fn divide_undoes_multiply((y, p) in nonzero_residue(), x in any::<i64>()) {
        let product = mul_mod(x, y, p);
        prop_assert_eq!(divide_mod(p, product, y), Some(reduce(x, p)));
    }

    #[test]
    fn pow_adds_exponents((n, p) in nonzero_residue(), e1 in 0u64..1 << 20, e2 in 0u64..1 << 20) {
        let lhs = pow_mod(p, n, e1 + e2);
        let rhs = mul_mod(pow_mod(p, n, e1), pow_mod(p, n, e2), p);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn fermat_little_theorem((n, p) in nonzero_residue()) {
        prop_assert_eq!(pow_mod(p, n, p as u64 - 1), 1);
    }

    #[test]
    fn field_element_distributes((x, p) in nonzero_residue(), y in any::<i64>(), z in any::<i64>()) {
        let x = FieldElement::new(x, p);
        let y = FieldElement::new(y, p);
        let z = FieldElement::new(z, p);
        prop_assert_eq!(x * (y + z), x * y + x * z);
        prop_assert_eq!((y - z) + z, y);
        prop_assert_eq!(x * x.invert().unwrap(), FieldElement::one(p));
    }
}
