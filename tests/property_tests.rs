//! Property-based tests using proptest.
//!
//! These tests verify algebraic invariants of `Vector` over random inputs.

use densevec::prelude::*;
use proptest::prelude::*;

// Strategy for generating vectors of a fixed length
fn vector_strategy(len: usize) -> impl Strategy<Value = Vector> {
    proptest::collection::vec(-100.0f64..100.0, len).prop_map(Vector::from_vec)
}

// Strategy for generating a pair of equal-length vectors
fn vector_pair_strategy() -> impl Strategy<Value = (Vector, Vector)> {
    (0usize..32).prop_flat_map(|len| (vector_strategy(len), vector_strategy(len)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn vector_len_is_constructed_size(size in 0usize..256) {
        prop_assert_eq!(Vector::zeros(size).len(), size);
    }

    #[test]
    fn vector_values_read_back(values in proptest::collection::vec(-1e6f64..1e6, 0..64)) {
        let v = Vector::from_values(values.len(), &values).expect("length matches");
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(v.get(i as isize), Ok(x));
        }
        prop_assert!(v.get(-1).is_err());
        prop_assert!(v.get(values.len() as isize).is_err());
    }

    #[test]
    fn vector_add_then_sub_round_trips((a, b) in vector_pair_strategy()) {
        let back = (&a + &b).and_then(|s| &s - &b).expect("equal sizes");
        for i in 0..a.len() {
            prop_assert!((back[i] - a[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn vector_dot_is_commutative((a, b) in vector_pair_strategy()) {
        let dot_ab = a.dot(&b).expect("equal sizes");
        let dot_ba = b.dot(&a).expect("equal sizes");
        prop_assert!((dot_ab - dot_ba).abs() < 1e-9);
    }

    #[test]
    fn vector_elementwise_mul_is_commutative((a, b) in vector_pair_strategy()) {
        prop_assert_eq!((&a * &b).expect("equal sizes"), (&b * &a).expect("equal sizes"));
    }

    #[test]
    fn vector_mismatched_sizes_always_error(a in vector_strategy(3), b in vector_strategy(4)) {
        prop_assert!(a.try_add(&b).is_err());
        prop_assert!(a.try_sub(&b).is_err());
        prop_assert!(a.try_mul(&b).is_err());
        prop_assert!(a.dot(&b).is_err());
        prop_assert!(a.angle_between(&b).is_err());
    }

    #[test]
    fn vector_norm_ordering(v in vector_strategy(16)) {
        // linf <= l2 <= l1 for any vector
        let linf = v.linf_norm().expect("non-empty");
        let l2 = v.l2_norm();
        let l1 = v.l1_norm();
        prop_assert!(linf <= l2 + 1e-9);
        prop_assert!(l2 <= l1 + 1e-9);
    }

    #[test]
    fn vector_normalize_has_unit_norm(v in vector_strategy(8)) {
        prop_assume!(v.l2_norm() > 1e-6);
        let n = v.normalize().expect("non-zero norm");
        prop_assert!((n.l2_norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn vector_angle_in_range((a, b) in vector_pair_strategy()) {
        prop_assume!(a.l2_norm() > 1e-6 && b.l2_norm() > 1e-6);
        let angle = a.angle_between(&b).expect("non-degenerate");
        prop_assert!((0.0..=std::f64::consts::PI).contains(&angle));
    }

    #[test]
    fn vector_scalar_mul_scales_sum(v in vector_strategy(10), s in -10.0f64..10.0) {
        prop_assert!((v.mul_scalar(s).sum() - v.sum() * s).abs() < 1e-6);
    }

    #[test]
    fn vector_invert_is_involution(v in vector_strategy(9)) {
        let mut w = v.clone();
        w.invert().expect("non-empty");
        w.invert().expect("non-empty");
        prop_assert_eq!(w, v);
    }

    #[test]
    fn vector_sort_orders_and_preserves_extremes(v in vector_strategy(12)) {
        let mut asc = v.clone();
        asc.sort_ascending().expect("non-empty");
        prop_assert!(asc.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(asc[0], v.min().expect("non-empty"));
        prop_assert_eq!(asc[11], v.max().expect("non-empty"));

        let mut desc = v.clone();
        desc.sort_descending().expect("non-empty");
        asc.invert().expect("non-empty");
        prop_assert_eq!(desc, asc);
    }

    #[test]
    fn vector_mean_between_min_and_max(v in vector_strategy(7)) {
        let mean = v.mean().expect("non-empty");
        prop_assert!(mean >= v.min().expect("non-empty") - 1e-9);
        prop_assert!(mean <= v.max().expect("non-empty") + 1e-9);
    }

    #[test]
    fn vector_max_min_are_elements(
        values in proptest::collection::vec(
            prop_oneof![4 => -1e300f64..1e300, 1 => Just(f64::NAN)],
            1..32,
        )
    ) {
        let v = Vector::from_vec(values.clone());
        let max = v.max().expect("non-empty");
        let min = v.min().expect("non-empty");
        if values.iter().all(|x| x.is_nan()) {
            prop_assert!(max.is_nan() && min.is_nan());
        } else {
            prop_assert!(values.contains(&max));
            prop_assert!(values.contains(&min));
            prop_assert!(values.iter().filter(|x| !x.is_nan()).all(|&x| min <= x && x <= max));
        }
    }

    #[test]
    fn vector_angle_is_finite_at_any_scale(
        (a, b) in vector_pair_strategy(),
        ea in -300i32..300,
        eb in -300i32..300,
    ) {
        let a = a.mul_scalar(10f64.powi(ea));
        let b = b.mul_scalar(10f64.powi(eb));
        prop_assume!(a.l2_norm() > 0.0 && b.l2_norm() > 0.0);
        let angle = a.angle_between(&b).expect("finite non-zero norms");
        prop_assert!((0.0..=std::f64::consts::PI).contains(&angle));
        let n = a.normalize().expect("finite non-zero norm");
        prop_assert!((n.l2_norm() - 1.0).abs() < 1e-9);
    }
}
