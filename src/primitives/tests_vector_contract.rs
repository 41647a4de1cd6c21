// =========================================================================
// FALSIFY-VE: Vector contract
//
// Each test names the property it tries to falsify. Failure messages are
// prefixed with FALSIFIED so a broken contract reads unambiguously in CI.
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Size query returns exactly the constructed size
#[test]
fn falsify_ve_001_size_is_constructed_size() {
    for size in [0_usize, 1, 2, 17, 1000] {
        let v = Vector::zeros(size);
        assert_eq!(v.len(), size, "FALSIFIED VE-001: len={}, expected {size}", v.len());
    }
}

/// FALSIFY-VE-002: Explicit values read back in order
#[test]
fn falsify_ve_002_values_read_back_in_order() {
    let values = [0.5, -1.0, 3.0, 1e-9];
    let v = Vector::from_values(values.len(), &values).expect("length matches size");

    for (i, &expected) in values.iter().enumerate() {
        let got = v.get(i as isize).expect("index within constructed size");
        assert_eq!(got, expected, "FALSIFIED VE-002: v[{i}]={got}, expected {expected}");
    }
}

/// FALSIFY-VE-003: (a + b) - b == a
#[test]
fn falsify_ve_003_add_sub_round_trip() {
    let a = Vector::from_slice(&[1.0, 2.0, -3.0, 0.25]);
    let b = Vector::from_slice(&[4.0, -8.0, 16.0, 0.5]);

    let back = a
        .try_add(&b)
        .and_then(|sum| sum.try_sub(&b))
        .expect("equal sizes");

    assert_eq!(back, a, "FALSIFIED VE-003: (a+b)-b={back}, expected {a}");
}

/// FALSIFY-VE-004: Dot product is commutative
#[test]
fn falsify_ve_004_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let uv = u.dot(&v).expect("equal sizes");
    let vu = v.dot(&u).expect("equal sizes");

    assert!(
        (uv - vu).abs() < 1e-12,
        "FALSIFIED VE-004: dot(u,v)={uv} != dot(v,u)={vu}"
    );
}

/// FALSIFY-VE-005: L2 norm of zeros is 0, of [3,4] is 5
#[test]
fn falsify_ve_005_l2_norm_reference_values() {
    for size in [0_usize, 1, 5, 64] {
        let n = Vector::zeros(size).l2_norm();
        assert_eq!(n, 0.0, "FALSIFIED VE-005: norm(zeros({size}))={n}");
    }

    let n = Vector::from_slice(&[3.0, 4.0]).l2_norm();
    assert!((n - 5.0).abs() < 1e-12, "FALSIFIED VE-005: norm([3,4])={n}, expected 5");
}

/// FALSIFY-VE-006: Inversion is an involution
#[test]
fn falsify_ve_006_invert_involution() {
    let original = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let mut v = original.clone();

    v.invert().expect("non-empty");
    assert_eq!(v.as_slice(), &[3.0, 2.0, 1.0], "FALSIFIED VE-006: one inversion gave {v}");

    v.invert().expect("non-empty");
    assert_eq!(v, original, "FALSIFIED VE-006: two inversions gave {v}");
}

/// FALSIFY-VE-007: Sorting orders [3,1,2] both ways
#[test]
fn falsify_ve_007_sort_orders() {
    let mut v = Vector::from_slice(&[3.0, 1.0, 2.0]);

    v.sort_ascending().expect("non-empty");
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0], "FALSIFIED VE-007: ascending gave {v}");

    v.sort_descending().expect("non-empty");
    assert_eq!(v.as_slice(), &[3.0, 2.0, 1.0], "FALSIFIED VE-007: descending gave {v}");
}

/// FALSIFY-VE-008: Size-checked operations never return a degenerate value
#[test]
fn falsify_ve_008_mismatch_always_errors() {
    let a = Vector::from_slice(&[1.0, 2.0]);
    let b = Vector::from_slice(&[1.0, 2.0, 3.0]);

    let is_mismatch = |e: &VectorError| matches!(e, VectorError::SizeMismatch { .. });

    assert!(a.dot(&b).as_ref().is_err_and(is_mismatch), "FALSIFIED VE-008: dot");
    assert!(a.angle_between(&b).as_ref().is_err_and(is_mismatch), "FALSIFIED VE-008: angle");
    assert!((&a + &b).as_ref().is_err_and(is_mismatch), "FALSIFIED VE-008: add");
    assert!((&a - &b).as_ref().is_err_and(is_mismatch), "FALSIFIED VE-008: sub");
    assert!((&a * &b).as_ref().is_err_and(is_mismatch), "FALSIFIED VE-008: mul");
}

/// FALSIFY-VE-009: Index -1 and index len are rejected
#[test]
fn falsify_ve_009_index_bounds() {
    let mut v = Vector::zeros(3);
    for index in [-1_isize, 3] {
        assert!(
            matches!(v.get(index), Err(VectorError::IndexOutOfRange { .. })),
            "FALSIFIED VE-009: get({index}) did not fail"
        );
        assert!(
            matches!(v.get_mut(index), Err(VectorError::IndexOutOfRange { .. })),
            "FALSIFIED VE-009: get_mut({index}) did not fail"
        );
    }
}

/// FALSIFY-VE-010: Element-requiring operations reject the empty vector
#[test]
fn falsify_ve_010_empty_rejected() {
    let mut v = Vector::new();
    let is_empty = |e: &VectorError| matches!(e, VectorError::EmptyVector { .. });

    assert!(v.max().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: max");
    assert!(v.min().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: min");
    assert!(v.mean().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: mean");
    assert!(v.linf_norm().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: linf_norm");
    assert!(v.sort_ascending().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: sort_ascending");
    assert!(v.sort_descending().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: sort_descending");
    assert!(v.invert().as_ref().is_err_and(is_empty), "FALSIFIED VE-010: invert");
}

/// FALSIFY-VE-011: Reference reductions
#[test]
fn falsify_ve_011_reference_reductions() {
    let v = Vector::from_slice(&[5.0, 1.0, 9.0, 3.0]);
    assert_eq!(v.max(), Ok(9.0), "FALSIFIED VE-011: max");
    assert_eq!(v.min(), Ok(1.0), "FALSIFIED VE-011: min");

    let mean = Vector::from_slice(&[2.0, 4.0, 6.0]).mean().expect("non-empty");
    assert!((mean - 4.0).abs() < 1e-12, "FALSIFIED VE-011: mean={mean}, expected 4");
}

/// FALSIFY-VE-012: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_ve_012_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("equal sizes").abs();
    let bound = u.l2_norm() * v.l2_norm();

    assert!(
        dot <= bound + 1e-12,
        "FALSIFIED VE-012: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VE-013: Failed mutation leaves the receiver untouched
#[test]
fn falsify_ve_013_failed_call_does_not_mutate() {
    let mut v = Vector::from_slice(&[2.0, 1.0]);
    let before = v.clone();

    assert!(v.set(2, 99.0).is_err());
    assert!(v.try_add(&Vector::zeros(5)).is_err());
    assert_eq!(v, before, "FALSIFIED VE-013: receiver changed to {v}");
}
