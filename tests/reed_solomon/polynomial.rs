//! Polynomial Algebra Tests
//!
//! Tests for addition, scaling, convolution, Horner evaluation and monic
//! synthetic division over GF(2^8).

use rserasure::reed_solomon::{Element, GaloisField, Polynomials, RsError};
use std::sync::Arc;

fn polys() -> Polynomials {
    Polynomials::new(Arc::new(GaloisField::default()))
}

// ============================================================================
// Addition and Multiplication
// ============================================================================

#[test]
fn test_add_result_length_is_longest_operand() {
    let poly = polys();
    assert_eq!(poly.add(&[1, 2, 3, 4], &[5]).unwrap().len(), 4);
    assert_eq!(poly.add(&[1], &[0, 0, 7]).unwrap(), vec![0, 0, 6]);
}

#[test]
fn test_add_is_self_inverse() {
    let poly = polys();
    let p = [9, 200, 13, 77];
    assert_eq!(poly.add(&p, &p).unwrap(), vec![0; 4]);
}

#[test]
fn test_mul_by_one_is_identity() {
    let poly = polys();
    let p = [3, 0, 250, 1];
    assert_eq!(poly.mul(&p, &[1]).unwrap(), p.to_vec());
}

#[test]
fn test_mul_distributes_over_add() {
    let poly = polys();
    let p = [3, 17, 4];
    let q = [1, 99];
    let r = [45, 2, 8];
    let left = poly.mul(&p, &poly.add(&q, &r).unwrap()).unwrap();
    let right = poly
        .add(&poly.mul(&p, &q).unwrap(), &poly.mul(&p, &r).unwrap())
        .unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_mul_rejects_out_of_range_coefficients() {
    let poly = polys();
    assert_eq!(
        poly.mul(&[1, 300], &[1]),
        Err(RsError::CoefficientOutOfRange {
            value: 300,
            cap: 255
        })
    );
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_eval_matches_explicit_sum() {
    let poly = polys();
    let gf = poly.field();
    let p = [46, 198, 0, 89];
    let x = 201;
    let expected = gf.add(
        gf.add(gf.mul(46, gf.pow(x, 3)), gf.mul(198, gf.pow(x, 2))),
        89,
    );
    assert_eq!(poly.eval(&p, x).unwrap(), expected);
}

#[test]
fn test_eval_product_is_product_of_evals() {
    let poly = polys();
    let gf = poly.field();
    let p = [1, 7, 3];
    let q = [12, 0, 5, 6];
    let pq = poly.mul(&p, &q).unwrap();
    for x in [0, 1, 2, 77, 255] {
        assert_eq!(
            poly.eval(&pq, x).unwrap(),
            gf.mul(poly.eval(&p, x).unwrap(), poly.eval(&q, x).unwrap())
        );
    }
}

// ============================================================================
// Synthetic Division
// ============================================================================

#[test]
fn test_division_identity() {
    let poly = polys();
    let p: Vec<Element> = vec![5, 0, 33, 200, 1, 9, 17, 0];
    let q: Vec<Element> = vec![1, 15, 54, 120, 64];

    let division = poly.monic_divide(&p, &q).unwrap();
    assert!(division.remainder.len() < q.len());

    let back = poly
        .add(&poly.mul(&division.quotient, &q).unwrap(), &division.remainder)
        .unwrap();
    assert_eq!(poly.shorten(&back).unwrap(), poly.shorten(&p).unwrap());
}

#[test]
fn test_exact_division_leaves_zero_remainder() {
    let poly = polys();
    let q = [1, 3];
    let p = poly.mul(&[7, 0, 2], &q).unwrap();
    let division = poly.monic_divide(&p, &q).unwrap();
    assert_eq!(division.quotient, vec![7, 0, 2]);
    assert_eq!(division.remainder, vec![0]);
}

#[test]
fn test_division_by_x_drops_constant_term() {
    let poly = polys();
    let division = poly.monic_divide(&[4, 0, 9, 0], &[1, 0]).unwrap();
    assert_eq!(division.quotient, vec![4, 0, 9]);
    assert_eq!(division.remainder, vec![0]);
}

#[test]
fn test_division_requires_monic_divisor() {
    let poly = polys();
    assert_eq!(
        poly.monic_divide(&[1, 2, 3], &[0, 1]),
        Err(RsError::NonMonicDivisor { leading: 0 })
    );
}

#[test]
fn test_shorten_keeps_constant_term() {
    let poly = polys();
    assert_eq!(poly.shorten(&[0, 0, 0]).unwrap(), vec![0]);
    assert_eq!(poly.shorten(&[0, 4, 0]).unwrap(), vec![4, 0]);
}
