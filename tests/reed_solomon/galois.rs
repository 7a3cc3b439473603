//! Galois Field (GF(2^n)) Arithmetic Tests
//!
//! Tests for field construction, table invariants and the basic operations
//! over the default GF(2^8) field and a few smaller ones.

use rserasure::reed_solomon::{GaloisField, RsError};

// ============================================================================
// Basic Arithmetic Operations
// ============================================================================

#[test]
fn test_addition_is_xor() {
    let gf = GaloisField::default();
    assert_eq!(gf.add(5, 3), 6);
    assert_eq!(gf.sub(5, 3), 6);
    assert_eq!(gf.add(0, 42), 42);
}

#[test]
fn test_every_element_is_its_own_negative() {
    let gf = GaloisField::default();
    for x in 0..=255u16 {
        assert_eq!(gf.add(x, x), 0);
    }
}

#[test]
fn test_multiplicative_identity_and_zero() {
    let gf = GaloisField::default();
    for x in 0..=255u16 {
        assert_eq!(gf.mul(x, 1), x);
        assert_eq!(gf.mul(1, x), x);
        assert_eq!(gf.mul(x, 0), 0);
    }
}

#[test]
fn test_inverse_for_all_nonzero_elements() {
    let gf = GaloisField::default();
    for x in 1..=255u16 {
        let inv = gf.inverse(x).unwrap();
        assert_eq!(gf.mul(x, inv), 1, "Failed for x = {}", x);
    }
}

#[test]
fn test_log_of_product_is_sum_of_logs() {
    let gf = GaloisField::default();
    let cap = gf.cap() as u32;
    for x in (1..=255u16).step_by(3) {
        for y in (1..=255u16).step_by(5) {
            let product = gf.mul(x, y);
            let expected = (gf.log(x).unwrap() as u32 + gf.log(y).unwrap() as u32) % cap;
            assert_eq!(gf.log(product).unwrap() as u32, expected);
        }
    }
}

#[test]
fn test_division_undoes_multiplication() {
    let gf = GaloisField::default();
    for a in 0..=255u16 {
        for b in [1u16, 2, 3, 29, 142, 255] {
            assert_eq!(gf.div(gf.mul(a, b), b).unwrap(), a);
        }
    }
}

#[test]
fn test_division_by_zero_is_an_error() {
    let gf = GaloisField::default();
    assert_eq!(gf.div(42, 0), Err(RsError::DivisionByZero));
}

// ============================================================================
// Power Operations
// ============================================================================

#[test]
fn test_powers_of_alpha_walk_the_whole_group() {
    let gf = GaloisField::default();
    let mut seen = vec![false; 256];
    for i in 0..255 {
        let a = gf.pow(gf.alpha(), i);
        assert!(!seen[a as usize], "alpha^{} repeats", i);
        seen[a as usize] = true;
        assert_eq!(a, gf.exp(i as usize));
    }
    assert!(!seen[0]);
}

#[test]
fn test_power_wraps_around_group_order() {
    let gf = GaloisField::default();
    assert_eq!(gf.pow(7, 256), gf.pow(7, 1));
    assert_eq!(gf.pow(2, 8), 29);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_non_generating_alpha_is_rejected() {
    // x has order 51 modulo the AES polynomial
    assert!(matches!(
        GaloisField::new(2, 8, 2, 0x11B),
        Err(RsError::IncompatibleGenerator { .. })
    ));
    // but 3 generates it
    let gf = GaloisField::new(2, 8, 3, 0x11B).unwrap();
    assert_eq!(gf.mul(0x53, 0xCA), 1);
}

#[test]
fn test_unsupported_parameters() {
    assert_eq!(
        GaloisField::new(1, 8, 2, 0x11D).unwrap_err(),
        RsError::NonPrimeCharacteristic(1)
    );
    assert_eq!(
        GaloisField::new(5, 2, 2, 0x11D).unwrap_err(),
        RsError::UnsupportedCharacteristic(5)
    );
}

#[test]
fn test_gf16_field() {
    // x^16 + x^12 + x^3 + x + 1
    let gf = GaloisField::new(2, 16, 2, 0x1100B).unwrap();
    assert_eq!(gf.cap(), 65535);
    for x in [1u16, 2, 0x1234, 0xFFFF] {
        assert_eq!(gf.mul(x, gf.inverse(x).unwrap()), 1);
    }
}
