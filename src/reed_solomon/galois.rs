//! Galois Field GF(2^n) arithmetic for Reed-Solomon erasure coding
//!
//! ## Field Construction
//!
//! A field is described by four numbers: the characteristic `p` (only 2 is
//! implemented), the power `n`, a generator element `alpha` and a modulus
//! polynomial `prim_poly` of degree `n`. Elements are bitmasks of polynomial
//! coefficients, so `11` (`0b1011`) stands for `x³ + x + 1`.
//!
//! The default field is GF(2^8) with `alpha = 2` (the polynomial `x`) and
//! `prim_poly = 0x11D` (x⁸ + x⁴ + x³ + x² + 1).
//!
//! ## Lookup Tables
//!
//! Multiplication and division go through log/antilog tables built once in
//! [`GaloisField::new`]. The exponential table is twice the group order long
//! so that `log a + log b` indexes it directly without a modulo.

use super::error::{RsError, RsResult};
use log::trace;

/// A field element. Fields up to GF(2^16) are supported.
pub type Element = u16;

/// Largest supported field power
pub const MAX_POWER: u32 = 16;

/// Default field characteristic
pub const DEFAULT_PRIME: u32 = 2;

/// Default field power: GF(2^8)
pub const DEFAULT_POWER: u32 = 8;

/// Default generator element: the polynomial `x`
pub const DEFAULT_ALPHA: u32 = 2;

/// Default modulus: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const DEFAULT_PRIM_POLY: u32 = 0x11D;

/// Galois field GF(2^n) with precomputed log/antilog tables
#[derive(Debug, Clone)]
pub struct GaloisField {
    prime: u32,
    power: u32,
    alpha: Element,
    prim_poly: u32,
    size: usize,
    cap: usize,
    exp: Vec<Element>, // 2x size to avoid modulo in calculations
    log: Vec<u16>,
}

impl GaloisField {
    /// Build a field GF(p^n) generated by `alpha` modulo `prim_poly`
    pub fn new(prime: u32, power: u32, alpha: u32, prim_poly: u32) -> RsResult<Self> {
        if !is_prime(prime) {
            return Err(RsError::NonPrimeCharacteristic(prime));
        }
        if prime != 2 {
            return Err(RsError::UnsupportedCharacteristic(prime));
        }
        if power == 0 || power > MAX_POWER {
            return Err(RsError::InvalidPower {
                power,
                max: MAX_POWER,
            });
        }

        let size = 1usize << power;
        let cap = size - 1;

        if (prim_poly as usize) < size || (prim_poly as usize) >= 2 * size {
            return Err(RsError::InvalidModulus { prim_poly, power });
        }
        if alpha == 0 || alpha as usize > cap {
            return Err(RsError::InvalidAlpha {
                alpha,
                cap: cap as u32,
            });
        }

        let mut field = GaloisField {
            prime,
            power,
            alpha: alpha as Element,
            prim_poly,
            size,
            cap,
            exp: vec![0; 2 * cap],
            log: vec![0; size],
        };
        field.build_tables()?;
        Ok(field)
    }

    /// Fill the log/antilog tables by walking the powers of alpha
    fn build_tables(&mut self) -> RsResult<()> {
        let mut visited = vec![false; self.size];
        let mut a = 1u32;

        for i in 0..self.cap {
            if visited[a as usize] {
                return Err(RsError::IncompatibleGenerator {
                    alpha: self.alpha as u32,
                    prim_poly: self.prim_poly,
                    repeated: a,
                    steps: i,
                    cap: self.cap as u32,
                });
            }
            visited[a as usize] = true;

            self.exp[i] = a as Element;
            self.exp[i + self.cap] = a as Element;
            self.log[a as usize] = i as u16;

            a = self.standard_mul(a, self.alpha as u32);
        }

        trace!(
            "Built GF(2^{}) tables: alpha={}, prim_poly={:#x}",
            self.power,
            self.alpha,
            self.prim_poly
        );
        Ok(())
    }

    /// Carry-less multiplication reduced by the modulus, without tables
    pub fn standard_mul(&self, mut x: u32, mut y: u32) -> u32 {
        let mut result = 0;
        while y > 0 {
            if y & 1 != 0 {
                result ^= x;
            }
            x <<= 1;
            y >>= 1;
            if x & self.size as u32 != 0 {
                x ^= self.prim_poly;
            }
        }
        result
    }

    pub fn prime(&self) -> u32 {
        self.prime
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn alpha(&self) -> Element {
        self.alpha
    }

    pub fn prim_poly(&self) -> u32 {
        self.prim_poly
    }

    /// Number of elements in the field
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest element, also the order of the multiplicative group
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Whether `value` is an element of this field
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value as usize <= self.cap
    }

    /// Validate `value` as a field element
    #[inline]
    pub fn check(&self, value: u32) -> RsResult<Element> {
        if self.contains(value) {
            Ok(value as Element)
        } else {
            Err(RsError::CoefficientOutOfRange {
                value,
                cap: self.cap as u32,
            })
        }
    }

    /// Discrete logarithm base alpha; `None` for zero
    #[inline]
    pub fn log(&self, a: Element) -> Option<u16> {
        if a == 0 {
            None
        } else {
            Some(self.log[a as usize])
        }
    }

    /// alpha^i for any `i`
    #[inline]
    pub fn exp(&self, i: usize) -> Element {
        self.exp[i % self.cap]
    }

    /// Add two elements - this is just XOR
    #[inline]
    pub fn add(&self, a: Element, b: Element) -> Element {
        a ^ b
    }

    /// Subtract two elements - same as addition (XOR)
    #[inline]
    pub fn sub(&self, a: Element, b: Element) -> Element {
        a ^ b
    }

    /// Multiply two elements
    #[inline]
    pub fn mul(&self, a: Element, b: Element) -> Element {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log[a as usize] as usize;
        let log_b = self.log[b as usize] as usize;
        self.exp[log_a + log_b]
    }

    /// Divide two elements
    #[inline]
    pub fn div(&self, a: Element, b: Element) -> RsResult<Element> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let log_a = self.log[a as usize] as usize;
        let log_b = self.log[b as usize] as usize;
        Ok(self.exp[log_a + self.cap - log_b])
    }

    /// Raise an element to a power
    #[inline]
    pub fn pow(&self, base: Element, exponent: u32) -> Element {
        if base == 0 {
            return if exponent == 0 { 1 } else { 0 };
        }

        let log_base = self.log[base as usize] as u64;
        let log_result = (log_base * exponent as u64) % self.cap as u64;
        self.exp[log_result as usize]
    }

    /// Get the multiplicative inverse of an element
    #[inline]
    pub fn inverse(&self, a: Element) -> RsResult<Element> {
        if a == 0 {
            return Err(RsError::DivisionByZero);
        }

        let log_a = self.log[a as usize] as usize;
        Ok(self.exp[(self.cap - log_a) % self.cap])
    }
}

impl Default for GaloisField {
    /// GF(2^8) with alpha = 2 and modulus 0x11D
    fn default() -> Self {
        Self::new(
            DEFAULT_PRIME,
            DEFAULT_POWER,
            DEFAULT_ALPHA,
            DEFAULT_PRIM_POLY,
        )
        .expect("default GF(2^8) parameters are valid")
    }
}

/// Trial-division primality check
pub fn is_prime(x: u32) -> bool {
    if x < 2 {
        return false;
    }
    let mut i = 2u32;
    while (i as u64) * (i as u64) <= x as u64 {
        if x % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
