//! Polynomial arithmetic over a Galois field
//!
//! Polynomials are plain coefficient slices stored highest degree first, so
//! `[1, 0, 3]` is `x² + 3` and the constant term is always the last entry.
//! Every operation validates that its coefficients are field elements before
//! touching the tables.

use super::error::{RsError, RsResult};
use super::galois::{Element, GaloisField};
use std::sync::Arc;

/// Quotient and remainder of a synthetic division
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub quotient: Vec<Element>,
    pub remainder: Vec<Element>,
}

/// Polynomial operations with coefficients from a shared field
#[derive(Debug, Clone)]
pub struct Polynomials {
    field: Arc<GaloisField>,
}

impl Polynomials {
    pub fn new(field: Arc<GaloisField>) -> Self {
        Self { field }
    }

    /// The field the coefficients are taken from
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    fn check_coefficients(&self, p: &[Element]) -> RsResult<()> {
        for &c in p {
            self.field.check(c as u32)?;
        }
        Ok(())
    }

    /// Add two polynomials, aligning their constant terms
    pub fn add(&self, p: &[Element], q: &[Element]) -> RsResult<Vec<Element>> {
        self.check_coefficients(p)?;
        self.check_coefficients(q)?;

        let len = p.len().max(q.len());
        let mut result = vec![0; len];
        result[len - p.len()..].copy_from_slice(p);
        for (r, &c) in result[len - q.len()..].iter_mut().zip(q) {
            *r = self.field.add(*r, c);
        }
        Ok(result)
    }

    /// Multiply every coefficient by the scalar `x`
    pub fn scale(&self, p: &[Element], x: Element) -> RsResult<Vec<Element>> {
        self.check_coefficients(p)?;
        self.field.check(x as u32)?;

        Ok(p.iter().map(|&c| self.field.mul(c, x)).collect())
    }

    /// Multiply two polynomials (full convolution)
    pub fn mul(&self, p: &[Element], q: &[Element]) -> RsResult<Vec<Element>> {
        self.check_coefficients(p)?;
        self.check_coefficients(q)?;

        if p.is_empty() || q.is_empty() {
            return Ok(Vec::new());
        }

        let mut result = vec![0; p.len() + q.len() - 1];
        for (i, &a) in p.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in q.iter().enumerate() {
                result[i + j] = self.field.add(result[i + j], self.field.mul(a, b));
            }
        }
        Ok(result)
    }

    /// Evaluate `p(x)` with Horner's method
    pub fn eval(&self, p: &[Element], x: Element) -> RsResult<Element> {
        self.check_coefficients(p)?;
        self.field.check(x as u32)?;

        let (&first, rest) = p.split_first().ok_or(RsError::EmptyPolynomial)?;
        Ok(rest
            .iter()
            .fold(first, |acc, &c| self.field.add(self.field.mul(acc, x), c)))
    }

    /// Divide `p` by the monic polynomial `q` using expanded synthetic division
    ///
    /// Both the quotient and the remainder come back with leading zeros
    /// stripped, so a remainder may be shorter than `q.len() - 1`.
    pub fn monic_divide(&self, p: &[Element], q: &[Element]) -> RsResult<Division> {
        self.check_coefficients(p)?;
        self.check_coefficients(q)?;

        let leading = *q.first().ok_or(RsError::EmptyPolynomial)?;
        if leading != 1 {
            return Err(RsError::NonMonicDivisor { leading });
        }
        if q.len() == 1 {
            return Ok(Division {
                quotient: p.to_vec(),
                remainder: vec![0],
            });
        }
        if p.len() < q.len() {
            return Err(RsError::DividendTooShort {
                dividend: p.len(),
                divisor: q.len(),
            });
        }

        let mut buffer = p.to_vec();
        for i in 0..p.len() - (q.len() - 1) {
            let coef = buffer[i];
            if coef == 0 {
                continue;
            }
            for (j, &d) in q.iter().enumerate().skip(1) {
                buffer[i + j] = self.field.sub(buffer[i + j], self.field.mul(d, coef));
            }
        }

        let split = buffer.len() - (q.len() - 1);
        Ok(Division {
            quotient: shorten(&buffer[..split]),
            remainder: shorten(&buffer[split..]),
        })
    }

    /// Strip leading zero coefficients
    pub fn shorten(&self, p: &[Element]) -> RsResult<Vec<Element>> {
        self.check_coefficients(p)?;
        Ok(shorten(p))
    }
}

/// Strip leading zeros, keeping at least the constant term
pub(crate) fn shorten(p: &[Element]) -> Vec<Element> {
    match p.iter().position(|&c| c != 0) {
        Some(first) => p[first..].to_vec(),
        None => p.last().map(|&c| vec![c]).unwrap_or_default(),
    }
}
