//! Fixed-capacity polynomial buffers over GF(2^8)
//!
//! Coefficients are stored lowest degree first (index = degree). Each buffer
//! tracks how many coefficients are live; everything past that is kept zero so
//! that the buffer can be reused without a separate clearing pass.

use super::error::{RsError, RsResult};
use super::galois::gf_mul;

/// Coefficient capacity of every polynomial buffer (one per field element)
pub const POLY_CAPACITY: usize = 256;

#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: [u8; POLY_CAPACITY],
    len: usize,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Polynomial")
            .field("coefficients", &self.as_slice())
            .finish()
    }
}

impl Polynomial {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self {
            coefficients: [0; POLY_CAPACITY],
            len: 0,
        }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        let mut poly = Self::zero();
        poly.coefficients[0] = 1;
        poly.len = 1;
        poly
    }

    /// Build from coefficients given lowest degree first
    pub fn from_coefficients(coefficients: &[u8]) -> RsResult<Self> {
        if coefficients.len() > POLY_CAPACITY {
            return Err(RsError::PolynomialOverflow {
                degree: coefficients.len() - 1,
                capacity: POLY_CAPACITY,
            });
        }

        let mut poly = Self::zero();
        poly.coefficients[..coefficients.len()].copy_from_slice(coefficients);
        poly.len = coefficients.len();
        poly.normalize();
        Ok(poly)
    }

    /// Zero-fill every coefficient
    pub fn clear(&mut self) {
        self.coefficients[..self.len].fill(0);
        self.len = 0;
    }

    pub fn copy_from(&mut self, other: &Polynomial) {
        self.clear();
        self.coefficients[..other.len].copy_from_slice(other.as_slice());
        self.len = other.len;
    }

    /// Degree of the polynomial, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    /// Coefficient of `x^index`; zero past the degree
    pub fn coefficient(&self, index: usize) -> u8 {
        self.coefficients.get(index).copied().unwrap_or(0)
    }

    /// Bounds-checked coefficient write
    pub fn set(&mut self, index: usize, value: u8) -> RsResult<()> {
        if index >= POLY_CAPACITY {
            return Err(RsError::PolynomialOverflow {
                degree: index,
                capacity: POLY_CAPACITY,
            });
        }

        self.coefficients[index] = value;
        if index >= self.len {
            self.len = index + 1;
        }
        self.normalize();
        Ok(())
    }

    /// Live coefficients, lowest degree first
    pub fn as_slice(&self) -> &[u8] {
        &self.coefficients[..self.len]
    }

    /// Product of two polynomials, rejected if it would not fit the capacity
    pub fn multiply(a: &Polynomial, b: &Polynomial) -> RsResult<Polynomial> {
        let mut product = Polynomial::zero();
        let (Some(da), Some(db)) = (a.degree(), b.degree()) else {
            return Ok(product);
        };

        if da + db >= POLY_CAPACITY {
            return Err(RsError::PolynomialOverflow {
                degree: da + db,
                capacity: POLY_CAPACITY,
            });
        }

        for (i, &ai) in a.as_slice().iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.as_slice().iter().enumerate() {
                product.coefficients[i + j] ^= gf_mul(ai, bj);
            }
        }

        product.len = da + db + 1;
        product.normalize();
        Ok(product)
    }

    /// Evaluate at `x` with Horner's method
    pub fn evaluate(&self, x: u8) -> u8 {
        self.as_slice()
            .iter()
            .rev()
            .fold(0u8, |acc, &c| gf_mul(acc, x) ^ c)
    }

    // Drop trailing zero coefficients so `len` is always degree + 1
    fn normalize(&mut self) {
        while self.len > 0 && self.coefficients[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}
