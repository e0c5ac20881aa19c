//! Generator polynomial construction
//!
//! g(x) = (x + α¹)(x + α²)···(x + α^N), built by multiplying linear factors
//! into a running product starting from 1.

use super::error::{RsError, RsResult};
use super::galois::gf_exp;
use super::poly::Polynomial;
use super::MAX_PARITY_SYMBOLS;

/// Monic generator polynomial of degree N with roots α¹..α^N
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomial {
    poly: Polynomial,
    parity_symbols: usize,
}

impl GeneratorPolynomial {
    pub fn build(parity_symbols: usize) -> RsResult<Self> {
        if parity_symbols == 0 || parity_symbols > MAX_PARITY_SYMBOLS {
            return Err(RsError::InvalidParitySymbols {
                requested: parity_symbols,
                max: MAX_PARITY_SYMBOLS,
            });
        }

        let mut product = Polynomial::one();
        let mut factor = Polynomial::zero();

        for i in 1..=parity_symbols {
            factor.clear();
            factor.set(0, gf_exp(i))?;
            factor.set(1, 1)?;

            let next = Polynomial::multiply(&product, &factor)?;
            product.copy_from(&next);
        }

        Ok(Self {
            poly: product,
            parity_symbols,
        })
    }

    pub fn parity_symbols(&self) -> usize {
        self.parity_symbols
    }

    /// Coefficients lowest degree first; the last entry is the leading 1
    pub fn coefficients(&self) -> &[u8] {
        self.poly.as_slice()
    }

    pub fn as_polynomial(&self) -> &Polynomial {
        &self.poly
    }

    /// Coefficient of `x^index`
    #[inline]
    pub fn coefficient(&self, index: usize) -> u8 {
        self.poly.coefficient(index)
    }
}
