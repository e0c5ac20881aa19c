//! Galois Field GF(2^8) arithmetic for the Reed-Solomon codec
//!
//! ## Field polynomial
//!
//! Elements are bytes. Arithmetic is performed modulo the primitive irreducible
//! polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1), with α = 2 as the multiplicative
//! generator. Every nonzero element is some power α^i with 0 ≤ i < 255.
//!
//! ## Tables
//!
//! Multiplication goes through log/antilog tables built once on first use. The
//! antilog table is doubled to 512 entries so `exp[log a + log b]` never needs
//! a modulo reduction.

use std::sync::OnceLock;

/// GF(2^8) primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const GF8_GENERATOR: u32 = 0x11D;

/// Number of elements in the field
pub const FIELD_SIZE: usize = 256;

/// Order of the multiplicative group (α^255 = 1)
pub const FIELD_ORDER: usize = FIELD_SIZE - 1;

/// Galois Field lookup tables for fast arithmetic
pub struct GaloisTable {
    pub log: [u8; FIELD_SIZE],
    pub exp: [u8; 2 * FIELD_SIZE],
}

impl Default for GaloisTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GaloisTable {
    pub fn new() -> Self {
        let mut table = GaloisTable {
            log: [0; FIELD_SIZE],
            exp: [0; 2 * FIELD_SIZE],
        };
        table.build_tables();
        table
    }

    fn build_tables(&mut self) {
        let mut b = 1u32;

        for l in 0..FIELD_ORDER {
            self.exp[l] = b as u8;
            self.log[b as usize] = l as u8;

            b <<= 1;
            if b & FIELD_SIZE as u32 != 0 {
                b ^= GF8_GENERATOR;
            }
        }

        for l in FIELD_ORDER..self.exp.len() {
            self.exp[l] = self.exp[l - FIELD_ORDER];
        }

        // log(0) is undefined; callers short-circuit on zero before lookup
        self.log[0] = 0;
    }

    /// Shared read-only tables
    pub fn global() -> &'static GaloisTable {
        static TABLE: OnceLock<GaloisTable> = OnceLock::new();
        TABLE.get_or_init(GaloisTable::new)
    }
}

/// Field multiplication: `gf_mul(x, 0) == gf_mul(0, x) == 0`
#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let table = GaloisTable::global();
    table.exp[table.log[a as usize] as usize + table.log[b as usize] as usize]
}

/// α raised to `power`, cyclic with period 255
#[inline]
pub fn gf_exp(power: usize) -> u8 {
    GaloisTable::global().exp[power % FIELD_ORDER]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_table_starts_at_one_and_wraps() {
        assert_eq!(gf_exp(0), 1);
        assert_eq!(gf_exp(1), 2);
        assert_eq!(gf_exp(8), 0x1D);
        assert_eq!(gf_exp(255), 1);
        assert_eq!(gf_exp(256), 2);
    }

    #[test]
    fn test_every_nonzero_element_is_a_power_of_alpha() {
        let mut seen = [false; FIELD_SIZE];
        for i in 0..FIELD_ORDER {
            seen[gf_exp(i) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_multiplication_by_zero() {
        for x in 0..=255u8 {
            assert_eq!(gf_mul(x, 0), 0);
            assert_eq!(gf_mul(0, x), 0);
        }
    }

    #[test]
    fn test_known_products() {
        assert_eq!(gf_mul(2, 2), 4);
        assert_eq!(gf_mul(0x80, 2), 0x1D);
        assert_eq!(gf_mul(3, 7), 9);
    }

    #[test]
    fn test_mul_matches_exponent_addition() {
        for i in 0..FIELD_ORDER {
            for j in [0, 1, 7, 128, 254] {
                assert_eq!(gf_mul(gf_exp(i), gf_exp(j)), gf_exp(i + j));
            }
        }
    }

    #[test]
    fn test_mul_identity_and_inverse() {
        for x in 1..=255u8 {
            assert_eq!(gf_mul(x, 1), x);
            let log = GaloisTable::global().log[x as usize] as usize;
            assert_eq!(gf_mul(x, gf_exp(FIELD_ORDER - log)), 1, "inverse of {x}");
        }
    }
}
