//! Syndrome computation and error detection
//!
//! The received word is read as a polynomial whose first byte is the highest
//! degree coefficient, matching the encoder's layout. Syndrome entry `j - 1`
//! is that polynomial evaluated at α^j for j = 1..=N.
//!
//! A nonzero entry proves the word was corrupted. An all-zero syndrome only
//! says the word is *a* codeword: a corruption pattern that happens to equal
//! the difference of two codewords (more than N altered symbols) cannot be
//! seen by the syndrome alone.

use super::galois::{gf_exp, gf_mul};
use smallvec::SmallVec;

/// Syndrome vector, one field element per generator root
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Syndrome(SmallVec<[u8; 32]>);

impl Syndrome {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff any entry is nonzero
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|&s| s != 0)
    }
}

impl std::ops::Index<usize> for Syndrome {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl From<&[u8]> for Syndrome {
    fn from(values: &[u8]) -> Self {
        Syndrome(SmallVec::from_slice(values))
    }
}

/// Evaluate `received` at α¹..α^N
pub fn compute_syndrome(received: &[u8], parity_symbols: usize) -> Syndrome {
    let values = (1..=parity_symbols)
        .map(|j| {
            let root = gf_exp(j);
            received
                .iter()
                .fold(0u8, |sum, &byte| byte ^ gf_mul(root, sum))
        })
        .collect();
    Syndrome(values)
}

/// True iff any syndrome entry is nonzero
pub fn has_errors(syndrome: &Syndrome) -> bool {
    syndrome.has_errors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_has_zero_syndrome() {
        let syndrome = compute_syndrome(&[], 4);
        assert_eq!(syndrome.as_slice(), &[0, 0, 0, 0]);
        assert!(!has_errors(&syndrome));
    }

    #[test]
    fn test_single_byte_word() {
        // A lone byte is a constant polynomial, equal at every point
        let syndrome = compute_syndrome(&[0x42], 3);
        assert_eq!(syndrome.as_slice(), &[0x42, 0x42, 0x42]);
        assert!(syndrome.has_errors());
    }

    #[test]
    fn test_first_byte_is_highest_degree() {
        // [1, 0] is the polynomial x, so S_j = α^j
        let syndrome = compute_syndrome(&[1, 0], 3);
        assert_eq!(syndrome.as_slice(), &[gf_exp(1), gf_exp(2), gf_exp(3)]);
    }

    #[test]
    fn test_syndrome_length_matches_parity() {
        assert_eq!(compute_syndrome(&[1, 2, 3], 40).len(), 40);
        assert!(compute_syndrome(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_from_slice_and_index() {
        let syndrome = Syndrome::from(&[0u8, 0, 5][..]);
        assert_eq!(syndrome[2], 5);
        assert!(syndrome.has_errors());
        assert!(!Syndrome::from(&[0u8; 8][..]).has_errors());
    }
}
