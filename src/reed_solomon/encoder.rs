//! Systematic encoding via a simulated linear feedback shift register
//!
//! ## Register
//!
//! N cells, all starting at zero. For each message byte `m`:
//!
//! ```text
//! feedback = m ^ cell[N-1]
//! cell[j]  = cell[j-1] ^ g[j] * feedback     for j = N-1 down to 1
//! cell[0]  = g[0] * feedback
//! ```
//!
//! After the last byte the cells hold the remainder of m(x)·x^N divided by
//! g(x), lowest degree in cell 0. No explicit long division is performed.
//!
//! ## Codeword layout
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────┐
//! │ message (K bytes, unchanged) │ cell[N-1] │ cell[N-2] │ … │ cell[0] │
//! └──────────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! Parity goes out highest register cell first. Decoders depend on this
//! order, so it must not change.

use super::error::{RsError, RsResult};
use super::galois::gf_mul;
use super::generator::GeneratorPolynomial;
use smallvec::SmallVec;

/// Parity symbols in register order (cell 0 first)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parity(SmallVec<[u8; 32]>);

impl Parity {
    /// Register cells, cell 0 first
    pub fn register(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parity in the order it is written to a codeword
    pub fn transmit_order(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().rev().copied()
    }
}

/// Run the shift register over `message`
pub fn compute_parity(message: &[u8], generator: &GeneratorPolynomial) -> Parity {
    let n = generator.parity_symbols();
    let mut lfsr: SmallVec<[u8; 32]> = SmallVec::from_elem(0, n);

    for &byte in message {
        let feedback = byte ^ lfsr[n - 1];
        for j in (1..n).rev() {
            lfsr[j] = lfsr[j - 1] ^ gf_mul(generator.coefficient(j), feedback);
        }
        lfsr[0] = gf_mul(generator.coefficient(0), feedback);
    }

    Parity(lfsr)
}

/// Write `message` followed by `parity` (highest cell first) into `dst`
///
/// `dst` must be exactly `message.len() + parity.len()` bytes.
pub fn build_codeword(message: &[u8], parity: &Parity, dst: &mut [u8]) -> RsResult<()> {
    let expected = message.len() + parity.len();
    if dst.len() != expected {
        return Err(RsError::BufferSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    let (data, tail) = dst.split_at_mut(message.len());
    data.copy_from_slice(message);
    for (slot, byte) in tail.iter_mut().zip(parity.transmit_order()) {
        *slot = byte;
    }
    Ok(())
}

/// An encoded message: data bytes followed by parity bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    bytes: Vec<u8>,
    data_len: usize,
}

impl Codeword {
    pub(crate) fn new(bytes: Vec<u8>, data_len: usize) -> Self {
        Self { bytes, data_len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// The original message bytes
    pub fn message(&self) -> &[u8] {
        &self.bytes[..self.data_len]
    }

    /// Parity bytes in transmit order
    pub fn parity(&self) -> &[u8] {
        &self.bytes[self.data_len..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Codeword {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
