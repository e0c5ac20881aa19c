//! Reed-Solomon codec configuration
//!
//! [`ReedSolomon`] holds the parity symbol count and the generator polynomial
//! built for it. Both are fixed at construction. Every operation returns its
//! results instead of stashing them on the codec, so one instance can be shared
//! by any number of threads.

use super::correction::{DecodeOutcome, ErrorCorrector, Uncorrectable};
use super::encoder::{build_codeword, compute_parity, Codeword, Parity};
use super::error::{RsError, RsResult};
use super::generator::GeneratorPolynomial;
use super::syndrome::{compute_syndrome, Syndrome};
use super::MAX_CODEWORD_LEN;
use log::{debug, trace};

/// Systematic Reed-Solomon encoder and syndrome detector over GF(256)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomon {
    parity_symbols: usize,
    generator: GeneratorPolynomial,
}

impl ReedSolomon {
    /// Build a codec appending `parity_symbols` parity bytes per message
    ///
    /// Fails with [`RsError::InvalidParitySymbols`] unless
    /// `1 <= parity_symbols <= 254`.
    pub fn new(parity_symbols: usize) -> RsResult<Self> {
        let generator = GeneratorPolynomial::build(parity_symbols)?;
        debug!(
            "Reed-Solomon codec: {} parity symbols, generator {}",
            parity_symbols,
            hex::encode(generator.coefficients())
        );

        Ok(Self {
            parity_symbols,
            generator,
        })
    }

    pub fn parity_symbols(&self) -> usize {
        self.parity_symbols
    }

    pub fn generator(&self) -> &GeneratorPolynomial {
        &self.generator
    }

    /// Longest message this codec can encode
    pub fn max_message_len(&self) -> usize {
        MAX_CODEWORD_LEN - self.parity_symbols
    }

    /// Symbol errors a correction stage can repair, ⌊N/2⌋
    pub fn correction_capacity(&self) -> usize {
        self.parity_symbols / 2
    }

    /// Codeword length for a message of `message_len` bytes
    pub fn codeword_len(&self, message_len: usize) -> usize {
        message_len + self.parity_symbols
    }

    fn check_message_len(&self, len: usize) -> RsResult<()> {
        if len > self.max_message_len() {
            return Err(RsError::MessageTooLong {
                len,
                max: self.max_message_len(),
            });
        }
        Ok(())
    }

    /// Encode `message` into a newly allocated codeword
    pub fn encode(&self, message: &[u8]) -> RsResult<Codeword> {
        self.check_message_len(message.len())?;

        let mut bytes = vec![0u8; self.codeword_len(message.len())];
        self.encode_into(message, &mut bytes)?;
        Ok(Codeword::new(bytes, message.len()))
    }

    /// Encode `message` into a caller-owned buffer of exactly
    /// `message.len() + parity_symbols` bytes
    ///
    /// Nothing is written to `dst` if either length check fails.
    pub fn encode_into(&self, message: &[u8], dst: &mut [u8]) -> RsResult<Parity> {
        self.check_message_len(message.len())?;

        let expected = self.codeword_len(message.len());
        if dst.len() != expected {
            return Err(RsError::BufferSizeMismatch {
                expected,
                actual: dst.len(),
            });
        }

        let parity = compute_parity(message, &self.generator);
        trace!("Parity bytes: {}", hex::encode(parity.register()));

        build_codeword(message, &parity, dst)?;
        Ok(parity)
    }

    /// Syndrome of a received word
    pub fn decode_syndrome(&self, received: &[u8]) -> RsResult<Syndrome> {
        if received.len() > MAX_CODEWORD_LEN {
            return Err(RsError::ReceivedTooLong {
                len: received.len(),
                max: MAX_CODEWORD_LEN,
            });
        }

        let syndrome = compute_syndrome(received, self.parity_symbols);
        trace!("Syndrome bytes: {}", hex::encode(syndrome.as_slice()));
        Ok(syndrome)
    }

    /// True iff any syndrome entry is nonzero
    pub fn has_errors(syndrome: &Syndrome) -> bool {
        syndrome.has_errors()
    }

    /// Compute the syndrome of `received` and report whether it is corrupted
    pub fn check(&self, received: &[u8]) -> RsResult<bool> {
        let corrupted = self.decode_syndrome(received)?.has_errors();
        if corrupted {
            debug!("Corruption detected in {}-byte word", received.len());
        }
        Ok(corrupted)
    }

    /// Detect corruption and hand the word to `corrector` if any is found
    ///
    /// The repaired word is checked again; a corrector that leaves a nonzero
    /// syndrome is reported as [`Uncorrectable::InconsistentLocator`].
    pub fn decode_with<C: ErrorCorrector + ?Sized>(
        &self,
        received: &mut [u8],
        corrector: &C,
    ) -> RsResult<DecodeOutcome> {
        let syndrome = self.decode_syndrome(received)?;
        if !syndrome.has_errors() {
            return Ok(DecodeOutcome::Clean);
        }

        debug!(
            "Corruption detected in {}-byte word, invoking correction stage",
            received.len()
        );
        let symbols = corrector.correct(received, &syndrome, self.parity_symbols)?;

        if self.decode_syndrome(received)?.has_errors() {
            return Err(Uncorrectable::InconsistentLocator.into());
        }

        debug!("Correction stage repaired {} symbols", symbols);
        Ok(DecodeOutcome::Corrected { symbols })
    }
}
