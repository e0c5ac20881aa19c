//! Hand-off to an external error-correction stage
//!
//! The codec only detects corruption. Locating and repairing symbols is left
//! to an [`ErrorCorrector`] supplied by the caller, which receives the
//! received word together with its syndrome.

use super::syndrome::Syndrome;
use thiserror::Error;

/// Reasons a correction stage can refuse a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    /// More symbol errors than ⌊N/2⌋
    #[error("more symbol errors than the correction capacity of {capacity}")]
    TooManyErrors { capacity: usize },

    /// Corrector reported success but the word still has a nonzero syndrome
    #[error("correction left a nonzero syndrome")]
    InconsistentLocator,

    #[error("{0}")]
    Other(String),
}

/// A correction stage for words flagged by the syndrome detector
pub trait ErrorCorrector {
    /// Repair `received` in place and return the number of symbols changed
    ///
    /// Only called with a syndrome that has at least one nonzero entry.
    fn correct(
        &self,
        received: &mut [u8],
        syndrome: &Syndrome,
        parity_symbols: usize,
    ) -> Result<usize, Uncorrectable>;
}

/// Result of a successful decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Syndrome was all zero, nothing to do
    Clean,
    /// The correction stage repaired `symbols` positions
    Corrected { symbols: usize },
}

impl DecodeOutcome {
    pub fn was_corrected(&self) -> bool {
        matches!(self, DecodeOutcome::Corrected { .. })
    }
}
