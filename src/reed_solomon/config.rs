//! Configuration for codec construction and batch processing

use super::codec::ReedSolomon;
use super::error::RsResult;

/// Default parity symbol count; corrects up to two symbol errors
pub const DEFAULT_PARITY_SYMBOLS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Parity symbols appended per message (N)
    pub parity_symbols: usize,
    /// Number of threads for batch operations (0 = auto-detect)
    pub threads: usize,
    /// Whether batch operations run in parallel (false = calling thread only)
    pub parallel: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            parity_symbols: DEFAULT_PARITY_SYMBOLS,
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl CodecConfig {
    pub fn new(parity_symbols: usize, threads: usize, parallel: bool) -> Self {
        Self {
            parity_symbols,
            threads,
            parallel,
        }
    }

    /// Single-threaded configuration
    pub fn sequential(parity_symbols: usize) -> Self {
        Self::new(parity_symbols, 1, false)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }

    pub fn build_codec(&self) -> RsResult<ReedSolomon> {
        ReedSolomon::new(self.parity_symbols)
    }
}
