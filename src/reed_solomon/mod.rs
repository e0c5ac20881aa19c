//! Reed-Solomon Error Detection Module
//!
//! Systematic Reed-Solomon encoding over GF(2^8) together with a syndrome-based
//! corruption detector. A codeword is the message followed by N parity bytes,
//! with at most 255 bytes in total.
//!
//! Repairing a corrupted word is delegated to a caller-supplied
//! [`ErrorCorrector`]; this module only decides whether repair is needed.

pub mod batch;
pub mod codec;
pub mod config;
pub mod correction;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod generator;
pub mod poly;
pub mod syndrome;

pub use batch::BatchCodec;
pub use codec::ReedSolomon;
pub use config::{CodecConfig, DEFAULT_PARITY_SYMBOLS};
pub use correction::{DecodeOutcome, ErrorCorrector, Uncorrectable};
pub use encoder::{Codeword, Parity};
pub use error::{RsError, RsResult};
pub use galois::{gf_exp, gf_mul};
pub use generator::GeneratorPolynomial;
pub use poly::{Polynomial, POLY_CAPACITY};
pub use syndrome::{has_errors, Syndrome};

/// Longest codeword GF(256) supports
pub const MAX_CODEWORD_LEN: usize = 255;

/// Largest parity symbol count; leaves room for a one-byte message
pub const MAX_PARITY_SYMBOLS: usize = MAX_CODEWORD_LEN - 1;
