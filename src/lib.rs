pub mod reed_solomon;

pub use reed_solomon::{
    CodecConfig, Codeword, DecodeOutcome, ErrorCorrector, ReedSolomon, RsError, RsResult,
    Syndrome, Uncorrectable,
};
