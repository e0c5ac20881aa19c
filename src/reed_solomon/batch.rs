//! Batch encoding and checking across a rayon thread pool
//!
//! [`BatchCodec`] pairs one immutable [`ReedSolomon`] codec with a thread pool
//! sized from [`CodecConfig`]. The pool is built once and reused by every
//! batch; results come back in input order.

use super::codec::ReedSolomon;
use super::config::CodecConfig;
use super::encoder::Codeword;
use super::error::RsResult;
use log::{debug, warn};
use rayon::prelude::*;

pub struct BatchCodec {
    codec: ReedSolomon,
    pool: Option<rayon::ThreadPool>,
    parallel: bool,
}

impl BatchCodec {
    /// Build the codec and, for parallel configurations, its thread pool
    pub fn from_config(config: &CodecConfig) -> RsResult<Self> {
        Ok(Self::with_codec(config.build_codec()?, config))
    }

    /// Wrap an existing codec
    ///
    /// If the pool cannot be built, batches fall back to rayon's global pool.
    pub fn with_codec(codec: ReedSolomon, config: &CodecConfig) -> Self {
        if !config.parallel {
            return Self {
                codec,
                pool: None,
                parallel: false,
            };
        }

        let threads = config.effective_threads();
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => {
                debug!("Batch codec using {} threads", threads);
                Some(pool)
            }
            Err(e) => {
                warn!(
                    "Could not build a pool of {} threads ({}), using the global pool",
                    threads, e
                );
                None
            }
        };

        Self {
            codec,
            pool,
            parallel: true,
        }
    }

    pub fn codec(&self) -> &ReedSolomon {
        &self.codec
    }

    /// Threads batches run on; 1 when sequential
    pub fn thread_count(&self) -> usize {
        match (&self.pool, self.parallel) {
            (Some(pool), _) => pool.current_num_threads(),
            (None, true) => rayon::current_num_threads(),
            (None, false) => 1,
        }
    }

    /// Apply `op` to every word, keeping input order
    pub fn map_words<T, F>(&self, words: &[&[u8]], op: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&[u8]) -> T + Sync + Send,
    {
        if !self.parallel || words.len() < 2 {
            return words.iter().map(|&word| op(word)).collect();
        }

        match &self.pool {
            Some(pool) => pool.install(|| words.par_iter().map(|&word| op(word)).collect()),
            None => words.par_iter().map(|&word| op(word)).collect(),
        }
    }

    /// Encode every message
    pub fn encode_batch(&self, messages: &[&[u8]]) -> Vec<RsResult<Codeword>> {
        self.map_words(messages, |message| self.codec.encode(message))
    }

    /// Check every received word for corruption
    pub fn check_batch(&self, received: &[&[u8]]) -> Vec<RsResult<bool>> {
        self.map_words(received, |word| self.codec.check(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parallel_matches_sequential() {
        let owned: Vec<Vec<u8>> = (0..32u8)
            .map(|i| (0..(i as usize * 3)).map(|j| (j as u8) ^ i).collect())
            .collect();
        let messages: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();

        let sequential = BatchCodec::from_config(&CodecConfig::sequential(8)).unwrap();
        let parallel = BatchCodec::from_config(&CodecConfig::new(8, 4, true)).unwrap();
        assert_eq!(sequential.thread_count(), 1);
        assert_eq!(parallel.thread_count(), 4);
        assert_eq!(
            sequential.encode_batch(&messages),
            parallel.encode_batch(&messages)
        );
    }

    #[test]
    fn test_errors_stay_in_position() {
        let batch = BatchCodec::from_config(&CodecConfig::new(250, 2, true)).unwrap();
        let long = [0u8; 10];
        let messages: Vec<&[u8]> = vec![&b"ok"[..], &long[..], &b"fine"[..]];

        let results = batch.encode_batch(&messages);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_check_batch_flags_corrupted_words() {
        let batch = BatchCodec::from_config(&CodecConfig::default()).unwrap();
        let clean = batch.codec().encode(b"clean").unwrap().into_bytes();
        let mut dirty = batch.codec().encode(b"dirty").unwrap().into_bytes();
        dirty[0] ^= 0x01;

        let words: Vec<&[u8]> = vec![clean.as_slice(), dirty.as_slice()];
        assert_eq!(batch.check_batch(&words), vec![Ok(false), Ok(true)]);
    }

    #[test]
    fn test_pool_is_reused_across_batches() {
        let batch = BatchCodec::from_config(&CodecConfig::new(4, 2, true)).unwrap();
        let owned: Vec<Vec<u8>> = (0..64u8).map(|i| vec![i; 8]).collect();
        let words: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();

        // ThreadIds are never recycled, so a fresh pool per call would show
        // more distinct workers than the pool holds
        let mut workers = HashSet::new();
        for _ in 0..10 {
            workers.extend(batch.map_words(&words, |_| std::thread::current().id()));
        }

        assert!(!workers.contains(&std::thread::current().id()));
        assert!(
            workers.len() <= 2,
            "{} distinct worker threads",
            workers.len()
        );
    }
}
