use rscode::reed_solomon::{BatchCodec, DEFAULT_PARITY_SYMBOLS};
use rscode::CodecConfig;

#[test]
fn test_codec_config_default() {
    let config = CodecConfig::default();
    assert_eq!(config.parity_symbols, DEFAULT_PARITY_SYMBOLS);
    assert_eq!(config.threads, 0); // 0 means auto-detect
    assert!(config.parallel);
}

#[test]
fn test_codec_config_parallel_combinations() {
    let combinations = [(0, true), (0, false), (1, true), (1, false), (4, true), (4, false)];

    for (threads, parallel) in combinations.iter() {
        let config = CodecConfig::new(4, *threads, *parallel);
        let effective = config.effective_threads();
        if !*parallel {
            assert_eq!(effective, 1);
        } else if *threads > 0 {
            assert_eq!(effective, *threads);
        } else {
            assert!(effective >= 1);
        }
    }
}

#[test]
fn test_batch_round_trip_with_config_codec() {
    let config = CodecConfig::new(12, 3, true);
    let batch = BatchCodec::from_config(&config).unwrap();
    assert_eq!(batch.codec().parity_symbols(), 12);

    let owned: Vec<Vec<u8>> = (0..64usize)
        .map(|i| (0..i).map(|j| (i * 31 + j) as u8).collect())
        .collect();
    let messages: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();

    let codewords: Vec<Vec<u8>> = batch.encode_batch(&messages)
        .into_iter()
        .map(|r| r.unwrap().into_bytes())
        .collect();
    for (message, codeword) in owned.iter().zip(&codewords) {
        assert_eq!(&codeword[..message.len()], message.as_slice());
    }

    let words: Vec<&[u8]> = codewords.iter().map(Vec::as_slice).collect();
    assert!(batch.check_batch(&words)
        .into_iter()
        .all(|r| r == Ok(false)));
}

#[test]
fn test_batch_codec_reused_for_many_batches() {
    let batch = BatchCodec::from_config(&CodecConfig::new(4, 2, true)).unwrap();
    assert_eq!(batch.thread_count(), 2);

    let words: Vec<&[u8]> = vec![&b"first"[..], &b"second"[..], &b"third"[..]];
    let first = batch.encode_batch(&words);
    for _ in 0..5 {
        assert_eq!(batch.encode_batch(&words), first);
    }
}

#[test]
fn test_batch_codec_rejects_invalid_parity() {
    assert!(BatchCodec::from_config(&CodecConfig::new(0, 2, true)).is_err());
    assert!(BatchCodec::from_config(&CodecConfig::new(255, 2, true)).is_err());
}
