//! One decoder shared by many workers.

use crate::common::s3_event_notification;
use qp_decoder::{DecodeStats, MessageDecoder};
use qp_types::DecoderConfig;
use std::sync::Arc;

#[test]
fn test_shared_decoder_across_threads() {
    let config = DecoderConfig::new("s3::ObjectCreated").with_path_filter("*.csv");
    let decoder = Arc::new(MessageDecoder::new(&config).unwrap());
    let stats = Arc::new(DecodeStats::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let decoder = Arc::clone(&decoder);
            let stats = Arc::clone(&stats);
            std::thread::spawn(move || {
                for i in 0..100 {
                    let key = if i % 4 == 0 {
                        format!("w{worker}/{i}.json")
                    } else {
                        format!("w{worker}/{i}.csv")
                    };
                    let payload = if i % 10 == 0 {
                        "{ truncated".to_string()
                    } else {
                        s3_event_notification("bucket", &key)
                    };

                    let outcome = decoder.resolve(&payload);
                    if let Ok(resolved) = &outcome {
                        assert_eq!(resolved.path(), format!("s3://bucket/{key}"));
                    }
                    stats.record(&outcome);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Per worker: i % 10 == 0 fails (10), remaining i % 4 == 0 skipped (20)
    let snapshot = stats.snapshot();
    assert_eq!(snapshot.total(), 800);
    assert_eq!(snapshot.failed, 80);
    assert_eq!(snapshot.skipped, 160);
    assert_eq!(snapshot.accepted, 560);
}
