#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use sensor_core::decoder::{decode_stream, StopReason};
    use sensor_core::parallelism::{
        decode_recordings, decode_recordings_with, decode_recordings_with_telemetry, ParallelismProfile,
    };
    use sensor_core::records::{encode_records, MagneticSample, SampleRecord};
    use sensor_core::types::StreamError;

    fn recording(n: u32, tail: &[u8]) -> Bytes {
        let records: Vec<SampleRecord> = (0..n)
            .map(|i| SampleRecord::Magnetic(MagneticSample { timestamp: i, raw: [n as i16, 0, 0] }))
            .collect();
        let mut wire = encode_records(&records);
        wire.extend_from_slice(tail);
        Bytes::from(wire)
    }

    #[test]
    fn results_keep_input_order() {
        let recordings: Vec<Bytes> = (0..32u32).map(|n| recording(n, &[])).collect();
        let profile = ParallelismProfile { worker_count: 4, inflight: 2 };

        let out = decode_recordings(recordings.clone(), &profile).unwrap();
        assert_eq!(out.len(), 32);
        for (i, (stream, bytes)) in out.iter().zip(&recordings).enumerate() {
            assert_eq!(stream.magnetic.len(), i);
            assert_eq!(*stream, decode_stream(bytes));
        }
    }

    #[test]
    fn recordings_are_not_concatenated() {
        // A truncated tail in the first recording must not swallow the second.
        let first = recording(2, &[0x02, 0x01]);
        let second = recording(3, &[]);

        let out = decode_recordings(vec![first, second], &ParallelismProfile::single_threaded()).unwrap();
        assert_eq!(out[0].magnetic.len(), 2);
        assert!(matches!(out[0].stop, StopReason::TruncatedPayload { offset: 22, .. }));
        assert_eq!(out[1].magnetic.len(), 3);
        assert!(out[1].is_clean());
    }

    #[test]
    fn custom_job_sees_index_and_keeps_order() {
        let recordings: Vec<Bytes> = (0..12u32).map(|n| recording(n, &[])).collect();
        let profile = ParallelismProfile { worker_count: 3, inflight: 1 };

        let out = decode_recordings_with(recordings, &profile, |index, bytes| {
            (index, decode_stream(bytes).magnetic.len(), bytes.len())
        })
        .unwrap();

        for (i, (index, count, len)) in out.into_iter().enumerate() {
            assert_eq!(index, i);
            assert_eq!(count, i);
            assert_eq!(len, i * 11);
        }
    }

    #[test]
    fn empty_batch_is_empty() {
        let out = decode_recordings(Vec::new(), &ParallelismProfile::dynamic()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_profile_is_rejected() {
        let profile = ParallelismProfile { worker_count: 0, inflight: 1 };
        assert!(matches!(
            decode_recordings(vec![Bytes::new()], &profile),
            Err(StreamError::Validation(_))
        ));
    }

    #[test]
    fn dynamic_profile_has_workers() {
        let profile = ParallelismProfile::dynamic();
        assert!(profile.worker_count >= 1);
        assert!(profile.inflight >= 1);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn batch_telemetry_merges_counts() {
        let recordings = vec![recording(4, &[0xEE]), recording(6, &[])];
        let (streams, snapshot) =
            decode_recordings_with_telemetry(recordings, &ParallelismProfile { worker_count: 2, inflight: 2 })
                .unwrap();

        assert_eq!(streams.len(), 2);
        assert_eq!(snapshot.counters.sources, 2);
        assert_eq!(snapshot.counters.streams, 2);
        assert_eq!(snapshot.counters.streams_stopped_early, 1);
        assert_eq!(snapshot.counters.records_magnetic, 10);
        assert_eq!(snapshot.counters.bytes_trailing, 1);
        assert_eq!(snapshot.counters.bytes_consumed, 10 * 11);
        assert!(snapshot.sanity_check());
    }
}
