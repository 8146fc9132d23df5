// Stream assembler coverage:

// * byte-exact concatenation across memory, file and reader sources
// * associativity of concatenation
// * all-or-nothing failure with `SourceUnavailable`

#[cfg(test)]
mod tests {
    use std::io::{self, Read};
    use std::path::PathBuf;

    use sensor_core::assembly::{assemble, concat_chunks, AssembleError, InputSource};
    use sensor_core::records::{encode_records, MagneticSample, SampleRecord};
    use sensor_core::types::StreamError;
    use sensor_core::decode_sources;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sensor_core_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Reader that yields some bytes then fails.
    struct FailingReader {
        sent: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.sent {
                self.sent = true;
                buf[0] = 0x00;
                return Ok(1);
            }
            Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
        }
    }

// # 1. Basic concatenation

    #[test]
    fn two_memory_sources_concatenate() {
        let out = assemble(vec![
            InputSource::memory(vec![1u8, 2, 3]),
            InputSource::memory(vec![4u8, 5]),
        ])
        .unwrap();
        assert_eq!(&out[..], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_sources_is_empty() {
        let out = assemble(Vec::<InputSource>::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn empty_sources_are_empty() {
        let out = assemble(vec![InputSource::memory(Vec::new()), InputSource::memory(Vec::new())]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn single_memory_source_is_returned_as_is() {
        let out = assemble(vec![InputSource::from(&b"abc"[..])]).unwrap();
        assert_eq!(&out[..], b"abc");
    }

// # 2. Mixed source kinds keep order

    #[test]
    fn file_memory_and_reader_keep_order() {
        let path = temp_file("mixed.bin", b"AAA");
        let out = assemble(vec![
            InputSource::file(&path),
            InputSource::memory(b"BB".to_vec()),
            InputSource::reader(io::Cursor::new(b"C".to_vec())),
        ])
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(&out[..], b"AAABBC");
    }

// # 3. Associativity: [A,B,C] == [A,B] ++ C

    #[test]
    fn concatenation_is_associative() {
        let a = vec![0u8, 1, 2];
        let b = vec![3u8];
        let c = vec![4u8, 5, 6, 7];

        let abc = assemble(vec![
            InputSource::memory(a.clone()),
            InputSource::memory(b.clone()),
            InputSource::memory(c.clone()),
        ])
        .unwrap();

        let ab = assemble(vec![InputSource::memory(a), InputSource::memory(b)]).unwrap();
        let ab_c = assemble(vec![InputSource::memory(ab), InputSource::memory(c)]).unwrap();

        assert_eq!(abc, ab_c);
        assert_eq!(abc, concat_chunks(&[vec![0u8, 1, 2], vec![3], vec![4, 5, 6, 7]]));
    }

// # 4. A record split across file boundaries decodes

    #[test]
    fn record_split_across_sources_decodes() {
        let records = vec![
            SampleRecord::Magnetic(MagneticSample { timestamp: 1, raw: [1, 2, 3] }),
            SampleRecord::Magnetic(MagneticSample { timestamp: 2, raw: [4, 5, 6] }),
        ];
        let wire = encode_records(&records);
        let (head, tail) = wire.split_at(15);

        let out = decode_sources(vec![
            InputSource::memory(head.to_vec()),
            InputSource::memory(tail.to_vec()),
        ])
        .unwrap();
        assert_eq!(out.magnetic.len(), 2);
        assert!(out.is_clean());
    }

// # 5. Failures are all-or-nothing

    #[test]
    fn missing_file_is_source_unavailable() {
        let missing = std::env::temp_dir().join("sensor_core_does_not_exist.bin");
        let err = assemble(vec![
            InputSource::memory(vec![0u8; 4]),
            InputSource::file(&missing),
        ])
        .unwrap_err();

        match err {
            AssembleError::SourceUnavailable { index, ref origin, ref source } => {
                assert_eq!(index, 1);
                assert!(origin.contains("sensor_core_does_not_exist"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
        }
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn failing_reader_discards_partial_output() {
        let result = assemble(vec![
            InputSource::memory(vec![9u8; 8]),
            InputSource::reader(FailingReader { sent: false }),
            InputSource::memory(vec![7u8; 8]),
        ]);
        assert!(matches!(result, Err(AssembleError::SourceUnavailable { index: 1, .. })));
    }

    #[test]
    fn decode_sources_propagates_unavailable_source() {
        let result = decode_sources(vec![InputSource::reader(FailingReader { sent: false })]);
        assert!(matches!(result, Err(StreamError::Assemble(AssembleError::SourceUnavailable { index: 0, .. }))));
    }
}
