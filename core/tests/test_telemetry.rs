#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sensor_core::assembly::InputSource;
    use sensor_core::decode_with_telemetry;
    use sensor_core::decoder::decode_stream;
    use sensor_core::records::{encode_records, InertialSample, SampleRecord};
    use sensor_core::telemetry::{DecodeCounters, DecodeSnapshot, Stage, StageTimes, TelemetryTimer};

    fn wire(n: u32) -> Vec<u8> {
        let records: Vec<SampleRecord> = (0..n)
            .map(|i| SampleRecord::Inertial(InertialSample { timestamp: i, gyro_raw: [0; 3], acc_raw: [0; 3] }))
            .collect();
        encode_records(&records)
    }

    #[test]
    fn counters_track_stream() {
        let mut bytes = wire(3);
        bytes.push(0x09);
        let stream = decode_stream(&bytes);

        let mut counters = DecodeCounters::default();
        counters.add_source(bytes.len());
        counters.add_stream(&stream);

        assert_eq!(counters.records_inertial, 3);
        assert_eq!(counters.records_total(), 3);
        assert_eq!(counters.bytes_consumed, 51);
        assert_eq!(counters.bytes_trailing, 1);
        assert_eq!(counters.streams_stopped_early, 1);
    }

    #[test]
    fn counters_merge_and_add_assign_agree() {
        let mut a = DecodeCounters { sources: 1, records_magnetic: 2, ..Default::default() };
        let b = DecodeCounters { sources: 2, records_magnetic: 5, bytes_consumed: 55, ..Default::default() };

        let mut merged = a.clone();
        merged.merge(&b);
        a += b;

        assert_eq!(a, merged);
        assert_eq!(a.sources, 3);
        assert_eq!(a.records_magnetic, 7);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Decode, Duration::from_millis(2));
        times.add(Stage::Decode, Duration::from_millis(3));
        times.add(Stage::Assemble, Duration::from_millis(1));

        assert_eq!(times.get(Stage::Decode), Duration::from_millis(5));
        assert_eq!(times.get(Stage::Read), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_millis(6));
        assert!((times.get_ms(Stage::Decode) - 5.0).abs() < 1e-9);
        assert_eq!(times.get_ms(Stage::Read), 0.0);
        assert_eq!(Stage::Assemble.to_string(), "assemble");
        assert_eq!(Stage::ALL.len(), 3);
    }

    #[test]
    fn timer_charges_closure_to_stage() {
        let mut timer = TelemetryTimer::new();
        let v = timer.time(Stage::Decode, || {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        timer.finish();

        assert_eq!(v, 7);
        assert!(timer.stage_times.get(Stage::Decode) >= Duration::from_millis(2));
        assert!(timer.stage_times.total() <= timer.elapsed());
    }

    #[test]
    fn decode_with_telemetry_reports_run() {
        let (stream, snapshot) = decode_with_telemetry(vec![
            InputSource::memory(wire(2)),
            InputSource::memory(wire(3)),
        ])
        .unwrap();

        assert_eq!(stream.inertial.len(), 5);
        assert_eq!(snapshot.records_total, 5);
        assert_eq!(snapshot.counters.sources, 2);
        assert_eq!(snapshot.counters.bytes_assembled, 5 * 17);
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut counters = DecodeCounters::default();
        counters.add_source(17);
        counters.records_inertial = 1;
        counters.bytes_consumed = 17;
        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Decode, Duration::from_micros(1));
        std::thread::sleep(Duration::from_millis(1));
        timer.finish();

        let snapshot = DecodeSnapshot::from(&counters, &timer);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"records_total\": 1"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["counters"]["records_inertial"], 1);
        assert_eq!(value["counters"]["bytes_consumed"], 17);
    }
}
