use std::io::Write;

use anyhow::Result;
use sensor_core::constants::TRAILING_PREVIEW_LEN;
use sensor_core::decoder::{decode_stream_with, DecodedStream};
use sensor_core::records::SampleRecord;
use sensor_core::telemetry::{DecodeSnapshot, Stage};
use sensor_core::utils::hex_preview;

use crate::args::Cli;

/// Human summary of one decoded stream.
pub fn write_summary<W: Write>(out: &mut W, label: &str, stream: &DecodedStream, raw: &[u8]) -> Result<()> {
    let counts = stream.counts();
    writeln!(out, "{label}")?;
    writeln!(out, "  inertial:    {}", counts.inertial)?;
    writeln!(out, "  orientation: {}", counts.orientation)?;
    writeln!(out, "  magnetic:    {}", counts.magnetic)?;
    writeln!(out, "  consumed:    {} / {} bytes", stream.consumed, stream.total_len)?;
    writeln!(out, "  stop:        {}", stream.stop)?;
    if stream.trailing_len() > 0 {
        writeln!(
            out,
            "  trailing:    {} bytes not interpretable ({})",
            stream.trailing_len(),
            hex_preview(&raw[stream.consumed..], TRAILING_PREVIEW_LEN)
        )?;
    }
    Ok(())
}

/// Decode `raw` once, writing the requested kinds as JSON lines in arrival
/// order. Each line carries a `"source"` field when `source` is set.
pub fn write_json<W: Write>(out: &mut W, cli: &Cli, source: Option<&str>, raw: &[u8]) -> Result<DecodedStream> {
    let mut failed = None;
    let stream = decode_stream_with(raw, |record| {
        if failed.is_some() || !cli.wants(record.tag()) {
            return;
        }
        if let Err(e) = write_json_line(&mut *out, source, record) {
            failed = Some(e);
        }
    });

    match failed {
        Some(e) => Err(e),
        None => Ok(stream),
    }
}

fn write_json_line<W: Write>(out: &mut W, source: Option<&str>, record: &SampleRecord) -> Result<()> {
    let mut value = serde_json::to_value(record)?;
    if let (Some(source), Some(fields)) = (source, value.as_object_mut()) {
        fields.insert("source".to_string(), source.into());
    }
    serde_json::to_writer(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

/// Telemetry as JSON for json output, as per-stage lines for the summary.
pub fn write_telemetry<W: Write>(out: &mut W, cli: &Cli, snapshot: &DecodeSnapshot) -> Result<()> {
    if cli.format == crate::args::Format::Json {
        writeln!(out, "{}", snapshot.to_json()?)?;
        return Ok(());
    }

    writeln!(out, "telemetry")?;
    writeln!(out, "  records:     {}", snapshot.records_total)?;
    for stage in Stage::ALL {
        writeln!(out, "  {:<12} {:.3} ms", format!("{stage}:"), snapshot.stage_times.get_ms(stage))?;
    }
    writeln!(out, "  elapsed:     {:.3} ms", snapshot.elapsed.as_secs_f64() * 1_000.0)?;
    writeln!(out, "  throughput:  {:.0} B/s", snapshot.throughput_bytes_per_sec)?;
    Ok(())
}
