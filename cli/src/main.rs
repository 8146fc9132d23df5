//! sensor-decode
//!
//! Thin command-line entry point over sensor-core.

mod args;
mod report;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use sensor_core::assembly::{assemble, InputSource};
use sensor_core::decoder::{decode_stream, DecodedStream};
use sensor_core::parallelism::{decode_recordings_with, ParallelismProfile};
use sensor_core::telemetry::{DecodeCounters, DecodeSnapshot, Stage, TelemetryTimer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Format};

fn init_logging(cli: &Cli) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::builder().from_env_lossy()
    } else {
        EnvFilter::builder().parse_lossy(format!("sensor_core={0},sensor_decode={0}", cli.log_level()))
    };

    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Read one file as a standalone recording.
fn read_recording(path: &Path) -> Result<Bytes> {
    assemble([InputSource::file(path)])
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Concatenate all files into one stream and decode it.
fn run_concatenated(cli: &Cli) -> Result<()> {
    let mut timer = TelemetryTimer::new();
    let mut counters = DecodeCounters::default();

    let sources = cli.files.iter().map(|p| InputSource::file(p));
    let raw = timer
        .time(Stage::Assemble, || assemble(sources))
        .context("failed to assemble recording")?;
    counters.sources = cli.files.len() as u64;
    counters.bytes_assembled = raw.len() as u64;
    info!(files = cli.files.len(), bytes = raw.len(), "assembled recording");

    if let Some(path) = &cli.save_assembled {
        std::fs::write(path, &raw)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "saved assembled stream");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stream = match cli.format {
        Format::Summary => {
            let stream = timer.time(Stage::Decode, || decode_stream(&raw));
            report::write_summary(&mut out, "recording", &stream, &raw)?;
            stream
        }
        Format::Json => {
            let stream = timer.time(Stage::Decode, || report::write_json(&mut out, cli, None, &raw))?;
            if !stream.is_clean() {
                warn!(trailing = stream.trailing_len(), reason = %stream.stop, "decode stopped early");
            }
            stream
        }
    };
    counters.add_stream(&stream);
    timer.finish();

    if cli.telemetry {
        report::write_telemetry(&mut out, cli, &DecodeSnapshot::from(&counters, &timer))?;
    }
    out.flush()?;
    Ok(())
}

/// Decode each file as its own recording on a worker pool.
fn run_parallel(cli: &Cli) -> Result<()> {
    let mut timer = TelemetryTimer::new();
    let mut counters = DecodeCounters::default();

    let recordings = timer.time(Stage::Read, || {
        cli.files.iter().map(|p| read_recording(p)).collect::<Result<Vec<_>>>()
    })?;
    for r in &recordings {
        counters.add_source(r.len());
    }

    let mut profile = ParallelismProfile::dynamic();
    if let Some(workers) = cli.workers {
        profile.worker_count = workers;
    }

    let labels: Vec<String> = cli.files.iter().map(|p| p.display().to_string()).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        Format::Summary => {
            let streams = timer
                .time(Stage::Decode, || decode_recordings_with(recordings.clone(), &profile, |_, raw| decode_stream(raw)))
                .context("batch decode failed")?;
            for ((label, stream), raw) in labels.iter().zip(&streams).zip(&recordings) {
                report::write_summary(&mut out, label, stream, raw)?;
                counters.add_stream(stream);
            }
        }
        Format::Json => {
            // Workers render into their own buffers; output keeps file order.
            let rendered = timer
                .time(Stage::Decode, || {
                    decode_recordings_with(recordings, &profile, |index, raw| {
                        let mut lines = Vec::new();
                        report::write_json(&mut lines, cli, Some(labels[index].as_str()), raw)
                            .map(|stream| (stream, lines))
                    })
                })
                .context("batch decode failed")?;
            for result in rendered {
                let (stream, lines): (DecodedStream, Vec<u8>) = result?;
                out.write_all(&lines)?;
                counters.add_stream(&stream);
            }
        }
    }
    timer.finish();

    if cli.telemetry {
        report::write_telemetry(&mut out, cli, &DecodeSnapshot::from(&counters, &timer))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    if cli.parallel {
        run_parallel(&cli)
    } else {
        run_concatenated(&cli)
    }
}
