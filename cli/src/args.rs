use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sensor_core::records::SampleTag;

#[derive(Parser, Debug)]
#[command(name = "sensor-decode")]
#[command(author, version, about = "Decode recorded motion-sensor sample streams", long_about = None)]
pub struct Cli {
    /// Recording files, concatenated in the given order.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    pub format: Format,

    /// Only emit these sample kinds (json format). Repeatable.
    #[arg(short, long = "kind", value_enum)]
    pub kinds: Vec<Kind>,

    /// Decode each file as an independent recording, in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: cores - 1).
    #[arg(long, value_name = "N", requires = "parallel")]
    pub workers: Option<usize>,

    /// Also write the assembled (concatenated) stream to this file.
    #[arg(long, value_name = "PATH", conflicts_with = "parallel")]
    pub save_assembled: Option<PathBuf>,

    /// Print decode telemetry after the output.
    #[arg(long)]
    pub telemetry: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Per-kind counts and the stop point.
    Summary,
    /// One JSON object per record, in arrival order.
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Inertial,
    Orientation,
    Magnetic,
}

impl From<Kind> for SampleTag {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Inertial    => SampleTag::Inertial,
            Kind::Orientation => SampleTag::Orientation,
            Kind::Magnetic    => SampleTag::Magnetic,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Empty filter means every kind.
    pub fn wants(&self, tag: SampleTag) -> bool {
        self.kinds.is_empty() || self.kinds.iter().any(|k| SampleTag::from(*k) == tag)
    }
}
