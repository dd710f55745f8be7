//! Streaming FASTQ validator and statistics engine.
//!
//! - Single-end and paired-end (lock-step, zip-longest pairing).
//! - Plain, `.gz` and `.bz2` input (auto-detect).
//! - Streaming, one 4-line unit per stream at a time (no full-file buffering).
//! - Stops at the first grammar/pairing error; reports partial counts.
//! - Phred quality-encoding inference ("33" / "64").
//! - Read-name normalization across legacy `/1`/`/2`, 454 `.f`/`.r` and
//!   Casava 1.8 naming conventions.
//! - Optional stride to trade error coverage for throughput on huge files.

pub mod check;
pub mod error;
pub mod name;
pub mod options;
pub mod pair;
pub mod record;
pub mod report;
pub mod source;
pub mod stats;
mod util;

pub use crate::check::FastqChecker;
pub use crate::error::{CheckError, OpenError};
pub use crate::options::CheckOptions;
pub use crate::record::{Encoding, Mate, QUALITY_BOUND, Record};
pub use crate::report::Report;
pub use crate::source::{LineSource, RecordGroups};
pub use crate::stats::StreamStats;
