use crate::error::CheckError;
use crate::record::{Encoding, Record};

/// Running aggregate for one stream (one mate).
///
/// Mutated by the checker once per consumed record, in stream order. Holds
/// scalars only — no per-record history.
#[derive(Debug, Default)]
pub struct StreamStats {
    pub base_count: u64,
    pub read_count: u64,
    pub line_count: u64,
    pub encoding: Option<Encoding>,
    pub error: Option<CheckError>,
}

impl StreamStats {
    /// Count the record and, if still undecided, lock in the encoding the
    /// record is decisive about. Later records never override it.
    pub fn add(&mut self, record: &Record) {
        self.read_count += 1;
        self.base_count += record.base_count();
        self.line_count += record.line_count();
        if self.encoding.is_none() {
            self.encoding = record.encoding();
        }
    }

    /// End-of-stream check: a trailing partial record leaves the line count
    /// off a multiple of 4 even when the stride skipped validating it.
    pub fn finish(&mut self, file: &str) {
        if self.error.is_none() && self.line_count % 4 != 0 {
            self.error = Some(CheckError::IncompleteRecord {
                file: file.to_string(),
            });
        }
    }
}
