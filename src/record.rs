use crate::error::CheckError;

/// Allowed quality character codes (printable ASCII, covers Phred+33 and +64).
pub const QUALITY_BOUND: (u8, u8) = (33, 126);
/// Inference thresholds: min code <= 58 reads as Phred+33, max code >= 75 as
/// Phred+64; the window in between is ambiguous.
const ENCODING_SPLIT: (u8, u8) = (58, 75);
/// Valid sequence alphabet after upper-casing; the digits cover legacy
/// 454-platform color-space reads.
const ALPHABET: &[u8] = b"ATCGN0123";

/// One side of a paired-end read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mate {
    One,
    Two,
}

impl Mate {
    pub fn idx(self) -> usize {
        match self {
            Mate::One => 0,
            Mate::Two => 1,
        }
    }
}

/// Detected Phred quality-encoding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Phred33,
    Phred64,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Phred33 => "33",
            Encoding::Phred64 => "64",
        }
    }
}

/// One 4-line FASTQ unit: header, sequence, separator, quality.
///
/// Built from whatever the source yielded; a group of fewer than 4 lines at
/// end of stream still becomes a `Record`, marked incomplete. Quality code
/// bounds are the only derived field worth precomputing (one O(n) scan used
/// by both validation and encoding inference); everything else is O(1) off
/// the stored lines.
#[derive(Debug, Clone)]
pub struct Record {
    index: u64,
    lines: Vec<String>,
    quality_bounds: Option<(u8, u8)>,
}

impl Record {
    pub fn new(index: u64, lines: Vec<String>) -> Self {
        debug_assert!(!lines.is_empty() && lines.len() <= 4);
        let quality_bounds = if lines.len() == 4 {
            lines[3].bytes().fold(None, |acc, b| match acc {
                None => Some((b, b)),
                Some((lo, hi)) => Some((lo.min(b), hi.max(b))),
            })
        } else {
            None
        };
        Self {
            index,
            lines,
            quality_bounds,
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn is_complete(&self) -> bool {
        self.lines.len() == 4
    }

    pub fn line_count(&self) -> u64 {
        self.lines.len() as u64
    }

    /// Sequence length in bases; 0 for an incomplete record.
    pub fn base_count(&self) -> u64 {
        if self.is_complete() {
            self.lines[1].len() as u64
        } else {
            0
        }
    }

    /// Header up to the first tab. Some BGI headers carry tab-separated
    /// trailing fields; Casava 1.8 headers keep their space-separated tail so
    /// the structured pattern can still see the mate number.
    pub fn name_token(&self) -> &str {
        if self.lines.is_empty() {
            return "";
        }
        self.lines[0].split('\t').next().unwrap_or("")
    }

    /// Observed (min, max) quality codes, `None` when incomplete or the
    /// quality line is empty.
    pub fn quality_bounds(&self) -> Option<(u8, u8)> {
        self.quality_bounds
    }

    /// Encoding this record alone is decisive about, if any.
    pub fn encoding(&self) -> Option<Encoding> {
        let (min, max) = self.quality_bounds?;
        if min <= ENCODING_SPLIT.0 {
            Some(Encoding::Phred33)
        } else if max >= ENCODING_SPLIT.1 {
            Some(Encoding::Phred64)
        } else {
            None
        }
    }

    /// Apply the grammar rules in fixed order; the first violated rule wins.
    /// `file` is only used to attribute an incomplete-record error.
    pub fn validate(&self, file: &str) -> Option<CheckError> {
        if !self.is_complete() {
            return Some(CheckError::IncompleteRecord {
                file: file.to_string(),
            });
        }
        let base_line = self.index * 4;

        let header = &self.lines[0];
        if !header.starts_with('@') {
            return Some(CheckError::NotExpectedPrefix {
                line: base_line,
                content: header.clone(),
                expected: '@',
            });
        }

        let seq = &self.lines[1];
        if !seq
            .bytes()
            .all(|b| ALPHABET.contains(&b.to_ascii_uppercase()))
        {
            return Some(CheckError::InvalidBase {
                line: base_line + 1,
                content: seq.clone(),
            });
        }

        let plus = &self.lines[2];
        if !plus.starts_with('+') {
            return Some(CheckError::NotExpectedPrefix {
                line: base_line + 2,
                content: plus.clone(),
                expected: '+',
            });
        }

        let qual = &self.lines[3];
        if qual.len() != seq.len() {
            return Some(CheckError::LineLengthMismatch {
                len_quality: qual.len(),
                len_sequence: seq.len(),
                line: base_line + 3,
            });
        }

        if let Some((min, max)) = self.quality_bounds {
            if min < QUALITY_BOUND.0 || max > QUALITY_BOUND.1 {
                return Some(CheckError::QualityOutOfRange {
                    min,
                    max,
                    bound: QUALITY_BOUND,
                    line: base_line + 3,
                });
            }
        }

        None
    }
}
