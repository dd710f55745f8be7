use crate::error::{CheckError, OpenError};
use crate::options::CheckOptions;
use crate::pair::RecordPair;
use crate::record::{Encoding, Mate, Record};
use crate::report::Report;
use crate::source::{LineSource, RecordGroups};
use crate::stats::StreamStats;

use std::path::Path;

/// Drives one validation run over one or two FASTQ streams.
///
/// Paired streams advance in lock-step, one 4-line group each per iteration
/// (zip-longest: a missing side is `None`, which is itself the count-mismatch
/// error at that index). Counts accumulate for every record; the grammar and
/// pairing checks run on stride boundaries and always on the final record.
/// The first error ends the run — remaining input is never consumed.
#[derive(Debug)]
pub struct FastqChecker {
    groups1: RecordGroups,
    groups2: Option<RecordGroups>,
    files: [String; 2],
    opts: CheckOptions,
    stats: [StreamStats; 2],
    pair_error: Option<CheckError>,
}

impl FastqChecker {
    /// Open one or two FASTQ files (plain/.gz/.bz2 auto-detected).
    pub fn open<P: AsRef<Path>>(
        fastq1: P,
        fastq2: Option<P>,
        opts: CheckOptions,
    ) -> Result<Self, OpenError> {
        let groups1 = RecordGroups::open(fastq1)?;
        let groups2 = fastq2.map(RecordGroups::open).transpose()?;
        Ok(Self::from_groups(groups1, groups2, opts))
    }

    /// Check pre-built sources (stdin, in-memory test input, etc.).
    pub fn from_sources(src1: LineSource, src2: Option<LineSource>, opts: CheckOptions) -> Self {
        Self::from_groups(
            RecordGroups::new(src1),
            src2.map(RecordGroups::new),
            opts,
        )
    }

    fn from_groups(
        groups1: RecordGroups,
        groups2: Option<RecordGroups>,
        opts: CheckOptions,
    ) -> Self {
        let files = [
            groups1.file().to_string(),
            groups2.as_ref().map(|g| g.file().to_string()).unwrap_or_default(),
        ];
        Self {
            groups1,
            groups2,
            files,
            opts,
            stats: [StreamStats::default(), StreamStats::default()],
            pair_error: None,
        }
    }

    /// Consume the streams and assemble the final report.
    pub fn run(mut self) -> Report {
        let paired = self.groups2.is_some();
        let stride = self.opts.effective_stride();
        let mut index: u64 = 0;
        // Most recent record(s) not yet validated because of the stride;
        // checked after exhaustion so the final record never slips through.
        let mut pending: Option<(u64, Option<Record>, Option<Record>)> = None;

        loop {
            let group1 = match self.groups1.next_group() {
                Ok(g) => g,
                Err(e) => {
                    self.stats[0].error = Some(e);
                    pending = None;
                    break;
                }
            };
            let group2 = match self.groups2.as_mut() {
                Some(groups) => match groups.next_group() {
                    Ok(g) => g,
                    Err(e) => {
                        self.stats[1].error = Some(e);
                        pending = None;
                        break;
                    }
                },
                None => None,
            };
            if group1.is_none() && group2.is_none() {
                break;
            }

            let rec1 = group1.map(|lines| Record::new(index, lines));
            let rec2 = group2.map(|lines| Record::new(index, lines));
            if let Some(rec) = &rec1 {
                self.stats[0].add(rec);
            }
            if let Some(rec) = &rec2 {
                self.stats[1].add(rec);
            }

            if (index + 1) % stride == 0 {
                pending = None;
                if self.check_at(index, rec1.as_ref(), rec2.as_ref(), paired) {
                    break;
                }
            } else {
                pending = Some((index, rec1, rec2));
            }
            index += 1;
        }

        if let Some((idx, rec1, rec2)) = pending.take() {
            self.check_at(idx, rec1.as_ref(), rec2.as_ref(), paired);
        }

        self.stats[0].finish(&self.files[0]);
        if paired {
            self.stats[1].finish(&self.files[1]);
        }
        self.into_report(paired)
    }

    /// Run the error checks for one index: pair level first, then each mate.
    /// Returns true when an error was recorded.
    fn check_at(
        &mut self,
        index: u64,
        rec1: Option<&Record>,
        rec2: Option<&Record>,
        paired: bool,
    ) -> bool {
        if paired {
            let pair = RecordPair::new(index, rec1, rec2);
            if let Some(e) = pair.pair_error(&self.files[0], &self.files[1]) {
                self.pair_error = Some(e);
                return true;
            }
        }
        for (mate, rec) in [(Mate::One, rec1), (Mate::Two, rec2)] {
            if let Some(rec) = rec {
                if let Some(e) = rec.validate(&self.files[mate.idx()]) {
                    self.stats[mate.idx()].error = Some(e);
                    return true;
                }
            }
        }
        false
    }

    fn into_report(self, paired: bool) -> Report {
        fn err_string(e: &Option<CheckError>) -> String {
            e.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        let [stats1, stats2] = &self.stats;
        let encoding = stats1.encoding.or(stats2.encoding);
        Report {
            total_base_count: stats1.base_count + stats2.base_count,
            total_read_count: stats1.read_count + stats2.read_count,
            quality_encoding: encoding.map_or("", Encoding::as_str).to_string(),
            pair_error: paired.then(|| err_string(&self.pair_error)),
            mate1_error: err_string(&stats1.error),
            mate1_base_count: stats1.base_count,
            mate1_read_count: stats1.read_count,
            mate2_error: paired.then(|| err_string(&stats2.error)),
            mate2_base_count: paired.then_some(stats2.base_count),
            mate2_read_count: paired.then_some(stats2.read_count),
        }
    }
}
