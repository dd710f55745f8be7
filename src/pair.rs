use crate::error::CheckError;
use crate::name::normalize_read_name;
use crate::record::Record;

/// The two records sharing index `i` across a lock-step paired read.
///
/// A missing side means one stream ran out before the other — the pair is in
/// count-mismatch state at exactly that index.
pub struct RecordPair<'a> {
    index: u64,
    mate1: Option<&'a Record>,
    mate2: Option<&'a Record>,
}

impl<'a> RecordPair<'a> {
    pub fn new(index: u64, mate1: Option<&'a Record>, mate2: Option<&'a Record>) -> Self {
        Self {
            index,
            mate1,
            mate2,
        }
    }

    /// Pairing-level error: missing mate or normalized-name mismatch.
    ///
    /// `file1`/`file2` only feed the unrecognized-name diagnostic. An
    /// incomplete record on either side is that mate's own error and is not
    /// reported again here.
    pub fn pair_error(&self, file1: &str, file2: &str) -> Option<CheckError> {
        let (r1, r2) = match (self.mate1, self.mate2) {
            (Some(r1), Some(r2)) => (r1, r2),
            _ => return Some(CheckError::ReadCountMismatch { index: self.index }),
        };
        if !r1.is_complete() || !r2.is_complete() {
            return None;
        }
        let name1 = r1.name_token();
        let name2 = r2.name_token();
        if normalize_read_name(name1, file1) != normalize_read_name(name2, file2) {
            return Some(CheckError::NameMismatch {
                name1: name1.to_string(),
                name2: name2.to_string(),
                index: self.index,
            });
        }
        None
    }
}
