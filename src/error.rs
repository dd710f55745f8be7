use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation error captured into the [`Report`](crate::report::Report).
///
/// These never abort the run as a panic or a fatal `Err`: the checker stops
/// consuming input at the first one and stores its display string in the
/// error slot of the mate (or the pair) it belongs to. `line` fields are
/// absolute 0-based line indices into the file; `index` fields are 0-based
/// record numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("failed to read file: {file}")]
    SourceReadFailure { file: String },
    #[error("the file {file} does not have an integral multiple of 4 lines")]
    IncompleteRecord { file: String },
    #[error("the [{line}] line:({content}) does not start with '{expected}'")]
    NotExpectedPrefix {
        line: u64,
        content: String,
        expected: char,
    },
    #[error("the [{line}] line:({content}) has a wrong base")]
    InvalidBase { line: u64, content: String },
    #[error(
        "the quality length {len_quality} is not equal to the sequence length {len_sequence} at line [{line}]"
    )]
    LineLengthMismatch {
        len_quality: usize,
        len_sequence: usize,
        line: u64,
    },
    #[error("the ord of quality ({min}-{max}) is out of {bound:?} at line [{line}]")]
    QualityOutOfRange {
        min: u8,
        max: u8,
        bound: (u8, u8),
        line: u64,
    },
    #[error("read1 name ({name1}) is not the same as read2 name ({name2}) at record [{index}]")]
    NameMismatch {
        name1: String,
        name2: String,
        index: u64,
    },
    #[error("read1 number is not equal to read2 number at record [{index}]")]
    ReadCountMismatch { index: u64 },
}

/// Fatal construction error: the checker could not even start.
///
/// Everything that happens after a successful open is reported through
/// [`CheckError`] instead.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("cannot find file {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("support for {} was not compiled in (missing cargo feature)", .0.display())]
    UnsupportedCompression(PathBuf),
}
