use crate::error::{CheckError, OpenError};
use crate::util::{looks_like_bzip2, looks_like_gzip, open_file};

#[cfg(feature = "bz2")]
use bzip2::read::MultiBzDecoder;
#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy, forward-only line stream over plain, `.gz` or `.bz2` text.
///
/// Lines come back newline-stripped. Decoder failures mid-stream (truncated
/// or corrupt container) surface as [`CheckError::SourceReadFailure`]
/// attributed to this file; trailing garbage after a complete gzip stream is
/// treated as end of input by `MultiGzDecoder` and is not a failure.
pub struct LineSource {
    file: String,
    rdr: Box<dyn BufRead + Send>,
    line_count: u64,
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("file", &self.file)
            .field("line_count", &self.line_count)
            .finish_non_exhaustive()
    }
}

impl LineSource {
    /// Open from a file path. Compression is auto-detected by extension or
    /// magic bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OpenError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(OpenError::NotFound(path.to_path_buf()));
        }
        let f = open_file(path).map_err(|e| OpenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path.extension().and_then(|s| s.to_str());
        let is_gz = ext == Some("gz") || looks_like_gzip(&f).unwrap_or(false);
        let is_bz2 = !is_gz && (ext == Some("bz2") || looks_like_bzip2(&f).unwrap_or(false));

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                Box::new(BufReader::with_capacity(256 * 1024, MultiGzDecoder::new(f)))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(OpenError::UnsupportedCompression(path.to_path_buf()));
            }
        } else if is_bz2 {
            #[cfg(feature = "bz2")]
            {
                Box::new(BufReader::with_capacity(256 * 1024, MultiBzDecoder::new(f)))
            }
            #[cfg(not(feature = "bz2"))]
            {
                return Err(OpenError::UnsupportedCompression(path.to_path_buf()));
            }
        } else {
            Box::new(BufReader::with_capacity(256 * 1024, f))
        };

        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            file,
            rdr,
            line_count: 0,
        })
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory test input, etc.).
    /// `label` stands in for the file name in error attribution.
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, label: &str) -> Self {
        Self {
            file: label.to_string(),
            rdr: Box::new(reader),
            line_count: 0,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// Read one line into `buf` (cleared first, `\n`/`\r\n` stripped).
    /// Returns the number of raw bytes consumed, 0 at end of input.
    pub fn read_line(&mut self, buf: &mut String) -> Result<usize, CheckError> {
        buf.clear();
        let n = self.rdr.read_line(buf).map_err(|e| {
            log::error!("read failure in {}: {e}", self.file);
            CheckError::SourceReadFailure {
                file: self.file.clone(),
            }
        })?;
        if n > 0 {
            self.line_count += 1;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }
}

/// Groups a [`LineSource`] into the 4-line units the checker consumes.
///
/// The final group may be short (1..=3 lines) when the file does not hold an
/// integral multiple of 4 lines; the record built from it is malformed.
#[derive(Debug)]
pub struct RecordGroups {
    src: LineSource,
}

impl RecordGroups {
    pub fn new(src: LineSource) -> Self {
        Self { src }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OpenError> {
        LineSource::open(path).map(Self::new)
    }

    pub fn file(&self) -> &str {
        self.src.file()
    }

    /// Next group of up to 4 lines, `None` once the source is exhausted.
    pub fn next_group(&mut self) -> Result<Option<Vec<String>>, CheckError> {
        let mut lines = Vec::with_capacity(4);
        for _ in 0..4 {
            let mut buf = String::with_capacity(128);
            if self.src.read_line(&mut buf)? == 0 {
                break;
            }
            lines.push(buf);
        }
        if lines.is_empty() {
            Ok(None)
        } else {
            Ok(Some(lines))
        }
    }
}
