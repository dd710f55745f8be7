/// Knobs for one validation run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Run the full per-record checks only once every `stride` records.
    ///
    /// Counts and quality-encoding inference always cover every record; the
    /// last record of the run is always checked regardless of the stride.
    /// `1` (the default) means validate every record; `0` is treated as `1`.
    pub stride: u64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { stride: 1 }
    }
}

impl CheckOptions {
    pub(crate) fn effective_stride(&self) -> u64 {
        self.stride.max(1)
    }
}
