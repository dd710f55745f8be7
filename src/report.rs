use serde::Serialize;

/// Final validation report, flat with fixed keys.
///
/// `pair_error` and the `mate2_*` fields are present only for paired runs;
/// error fields hold the display string of the first error seen on that
/// stream (empty when clean), counts cover everything accumulated up to and
/// including the record where the run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_base_count: u64,
    pub total_read_count: u64,
    pub quality_encoding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_error: Option<String>,
    pub mate1_error: String,
    pub mate1_base_count: u64,
    pub mate1_read_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mate2_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mate2_base_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mate2_read_count: Option<u64>,
}

impl Report {
    pub fn has_error(&self) -> bool {
        !self.mate1_error.is_empty()
            || self.mate2_error.as_deref().is_some_and(|e| !e.is_empty())
            || self.pair_error.as_deref().is_some_and(|e| !e.is_empty())
    }
}
