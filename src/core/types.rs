//! Network request records shared by the audits and the chain analyzer

use serde::{Deserialize, Serialize};

/// Scheme of inline `data:` resources, whose bytes are already counted in
/// the document that embeds them.
pub const DATA_SCHEME: &str = "data";

/// One observed network fetch.
///
/// Times are seconds on the capture's monotonic clock; `transfer_size` is
/// only meaningful once `finished` is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestRecord {
    pub request_id: Option<String>,
    pub url: String,
    pub scheme: String,
    pub finished: bool,
    /// Bytes on the wire, headers included
    pub transfer_size: u64,
    pub start_time: f64,
    pub end_time: f64,
    pub resource_type: Option<String>,
    pub timing: Option<RequestTiming>,
}

/// Sub-timings in milliseconds, relative to the request's own start
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestTiming {
    pub send_end: f64,
    pub receive_headers_end: f64,
}

impl RequestRecord {
    pub fn new(url: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scheme: scheme.into(),
            ..Self::default()
        }
    }

    /// Mark the request finished with a known transfer size
    pub fn finished_with(mut self, transfer_size: u64) -> Self {
        self.finished = true;
        self.transfer_size = transfer_size;
        self
    }

    pub fn with_times(mut self, start_time: f64, end_time: f64) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn with_timing(mut self, send_end: f64, receive_headers_end: f64) -> Self {
        self.timing = Some(RequestTiming {
            send_end,
            receive_headers_end,
        });
        self
    }

    pub fn is_inline(&self) -> bool {
        self.scheme == DATA_SCHEME
    }

    /// Whether the request contributes to page weight totals
    pub fn counts_toward_weight(&self) -> bool {
        self.finished && !self.is_inline()
    }

    pub fn duration_ms(&self) -> f64 {
        (self.end_time - self.start_time) * 1000.0
    }

    /// Time from the request being sent to its response headers arriving
    pub fn response_time_ms(&self) -> Option<f64> {
        self.timing
            .map(|timing| timing.receive_headers_end - timing.send_end)
    }
}
