//! Server response time (time to first byte) of the main document.

use serde::{Deserialize, Serialize};

use crate::core::RequestRecord;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeResult {
    pub url: String,
    pub response_time_ms: f64,
    pub passed: bool,
    /// Milliseconds over the budget, negative when within it
    pub wasted_ms: f64,
}

pub fn audit(
    records: &[RequestRecord],
    final_url: &str,
    threshold_ms: f64,
) -> Result<ResponseTimeResult> {
    let document = records
        .iter()
        .find(|record| record.url == final_url)
        .ok_or_else(|| Error::MissingRequest(final_url.to_string()))?;

    let response_time_ms = document
        .response_time_ms()
        .ok_or_else(|| Error::MissingTiming(final_url.to_string()))?;

    Ok(ResponseTimeResult {
        url: document.url.clone(),
        response_time_ms,
        passed: response_time_ms < threshold_ms,
        wasted_ms: response_time_ms - threshold_ms,
    })
}
