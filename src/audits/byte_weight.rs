//! Total byte weight of a page load.
//!
//! Inline `data:` resources are skipped since their bytes are already part
//! of the resource that embeds them, and unfinished requests have no
//! reliable transfer size.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MAX_LARGEST_REQUESTS;
use crate::core::RequestRecord;
use crate::errors::Result;
use crate::scoring::LogNormalCurve;

const BYTES_PER_KB: f64 = 1024.0;

/// Byte totals over the records that count toward page weight
#[derive(Debug, Clone)]
pub struct ByteWeightTotals<'a> {
    pub total_bytes: u64,
    /// Number of records that contributed to `total_bytes`
    pub total_completed_requests: usize,
    /// Heaviest contributing records, largest first
    pub largest: Vec<&'a RequestRecord>,
}

/// Sum transfer sizes and keep the `limit` heaviest requests.
///
/// `limit` is capped at [`MAX_LARGEST_REQUESTS`].
/// Equal sizes keep their input order.
pub fn aggregate(records: &[RequestRecord], limit: usize) -> ByteWeightTotals<'_> {
    let mut counted: Vec<&RequestRecord> = records
        .iter()
        .filter(|record| record.counts_toward_weight())
        .collect();

    let total_bytes = counted
        .iter()
        .fold(0u64, |total, record| total.saturating_add(record.transfer_size));
    let total_completed_requests = counted.len();

    counted.sort_by(|a, b| b.transfer_size.cmp(&a.transfer_size));
    counted.truncate(limit.min(MAX_LARGEST_REQUESTS));

    ByteWeightTotals {
        total_bytes,
        total_completed_requests,
        largest: counted,
    }
}

/// One row of the largest-requests report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteWeightEntry {
    pub url: String,
    pub total_bytes: u64,
    pub total_kb: f64,
    /// Estimated time to transfer at the observed throughput, to 10 ms
    pub transfer_ms: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteWeightResult {
    pub score: f64,
    pub display_score: u8,
    pub total_bytes: u64,
    pub total_completed_requests: usize,
    pub largest_requests: Vec<ByteWeightEntry>,
}

/// Estimated milliseconds to move `bytes` at `throughput` bytes/second
pub fn transfer_ms(bytes: u64, throughput: f64) -> Option<f64> {
    if !throughput.is_finite() || throughput <= 0.0 {
        return None;
    }
    let ms = bytes as f64 / throughput * 1000.0;
    Some((ms / 10.0).round() * 10.0)
}

/// Score the page's total transfer size.
///
/// `throughput` is the observed network throughput in bytes per second;
/// without it no per-request transfer estimate is reported.
pub fn audit(
    records: &[RequestRecord],
    curve: &LogNormalCurve,
    limit: usize,
    throughput: Option<f64>,
) -> Result<ByteWeightResult> {
    let totals = aggregate(records, limit);
    let score = curve.score(totals.total_bytes as f64)?;
    let display_score = curve.display_score(totals.total_bytes as f64)?;

    debug!(
        total_bytes = totals.total_bytes,
        requests = totals.total_completed_requests,
        score,
        "byte weight"
    );

    let largest_requests = totals
        .largest
        .iter()
        .map(|record| ByteWeightEntry {
            url: record.url.clone(),
            total_bytes: record.transfer_size,
            total_kb: record.transfer_size as f64 / BYTES_PER_KB,
            transfer_ms: throughput.and_then(|bps| transfer_ms(record.transfer_size, bps)),
        })
        .collect();

    Ok(ByteWeightResult {
        score,
        display_score,
        total_bytes: totals.total_bytes,
        total_completed_requests: totals.total_completed_requests,
        largest_requests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_byte_weight_curve;

    fn record(url: &str, scheme: &str, finished: bool, size: u64) -> RequestRecord {
        let record = RequestRecord::new(url, scheme);
        if finished {
            record.finished_with(size)
        } else {
            RequestRecord {
                transfer_size: size,
                ..record
            }
        }
    }

    #[test]
    fn test_excludes_data_and_unfinished() {
        let records = vec![
            record("https://example.com/a.js", "https", true, 1000),
            record("data:image/png;base64,AAAA", "data", true, 99_999),
            record("https://example.com/b.js", "https", false, 5000),
        ];

        let totals = aggregate(&records, 10);
        assert_eq!(totals.total_bytes, 1000);
        assert_eq!(totals.total_completed_requests, 1);
        assert_eq!(totals.largest.len(), 1);
        assert_eq!(totals.largest[0].url, "https://example.com/a.js");
    }

    #[test]
    fn test_keeps_largest_in_descending_order() {
        let records: Vec<_> = (1..=25)
            .map(|i| record(&format!("https://example.com/{i}"), "https", true, i * 100))
            .collect();

        let totals = aggregate(&records, 10);
        assert_eq!(totals.total_completed_requests, 25);
        assert_eq!(totals.total_bytes, (1..=25).map(|i| i * 100).sum::<u64>());
        let sizes: Vec<_> = totals.largest.iter().map(|r| r.transfer_size).collect();
        assert_eq!(
            sizes,
            vec![2500, 2400, 2300, 2200, 2100, 2000, 1900, 1800, 1700, 1600]
        );
    }

    #[test]
    fn test_equal_sizes_keep_input_order() {
        let records = vec![
            record("https://example.com/first", "https", true, 10),
            record("https://example.com/second", "https", true, 10),
        ];
        let totals = aggregate(&records, 10);
        assert_eq!(totals.largest[0].url, "https://example.com/first");
    }

    #[test]
    fn test_does_not_mutate_input() {
        let records = vec![
            record("https://example.com/small", "https", true, 1),
            record("https://example.com/big", "https", true, 2),
        ];
        let before = records.clone();
        let _ = aggregate(&records, 10);
        assert_eq!(records, before);
    }

    #[test]
    fn test_audit_scores_total() {
        let curve = LogNormalCurve::new(default_byte_weight_curve()).unwrap();
        let records = vec![record("https://example.com/huge", "https", true, 4_096_000)];

        let result = audit(&records, &curve, 10, Some(1_024_000.0)).unwrap();
        assert_eq!(result.display_score, 50);
        assert_eq!(result.largest_requests[0].total_kb, 4000.0);
        assert_eq!(result.largest_requests[0].transfer_ms, Some(4000.0));
    }

    #[test]
    fn test_empty_page_scores_full() {
        let curve = LogNormalCurve::new(default_byte_weight_curve()).unwrap();
        let result = audit(&[], &curve, 10, None).unwrap();
        assert_eq!(result.total_bytes, 0);
        assert_eq!(result.score, 1.0);
        assert!(result.largest_requests.is_empty());
    }

    #[test]
    fn test_limit_never_exceeds_report_cap() {
        let records: Vec<_> = (0..100)
            .map(|i| record(&format!("https://example.com/{i}"), "https", true, i))
            .collect();

        let totals = aggregate(&records, 50);
        assert_eq!(totals.largest.len(), MAX_LARGEST_REQUESTS);
        assert_eq!(totals.total_completed_requests, 100);
    }

    #[test]
    fn test_transfer_ms_rounds_to_ten() {
        assert_eq!(transfer_ms(1234, 1000.0), Some(1230.0));
        assert_eq!(transfer_ms(1000, 0.0), None);
        assert_eq!(transfer_ms(1000, f64::NAN), None);
    }
}
