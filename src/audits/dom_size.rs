//! DOM size audit.
//!
//! Only the total node count feeds the score; depth and width are reported
//! against their recommended limits.

use serde::{Deserialize, Serialize};

use crate::config::ThresholdsConfig;
use crate::errors::Result;
use crate::scoring::LogNormalCurve;

/// DOM statistics gathered from the rendered page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStats {
    #[serde(rename = "totalDOMNodes", alias = "totalDomNodes")]
    pub total_dom_nodes: u64,
    pub depth: DomExtent,
    pub width: DomExtent,
}

/// A maximum along one axis and the element path where it occurs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomExtent {
    pub max: u64,
    #[serde(default)]
    pub path_to_element: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomMeasure {
    pub value: u64,
    pub limit: u64,
    pub exceeds: bool,
}

impl DomMeasure {
    fn new(value: u64, limit: u64) -> Self {
        Self {
            value,
            limit,
            exceeds: value > limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomSizeResult {
    pub score: f64,
    pub display_score: u8,
    pub total_nodes: DomMeasure,
    pub depth: DomMeasure,
    pub width: DomMeasure,
    /// Path from the root to the deepest element
    pub deepest_path: Vec<String>,
    /// The element with the most children
    pub widest_element: Option<String>,
}

pub fn audit(
    stats: &DomStats,
    curve: &LogNormalCurve,
    thresholds: &ThresholdsConfig,
) -> Result<DomSizeResult> {
    let total = stats.total_dom_nodes as f64;

    Ok(DomSizeResult {
        score: curve.score(total)?,
        display_score: curve.display_score(total)?,
        total_nodes: DomMeasure::new(stats.total_dom_nodes, thresholds.max_dom_nodes),
        depth: DomMeasure::new(stats.depth.max, thresholds.max_dom_depth),
        width: DomMeasure::new(stats.width.max, thresholds.max_dom_width),
        deepest_path: stats.depth.path_to_element.clone(),
        widest_element: stats.width.path_to_element.last().cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_dom_size_curve;
    use pretty_assertions::assert_eq;

    fn curve() -> LogNormalCurve {
        LogNormalCurve::new(default_dom_size_curve()).unwrap()
    }

    #[test]
    fn test_small_dom_scores_full() {
        let stats = DomStats {
            total_dom_nodes: 1200,
            depth: DomExtent {
                max: 12,
                path_to_element: vec!["html".into(), "body".into(), "div".into()],
            },
            width: DomExtent {
                max: 8,
                path_to_element: vec!["html".into(), "body".into(), "ul".into()],
            },
        };

        let result = audit(&stats, &curve(), &ThresholdsConfig::default()).unwrap();
        assert_eq!(result.display_score, 100);
        assert!(!result.total_nodes.exceeds);
        assert_eq!(result.widest_element.as_deref(), Some("ul"));
        assert_eq!(result.deepest_path, vec!["html", "body", "div"]);
    }

    #[test]
    fn test_median_dom_scores_half() {
        let stats = DomStats {
            total_dom_nodes: 3000,
            depth: DomExtent {
                max: 40,
                path_to_element: vec![],
            },
            width: DomExtent {
                max: 61,
                path_to_element: vec![],
            },
        };

        let result = audit(&stats, &curve(), &ThresholdsConfig::default()).unwrap();
        assert_eq!(result.display_score, 50);
        assert_eq!(
            result.total_nodes,
            DomMeasure {
                value: 3000,
                limit: 1500,
                exceeds: true
            }
        );
        assert!(result.depth.exceeds);
        assert!(result.width.exceeds);
        assert_eq!(result.widest_element, None);
    }

    #[test]
    fn test_deserializes_gatherer_shape() {
        let stats: DomStats = serde_json::from_str(
            r#"{"totalDOMNodes": 812,
                "depth": {"max": 14, "pathToElement": ["html", "body"]},
                "width": {"max": 30}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_dom_nodes, 812);
        assert!(stats.width.path_to_element.is_empty());
    }
}
